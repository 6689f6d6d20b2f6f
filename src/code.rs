use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::bitvector::BitVector;

/// Append-only sequence of bits: a single symbol's codeword or a whole encoded message.
///
/// Only the first `len` bits are meaningful; comparisons ignore whatever lies beyond.
/// Cloning copies the underlying storage, two codes never share bits.
#[derive(Clone, Default)]
pub struct Code {
    bits: BitVector,
    len: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid bit character {0:?}, expected '0' or '1'")]
pub struct ParseCodeError(pub char);

impl Code {
    pub fn new() -> Self {
        Code {
            bits: BitVector::new(),
            len: 0,
        }
    }

    /// Appends one bit at the current end.
    pub fn append(&mut self, bit: bool) {
        if bit {
            self.bits.set(self.len);
        } else {
            self.bits.clear(self.len);
        }
        self.len += 1;
    }

    /// Appends every bit of `other`, in order.
    pub fn extend(&mut self, other: &Code) {
        for bit in other.iter() {
            self.append(bit);
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len).then(|| self.bits.test(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|index| self.bits.test(index))
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    pub fn render(&self) -> String {
        self.bits.render(self.len)
    }

    /// Packs the bits MSB-first; the last byte is padded with zeros.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.bits.as_bytes().to_vec();
        bytes.resize(self.len.div_ceil(8), 0);
        if self.len % 8 != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xFF << (8 - self.len % 8);
            }
        }
        bytes
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Code {}

// Spare capacity is left out so that equal codes print the same
impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Code").field(&self.render()).finish()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut code = Code::new();
        for c in s.chars() {
            match c {
                '0' => code.append(false),
                '1' => code.append(true),
                other => return Err(ParseCodeError(other)),
            }
        }
        Ok(code)
    }
}
