use itertools::Itertools;

const BLOCK_BITS: usize = 8;
const INITIAL_BITS: usize = 8;

/// Growable bitmap addressed by a zero-based rank.
///
/// Bits are stored most-significant first inside each byte block, so rank 0 is the
/// `0x80` bit of the first block. Writing past the current capacity doubles it.
#[derive(Clone, Debug, Default)]
pub struct BitVector {
    blocks: Vec<u8>,
    ones: usize,
}

impl BitVector {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_BITS)
    }

    pub fn with_capacity(bits: usize) -> Self {
        BitVector {
            blocks: vec![0; bits.div_ceil(BLOCK_BITS)],
            ones: 0,
        }
    }

    /// Number of addressable bits before the next growth.
    pub fn capacity(&self) -> usize {
        self.blocks.len().saturating_mul(BLOCK_BITS)
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.ones
    }

    pub fn set(&mut self, rank: usize) {
        self.expand(rank);
        if !self.test(rank) {
            self.blocks[rank / BLOCK_BITS] |= mask(rank);
            self.ones += 1;
        }
    }

    pub fn clear(&mut self, rank: usize) {
        self.expand(rank);
        if self.test(rank) {
            self.blocks[rank / BLOCK_BITS] &= !mask(rank);
            self.ones -= 1;
        }
    }

    /// Ranks never written, or beyond the capacity, read as `false`.
    pub fn test(&self, rank: usize) -> bool {
        match self.blocks.get(rank / BLOCK_BITS) {
            Some(block) => block & mask(rank) != 0,
            None => false,
        }
    }

    /// Renders the first `n` bits as a string of `'0'` and `'1'`.
    pub fn render(&self, n: usize) -> String {
        (0..n)
            .map(|rank| if self.test(rank) { '1' } else { '0' })
            .join("")
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.blocks
    }

    fn expand(&mut self, rank: usize) {
        if rank < self.capacity() {
            return;
        }
        // Old blocks are kept in place
        self.blocks.resize(blocks_for(rank), 0);
    }
}

/// Blocks holding twice the requested rank, and at least `rank` itself.
fn blocks_for(rank: usize) -> usize {
    rank.saturating_mul(2).div_ceil(BLOCK_BITS).max(1)
}

fn mask(rank: usize) -> u8 {
    0x80 >> (rank % BLOCK_BITS)
}
