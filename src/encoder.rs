use crate::{
    code::Code,
    config::{CoderConfig, UnknownSymbolPolicy},
    table::CodeTable,
    CoderError,
};

/// Result of encoding a text: the concatenated codewords and the symbols left out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Encoded {
    pub code: Code,
    /// One `CoderError::UnknownSymbol` per character that had no code.
    pub skipped: Vec<CoderError>,
}

impl Encoded {
    pub fn bit_length(&self) -> usize {
        self.code.len()
    }
}

pub(crate) struct HuffmanEncoder<'a> {
    table: &'a CodeTable,
    config: CoderConfig,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(table: &'a CodeTable, config: CoderConfig) -> Self {
        HuffmanEncoder { table, config }
    }

    /// Appends the codeword of every symbol of `text` to a single code.
    ///
    /// Characters dropped by the symbol filter are ignored. `position` in reported
    /// errors is the char index inside `text`. An empty table encodes anything to
    /// an empty code, whatever the unknown symbol policy.
    pub fn encode(&self, text: &str) -> Result<Encoded, CoderError> {
        let mut encoded = Encoded::default();
        if self.table.is_empty() {
            return Ok(encoded);
        }

        for (position, c) in text.chars().enumerate() {
            let Some(symbol) = self.config.filter.apply(c) else {
                continue;
            };
            match self.table.get(symbol) {
                Some(code) => encoded.code.extend(code),
                None => {
                    let error = CoderError::UnknownSymbol { symbol, position };
                    match self.config.unknown_symbols {
                        UnknownSymbolPolicy::Skip => encoded.skipped.push(error),
                        UnknownSymbolPolicy::Fail => return Err(error),
                    }
                }
            }
        }

        Ok(encoded)
    }
}
