use log::{debug, warn};

pub mod bitvector;
pub mod code;
pub mod config;
mod encoder;
pub mod error;
pub mod frequency;
pub mod table;
pub mod tree;

pub use code::Code;
pub use config::{AppConfig, CoderConfig};
pub use encoder::Encoded;
pub use error::{CoderError, ConfigError};
pub use frequency::FrequencyTable;
pub use table::CodeTable;
pub use tree::{HuffmanTree, TreeNode};

use encoder::HuffmanEncoder;

/// One row of the code table, as handed to display code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableEntry {
    pub symbol: char,
    pub frequency: usize,
    pub code: Code,
    pub code_length: usize,
}

/// Huffman code built once from a corpus, then used read-only to encode texts.
#[derive(Debug)]
pub struct HuffmanCoder {
    config: CoderConfig,
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    table: CodeTable,
    diagnostics: Vec<CoderError>,
}

impl HuffmanCoder {
    pub fn new(corpus: &str) -> Self {
        Self::with_config(corpus, CoderConfig::default())
    }

    pub fn with_config(corpus: &str, config: CoderConfig) -> Self {
        let frequencies = FrequencyTable::count(corpus, &config.filter);
        Self::from_frequencies(frequencies, config)
    }

    pub fn from_frequencies(frequencies: FrequencyTable, config: CoderConfig) -> Self {
        let tree = HuffmanTree::build(&frequencies);
        let table = CodeTable::generate(&tree);

        let mut diagnostics = Vec::new();
        match frequencies.iter().next() {
            None => diagnostics.push(CoderError::EmptyCorpus),
            Some((symbol, _)) if frequencies.len() == 1 => {
                diagnostics.push(CoderError::DegenerateAlphabet(symbol))
            }
            Some(_) => {}
        }
        for diagnostic in &diagnostics {
            warn!("{}", diagnostic);
        }
        debug!(
            "built code for {} symbols ({} occurrences), tree depth {}",
            table.len(),
            frequencies.total(),
            tree.depth()
        );

        HuffmanCoder {
            config,
            frequencies,
            tree,
            table,
            diagnostics,
        }
    }

    /// Encodes `word` with the code table, following the configured unknown symbol policy.
    pub fn encode(&self, word: &str) -> Result<Encoded, CoderError> {
        let encoded = HuffmanEncoder::new(&self.table, self.config).encode(word)?;
        for skipped in &encoded.skipped {
            warn!("{}, skipped", skipped);
        }
        debug!("encoded {:?} into {} bits", word, encoded.bit_length());
        Ok(encoded)
    }

    /// Snapshot of the code table in ascending symbol order.
    pub fn dump_table(&self) -> Vec<TableEntry> {
        self.table
            .iter()
            .map(|(symbol, code)| TableEntry {
                symbol,
                frequency: self.frequencies.get(symbol).unwrap_or(0),
                code: code.clone(),
                code_length: code.len(),
            })
            .collect()
    }

    pub fn config(&self) -> &CoderConfig {
        &self.config
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// `EmptyCorpus` or `DegenerateAlphabet` when the corpus was one of those cases.
    pub fn diagnostics(&self) -> &[CoderError] {
        &self.diagnostics
    }

    /// Bits needed to encode the whole corpus.
    ///
    /// Wide enough for any table: the total count fits in a `usize` and no code is
    /// longer than the number of symbols.
    pub fn weighted_length(&self) -> u128 {
        self.frequencies
            .iter()
            .filter_map(|(symbol, count)| {
                self.table
                    .get(symbol)
                    .map(|code| count as u128 * code.len() as u128)
            })
            .sum()
    }

    /// Mean bits per corpus symbol, 0 for an empty corpus.
    pub fn average_code_length(&self) -> f64 {
        match self.frequencies.total() {
            0 => 0.0,
            total => self.weighted_length() as f64 / total as f64,
        }
    }

    /// Shannon entropy of the corpus in bits per symbol, the lower bound of
    /// `average_code_length`.
    pub fn entropy(&self) -> f64 {
        let total = self.frequencies.total() as f64;
        self.frequencies
            .iter()
            .map(|(_, count)| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}
