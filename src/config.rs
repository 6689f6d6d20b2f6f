use std::{collections::BTreeMap, fs, path::PathBuf};

use serde_derive::Deserialize;

use crate::ConfigError;

/// Which characters count as symbols.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    #[default]
    Any,
    Letters,
}

/// Decides which characters of a text are symbols, and how they are normalized.
///
/// Characters rejected here are ignored silently, both while counting and while encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SymbolFilter {
    pub alphabet: Alphabet,
    pub fold_case: bool,
}

impl SymbolFilter {
    pub fn apply(&self, c: char) -> Option<char> {
        if self.alphabet == Alphabet::Letters && !c.is_alphabetic() {
            return None;
        }
        if self.fold_case {
            // Only single-char lowercase mappings keep a one-to-one symbol
            let mut lower = c.to_lowercase();
            return match (lower.next(), lower.next()) {
                (Some(l), None) => Some(l),
                _ => Some(c),
            };
        }
        Some(c)
    }
}

/// What `encode` does with a symbol that has no code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSymbolPolicy {
    /// Emit nothing for it and report it in `Encoded::skipped`.
    #[default]
    Skip,
    /// Reject the whole input.
    Fail,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoderConfig {
    #[serde(flatten)]
    pub filter: SymbolFilter,
    pub unknown_symbols: UnknownSymbolPolicy,
}

/// Settings of the command line front end.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub coder: CoderConfig,
    /// Used in place of the corpus when it holds no symbol at all.
    pub fallback_frequencies: BTreeMap<char, usize>,
    /// Words encoded when none are given on the command line.
    pub words: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            coder: CoderConfig {
                filter: SymbolFilter {
                    alphabet: Alphabet::Letters,
                    fold_case: true,
                },
                unknown_symbols: UnknownSymbolPolicy::Skip,
            },
            fallback_frequencies: BTreeMap::from([
                ('a', 10),
                ('d', 5),
                ('e', 8),
                ('m', 2),
                ('r', 3),
            ]),
            words: vec!["dream".to_string()],
        }
    }
}

impl AppConfig {
    pub fn new(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::MissingConfigurationFile {
            config_file_path: path.clone(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::InvalidConfig)
    }
}
