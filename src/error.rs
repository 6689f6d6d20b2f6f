use std::{io, path::PathBuf};

use thiserror::Error;

/// Conditions met while building or using a coder. None of them is fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoderError {
    #[error("corpus contains no symbol, the code table is empty")]
    EmptyCorpus,

    #[error("symbol {symbol:?} at position {position} has no code")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("corpus contains the single symbol {0:?}, it gets a one-bit code")]
    DegenerateAlphabet(char),

    #[error("count of symbol {0:?} makes the total number of occurrences overflow")]
    FrequencyOverflow(char),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found at \"{:?}\"", .config_file_path.as_path())]
    MissingConfigurationFile {
        config_file_path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration file")]
    InvalidConfig(#[from] toml::de::Error),
}
