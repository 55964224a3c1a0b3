//! Error types for the menu swap engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),

    #[error("Option index out of sync for {option:?}: expected {expected:?}, got {actual:?}")]
    IndexDesync {
        option: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
