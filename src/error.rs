use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("API key is missing or empty")]
    MissingKey,

    #[error("API client secret is missing or empty")]
    MissingSecret,

    #[error("Unknown Blizzard region: {0}")]
    UnknownRegion(String),

    #[error("Unknown League of Legends platform: {0}")]
    UnknownPlatform(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("{endpoint} expects arguments: {expected}")]
    Arguments { endpoint: String, expected: String },

    #[error("{0} credentials are not configured")]
    NotConfigured(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
