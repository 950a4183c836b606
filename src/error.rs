use thiserror::Error;

/// Errors that can occur during a recipe search
#[derive(Error, Debug)]
pub enum FinderError {
    /// The submitted line contained no ingredients
    #[error("no ingredients given")]
    EmptyInput,

    /// A lookup request failed or its JSON body could not be decoded
    #[error("Failed to query recipe API: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Recipe API returned HTTP {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
