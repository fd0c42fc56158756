//! Error types for cleancards

use thiserror::Error;

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, CardsError>;

/// Application error types
#[derive(Error, Debug)]
pub enum CardsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid deck file: {0}")]
    Deck(#[from] toml::de::Error),

    #[error("Deck contains no cards")]
    EmptyDeck,

    #[error("No such card: {0}")]
    NoSuchCard(String),

    #[error("Unknown language profile: {0}")]
    UnknownLanguage(String),

    #[error(transparent)]
    Explain(#[from] crate::explain::ExplainError),

    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },
}
