//! Error type shared by configuration, ingestion and mining.

#[derive(Debug, thiserror::Error)]
pub enum PufError {
    /// The minimum support could not be interpreted
    #[error("Invalid minimum support: {0}")]
    InvalidMinSupport(String),

    /// A probability outside [0, 1] or not a number
    #[error("Invalid probability {probability} for item {label}")]
    InvalidProbability { label: String, probability: f64 },

    /// A malformed ingestion line
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PufError>;
