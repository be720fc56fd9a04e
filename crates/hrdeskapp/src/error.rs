use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrdeskError {
    /// An edit was attempted on something the rules mark read-only.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Page size {0} is not one of 10, 20, 25, 30, 50, 100")]
    InvalidPageSize(usize),

    /// A sequence counter has issued its largest number.
    #[error("Sequence exhausted after {0}")]
    SequenceExhausted(u32),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HrdeskError>;
