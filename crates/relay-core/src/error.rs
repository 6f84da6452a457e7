use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("malformed turn at index {index}: {reason}")]
    MalformedTurn { index: usize, reason: String },

    #[error("missing required field: message")]
    MissingMessage,

    #[error("no response text from generation service")]
    EmptyGeneration,
}
