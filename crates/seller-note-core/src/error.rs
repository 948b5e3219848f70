use thiserror::Error;

#[derive(Debug, Error)]
pub enum SellerNoteError {
    #[error("Invalid loan terms: {field} — {reason}")]
    InvalidTerms { field: String, reason: String },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SellerNoteError {
    fn from(e: serde_json::Error) -> Self {
        SellerNoteError::SerializationError(e.to_string())
    }
}
