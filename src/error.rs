// ⚠️ Mapper Errors
// Two hard failures (validation, invalid operation) plus category parsing.
// Absent inputs are never errors; they map to None / empty.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapperError {
    /// A required string input was missing, empty, or whitespace-only
    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    /// The requested operation has no valid result for this input
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Unknown account category: {0}")]
    UnknownCategory(String),
}

impl MapperError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}

pub type Result<T> = std::result::Result<T, MapperError>;
