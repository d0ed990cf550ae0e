use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Embedding error: {0}")]
    Embedding(String),
}

impl DomainError {
    /// Transport-level status string. The serve loop includes this in every
    /// error response so callers can branch without parsing messages.
    pub fn status_code(&self) -> &'static str {
        match self {
            DomainError::NotFound(_) => "NOT_FOUND",
            DomainError::InvalidInput(_) | DomainError::DuplicateId(_) => "INVALID_ARGUMENT",
            DomainError::Embedding(_) => "INTERNAL",
        }
    }
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Embedding(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidInput(s.to_string())
    }
}
