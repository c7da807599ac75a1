use thiserror::Error;

/// Result type used across prompt generation
pub type PromptResult<T> = Result<T, PromptError>;

/// Main error type for prompt generation and history operations
#[derive(Debug, Error)]
pub enum PromptError {
    /// One or more required form fields were empty. All problems are
    /// collected so the caller can display them at once.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("Generated prompt is empty or shorter than {min_length} characters")]
    DegenerateOutput { min_length: usize },

    #[error("Unknown prompt category: {0}")]
    UnknownCategory(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PromptError {
    /// Human-readable messages for display, one per problem
    pub fn messages(&self) -> Vec<String> {
        match self {
            PromptError::MissingRequiredFields(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Errors raised by key-value store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}
