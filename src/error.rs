use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The prompt was empty or missing
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The model call failed, or its output did not match the recipe schema
    #[error("Recipe generation failed: {0}")]
    GenerationFailed(String),

    /// The backend could not be reached or answered with an unexpected status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// A generation is already running for this page
    #[error("A recipe is already being generated")]
    Busy,

    /// Error starting or running the HTTP backend
    #[error("Server error: {0}")]
    ServerError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl RecipeError {
    /// Classify this error for the page's generation status
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecipeError::InvalidInput(_) => ErrorKind::InvalidInput,
            RecipeError::GenerationFailed(_) => ErrorKind::GenerationFailed,
            _ => ErrorKind::RequestFailed,
        }
    }
}

impl From<reqwest::Error> for RecipeError {
    fn from(err: reqwest::Error) -> Self {
        RecipeError::RequestFailed(err.to_string())
    }
}

/// Copyable failure classification, kept by the page after a failed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    GenerationFailed,
    RequestFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            RecipeError::InvalidInput("empty".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            RecipeError::GenerationFailed("bad json".into()).kind(),
            ErrorKind::GenerationFailed
        );
        assert_eq!(
            RecipeError::RequestFailed("refused".into()).kind(),
            ErrorKind::RequestFailed
        );
        assert_eq!(RecipeError::Busy.kind(), ErrorKind::RequestFailed);
    }

    #[test]
    fn test_error_messages() {
        let err = RecipeError::InvalidInput("Prompt is required".into());
        assert_eq!(err.to_string(), "Invalid input: Prompt is required");
    }
}
