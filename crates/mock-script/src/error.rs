//! Script loading errors.

/// Errors raised while reading, parsing or validating a mock script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unsupported script format: {0}")]
    UnsupportedFormat(String),
}

impl ScriptError {
    /// Returns true if the script was readable but its content was rejected.
    pub fn is_content_error(&self) -> bool {
        matches!(self, ScriptError::ParseError(_) | ScriptError::ValidationError(_))
    }
}
