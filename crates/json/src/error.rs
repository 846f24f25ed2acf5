use thiserror::Error;

/// JSON document errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("[{parser}] unknown field [{field}]")]
    UnknownField { parser: String, field: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl JsonError {
    /// Builds a parse error scoped to a named parser and field
    pub fn field(parser: &str, field: &str, reason: impl std::fmt::Display) -> Self {
        JsonError::Parse(format!("[{parser}] failed to parse field [{field}]: {reason}"))
    }

    /// True for every error raised while reading a document
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            JsonError::Parse(_) | JsonError::UnknownField { .. } | JsonError::Io(_)
        )
    }

    /// True for errors raised while writing a document
    pub fn is_serialization_failure(&self) -> bool {
        matches!(self, JsonError::Serialization(_) | JsonError::InvalidOperation(_))
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            JsonError::Io(err.to_string())
        } else {
            JsonError::Parse(err.to_string())
        }
    }
}

/// Result type for JSON operations
pub type JsonResult<T> = Result<T, JsonError>;
