use thiserror::Error;

/// Errors that can occur during leasener operations.
#[derive(Debug, Error)]
pub enum LeaseNerError {
    /// The input string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// A source document could not be read or produced no text.
    #[error("failed to extract text from {path}: {reason}")]
    Extraction {
        /// Path of the offending document.
        path: String,
        /// What went wrong.
        reason: String,
    },

    /// A label or training option is not usable as configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A training example has spans that do not fit its text.
    #[error("invalid training example: {0}")]
    InvalidExample(String),

    /// A named or on-disk model could not be loaded.
    #[error("failed to load model {name:?}: {reason}")]
    ModelLoad {
        /// Model name or directory as given by the caller.
        name: String,
        /// What went wrong.
        reason: String,
    },

    /// Reading or writing a model directory or data file failed.
    #[error("I/O error at {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A persisted model is corrupted or incompatible with what was saved.
    #[error("inconsistent model at {path}: {reason}")]
    Consistency {
        path: String,
        reason: String,
    },

    /// Viterbi decoding was handed inconsistent score matrices.
    #[error("decode error: {0}")]
    Decode(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

impl LeaseNerError {
    /// Wraps an I/O error with the path it happened at.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Result type alias for leasener operations.
pub type Result<T> = std::result::Result<T, LeaseNerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = LeaseNerError::EmptyInput;
        assert_eq!(err.to_string(), "input is empty or whitespace-only");

        let err = LeaseNerError::ModelLoad {
            name: "en_lease".into(),
            reason: "not found".into(),
        };
        assert!(err.to_string().contains("en_lease"));

        let err = LeaseNerError::Configuration("label \"RENT\" is not registered".into());
        assert!(err.to_string().contains("RENT"));
    }

    #[test]
    fn io_error_keeps_path() {
        let err = LeaseNerError::io(
            "/tmp/model",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/model"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LeaseNerError>();
    }
}
