//! Error types for coherence evaluation.

/// Evaluation errors.
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    /// The exchange contains no messages.
    #[error("empty exchange: at least one message is required")]
    EmptyExchange,

    /// The judgment endpoint answered with a non-success status.
    #[error("judgment endpoint returned HTTP {status}: {message}")]
    Endpoint { status: u16, message: String },

    /// Network error.
    #[error("network error: {message}")]
    Network { message: String },

    /// The service responded but the payload is not a valid verdict.
    #[error("invalid verdict payload: {message}")]
    Decode { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl JudgeError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Caller misuse
            Self::EmptyExchange => 2,
            Self::Config { .. } => 2,

            // Infrastructure faults
            Self::Endpoint { .. } => 3,
            Self::Network { .. } => 3,
            Self::Decode { .. } => 3,
        }
    }

    /// Whether the fault originates from the caller rather than the service.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::EmptyExchange | Self::Config { .. })
    }
}

impl From<reqwest::Error> for JudgeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for evaluation operations.
pub type JudgeResult<T> = Result<T, JudgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_status_and_body() {
        let err = JudgeError::Endpoint {
            status: 503,
            message: "model not loaded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "judgment endpoint returned HTTP 503: model not loaded"
        );
    }

    #[test]
    fn caller_errors_map_to_exit_code_2() {
        assert_eq!(JudgeError::EmptyExchange.exit_code(), 2);
        assert_eq!(
            JudgeError::Config {
                message: "bad".into()
            }
            .exit_code(),
            2
        );
        assert!(JudgeError::EmptyExchange.is_caller_error());
    }

    #[test]
    fn infrastructure_errors_map_to_exit_code_3() {
        let network = JudgeError::Network {
            message: "refused".into(),
        };
        let decode = JudgeError::Decode {
            message: "not json".into(),
        };
        assert_eq!(network.exit_code(), 3);
        assert_eq!(decode.exit_code(), 3);
        assert!(!network.is_caller_error());
    }
}
