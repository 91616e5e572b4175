//! Error types for table comparison.

use thiserror::Error;

/// Result type for comparison operations.
pub type CompareResult<T> = Result<T, CompareError>;

/// Failures raised by [`TableEqualityAssertion`](crate::TableEqualityAssertion).
///
/// Mismatch variants carry a fully formatted, ready-to-display message;
/// callers such as test runners are expected to report it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// A setter received an invalid value, e.g. an empty label.
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// The configured header does not equal the observed header row.
    #[error("{message}")]
    HeaderMismatch { message: String },

    /// The table bodies differ under the active row-order policy.
    #[error("{message}")]
    BodyMismatch { message: String },
}

impl CompareError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a header mismatch error.
    pub fn header_mismatch(message: impl Into<String>) -> Self {
        Self::HeaderMismatch {
            message: message.into(),
        }
    }

    /// Create a body mismatch error.
    pub fn body_mismatch(message: impl Into<String>) -> Self {
        Self::BodyMismatch {
            message: message.into(),
        }
    }

    /// The preformatted message, without any variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration { message }
            | Self::HeaderMismatch { message }
            | Self::BodyMismatch { message } => message,
        }
    }

    /// Whether this error reports a table inequality rather than bad
    /// configuration.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::HeaderMismatch { .. } | Self::BodyMismatch { .. })
    }
}
