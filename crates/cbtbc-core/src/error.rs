//! Error types for cbtbc operations.
//!
//! Every fallible operation in the workspace returns [`CbtbcError`].
//! Errors are raised at the call that detects them and are never retried.

use thiserror::Error;

/// Result type for cbtbc operations.
pub type Result<T> = std::result::Result<T, CbtbcError>;

/// Errors that can occur while building, running or training a model.
#[derive(Debug, Clone, Error)]
pub enum CbtbcError {
    /// A condition was constructed with a missing or malformed parameter.
    #[error("Configuration error: {0}")]
    Configuration(ConfigError),

    /// The factory was given a condition kind it does not know.
    #[error("Unknown condition: {0}")]
    UnknownCondition(String),

    /// Two sequences that must line up have different lengths.
    #[error("Validation error: {what} length mismatch (expected {expected}, found {found})")]
    Validation {
        what: String,
        expected: usize,
        found: usize,
    },

    /// The optimizer was given a search method it does not know.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Exhaustive enumeration cannot address this many conditions.
    #[error("Search space too large: {conditions} conditions (limit {limit})")]
    SearchSpaceTooLarge { conditions: usize, limit: usize },

    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for CbtbcError {
    fn from(e: std::io::Error) -> Self {
        CbtbcError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CbtbcError {
    fn from(e: serde_json::Error) -> Self {
        CbtbcError::Serialization(e.to_string())
    }
}

/// Condition configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Mandatory parameter absent.
    #[error("No required parameter [{parameter}] for {kind}")]
    MissingParameter { kind: String, parameter: String },

    /// Parameter present but of the wrong shape.
    #[error("Invalid parameter [{parameter}] for {kind}: {reason}")]
    InvalidParameter {
        kind: String,
        parameter: String,
        reason: String,
    },

    /// Declarative model description is malformed.
    #[error("Invalid declaration: {0}")]
    InvalidDeclaration(String),
}

// Convenience constructors
impl CbtbcError {
    pub fn missing_parameter(kind: impl Into<String>, parameter: impl Into<String>) -> Self {
        CbtbcError::Configuration(ConfigError::MissingParameter {
            kind: kind.into(),
            parameter: parameter.into(),
        })
    }

    pub fn invalid_parameter(
        kind: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CbtbcError::Configuration(ConfigError::InvalidParameter {
            kind: kind.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        })
    }

    pub fn invalid_declaration(reason: impl Into<String>) -> Self {
        CbtbcError::Configuration(ConfigError::InvalidDeclaration(reason.into()))
    }

    pub fn unknown_condition(kind: impl Into<String>) -> Self {
        CbtbcError::UnknownCondition(kind.into())
    }

    pub fn length_mismatch(what: impl Into<String>, expected: usize, found: usize) -> Self {
        CbtbcError::Validation {
            what: what.into(),
            expected,
            found,
        }
    }

    pub fn unsupported_method(name: impl Into<String>) -> Self {
        CbtbcError::UnsupportedMethod(name.into())
    }

    /// Whether this error came from condition configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, CbtbcError::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_message_names_parameter() {
        let err = CbtbcError::missing_parameter("keyword-in-window", "keywords");
        assert_eq!(
            err.to_string(),
            "Configuration error: No required parameter [keywords] for keyword-in-window"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn length_mismatch_reports_both_sides() {
        let err = CbtbcError::length_mismatch("mask", 3, 2);
        assert_eq!(
            err.to_string(),
            "Validation error: mask length mismatch (expected 3, found 2)"
        );
        assert!(!err.is_configuration());
    }

    #[test]
    fn serde_errors_convert() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: CbtbcError = parse.unwrap_err().into();
        assert!(matches!(err, CbtbcError::Serialization(_)));
    }
}
