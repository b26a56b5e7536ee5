//! Error types for argument parsing.
//!
//! Every variant aborts the current parse. Invocation mistakes
//! ([`is_usage_error`](ArgParseError::is_usage_error)) are kept apart from
//! caller-reported failures and from schema/struct mismatches.

use thiserror::Error;

/// Errors that can occur while parsing a command line.
#[derive(Debug, Error)]
pub enum ArgParseError {
    /// A positional slot's position is past the end of the tokens.
    #[error("Expected argument <{name}> at position {index}")]
    MissingArgument { name: String, index: usize },

    /// A flag-shaped token sits where a positional value is required.
    #[error("Expected argument <{name}> at position {index}. Got Flag {token}")]
    InvalidArgument {
        name: String,
        index: usize,
        token: String,
    },

    /// The same flag appeared more than once.
    #[error("Flag {flag} is passed more than once")]
    RepeatedFlag { flag: String },

    /// Tokens left over after every slot was matched.
    #[error("Unknown Arguments {0:?}")]
    UnknownArguments(Vec<String>),

    /// A process argument is not valid UTF-8; holds its lossy rendering.
    #[error("Argument {0:?} is not valid UTF-8")]
    InvalidEncoding(String),

    /// Failure reported by caller validation or run logic.
    #[error("{0}")]
    External(String),

    /// Populated values could not be decoded into the target type.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ArgParseError {
    /// Creates an [`ArgParseError::External`] error.
    pub fn external(message: impl Into<String>) -> Self {
        Self::External(message.into())
    }

    /// Whether the error stems from the tokens the user typed.
    ///
    /// # Examples
    ///
    /// ```
    /// use argslot_core::ArgParseError;
    ///
    /// assert!(ArgParseError::UnknownArguments(vec!["-x".into()]).is_usage_error());
    /// assert!(!ArgParseError::external("Validation failed").is_usage_error());
    /// ```
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. }
                | Self::InvalidArgument { .. }
                | Self::RepeatedFlag { .. }
                | Self::UnknownArguments(_)
                | Self::InvalidEncoding(_)
        )
    }
}

/// Convenience alias for results with [`ArgParseError`].
pub type Result<T> = std::result::Result<T, ArgParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let missing = ArgParseError::MissingArgument {
            name: "input".into(),
            index: 0,
        };
        assert_eq!(missing.to_string(), "Expected argument <input> at position 0");

        let invalid = ArgParseError::InvalidArgument {
            name: "input".into(),
            index: 0,
            token: "-f".into(),
        };
        assert_eq!(
            invalid.to_string(),
            "Expected argument <input> at position 0. Got Flag -f"
        );

        let unknown = ArgParseError::UnknownArguments(vec!["a".into(), "--b".into()]);
        assert_eq!(unknown.to_string(), r#"Unknown Arguments ["a", "--b"]"#);
    }

    #[test]
    fn test_decode_is_not_usage_error() {
        let err = serde_json::from_str::<bool>("1").unwrap_err();
        assert!(!ArgParseError::from(err).is_usage_error());
    }
}
