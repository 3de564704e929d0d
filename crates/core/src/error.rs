//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Updating an inventory never fails; these variants are only produced by
/// explicit checks a caller opts into (e.g. auditing quality bounds).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = DomainError::invariant("quality out of range for \"Elixir\"");
        assert_eq!(
            err.to_string(),
            "invariant violated: quality out of range for \"Elixir\""
        );

        let err = DomainError::validation("days must be a number");
        assert_eq!(err.to_string(), "validation failed: days must be a number");
    }
}
