//! Error type for ruleset resolution.
//!
//! Every failure in this crate is a validation failure: a definition (or an
//! argument handed to a resolved object) is malformed. Failures are
//! deterministic, so nothing here is retried.

use thiserror::Error;

/// Errors raised while resolving or invoking ruleset objects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesetError {
    /// A definition or call argument failed validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl RulesetError {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Check if this is an invalid argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RulesetError>;

/// Fail with `InvalidArgument` if `value` is empty.
pub(crate) fn ensure_non_empty(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RulesetError::invalid_argument(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}

/// Treat `None` and `Some("")` alike.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
