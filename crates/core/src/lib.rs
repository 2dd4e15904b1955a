//! Shared primitives for all Rust crates in the team roles service.

#![forbid(unsafe_code)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across team roles crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    ///
    /// Surrounding whitespace is trimmed before the value is stored.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidArgument(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Common application error categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Malformed or semantically invalid input.
    #[error("{0}")]
    InvalidArgument(String),

    /// Creation would duplicate an existing resource.
    #[error("{0}")]
    AlreadyExists(String),

    /// Referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Rejects an invalid resource payload, e.g. `Invalid 'Role' object`.
    #[must_use]
    pub fn invalid_object(resource: &str) -> Self {
        Self::InvalidArgument(format!("Invalid '{resource}' object"))
    }

    /// Rejects an invalid resource payload with an extra explanation.
    #[must_use]
    pub fn invalid_object_with(resource: &str, detail: &str) -> Self {
        Self::InvalidArgument(format!("Invalid '{resource}' object. {detail}"))
    }

    /// Reports a duplicate resource, e.g. `Membership already exists`.
    #[must_use]
    pub fn already_exists(resource: &str) -> Self {
        Self::AlreadyExists(format!("{resource} already exists"))
    }

    /// Reports a missing resource without an identifier, e.g. `Role not found`.
    #[must_use]
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound(format!("{resource} not found"))
    }

    /// Reports a missing resource by identifier, e.g. `Team <id> not found`.
    #[must_use]
    pub fn not_found_with_id(resource: &str, id: impl Display) -> Self {
        Self::NotFound(format!("{resource} {id} not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, NonEmptyString};

    #[test]
    fn non_empty_string_rejects_whitespace() {
        let result = NonEmptyString::new("   ");
        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn non_empty_string_trims_value() {
        let value = NonEmptyString::new("  Developer ");
        assert_eq!(
            value.map(String::from).unwrap_or_default(),
            "Developer".to_owned()
        );
    }

    #[test]
    fn constructors_render_canonical_messages() {
        assert_eq!(
            AppError::invalid_object("Role").to_string(),
            "Invalid 'Role' object"
        );
        assert_eq!(
            AppError::invalid_object_with("Membership", "Some detail.").to_string(),
            "Invalid 'Membership' object. Some detail."
        );
        assert_eq!(
            AppError::already_exists("Membership").to_string(),
            "Membership already exists"
        );
        assert_eq!(AppError::not_found("Role").to_string(), "Role not found");
        assert_eq!(
            AppError::not_found_with_id("Team", 42).to_string(),
            "Team 42 not found"
        );
    }

    #[test]
    fn internal_errors_are_prefixed() {
        let error = AppError::Internal("database unavailable".to_owned());
        assert_eq!(error.to_string(), "internal error: database unavailable");
    }
}
