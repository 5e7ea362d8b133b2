//! # Error Types
//!
//! Validation errors raised by balong-core. These represent rejected input:
//! the operation aborts and no state changes. Storage and orchestration
//! failures live in their own crates (balong-store, balong-app).

use thiserror::Error;

/// Input validation errors.
///
/// Used for early validation before a command touches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;
