//! Cross-cutting error types for gradtrack.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `AiError`) are defined in
//! their respective crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any gradtrack crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Reject blank text for a required field.
pub fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Reject values outside `min..=max`. Unordered values (NaN) are rejected too.
pub fn require_range<T>(field: &str, value: T, min: T, max: T) -> Result<(), CoreError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    let in_range = value >= min && value <= max;
    if !in_range {
        return Err(CoreError::Validation(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("name", "MIT").is_ok());
        let err = require_text("name", "  ").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: name must not be empty");
    }

    #[test]
    fn range_is_inclusive() {
        assert!(require_range("gpa", 4.0, 0.0, 4.0).is_ok());
        assert!(require_range("rate", 100.5, 0.0, 100.0).is_err());
        assert!(require_range("fee", -1_i64, 0, i64::MAX).is_err());
    }

    #[test]
    fn nan_is_out_of_range() {
        let err = require_range("gpa", f64::NAN, 0.0, 10.0).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: gpa must be between 0 and 10, got NaN");
    }
}
