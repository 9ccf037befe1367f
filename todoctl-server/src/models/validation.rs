//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field is shorter than its minimum length
    TooShort { field: &'static str, min: usize },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a string's length in characters against optional bounds.
pub(crate) fn check_length(
    field: &'static str,
    s: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    let len = s.chars().count();

    if len == 0 && min > 0 {
        return Err(ValidationError::Empty { field });
    }

    if len < min {
        return Err(ValidationError::TooShort { field, min });
    }

    if let Some(max) = max {
        if len > max {
            return Err(ValidationError::TooLong { field, max });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 255 characters"
        );

        let err = ValidationError::TooShort {
            field: "name",
            min: 3,
        };
        assert_eq!(err.to_string(), "name must be at least 3 characters");
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // three characters, six bytes
        assert!(check_length("name", "äöü", 3, Some(3)).is_ok());
    }

    #[test]
    fn length_bounds() {
        assert_eq!(
            check_length("name", "", 3, None),
            Err(ValidationError::Empty { field: "name" })
        );
        assert_eq!(
            check_length("name", "ab", 3, None),
            Err(ValidationError::TooShort { field: "name", min: 3 })
        );
        assert!(check_length("description", "", 0, Some(10)).is_ok());
    }
}
