//! Todo field validation

use super::validation::check_length;
use super::ValidationError;

/// Maximum length for todo titles
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum length for todo descriptions
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Validated todo title (may be empty, at most 255 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Create a new title.
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::TodoTitle;
    ///
    /// assert!(TodoTitle::new("buy milk").is_ok());
    /// assert!(TodoTitle::new(&"t".repeat(256)).is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        check_length("title", s, 0, Some(MAX_TITLE_LEN))?;
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated todo description (may be empty, at most 1024 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDescription(String);

impl TodoDescription {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        check_length("description", s, 0, Some(MAX_DESCRIPTION_LEN))?;
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(TodoTitle::new("").is_ok());
        assert!(TodoTitle::new(&"t".repeat(255)).is_ok());

        let err = TodoTitle::new(&"t".repeat(256)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));
    }

    #[test]
    fn description_bounds() {
        assert!(TodoDescription::new("").is_ok());
        assert!(TodoDescription::new(&"d".repeat(1024)).is_ok());

        let err = TodoDescription::new(&"d".repeat(1025)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 1024, .. }));
    }
}
