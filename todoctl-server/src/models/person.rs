//! Person name and email validation

use once_cell::sync::Lazy;
use regex::Regex;

use super::validation::check_length;
use super::ValidationError;

/// Minimum length for person names
pub const MIN_PERSON_NAME_LEN: usize = 3;

/// Maximum length for email addresses (RFC 5321 path limit)
const MAX_EMAIL_LEN: usize = 254;

/// Single `@`, non-empty local part, dotted domain with a 2+ letter TLD.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("invalid email regex")
});

/// Validated person name (at least 3 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        check_length("name", s, MIN_PERSON_NAME_LEN, None)?;
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email address, validating its format.
    ///
    /// Surrounding whitespace is rejected rather than trimmed.
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::Email;
    ///
    /// assert!(Email::new("ada@example.com").is_ok());
    /// assert!(Email::new("ada.example.com").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if s.len() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }

        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "value is not a valid email address",
            });
        }

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
    fn valid_emails() {
        assert!(Email::new("ada@example.com").is_ok());
        assert!(Email::new("first.last+tag@sub.example.org").is_ok());
        assert!(Email::new("x_y@a-b.io").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in [
            "plainaddress",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@@example.com",
            "ada @example.com",
            " ada@example.com",
            "ada@-example.com",
        ] {
            let err = Email::new(bad).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "email", .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty_email() {
        let err = Email::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "email" }));
    }

    #[test]
    fn person_name_min_length() {
        assert!(PersonName::new("Ada").is_ok());
        let err = PersonName::new("Al").unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { min: 3, .. }));
    }
}
