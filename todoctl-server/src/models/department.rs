//! Department name validation

use super::validation::check_length;
use super::ValidationError;

/// Minimum length for department names
pub const MIN_DEPARTMENT_NAME_LEN: usize = 3;

/// Validated department name (at least 3 characters)
///
/// Uniqueness is enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DepartmentName(String);

impl DepartmentName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        check_length("department name", s, MIN_DEPARTMENT_NAME_LEN, None)?;
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
