//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod todo;
pub mod department;
pub mod person;
pub mod pagination;

pub use validation::ValidationError;
pub use todo::{TodoDescription, TodoTitle};
pub use department::DepartmentName;
pub use person::{Email, PersonName};
pub use pagination::{Pagination, PaginationParams};
