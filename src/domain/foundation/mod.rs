//! Foundation types shared by every layer.

mod errors;

pub use errors::{DomainError, ErrorCode};
