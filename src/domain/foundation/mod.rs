//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, and error types that form the
//! vocabulary of the brainstorming domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError, ValidationErrors};
pub use ids::SessionId;
pub use timestamp::Timestamp;
