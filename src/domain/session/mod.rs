//! Session domain module.
//!
//! A brainstorming session is a named, timestamped container holding an
//! ordered list of ideas. Ideas belong to exactly one session and are only
//! ever appended.

mod aggregate;
mod errors;
mod idea;
mod validation;
mod views;

pub use aggregate::BrainstormSession;
pub use errors::SessionError;
pub use idea::Idea;
pub use validation::{require_text, MAX_NAME_LENGTH};
pub use views::{IdeaSummary, SessionSummary};
