//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `session` - Brainstorming sessions and their ideas

pub mod foundation;
pub mod session;
