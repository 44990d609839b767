//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routers and handlers
//! - `memory` - in-memory session repository and demo seeding

pub mod http;
pub mod memory;

pub use memory::{seed_demo_data, InMemorySessionRepository};
