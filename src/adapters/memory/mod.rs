//! In-memory persistence adapters.

mod seed;
mod session_repository;

pub use seed::{seed_demo_data, DEMO_SESSION_NAME};
pub use session_repository::InMemorySessionRepository;
