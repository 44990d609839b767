//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRepository` - Persistence of brainstorm sessions and their ideas

mod session_repository;

pub use session_repository::SessionRepository;
