//! Session repository port.
//!
//! Defines the contract for persisting and retrieving brainstorm sessions.
//! Sessions are always loaded with their full idea list.
//!
//! # Design
//!
//! - **Aggregate-oriented**: a session and its ideas are saved as one unit
//! - **Repository-allocated ids**: callers ask `next_id` before `add`
//! - **Concurrency**: concurrent updates to one session are resolved by the
//!   implementation

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::BrainstormSession;
use async_trait::async_trait;

/// Repository port for brainstorm session persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find a session by its ID, ideas included.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DomainError>;

    /// List every stored session.
    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError>;

    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a session with the same id already exists
    /// - `DatabaseError` on persistence failure
    async fn add(&self, session: &BrainstormSession) -> Result<(), DomainError>;

    /// Replace an existing session, ideas included.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError>;

    /// Allocate an unused session id.
    async fn next_id(&self) -> Result<SessionId, DomainError>;
}
