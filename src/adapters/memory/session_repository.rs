//! In-Memory Session Repository Adapter
//!
//! Stores sessions in a process-local map.
//! Used by the running service and by integration tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::BrainstormSession;
use crate::ports::SessionRepository;

/// In-memory storage for brainstorm sessions.
///
/// Clones share the same underlying store. Sessions are listed in id order.
#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<BTreeMap<SessionId, BrainstormSession>>>,
    last_id: Arc<AtomicI32>,
}

impl InMemorySessionRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(BTreeMap::new())),
            last_id: Arc::new(AtomicI32::new(0)),
        }
    }

    /// Get the number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.values().cloned().collect())
    }

    async fn add(&self, session: &BrainstormSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Session already exists: {}", session.id()),
            ));
        }
        // Keep the allocator ahead of ids chosen by callers.
        self.last_id
            .fetch_max(session.id().value(), Ordering::SeqCst);
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session.id()) {
            Some(stored) => {
                *stored = session.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            )),
        }
    }

    async fn next_id(&self) -> Result<SessionId, DomainError> {
        // The counter stays at i32::MAX once exhausted.
        self.last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map(|previous| SessionId::new(previous + 1))
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Session ids exhausted"))
    }
}
