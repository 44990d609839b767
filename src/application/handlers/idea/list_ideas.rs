//! ListIdeasHandler - Query handler for the ideas of one session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{IdeaSummary, SessionError};
use crate::ports::SessionRepository;

/// Query for the ideas of a session.
#[derive(Debug, Clone)]
pub struct ListIdeasQuery {
    pub session_id: SessionId,
}

pub struct ListIdeasHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListIdeasHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Returns the session's ideas in insertion order.
    pub async fn handle(&self, query: ListIdeasQuery) -> Result<Vec<IdeaSummary>, SessionError> {
        let session = self
            .repository
            .find_by_id(query.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id))?;

        Ok(session.ideas().iter().map(IdeaSummary::from).collect())
    }
}
