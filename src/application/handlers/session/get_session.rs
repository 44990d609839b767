//! GetSessionHandler - Query handler for retrieving a full session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{BrainstormSession, SessionError};
use crate::ports::SessionRepository;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving a session with its ideas.
pub struct GetSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<BrainstormSession, SessionError> {
        tracing::debug!(session_id = %query.session_id, "Loading session");

        self.repository
            .find_by_id(query.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id))
    }
}
