//! CreateSessionHandler - Command handler for creating new sessions.

use std::sync::Arc;

use crate::domain::session::{require_text, BrainstormSession, SessionError, MAX_NAME_LENGTH};
use crate::ports::SessionRepository;

/// Command to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub name: String,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<BrainstormSession, SessionError> {
        // 1. Validate before allocating an id
        require_text("name", &cmd.name, Some(MAX_NAME_LENGTH))?;

        // 2. Create session aggregate
        let session_id = self.repository.next_id().await?;
        let session = BrainstormSession::new(session_id, cmd.name)?;

        // 3. Persist session
        self.repository.add(&session).await?;

        tracing::info!(session_id = %session.id(), name = session.name(), "Session created");
        Ok(session)
    }
}
