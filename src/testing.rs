//! Test doubles and deterministic builders shared by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::adapters::http::{IdeaHandlers, SessionHandlers};
use crate::application::handlers::{
    AddIdeaHandler, CreateSessionHandler, GetSessionHandler, ListIdeasHandler,
    ListSessionsHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::session::{BrainstormSession, Idea};
use crate::ports::SessionRepository;

/// Repository call as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    FindById(SessionId),
    List,
    Add(SessionId),
    Update(SessionId),
    NextId,
}

/// Mock repository that serves canned sessions and records every call.
pub struct MockSessionRepository {
    sessions: Mutex<Vec<BrainstormSession>>,
    calls: Mutex<Vec<RepoCall>>,
    updated: Mutex<Vec<BrainstormSession>>,
    added: Mutex<Vec<BrainstormSession>>,
    fail: bool,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self::with_sessions(Vec::new())
    }

    pub fn with_sessions(sessions: Vec<BrainstormSession>) -> Self {
        Self {
            sessions: Mutex::new(sessions),
            calls: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Every operation fails with a database error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn updated_sessions(&self) -> Vec<BrainstormSession> {
        self.updated.lock().unwrap().clone()
    }

    pub fn added_sessions(&self) -> Vec<BrainstormSession> {
        self.added.lock().unwrap().clone()
    }

    fn record(&self, call: RepoCall) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated repository failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn find_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DomainError> {
        self.record(RepoCall::FindById(id))?;
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError> {
        self.record(RepoCall::List)?;
        Ok(self.sessions.lock().unwrap().clone())
    }

    async fn add(&self, session: &BrainstormSession) -> Result<(), DomainError> {
        self.record(RepoCall::Add(session.id()))?;
        self.added.lock().unwrap().push(session.clone());
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError> {
        self.record(RepoCall::Update(session.id()))?;
        self.updated.lock().unwrap().push(session.clone());
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(pos) = sessions.iter().position(|s| s.id() == session.id()) {
            sessions[pos] = session.clone();
        }
        Ok(())
    }

    async fn next_id(&self) -> Result<SessionId, DomainError> {
        self.record(RepoCall::NextId)?;
        let max = self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.id().value())
            .max()
            .unwrap_or(0);
        Ok(SessionId::new(max + 1))
    }
}

/// Fixed creation date used by builders.
pub fn test_date() -> Timestamp {
    Timestamp::from_ymd(2016, 7, 2).unwrap()
}

pub fn test_idea(name: &str) -> Idea {
    Idea::reconstitute(name.to_string(), format!("{} description", name), test_date())
}

/// Session `id` named `"Test Session {id}"` holding `idea_count` ideas
/// named `"Idea 1"`, `"Idea 2"`, ...
pub fn test_session(id: i32, idea_count: usize) -> BrainstormSession {
    let ideas = (1..=idea_count)
        .map(|n| test_idea(&format!("Idea {}", n)))
        .collect();
    BrainstormSession::reconstitute(
        SessionId::new(id),
        format!("Test Session {}", id),
        test_date(),
        ideas,
    )
}

/// `count` sessions with ids `1..=count`, one idea each.
pub fn test_sessions(count: usize) -> Vec<BrainstormSession> {
    (1..=count as i32).map(|id| test_session(id, 1)).collect()
}

/// Ideas controller state wired to the given mock.
pub fn idea_handlers(repo: Arc<MockSessionRepository>) -> IdeaHandlers {
    let repository: Arc<dyn SessionRepository> = repo;
    IdeaHandlers::new(
        Arc::new(AddIdeaHandler::new(repository.clone())),
        Arc::new(ListIdeasHandler::new(repository)),
    )
}

/// Session controller state wired to the given mock.
pub fn session_handlers(repo: Arc<MockSessionRepository>) -> SessionHandlers {
    let repository: Arc<dyn SessionRepository> = repo;
    SessionHandlers::new(
        Arc::new(CreateSessionHandler::new(repository.clone())),
        Arc::new(GetSessionHandler::new(repository.clone())),
        Arc::new(ListSessionsHandler::new(repository)),
    )
}
