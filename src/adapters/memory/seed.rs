//! Demo data loaded at startup when `features.seed_demo_data` is on.

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::session::{BrainstormSession, Idea};
use crate::ports::SessionRepository;

pub const DEMO_SESSION_NAME: &str = "Test Session 1";

/// Adds one demo session with two ideas if the repository is empty.
///
/// Returns whether anything was written.
pub async fn seed_demo_data(repository: &dyn SessionRepository) -> Result<bool, DomainError> {
    if !repository.list().await?.is_empty() {
        return Ok(false);
    }

    let created = Timestamp::from_ymd(2016, 8, 1)
        .ok_or_else(|| DomainError::new(ErrorCode::InternalError, "Invalid seed date"))?;
    let ideas = vec![
        Idea::reconstitute("Idea 1".to_string(), "First demo idea".to_string(), created),
        Idea::reconstitute("Idea 2".to_string(), "Second demo idea".to_string(), created),
    ];

    let id = repository.next_id().await?;
    let session =
        BrainstormSession::reconstitute(id, DEMO_SESSION_NAME.to_string(), created, ideas);
    repository.add(&session).await?;

    tracing::info!(session_id = %id, "Seeded demo session");
    Ok(true)
}
