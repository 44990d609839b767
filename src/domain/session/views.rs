//! Read models derived from the session aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};

use super::aggregate::BrainstormSession;
use super::idea::Idea;

/// Lightweight session view for lists and the session page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub name: String,
    pub date_created: Timestamp,
    pub idea_count: usize,
}

impl From<&BrainstormSession> for SessionSummary {
    fn from(session: &BrainstormSession) -> Self {
        Self {
            id: session.id(),
            name: session.name().to_string(),
            date_created: *session.date_created(),
            idea_count: session.idea_count(),
        }
    }
}

/// Idea view exposing only what a listing needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaSummary {
    pub name: String,
    pub description: String,
}

impl From<&Idea> for IdeaSummary {
    fn from(idea: &Idea) -> Self {
        Self {
            name: idea.name().to_string(),
            description: idea.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_summary_copies_identity_and_counts_ideas() {
        let created = Timestamp::from_ymd(1981, 10, 28).unwrap();
        let session = BrainstormSession::reconstitute(
            SessionId::new(1),
            "Test One".to_string(),
            created,
            vec![Idea::reconstitute("A".to_string(), "a".to_string(), created)],
        );

        let summary = SessionSummary::from(&session);
        assert_eq!(summary.id, SessionId::new(1));
        assert_eq!(summary.name, "Test One");
        assert_eq!(summary.date_created, created);
        assert_eq!(summary.idea_count, 1);
    }

    #[test]
    fn idea_summary_omits_timestamp() {
        let idea = Idea::reconstitute("One".to_string(), "first".to_string(), Timestamp::now());
        let json = serde_json::to_value(IdeaSummary::from(&idea)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "One", "description": "first" }));
    }
}
