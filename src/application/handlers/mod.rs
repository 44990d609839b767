//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod idea;
pub mod session;

pub use idea::{AddIdeaCommand, AddIdeaHandler, ListIdeasHandler, ListIdeasQuery};
pub use session::{
    CreateSessionCommand, CreateSessionHandler, GetSessionHandler, GetSessionQuery,
    ListSessionsHandler,
};
