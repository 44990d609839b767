//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create session, add idea) are kept apart from query
//! handlers (get session, list sessions, list ideas).

pub mod handlers;

pub use handlers::{
    AddIdeaCommand, AddIdeaHandler, CreateSessionCommand, CreateSessionHandler,
    GetSessionHandler, GetSessionQuery, ListIdeasHandler, ListIdeasQuery, ListSessionsHandler,
};
