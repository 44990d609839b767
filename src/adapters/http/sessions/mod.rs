//! HTTP adapter for the sessions API.

mod handlers;
mod routes;

pub use handlers::{get_session, SessionHandlers};
pub use routes::session_routes;
