//! HTTP facade: thin request validation and dispatch over the tool core.

mod handlers;
mod routes;

pub use handlers::{ApiError, AppState};
pub use routes::create_router;
