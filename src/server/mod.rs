//! HTTP transport: application state, handlers and route wiring

pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;
