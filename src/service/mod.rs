//! HTTP service layer for the introspection queries.
//!
//! Enabled by the `service` feature. The core engine stays
//! transport-agnostic; this module is a thin axum adapter over it.

pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::{create_router, AppState};
pub use state::ServiceState;
