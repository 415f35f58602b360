//! HTTP surface for the weather summary service.
//!
//! The binary wires configuration and logging; this library exposes the router
//! so it can be driven in tests with a fake provider.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
