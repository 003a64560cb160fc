//! Car lot API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! telemetry) so integration tests and both binaries can reach them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;
