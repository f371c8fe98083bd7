//! WaterTrail API server library.
//!
//! Exposes config, state, error handling and the route tree so integration
//! tests and the binary entrypoint build the same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
