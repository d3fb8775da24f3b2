//! ShipStation Endpoint - hub-to-ShipStation adapter service.
//!
//! Translates the hub's normalized shipment payloads into ShipStation REST
//! resources and back. The service is stateless: every request carries its
//! own ShipStation credentials in `parameters`, and the incremental-poll
//! cursor round-trips through the hub instead of living on this side.
//!
//! # Architecture
//!
//! - Axum web framework, one JSON envelope per endpoint
//! - Per-request `reqwest` client against the ShipStation REST API
//! - Mapping layer (addresses, line items, order assembly) written against
//!   the [`shipstation::RemoteGateway`] trait so the remote API generation
//!   can change without touching the mapping logic
//! - Sentry for error tracking, `tracing` for structured logs

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};

pub mod config;
pub mod error;
pub mod hub;
pub mod mapping;
pub mod poller;
pub mod routes;
pub mod shipstation;
pub mod state;

use state::AppState;

/// Build the application router.
///
/// Observability layers (trace, Sentry) are applied by the binary; tests
/// drive this router directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .merge(routes::routes())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not call ShipStation.
async fn health() -> &'static str {
    "ok"
}
