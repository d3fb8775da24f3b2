//! HTTP route handlers for the hub protocol.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Liveness check
//! GET  /health            - Liveness check
//!
//! # Order traffic (hub → ShipStation)
//! POST /add_order         - Create an order (legacy name)
//! POST /add_shipment      - Create an order
//! POST /update_shipment   - Upsert an existing order
//!
//! # Shipment polling (ShipStation → hub)
//! POST /get_shipments     - Incremental poll for shipped orders
//! ```
//!
//! Every handler speaks the hub envelope: JSON in with `request_id` and
//! `parameters`, JSON out with the `request_id` echoed and a human-readable
//! `summary`. Failures are HTTP 500 envelopes built by
//! [`crate::error::EndpointFailure`].

pub mod orders;
pub mod shipments;

use axum::Router;

use crate::state::AppState;

/// Build the hub-facing router.
pub fn routes() -> Router<AppState> {
    Router::new().merge(orders::router()).merge(shipments::router())
}
