//! Shipment polling handler.

use axum::http::StatusCode;
use axum::{Json, Router, extract::State, routing::post};
use chrono::Utc;

use crate::error::EndpointFailure;
use crate::hub::{PollRequest, ShipmentsResponse};
use crate::poller;
use crate::shipstation::ShipStationClient;
use crate::state::AppState;

/// Build the polling router.
pub fn router() -> Router<AppState> {
    Router::new().route("/get_shipments", post(get_shipments))
}

/// Poll ShipStation for shipments created since the hub's watermark.
///
/// Responds 200 when the window is drained and 206 when more remote pages
/// remain (the echoed `parameters` then carry the same watermark with the
/// next page number, and the hub calls straight back). An empty poll is a
/// 200 with no `summary`.
///
/// # Errors
///
/// Returns the 500 failure envelope on a missing `since` parameter or any
/// remote API error.
pub async fn get_shipments(
    State(state): State<AppState>,
    Json(req): Json<PollRequest>,
) -> Result<(StatusCode, Json<ShipmentsResponse>), EndpointFailure> {
    const ACTION: &str = "get shipments from ShipStation";
    let request_id = req.request_id.clone();
    let fail = |e| EndpointFailure::new(request_id.clone(), ACTION, e);

    let client = ShipStationClient::new(&req.parameters, state.config()).map_err(fail)?;
    let cursor = req.parameters.cursor().map_err(fail)?;
    let outcome = poller::poll(&client, cursor, Utc::now()).await.map_err(fail)?;

    tracing::info!(
        count = outcome.updates.len(),
        has_more = outcome.has_more,
        "Shipment poll complete"
    );

    let summary = (!outcome.updates.is_empty()).then(|| {
        format!(
            "Retrieved {} shipments from ShipStation",
            outcome.updates.len()
        )
    });
    let status = if outcome.has_more {
        StatusCode::PARTIAL_CONTENT
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(ShipmentsResponse {
            request_id: req.request_id,
            summary,
            shipments: outcome.updates,
            parameters: outcome.cursor,
        }),
    ))
}
