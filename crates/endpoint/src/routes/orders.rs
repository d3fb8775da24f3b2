//! Order create/update handlers.

use axum::{Json, Router, extract::State, routing::post};

use crate::error::EndpointFailure;
use crate::hub::{OrderRef, OrderRequest, OrderResponse};
use crate::mapping::order::{self, UpdateRequest};
use crate::shipstation::{RemoteGateway, ShipStationClient};
use crate::state::AppState;

/// Build the order traffic router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add_order", post(add_shipment))
        .route("/add_shipment", post(add_shipment))
        .route("/update_shipment", post(update_shipment))
}

/// Create a ShipStation order from a normalized shipment.
///
/// Served under both `/add_order` (the original hub name) and
/// `/add_shipment`.
///
/// # Errors
///
/// Returns the 500 failure envelope on validation, lookup, or remote API
/// errors.
pub async fn add_shipment(
    State(state): State<AppState>,
    Json(req): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, EndpointFailure> {
    const ACTION: &str = "create order in ShipStation";
    let request_id = req.request_id.clone();
    let fail = |e| EndpointFailure::new(request_id.clone(), ACTION, e);

    let client = ShipStationClient::new(&req.parameters, state.config()).map_err(fail)?;
    let payload = order::build_create_request(&req.shipment, &req.parameters, &client)
        .await
        .map_err(fail)?;
    let record = client.create_order(&payload).await.map_err(fail)?;

    tracing::info!(
        order_number = %record.order_number,
        shipstation_id = record.order_id,
        "Order transmitted to ShipStation"
    );

    Ok(Json(OrderResponse {
        request_id: req.request_id,
        summary: format!("Shipment transmitted to ShipStation: {}", record.order_number),
        order: Some(OrderRef {
            id: req.shipment.id,
            shipstation_id: record.order_id.to_string(),
        }),
    }))
}

/// Update an existing ShipStation order in place.
///
/// Three successful outcomes, all HTTP 200: the update was transmitted, the
/// order was never there ("not found"), or the shipment has already shipped
/// and the update is deliberately dropped ("Can't update") to keep the
/// update↔poll cycle from feeding itself.
///
/// # Errors
///
/// Returns the 500 failure envelope on validation, lookup, or remote API
/// errors.
pub async fn update_shipment(
    State(state): State<AppState>,
    Json(req): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, EndpointFailure> {
    const ACTION: &str = "update order in ShipStation";
    let request_id = req.request_id.clone();
    let fail = |e| EndpointFailure::new(request_id.clone(), ACTION, e);

    let client = ShipStationClient::new(&req.parameters, state.config()).map_err(fail)?;
    let outcome = order::build_update_request(&req.shipment, &req.parameters, &client)
        .await
        .map_err(fail)?;

    let response = match outcome {
        UpdateRequest::Skip => OrderResponse {
            request_id: req.request_id,
            summary: format!(
                "Can't update order {} because it has already shipped",
                req.shipment.id
            ),
            order: None,
        },
        UpdateRequest::NotFound => OrderResponse {
            request_id: req.request_id,
            summary: format!("Order {} not found in ShipStation", req.shipment.id),
            order: None,
        },
        UpdateRequest::Submit(payload) => {
            let record = client.create_order(&payload).await.map_err(fail)?;
            tracing::info!(
                order_number = %record.order_number,
                shipstation_id = record.order_id,
                "Order update transmitted to ShipStation"
            );
            OrderResponse {
                request_id: req.request_id,
                summary: format!(
                    "Shipment update transmitted in ShipStation: {}",
                    record.order_number
                ),
                order: Some(OrderRef {
                    id: req.shipment.id,
                    shipstation_id: record.order_id.to_string(),
                }),
            }
        }
    };

    Ok(Json(response))
}
