//! Endpoint-boundary error handling.
//!
//! The hub protocol is blunt: every failure is HTTP 500 with a
//! `{ request_id, summary }` envelope, and the summary is the only detail
//! the hub ever sees. Anything transport-shaped is also captured to Sentry
//! before it leaves.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::hub::ErrorResponse;
use crate::shipstation::ShipStationError;

/// A failed hub request, carrying everything needed for the 500 envelope.
#[derive(Debug)]
pub struct EndpointFailure {
    request_id: Option<String>,
    action: &'static str,
    source: ShipStationError,
}

impl EndpointFailure {
    /// Wrap a ShipStation error with the request context.
    ///
    /// `action` reads as "Unable to {action}, {error}" in the summary, e.g.
    /// "create order in ShipStation".
    #[must_use]
    pub const fn new(
        request_id: Option<String>,
        action: &'static str,
        source: ShipStationError,
    ) -> Self {
        Self {
            request_id,
            action,
            source,
        }
    }
}

impl IntoResponse for EndpointFailure {
    fn into_response(self) -> Response {
        // Transport and API faults go to the error tracker; validation and
        // lookup misses are the hub's input problem and only get logged.
        if self.source.is_reportable() {
            let event_id = sentry::capture_error(&self.source);
            tracing::error!(
                error = %self.source,
                action = self.action,
                sentry_event_id = %event_id,
                "Hub request failed"
            );
        } else {
            tracing::warn!(
                error = %self.source,
                action = self.action,
                "Hub request rejected"
            );
        }

        let summary = format!("Unable to {}, {}", self.action, self.source);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                request_id: self.request_id,
                summary,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_maps_to_500() {
        let failure = EndpointFailure::new(
            Some("123".to_string()),
            "get shipments from ShipStation",
            ShipStationError::Api {
                status: 401,
                body: "Unauthorized".to_string(),
            },
        );
        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_summary_embeds_remote_status_and_body() {
        let failure = EndpointFailure::new(
            None,
            "get shipments from ShipStation",
            ShipStationError::Api {
                status: 401,
                body: "{\"message\": \"Invalid API key\"}".to_string(),
            },
        );
        let body = axum::body::to_bytes(failure.into_response().into_body(), usize::MAX)
            .await
            .expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        let summary = json["summary"].as_str().expect("summary");
        assert!(summary.starts_with("Unable to get shipments from ShipStation,"));
        assert!(summary.contains("API error: 401"));
        assert!(summary.contains("Invalid API key"));
    }
}
