//! ShipStation REST API client.
//!
//! Talks to ShipStation's order/shipment management service. The API has
//! lived behind three fronts over time (an OData service, a third-party REST
//! gateway, and the current public REST API); everything above the transport
//! is written against the [`RemoteGateway`] capability trait so the mapping
//! and polling logic survives those moves.
//!
//! # Authentication
//!
//! Credentials arrive per request from the hub: a raw `Authorization` value,
//! an API key/secret basic pair, or a legacy username/password basic pair.
//! Nothing is cached between requests.

pub mod client;
pub mod gateway;
pub mod types;

pub use client::ShipStationClient;
pub use gateway::RemoteGateway;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when interacting with the ShipStation API.
#[derive(Debug, Error)]
pub enum ShipStationError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from ShipStation, reported verbatim.
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Failed to parse a response or build a request.
    #[error("parse error: {0}")]
    Parse(String),

    /// A required input field is absent; nothing was sent to ShipStation.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Carrier name not in ShipStation's carrier list.
    #[error("unknown carrier: {0}")]
    UnknownCarrier(String),

    /// Service name not offered by the carrier.
    #[error("unknown service '{name}' for carrier {carrier}")]
    UnknownService { carrier: String, name: String },

    /// Package name not offered by the carrier.
    #[error("unknown package '{name}' for carrier {carrier}")]
    UnknownPackage { carrier: String, name: String },
}

impl ShipStationError {
    /// Whether this failure is worth an error-tracker event.
    ///
    /// Validation and lookup misses are caller mistakes; transport and API
    /// faults are ours to notice.
    #[must_use]
    pub const fn is_reportable(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Api { .. } | Self::Parse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status_and_body() {
        let err = ShipStationError::Api {
            status: 401,
            body: "{\"message\": \"Unauthorized\"}".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("401"));
        assert!(display.contains("Unauthorized"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = ShipStationError::MissingField("shipping_address".to_string());
        assert_eq!(
            err.to_string(),
            "missing required field: shipping_address"
        );
    }

    #[test]
    fn test_unknown_service_names_carrier_and_service() {
        let err = ShipStationError::UnknownService {
            carrier: "ups".to_string(),
            name: "UPS Teleport".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown service 'UPS Teleport' for carrier ups"
        );
    }

    #[test]
    fn test_reportable_split() {
        assert!(
            ShipStationError::Api {
                status: 500,
                body: String::new()
            }
            .is_reportable()
        );
        assert!(!ShipStationError::MissingField("since".to_string()).is_reportable());
        assert!(!ShipStationError::UnknownCarrier("DHL".to_string()).is_reportable());
    }
}
