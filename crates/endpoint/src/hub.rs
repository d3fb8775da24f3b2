//! Hub request/response envelopes.
//!
//! Every hub call is a JSON envelope: a `request_id` echoed back verbatim, a
//! `parameters` object carrying ShipStation credentials plus the poll
//! cursor, and (for order traffic) the normalized `shipment` itself.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use shipstation_endpoint_core::{NormalizedShipment, ShipmentUpdate, SyncCursor};

use crate::shipstation::ShipStationError;

/// Per-request parameters supplied by the hub.
///
/// Three mutually exclusive authentication schemes are recognized, newest
/// first: a pre-built `authorization` header value, an API `key`/`secret`
/// pair, or a legacy `username`/`password` pair. `mashape_key` rides along
/// for the gateway generation that fronted the API.
///
/// Implements `Debug` manually to redact everything secret.
#[derive(Clone, Deserialize)]
pub struct HubParameters {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<SecretString>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub secret: Option<SecretString>,
    #[serde(default)]
    pub authorization: Option<SecretString>,
    #[serde(default)]
    pub mashape_key: Option<SecretString>,
    #[serde(default)]
    pub shipstation_store_id: Option<i64>,
    #[serde(default)]
    pub x_partner: Option<String>,
    /// Poll watermark: shipments created after this instant are wanted.
    #[serde(default)]
    pub since: Option<DateTime<Utc>>,
    /// Remote page to resume from when a previous poll returned partial.
    #[serde(default)]
    pub page: Option<u32>,
}

impl std::fmt::Debug for HubParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubParameters")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("key", &self.key)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field(
                "authorization",
                &self.authorization.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "mashape_key",
                &self.mashape_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("shipstation_store_id", &self.shipstation_store_id)
            .field("x_partner", &self.x_partner)
            .field("since", &self.since)
            .field("page", &self.page)
            .finish()
    }
}

/// Resolved authentication scheme for the remote API.
#[derive(Debug)]
pub enum Credentials {
    /// Pre-built `Authorization` header value, passed through verbatim.
    Token(String),
    /// Basic-auth pair (API key/secret or legacy username/password).
    Basic { user: String, pass: String },
}

impl HubParameters {
    /// Resolve the authentication scheme from whichever fields are present.
    ///
    /// # Errors
    ///
    /// Returns a validation error if no complete scheme is supplied.
    pub fn credentials(&self) -> Result<Credentials, ShipStationError> {
        if let Some(token) = &self.authorization {
            return Ok(Credentials::Token(token.expose_secret().to_string()));
        }
        if let (Some(key), Some(secret)) = (&self.key, &self.secret) {
            return Ok(Credentials::Basic {
                user: key.clone(),
                pass: secret.expose_secret().to_string(),
            });
        }
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            return Ok(Credentials::Basic {
                user: username.clone(),
                pass: password.expose_secret().to_string(),
            });
        }
        Err(ShipStationError::MissingField("credentials".to_string()))
    }

    /// Build the poll cursor from `since`/`page`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `since` is absent.
    pub fn cursor(&self) -> Result<SyncCursor, ShipStationError> {
        let since = self
            .since
            .ok_or_else(|| ShipStationError::MissingField("since".to_string()))?;
        let mut cursor = SyncCursor::new(since);
        if let Some(page) = self.page {
            cursor.page = page;
        }
        Ok(cursor)
    }
}

/// Envelope for `/add_order`, `/add_shipment`, and `/update_shipment`.
///
/// The first hub generation posted the payload under `order`; the alias
/// keeps those callers working.
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(alias = "order")]
    pub shipment: NormalizedShipment,
    pub parameters: HubParameters,
}

/// Envelope for `/get_shipments`.
#[derive(Debug, Deserialize)]
pub struct PollRequest {
    #[serde(default)]
    pub request_id: Option<String>,
    pub parameters: HubParameters,
}

/// Hub/ShipStation identifier pair returned after order traffic.
#[derive(Debug, Serialize)]
pub struct OrderRef {
    pub id: String,
    pub shipstation_id: String,
}

/// Response envelope for order traffic.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderRef>,
}

/// Response envelope for `/get_shipments`.
///
/// `parameters` carries the advanced cursor back to the hub; `summary` is
/// omitted entirely when the poll returned nothing.
#[derive(Debug, Serialize)]
pub struct ShipmentsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub shipments: Vec<ShipmentUpdate>,
    pub parameters: SyncCursor,
}

/// Failure envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(json: &str) -> HubParameters {
        serde_json::from_str(json).expect("valid parameters json")
    }

    #[test]
    fn test_authorization_token_takes_precedence() {
        let p = params(r#"{"authorization": "tok-123", "key": "k", "secret": "s"}"#);
        match p.credentials().expect("credentials") {
            Credentials::Token(token) => assert_eq!(token, "tok-123"),
            Credentials::Basic { .. } => panic!("expected token scheme"),
        }
    }

    #[test]
    fn test_key_secret_pair_resolves_to_basic() {
        let p = params(r#"{"key": "api-key", "secret": "api-secret"}"#);
        match p.credentials().expect("credentials") {
            Credentials::Basic { user, pass } => {
                assert_eq!(user, "api-key");
                assert_eq!(pass, "api-secret");
            }
            Credentials::Token(_) => panic!("expected basic scheme"),
        }
    }

    #[test]
    fn test_username_password_is_the_fallback() {
        let p = params(r#"{"username": "user", "password": "pw"}"#);
        assert!(matches!(
            p.credentials().expect("credentials"),
            Credentials::Basic { .. }
        ));
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let p = params(r#"{"shipstation_store_id": 12345}"#);
        let err = p.credentials().expect_err("no credentials supplied");
        assert!(err.to_string().contains("credentials"));
    }

    #[test]
    fn test_cursor_requires_since() {
        let p = params(r#"{"authorization": "tok"}"#);
        assert!(p.cursor().is_err());

        let p = params(r#"{"authorization": "tok", "since": "2014-11-29T00:38:23Z", "page": 4}"#);
        let cursor = p.cursor().expect("cursor");
        assert_eq!(cursor.page, 4);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let p = params(r#"{"key": "visible-key", "secret": "super-secret-value"}"#);
        let debug_output = format!("{p:?}");
        assert!(debug_output.contains("visible-key"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-value"));
    }

    #[test]
    fn test_order_alias_accepted() {
        let req: OrderRequest = serde_json::from_str(
            r#"{
                "request_id": "123",
                "order": {"id": "R1234"},
                "parameters": {"authorization": "tok"}
            }"#,
        )
        .expect("valid envelope");
        assert_eq!(req.shipment.id, "R1234");
    }
}
