//! ShipStation HTTP transport.
//!
//! A thin client built per request from hub-supplied credentials. Every
//! non-2xx response collapses into one uniform [`ShipStationError::Api`]
//! carrying the numeric status and raw body; nothing above this layer looks
//! at transport detail.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ServerConfig;
use crate::hub::{Credentials, HubParameters};

use super::ShipStationError;

/// ShipStation REST API client.
///
/// Scoped to a single hub request: construction resolves the request's
/// authentication scheme into default headers, and the client is dropped
/// when the response goes out. Cheap to clone.
#[derive(Clone)]
pub struct ShipStationClient {
    inner: Arc<ShipStationClientInner>,
}

struct ShipStationClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ShipStationClient {
    /// Build a client from the request's `parameters` and server config.
    ///
    /// # Errors
    ///
    /// Returns a validation error if no credential scheme is supplied, or a
    /// parse error if a header value is malformed.
    pub fn new(params: &HubParameters, config: &ServerConfig) -> Result<Self, ShipStationError> {
        let mut headers = HeaderMap::new();

        let auth_value = match params.credentials()? {
            Credentials::Token(token) => token,
            Credentials::Basic { user, pass } => {
                format!("Basic {}", BASE64.encode(format!("{user}:{pass}")))
            }
        };
        let mut auth = HeaderValue::from_str(&auth_value)
            .map_err(|e| ShipStationError::Parse(format!("Invalid authorization value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        // Legacy gateway generation routed through Mashape.
        if let Some(mashape_key) = &params.mashape_key {
            let mut value = HeaderValue::from_str(mashape_key.expose_secret())
                .map_err(|e| ShipStationError::Parse(format!("Invalid mashape key: {e}")))?;
            value.set_sensitive(true);
            headers.insert("X-Mashape-Key", value);
        }

        if let Some(partner) = &params.x_partner {
            headers.insert(
                "x-partner",
                HeaderValue::from_str(partner).map_err(|e| {
                    ShipStationError::Parse(format!("Invalid x-partner value: {e}"))
                })?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.remote_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ShipStationClientInner {
                client,
                base_url: config.shipstation_base_url.clone(),
            }),
        })
    }

    /// Execute a GET request against the ShipStation API.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ShipStationError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a POST request against the ShipStation API.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ShipStationError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ShipStationError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ShipStationError::Parse(format!("Failed to parse response: {e}")));
        }

        let body = response.text().await.unwrap_or_default();
        Err(ShipStationError::Api {
            status: status.as_u16(),
            body,
        })
    }
}
