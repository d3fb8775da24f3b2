//! Integration tests for the ShipStation endpoint.
//!
//! Each test boots the real router on an ephemeral port with the remote
//! base URL pointed at a `wiremock` server standing in for ShipStation,
//! then drives the hub protocol over HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shipstation-endpoint-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use wiremock::MockServer;

use shipstation_endpoint::config::ServerConfig;
use shipstation_endpoint::state::AppState;

/// One running endpoint instance wired to a mock ShipStation.
pub struct TestContext {
    /// The stand-in ShipStation API; mount mocks here.
    pub server: MockServer,
    /// HTTP client for driving the endpoint.
    pub client: reqwest::Client,
    base_url: String,
}

impl TestContext {
    /// Start a mock ShipStation and an endpoint instance pointed at it.
    ///
    /// # Panics
    ///
    /// Panics if the ephemeral listener cannot be bound; tests cannot
    /// proceed without it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;

        let config = ServerConfig {
            shipstation_base_url: server.uri(),
            ..Default::default()
        };
        let app = shipstation_endpoint::app(AppState::new(config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });

        Self {
            server,
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Base URL of the running endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a hub envelope to the endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent at all; individual tests assert
    /// on the response.
    pub async fn post(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .expect("request to test endpoint")
    }
}
