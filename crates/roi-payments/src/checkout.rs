//! Checkout Initiation
//!
//! Implements the hosted-checkout redirect: POST the configured price
//! identifier to the session endpoint, get a redirect URL back, and hand it
//! to the caller. Navigation and the in-flight loading guard belong to the
//! UI; this client never touches the access flag - unlocking happens only
//! via the completion marker after the provider redirects back.

use serde::{Deserialize, Serialize};

use crate::error::{PaymentError, Result};

/// Checkout configuration.
#[derive(Clone, Debug)]
pub struct CheckoutConfig {
    /// Endpoint that creates checkout sessions (an external collaborator).
    pub endpoint: String,

    /// Price identifier for the one-time unlock purchase.
    pub price_id: String,
}

impl CheckoutConfig {
    /// Config for a deployment origin, e.g. `https://roi.example`.
    ///
    /// The session endpoint must be absolute for the request builder, so
    /// the browser resolves it against its own origin.
    #[must_use]
    pub fn for_origin(origin: &str) -> Self {
        let base = origin.trim_end_matches('/');
        Self {
            endpoint: format!("{base}/api/checkout"),
            price_id: option_env!("ROI_STRIPE_PRICE_ID").unwrap_or_default().into(),
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self::for_origin("http://localhost:3000")
    }
}

/// Body sent to the session endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub price_id: String,
}

/// Body expected from the session endpoint. Anything without a `url` is a
/// failure.
#[derive(Clone, Debug, Deserialize)]
struct CheckoutResponse {
    #[serde(default)]
    url: Option<String>,
}

/// Client for the checkout-session endpoint.
pub struct CheckoutClient {
    http: reqwest::Client,
    config: CheckoutConfig,
}

impl CheckoutClient {
    #[must_use]
    pub fn new(config: CheckoutConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Request a checkout session and return the redirect URL.
    ///
    /// No retry and no timeout: a failure surfaces once and the caller
    /// resets its loading indicator.
    pub async fn create_session(&self) -> Result<String> {
        if self.config.price_id.is_empty() {
            return Err(PaymentError::Config("price id not configured".into()));
        }

        let request = CheckoutRequest {
            price_id: self.config.price_id.clone(),
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let body: CheckoutResponse = response.json().await?;

        match body.url {
            Some(url) if !url.is_empty() => {
                tracing::info!("checkout session created, redirecting");
                Ok(url)
            }
            _ => {
                tracing::warn!("checkout session response had no redirect URL");
                Err(PaymentError::MissingRedirectUrl)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> CheckoutClient {
        CheckoutClient::new(CheckoutConfig {
            endpoint: server.url("/api/checkout"),
            price_id: "price_roi_unlock".into(),
        })
    }

    #[tokio::test]
    async fn test_create_session_returns_redirect_url() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/checkout")
                .json_body(serde_json::json!({ "priceId": "price_roi_unlock" }));
            then.status(200)
                .json_body(serde_json::json!({ "url": "https://pay.example/s/cs_123" }));
        });

        let url = client_for(&server).create_session().await.unwrap();
        assert_eq!(url, "https://pay.example/s/cs_123");
        mock.assert();
    }

    #[test]
    fn test_for_origin_builds_absolute_endpoint() {
        let config = CheckoutConfig::for_origin("https://roi.example");
        assert_eq!(config.endpoint, "https://roi.example/api/checkout");

        let trailing = CheckoutConfig::for_origin("https://roi.example/");
        assert_eq!(trailing.endpoint, "https://roi.example/api/checkout");

        assert_eq!(
            CheckoutConfig::default().endpoint,
            "http://localhost:3000/api/checkout",
        );
    }

    #[tokio::test]
    async fn test_origin_config_reaches_the_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/checkout");
            then.status(200)
                .json_body(serde_json::json!({ "url": "https://pay.example/s/cs_9" }));
        });

        let config = CheckoutConfig {
            price_id: "price_roi_unlock".into(),
            ..CheckoutConfig::for_origin(&server.base_url())
        };

        let url = CheckoutClient::new(config).create_session().await.unwrap();
        assert_eq!(url, "https://pay.example/s/cs_9");
        mock.assert();
    }

    #[tokio::test]
    async fn test_relative_endpoint_is_a_network_error() {
        // A bare path cannot be requested; it must surface through the
        // same failure path as any other wire error, never panic.
        let client = CheckoutClient::new(CheckoutConfig {
            endpoint: "/api/checkout".into(),
            price_id: "price_roi_unlock".into(),
        });

        let err = client.create_session().await.unwrap_err();
        assert!(matches!(err, PaymentError::Network(_)));
    }

    #[tokio::test]
    async fn test_missing_url_is_a_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/checkout");
            then.status(200).json_body(serde_json::json!({}));
        });

        let err = client_for(&server).create_session().await.unwrap_err();
        assert!(matches!(err, PaymentError::MissingRedirectUrl));
    }

    #[tokio::test]
    async fn test_empty_url_is_a_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/checkout");
            then.status(200).json_body(serde_json::json!({ "url": "" }));
        });

        let err = client_for(&server).create_session().await.unwrap_err();
        assert!(matches!(err, PaymentError::MissingRedirectUrl));
    }

    #[tokio::test]
    async fn test_non_json_error_body_surfaces_as_network_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/checkout");
            then.status(500).body("internal error");
        });

        let err = client_for(&server).create_session().await.unwrap_err();
        assert!(matches!(err, PaymentError::Network(_)));
    }

    #[tokio::test]
    async fn test_unconfigured_price_id_fails_before_the_wire() {
        let client = CheckoutClient::new(CheckoutConfig {
            endpoint: "http://127.0.0.1:1/api/checkout".into(),
            price_id: String::new(),
        });

        let err = client.create_session().await.unwrap_err();
        assert!(matches!(err, PaymentError::Config(_)));
    }
}
