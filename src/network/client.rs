//! HTTP client for fetching results pages

use crate::config::OutgoingSettings;
use crate::engines::EngineResponse;
use crate::error::{Error, Result};
use anyhow::Context;
use reqwest::{Client, Response};
use std::collections::HashMap;
use tracing::debug;

/// HTTP client wrapper configured from [`OutgoingSettings`].
///
/// No request timeout is set: a fetch that never answers keeps its task
/// pending.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let client = build_client(settings).map_err(|e| Error::Config(format!("{:#}", e)))?;
        Ok(Self { client })
    }

    /// Simple GET request against a fully formed URL
    pub async fn get(&self, url: &str) -> Result<EngineResponse> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// Parse response into EngineResponse
    async fn parse_response(response: Response) -> Result<EngineResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let text = response.text().await?;

        Ok(EngineResponse {
            status,
            headers,
            text,
            url,
        })
    }
}

fn build_client(settings: &OutgoingSettings) -> anyhow::Result<Client> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(ref ua) = settings.user_agent {
        builder = builder.user_agent(ua.as_str());
    }

    // SSL verification
    if !settings.verify_ssl {
        builder = builder.danger_accept_invalid_certs(true);
    }

    // Proxy settings
    if let Some(ref proxy_url) = settings.proxies.all {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url).context("invalid proxy (all)")?);
    } else {
        if let Some(ref http) = settings.proxies.http {
            builder = builder.proxy(reqwest::Proxy::http(http).context("invalid http proxy")?);
        }
        if let Some(ref https) = settings.proxies.https {
            builder = builder.proxy(reqwest::Proxy::https(https).context("invalid https proxy")?);
        }
    }

    builder.build().context("failed to build HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProxySettings;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_proxy_is_config_error() {
        let settings = OutgoingSettings {
            proxies: ProxySettings {
                all: Some("not a url".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let err = HttpClient::with_settings(&settings).err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let response = client.get(&format!("{}/search?q=x", server.uri())).await.unwrap();

        assert_eq!(response.status, 503);
        assert!(!response.is_success());
        assert_eq!(response.text, "busy");
    }

    #[tokio::test]
    async fn test_configured_user_agent_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "gnews-test/1.0"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let settings = OutgoingSettings {
            user_agent: Some("gnews-test/1.0".to_string()),
            ..Default::default()
        };
        let client = HttpClient::with_settings(&settings).unwrap();
        let response = client.get(&server.uri()).await.unwrap();

        assert!(response.is_success());
    }
}
