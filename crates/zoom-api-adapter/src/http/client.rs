/*
[INPUT]:  API credentials, base URL, timeouts and request descriptors
[OUTPUT]: Authenticated HTTP responses and decoded JSON payloads
[POS]:    HTTP layer - core client and request pipeline
[UPDATE]: When changing connection options, auth retry policy or decoding
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::{AuthManager, JwtSigner, TokenSigner};
use crate::http::{ApiRequest, Result, ZoomError};

/// Base URL for the Zoom REST API
pub const DEFAULT_BASE_URL: &str = "https://api.zoom.us/v2";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Account credentials and API location
#[derive(Clone)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl ApiConfig {
    /// Credentials against the public API endpoint
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn signer(&self) -> JwtSigner {
        JwtSigner::new(self.api_key.clone(), self.api_secret.clone())
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Zoom API.
///
/// Clones share the connection pool and the credential.
#[derive(Debug, Clone)]
pub struct ZoomClient {
    http_client: Client,
    base_url: String,
    auth: AuthManager,
}

impl ZoomClient {
    /// Create a new client with default configuration
    pub fn new(api: ApiConfig) -> Result<Self> {
        Self::with_config(api, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api: ApiConfig, config: ClientConfig) -> Result<Self> {
        let signer = Arc::new(api.signer());
        Self::with_signer(api.base_url(), signer, config)
    }

    /// Create a client around any token signer
    pub fn with_signer(
        base_url: &str,
        signer: Arc<dyn TokenSigner>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ZoomError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        Ok(Self {
            http_client,
            base_url,
            auth: AuthManager::new(signer),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_manager(&self) -> &AuthManager {
        &self.auth
    }

    /// Build full URL for an endpoint path
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Ok(Url::parse(&url)?)
    }

    /// Run one call: acquire a token if needed, send, and on a 401 refresh
    /// the token and resend exactly once.
    pub async fn execute(&self, request: &ApiRequest) -> Result<Response> {
        let endpoint = request.endpoint();
        let issued = self
            .auth
            .ensure_token()
            .map_err(|source| ZoomError::Authentication { source })?;

        let response = self.send(request, &endpoint, &issued.token).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::check_response(&endpoint, response).await;
        }

        warn!(endpoint = %endpoint, "token rejected, re-authenticating");
        let refreshed = self
            .auth
            .refresh(issued.generation)
            .map_err(|source| ZoomError::TokenRefresh { source })?;

        let response = self.send(request, &endpoint, &refreshed.token).await?;
        Self::check_response(&endpoint, response).await
    }

    /// Run a call and decode the success body into `T`
    pub async fn execute_json<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        let endpoint = request.endpoint();
        let response = self.execute(request).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ZoomError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| ZoomError::Decode { endpoint, source })
    }

    /// Run a call whose body carries nothing useful; the body is never decoded
    pub async fn execute_unit(&self, request: &ApiRequest) -> Result<()> {
        self.execute(request).await.map(drop)
    }

    async fn send(&self, request: &ApiRequest, endpoint: &str, token: &str) -> Result<Response> {
        let url = self.endpoint_url(&request.path)?;
        debug!(endpoint = %endpoint, "sending request");

        let mut builder = self
            .http_client
            .request(request.method.clone(), url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .bearer_auth(token);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        builder.send().await.map_err(|source| ZoomError::Http {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(endpoint: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            debug!(endpoint = %endpoint, status = status.as_u16(), "request succeeded");
            return Ok(response);
        }

        let body = error_body(endpoint, response.text().await);
        debug!(endpoint = %endpoint, status = status.as_u16(), "request failed");
        Err(ZoomError::api_error(endpoint, status, body))
    }
}

/// Body of a failed response; an unreadable body is logged and reported as empty
fn error_body(endpoint: &str, read: reqwest::Result<String>) -> String {
    read.unwrap_or_else(|err| {
        warn!(endpoint = %endpoint, error = %err, "failed to read error response body");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockTokenSigner;

    #[test]
    fn test_endpoint_url_joins_single_slash() {
        let client = ZoomClient::with_signer(
            "https://api.example.com/v2/",
            Arc::new(MockTokenSigner::new("tok")),
            ClientConfig::default(),
        )
        .unwrap();

        assert_eq!(client.base_url(), "https://api.example.com/v2");
        assert_eq!(
            client.endpoint_url("/meetings/123").unwrap().as_str(),
            "https://api.example.com/v2/meetings/123"
        );
        assert_eq!(
            client.endpoint_url("users/me/meetings").unwrap().as_str(),
            "https://api.example.com/v2/users/me/meetings"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = ZoomClient::with_signer(
            "not a url",
            Arc::new(MockTokenSigner::new("tok")),
            ClientConfig::default(),
        );
        assert!(matches!(result, Err(ZoomError::UrlParse(_))));
    }

    #[test]
    fn test_api_config_defaults_and_redaction() {
        let config = ApiConfig::new("key", "very-secret");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), "key");
        assert!(!format!("{config:?}").contains("very-secret"));
    }

    #[tokio::test]
    async fn test_unreadable_error_body_falls_back_to_empty() {
        let read_failure = Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .map(|_| String::new());
        assert!(read_failure.is_err());

        assert_eq!(error_body("GET meetings/1", read_failure), "");
        assert_eq!(error_body("GET meetings/1", Ok("boom".to_string())), "boom");
    }
}
