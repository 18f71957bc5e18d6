//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{AccessToken, SendMessage, SendMessageResponse, ValidationError};

const DEFAULT_BASE_URL: &str = "https://services.leadconnectorhq.com";
const MESSAGES_PATH: &str = "/conversations/messages";

/// API version expected by the conversations resource group, sent as the
/// `Version` header on every request.
const CONVERSATIONS_API_VERSION: &str = "2021-04-15";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url);
            for (name, value) in &headers {
                request = request.header(name.as_str(), value.as_str());
            }
            let response = request.json(&body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`HighLevelClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - validation/parse failures.
///
/// There is no retry or error-code translation; the API's own error replies
/// surface as [`HighLevelError::HttpStatus`] with the body attached.
pub enum HighLevelError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL is not a valid URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[source] url::ParseError),

    /// The request is missing a locally required field.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`HighLevelClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct HighLevelClientBuilder {
    token: AccessToken,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HighLevelClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent
    /// override.
    pub fn new(token: AccessToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (mainly useful for tests and proxies).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`HighLevelClient`].
    pub fn build(self) -> Result<HighLevelClient, HighLevelError> {
        let base = Url::parse(&self.base_url).map_err(HighLevelError::InvalidBaseUrl)?;
        let messages_endpoint =
            format!("{}{}", base.as_str().trim_end_matches('/'), MESSAGES_PATH);

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| HighLevelError::Transport(Box::new(err)))?;

        Ok(HighLevelClient {
            token: self.token,
            messages_endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Client for the HighLevel conversations API.
///
/// This type orchestrates request validation, JSON encoding, and response
/// parsing. By default it talks to `https://services.leadconnectorhq.com`
/// and authenticates every call with a bearer token.
pub struct HighLevelClient {
    token: AccessToken,
    messages_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl HighLevelClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`HighLevelClient::builder`].
    pub fn new(token: AccessToken) -> Self {
        Self {
            token,
            messages_endpoint: format!("{DEFAULT_BASE_URL}{MESSAGES_PATH}"),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(token: AccessToken) -> HighLevelClientBuilder {
        HighLevelClientBuilder::new(token)
    }

    /// Send a message into a contact's conversation.
    ///
    /// `contactId` and `type` are checked locally before any network call;
    /// channel-specific requirements are enforced by the API itself.
    ///
    /// Errors:
    /// - Returns [`HighLevelError::Validation`] when a locally required field
    ///   is missing,
    /// - [`HighLevelError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`HighLevelError::Parse`] when the reply is not the expected JSON.
    pub async fn send_message(
        &self,
        request: SendMessage,
    ) -> Result<SendMessageResponse, HighLevelError> {
        request.validate()?;

        let body = crate::transport::encode_send_message_body(&request);
        let headers = vec![
            (
                "Authorization".to_owned(),
                format!("Bearer {}", self.token.as_str()),
            ),
            ("Version".to_owned(), CONVERSATIONS_API_VERSION.to_owned()),
        ];

        let response = self
            .http
            .post_json(&self.messages_endpoint, headers, body)
            .await
            .map_err(HighLevelError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(HighLevelError::HttpStatus {
                status: response.status,
                body,
            });
        }

        crate::transport::decode_send_message_json_response(&response.body)
            .map_err(|err| HighLevelError::Parse(Box::new(err)))
    }
}
