//! Chat-completions transport over reqwest

use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use triage_application::{ChatRequest, CompletionTransport, TransportError, TransportResponse};

/// Path appended to the configured base URL
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Transport for OpenAI-compatible chat-completions endpoints
///
/// Status codes are passed through untouched; retry decisions belong to
/// the suggestion engine. Without a credential the transport still builds,
/// but every request fails immediately with
/// [`TransportError::MissingCredential`] and nothing is sent.
pub struct OpenAiTransport {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OpenAiTransport {
    /// Build a transport for `base_url`
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(format!("failed to build HTTP client: {e}")))?;
        let endpoint = format!(
            "{}{}",
            base_url.trim().trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        );

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Build from the `[openai]` config section, resolving the credential
    ///
    /// A missing key is logged, not fatal: the process keeps running and
    /// each request reports the problem instead.
    pub fn from_config(config: &FileOpenAiConfig) -> Result<Self, TransportError> {
        let api_key = config.resolve_api_key();
        if api_key.is_none() {
            warn!(
                "{} is not set; category suggestions will fail until a key is configured",
                config.api_key_env
            );
        }

        let transport = Self::new(&config.base_url, api_key, config.request_timeout())?;
        info!("OpenAiTransport initialized ({})", transport.endpoint);
        Ok(transport)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl CompletionTransport for OpenAiTransport {
    async fn send(&self, request: &ChatRequest) -> Result<TransportResponse, TransportError> {
        let Some(api_key) = &self.api_key else {
            return Err(TransportError::MissingCredential);
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;
        debug!("{} responded {} ({} bytes)", self.endpoint, status, body.len());

        Ok(TransportResponse { status, body })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Request(err.to_string())
    }
}
