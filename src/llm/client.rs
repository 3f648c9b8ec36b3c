use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use super::dto::{ChatMessage, ChatRequest, ChatResponse};
use crate::config::GatewayConfig;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("LOVABLE_API_KEY is not configured")]
    MissingApiKey,
    #[error("AI gateway error: {status}")]
    Upstream { status: StatusCode },
    #[error("AI gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("No content received from AI")]
    MissingContent,
}

impl GatewayError {
    fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Transport(_) => true,
            GatewayError::Upstream { status } => status.is_server_error(),
            GatewayError::MissingApiKey | GatewayError::MissingContent => false,
        }
    }
}

/// A chat-completion backend: one system/user exchange in, raw text out.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GatewayError>;
}

#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_retries: u32,
}

impl GatewayClient {
    pub fn new(cfg: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder().timeout(cfg.timeout()).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", cfg.base_url.trim_end_matches('/')),
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
            max_retries: cfg.max_retries,
        })
    }

    async fn send_once(&self, messages: &[ChatMessage]) -> Result<String, GatewayError> {
        let body = ChatRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "gateway responded");
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(%status, body = %error_text, "AI gateway error");
            return Err(GatewayError::Upstream { status });
        }

        let raw = response.text().await?;
        let parsed: ChatResponse = match serde_json::from_str(&raw) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "gateway body is not a chat completion");
                return Err(GatewayError::MissingContent);
            }
        };
        parsed.first_content().ok_or(GatewayError::MissingContent)
    }
}

#[async_trait]
impl ChatClient for GatewayClient {
    #[instrument(skip(self, messages), fields(request_id = %Uuid::new_v4(), model = %self.model))]
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GatewayError> {
        if self.api_key.trim().is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        let mut attempt = 0;
        loop {
            match self.send_once(messages).await {
                Ok(content) => {
                    info!(attempt, chars = content.len(), "completion received");
                    return Ok(content);
                }
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(error = %e, attempt, "retrying gateway call");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
