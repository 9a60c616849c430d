use async_trait::async_trait;
use std::time::Duration;

use athar_logging::{log_request, log_response};
use athar_types::{ChatReply, ChatRequest, ErrorBody};

use crate::client::ChatBackend;
use crate::config::{normalize_base_url, CHAT_PATH, HEALTH_PATH, REQUEST_TIMEOUT};
use crate::error::ApiError;

/// reqwest-backed client for the chatbot's HTTP API
pub struct HttpChatBackend {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
    verbose: bool,
}

impl HttpChatBackend {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            base_url: normalize_base_url(base_url),
            client,
            timeout,
            verbose: false,
        })
    }

    /// Dump every request and response to stderr
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upper bound applied to every request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn health(&self) -> Result<(), ApiError> {
        let url = self.endpoint(HEALTH_PATH);
        log_request::<()>("GET", &url, None, self.verbose);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        // The health body is informational only
        let body = response.text().await.unwrap_or_default();
        log_response(&status, &headers, &body, self.verbose);

        if status.is_success() {
            log::info!("health check passed: {}", body.trim());
            Ok(())
        } else {
            Err(status_error(status, &body))
        }
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        let url = self.endpoint(CHAT_PATH);
        log_request("POST", &url, Some(request), self.verbose);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        log_response(&status, &headers, &body, self.verbose);

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        serde_json::from_str::<ChatReply>(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn status_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    ApiError::Status {
        status: status.as_u16(),
        error: ErrorBody::parse_lenient(body).message(),
    }
}
