//! Chat Completions Provider - CompletionProvider over an OpenAI-compatible API.
//!
//! Talks to any endpoint that accepts the `chat/completions` request shape
//! (Hyperbolic, OpenAI, local gateways). The configured endpoint is the full
//! URL the request is posted to.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ChatCompletionsConfig::new(api_key, "https://api.hyperbolic.xyz/v1/chat/completions")
//!     .with_model("moonshotai/Kimi-K2-Instruct");
//!
//! let provider = ChatCompletionsProvider::new(config)?;
//! ```
//!
//! # Response handling
//!
//! The body is parsed as JSON whatever the HTTP status, because providers
//! report quota and validation problems as `{"error": {...}}` bodies on 4xx
//! responses. Only failures to send or to read a JSON body count as
//! transport failures.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::domain::CompletionOutcome;
use crate::ports::{CompletionProvider, CompletionRequest, Message, ProviderInfo};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "moonshotai/Kimi-K2-Instruct";

/// Configuration for the chat completions provider.
#[derive(Debug, Clone)]
pub struct ChatCompletionsConfig {
    /// API key for bearer authentication.
    api_key: Secret<String>,
    /// Full URL requests are posted to.
    pub endpoint: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Request timeout; `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Provider name used in logs.
    pub provider_name: String,
}

impl ChatCompletionsConfig {
    /// Creates a new configuration with the given API key and endpoint.
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
            provider_name: "hyperbolic".to_string(),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets an explicit request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the provider name reported in logs.
    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = name.into();
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI-compatible completion provider.
pub struct ChatCompletionsProvider {
    config: ChatCompletionsConfig,
    client: Client,
}

impl ChatCompletionsProvider {
    /// Creates a new provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns the client builder error if the TLS backend cannot be set up.
    pub fn new(config: ChatCompletionsConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    /// Converts our request to the wire format.
    fn to_wire_request<'a>(&'a self, request: &'a CompletionRequest) -> WireRequest<'a> {
        WireRequest {
            messages: &request.messages,
            model: &self.config.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            top_p: request.top_p,
        }
    }
}

#[async_trait]
impl CompletionProvider for ChatCompletionsProvider {
    async fn complete(&self, request: CompletionRequest) -> CompletionOutcome {
        let body = self.to_wire_request(&request);

        tracing::debug!(
            trace_id = %request.trace_id,
            model = %self.config.model,
            "Posting completion request"
        );

        let response = match self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return CompletionOutcome::transport_failure(describe_send_error(&e)),
        };

        let status = response.status();
        match response.json::<Value>().await {
            Ok(body) => {
                let outcome = interpret_body(&body);
                tracing::debug!(
                    trace_id = %request.trace_id,
                    status = status.as_u16(),
                    outcome = outcome.kind(),
                    "Completion response received"
                );
                outcome
            }
            Err(e) => CompletionOutcome::transport_failure(format!(
                "unreadable response body (status {}): {}",
                status, e
            )),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new(&self.config.provider_name, &self.config.model)
    }
}

/// Describes a send failure for logs.
fn describe_send_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}

/// Interprets a decoded response body.
///
/// First match wins: a non-empty `choices` field, then an `error` field,
/// otherwise the body is malformed. A matched field that lacks its text
/// (`choices[0].message.content` or `error.message`) is incomplete.
pub fn interpret_body(body: &Value) -> CompletionOutcome {
    if let Some(choices) = body.get("choices").filter(|choices| !is_empty_field(choices)) {
        return match choices.pointer("/0/message/content").and_then(Value::as_str) {
            Some(content) => CompletionOutcome::answer(content),
            None => CompletionOutcome::incomplete("first choice has no message content"),
        };
    }

    match body.get("error") {
        Some(error) => match error.get("message").and_then(Value::as_str) {
            Some(message) => CompletionOutcome::api_error(message),
            None => CompletionOutcome::incomplete(format!("error without message: {}", error)),
        },
        None => CompletionOutcome::MalformedResponse,
    }
}

/// True for fields that hold nothing to index into.
fn is_empty_field(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

// ----- Wire Types -----

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    messages: &'a [Message],
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}
