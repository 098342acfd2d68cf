//! AskAi command handler.
//!
//! Handles `/ai <text>`: validates the invocation, shows a placeholder while
//! the completion endpoint is queried, then either delivers the formatted
//! answer or turns the placeholder into a short-lived notice.
//!
//! The placeholder is always deleted once a query gets past validation,
//! whatever the outcome. Nothing is propagated to the dispatcher.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::{
    escape_html, format_ai_response, replies, CompletionOutcome, Invocation, MessageHandle,
    Query, Reply,
};
use crate::ports::{
    ChatError, ChatGateway, CompletionProvider, CompletionRequest, Message, DEFAULT_MAX_TOKENS,
    DEFAULT_TEMPERATURE, DEFAULT_TOP_P,
};

/// Fixed pauses between placeholder updates.
///
/// They pace the conversation for the user and have no effect on
/// correctness; tests run with [`Pacing::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Wait after the completion call returns, whatever its outcome.
    pub result_delay: Duration,
    /// Wait between "found" and deleting the placeholder.
    pub found_delay: Duration,
    /// Wait between an error notice and deleting the placeholder.
    pub notice_delay: Duration,
}

impl Pacing {
    /// No pauses at all.
    pub fn none() -> Self {
        Self {
            result_delay: Duration::ZERO,
            found_delay: Duration::ZERO,
            notice_delay: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            result_delay: Duration::from_secs(2),
            found_delay: Duration::from_secs(1),
            notice_delay: Duration::from_secs(2),
        }
    }
}

/// Configuration for the AskAi handler.
#[derive(Debug, Clone, PartialEq)]
pub struct AskAiConfig {
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling probability.
    pub top_p: f32,
    /// Placeholder pacing.
    pub pacing: Pacing,
}

impl Default for AskAiConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            pacing: Pacing::default(),
        }
    }
}

/// How an `/ai` invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskAiResult {
    /// No query source; usage guidance was sent.
    UsageGuided,
    /// The answer was delivered.
    Answered,
    /// The endpoint reported an error; the placeholder showed it.
    ApiError,
    /// The endpoint answered in an unexpected shape.
    MalformedResponse,
    /// Transport, an incomplete body or delivery failed; the placeholder
    /// showed a generic notice.
    Failed,
    /// The placeholder itself could not be sent; the endpoint was not called.
    PlaceholderUnavailable,
}

/// Failures that end in the generic failure notice.
#[derive(Debug, Clone, Error)]
enum AskAiError {
    #[error("completion transport failed: {0}")]
    Transport(String),

    #[error("completion response incomplete: {0}")]
    Incomplete(String),

    #[error(transparent)]
    Chat(#[from] ChatError),
}

/// Handler for the `/ai` command.
pub struct AskAiHandler<P, G>
where
    P: CompletionProvider,
    G: ChatGateway,
{
    provider: Arc<P>,
    gateway: Arc<G>,
    config: AskAiConfig,
}

impl<P, G> AskAiHandler<P, G>
where
    P: CompletionProvider,
    G: ChatGateway,
{
    /// Creates a new handler with the given dependencies.
    pub fn new(provider: Arc<P>, gateway: Arc<G>) -> Self {
        Self::with_config(provider, gateway, AskAiConfig::default())
    }

    /// Creates a handler with custom configuration.
    pub fn with_config(provider: Arc<P>, gateway: Arc<G>, config: AskAiConfig) -> Self {
        Self {
            provider,
            gateway,
            config,
        }
    }

    /// Handles an `/ai` invocation.
    pub async fn handle(&self, invocation: Invocation) -> AskAiResult {
        let Some(query) = Query::from_invocation(&invocation) else {
            if let Err(e) = self
                .gateway
                .send_reply(invocation.message, Reply::html(replies::usage_guide()))
                .await
            {
                tracing::warn!(command = %invocation.message, "Failed to send usage guide: {}", e);
            }
            return AskAiResult::UsageGuided;
        };

        let trace_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "ask_ai",
            trace_id = %trace_id,
            chat_id = invocation.message.chat_id
        );

        self.run(invocation.message, query, trace_id)
            .instrument(span)
            .await
    }

    async fn run(&self, command: MessageHandle, query: Query, trace_id: String) -> AskAiResult {
        // 1. Placeholder goes out before the remote call
        let placeholder = match self
            .gateway
            .send_reply(command, Reply::html(replies::searching()))
            .await
        {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!(error = %e, "Failed to send placeholder, dropping query");
                return AskAiResult::PlaceholderUnavailable;
            }
        };

        // 2. Single completion call
        let request = CompletionRequest::new(trace_id)
            .with_message(Message::user(query.text()))
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.temperature)
            .with_top_p(self.config.top_p);

        let outcome = self.provider.complete(request).await;
        tracing::info!(outcome = outcome.kind(), "Completion finished");

        // 3. Pacing, whatever the outcome
        pause(self.config.pacing.result_delay).await;

        // 4. Deliver
        let delivered = match outcome {
            CompletionOutcome::Answer(raw) => self
                .deliver_answer(placeholder, query.answer_target(command), &raw)
                .await
                .map(|()| AskAiResult::Answered),
            CompletionOutcome::ApiError(message) => {
                tracing::warn!(api_error = %message, "Completion endpoint reported an error");
                self.close_with_notice(placeholder, &replies::api_error(&message))
                    .await
                    .map(|()| AskAiResult::ApiError)
            }
            CompletionOutcome::MalformedResponse => {
                tracing::warn!("Completion endpoint answered in an unexpected format");
                self.close_with_notice(placeholder, &replies::unexpected_format())
                    .await
                    .map(|()| AskAiResult::MalformedResponse)
            }
            CompletionOutcome::IncompleteResponse(reason) => Err(AskAiError::Incomplete(reason)),
            CompletionOutcome::TransportFailure(reason) => Err(AskAiError::Transport(reason)),
        };

        match delivered {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, details = ?e, "AI query failed");
                self.recover(placeholder).await;
                AskAiResult::Failed
            }
        }
    }

    async fn deliver_answer(
        &self,
        placeholder: MessageHandle,
        target: MessageHandle,
        raw: &str,
    ) -> Result<(), AskAiError> {
        let answer = format_ai_response(&escape_html(raw));

        self.gateway
            .edit_message(placeholder, &replies::found())
            .await?;
        pause(self.config.pacing.found_delay).await;
        self.gateway.delete_message(placeholder).await?;

        self.gateway.send_reply(target, Reply::html(answer)).await?;
        Ok(())
    }

    async fn close_with_notice(
        &self,
        placeholder: MessageHandle,
        notice: &str,
    ) -> Result<(), AskAiError> {
        self.gateway.edit_message(placeholder, notice).await?;
        pause(self.config.pacing.notice_delay).await;
        self.gateway.delete_message(placeholder).await?;
        Ok(())
    }

    /// Best-effort failure notice and cleanup; errors are only logged.
    async fn recover(&self, placeholder: MessageHandle) {
        if let Err(e) = self
            .gateway
            .edit_message(placeholder, &replies::api_failure())
            .await
        {
            tracing::warn!(placeholder = %placeholder, "Failed to show failure notice: {}", e);
        }
        pause(self.config.pacing.notice_delay).await;
        if let Err(e) = self.gateway.delete_message(placeholder).await {
            tracing::warn!(placeholder = %placeholder, "Failed to delete placeholder: {}", e);
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}
