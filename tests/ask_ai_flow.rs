//! Integration tests for the `/ai` command flow.
//!
//! These tests drive the public API end to end:
//! 1. A scripted provider answers with a raw JSON body, interpreted exactly
//!    as the HTTP provider interprets real responses
//! 2. `AskAiHandler` runs the placeholder lifecycle against an in-memory chat
//! 3. Assertions check what the chat would show afterwards
//!
//! Uses in-memory implementations to test the flow without Telegram or a
//! completion endpoint.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use telegram_ai_bot::adapters::ai::{interpret_body, MockCompletionProvider};
use telegram_ai_bot::adapters::telegram::{ChatEvent, InMemoryChatGateway};
use telegram_ai_bot::application::{AskAiConfig, AskAiHandler, AskAiResult, Pacing};
use telegram_ai_bot::domain::{
    replies, CompletionOutcome, Invocation, MessageHandle, ReferencedMessage,
};
use telegram_ai_bot::ports::{CompletionProvider, CompletionRequest, ProviderInfo};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Provider that answers every request with a fixed JSON body
struct JsonBodyProvider {
    body: Value,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl JsonBodyProvider {
    fn new(body: Value) -> Self {
        Self {
            body,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for JsonBodyProvider {
    async fn complete(&self, request: CompletionRequest) -> CompletionOutcome {
        self.requests.lock().unwrap().push(request);
        interpret_body(&self.body)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("json-body", "fixture")
    }
}

/// Provider whose transport always fails
struct UnreachableProvider;

#[async_trait]
impl CompletionProvider for UnreachableProvider {
    async fn complete(&self, _request: CompletionRequest) -> CompletionOutcome {
        CompletionOutcome::transport_failure("connection refused")
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("unreachable", "none")
    }
}

fn command() -> MessageHandle {
    MessageHandle::new(-1001, 10)
}

fn handler<P: CompletionProvider>(
    provider: Arc<P>,
    gateway: &InMemoryChatGateway,
) -> AskAiHandler<P, InMemoryChatGateway> {
    AskAiHandler::with_config(
        provider,
        Arc::new(gateway.clone()),
        AskAiConfig {
            pacing: Pacing::none(),
            ..Default::default()
        },
    )
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_guidance_without_query_source() {
    let provider = Arc::new(JsonBodyProvider::new(json!({})));
    let gateway = InMemoryChatGateway::new();

    let result = handler(provider.clone(), &gateway)
        .handle(Invocation::new(command(), ""))
        .await;

    assert_eq!(result, AskAiResult::UsageGuided);
    assert_eq!(provider.request_count(), 0);
    assert_eq!(gateway.events().len(), 1);
    assert_eq!(gateway.sent()[0].2.html, replies::usage_guide());
}

#[tokio::test]
async fn test_choices_body_delivers_bold_answer() {
    let provider = Arc::new(JsonBodyProvider::new(
        json!({"choices": [{"message": {"content": "**hi**"}}]}),
    ));
    let gateway = InMemoryChatGateway::new();

    let result = handler(provider.clone(), &gateway)
        .handle(Invocation::new(command(), "greet me"))
        .await;

    assert_eq!(result, AskAiResult::Answered);
    assert_eq!(provider.request_count(), 1);

    // Placeholder sent, edited once, deleted; then the answer
    let events = gateway.events();
    assert_eq!(events.len(), 4);
    let placeholder = match &events[0] {
        ChatEvent::Sent { handle, reply, .. } => {
            assert_eq!(reply.html, replies::searching());
            *handle
        }
        other => panic!("expected placeholder send, got {:?}", other),
    };
    assert_eq!(
        events[1],
        ChatEvent::Edited {
            handle: placeholder,
            html: replies::found()
        }
    );
    assert_eq!(events[2], ChatEvent::Deleted { handle: placeholder });

    let live = gateway.live_messages();
    assert_eq!(live.len(), 1);
    assert!(live[0].1.contains("<b>hi</b>"));
}

#[tokio::test]
async fn test_error_body_leaves_no_messages() {
    let provider = Arc::new(JsonBodyProvider::new(
        json!({"error": {"message": "rate limited"}}),
    ));
    let gateway = InMemoryChatGateway::new();

    let result = handler(provider, &gateway)
        .handle(Invocation::new(command(), "hello"))
        .await;

    assert_eq!(result, AskAiResult::ApiError);
    assert_eq!(gateway.sent().len(), 1);
    assert_eq!(gateway.edits(), vec![replies::api_error("rate limited")]);
    assert!(gateway.live_messages().is_empty());
}

#[tokio::test]
async fn test_unexpected_body_shows_format_notice() {
    let provider = Arc::new(JsonBodyProvider::new(json!({"object": "list", "data": []})));
    let gateway = InMemoryChatGateway::new();

    let result = handler(provider, &gateway)
        .handle(Invocation::new(command(), "hello"))
        .await;

    assert_eq!(result, AskAiResult::MalformedResponse);
    assert_eq!(gateway.edits(), vec![replies::unexpected_format()]);
    assert!(gateway.live_messages().is_empty());
}

#[tokio::test]
async fn test_fields_without_text_show_generic_failure() {
    for body in [
        json!({"error": "invalid api key"}),
        json!({"error": {"code": 500}}),
        json!({"choices": [{"message": {"role": "assistant"}}]}),
    ] {
        let gateway = InMemoryChatGateway::new();
        let provider = Arc::new(JsonBodyProvider::new(body.clone()));

        let result = handler(provider, &gateway)
            .handle(Invocation::new(command(), "hello"))
            .await;

        assert_eq!(result, AskAiResult::Failed, "body: {body}");
        assert_eq!(gateway.edits(), vec![replies::api_failure()], "body: {body}");
        assert!(gateway.live_messages().is_empty());
    }
}

#[tokio::test]
async fn test_placeholder_is_visible_while_provider_works() {
    let provider = Arc::new(
        MockCompletionProvider::new()
            .with_answer("done")
            .with_delay(Duration::from_millis(200)),
    );
    let gateway = InMemoryChatGateway::new();
    let handler = handler(provider.clone(), &gateway);

    let task = tokio::spawn(async move {
        handler
            .handle(Invocation::new(command(), "slow question"))
            .await
    });

    // Wait until the call is in flight
    while provider.call_count() == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let live = gateway.live_messages();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].1, replies::searching());

    assert_eq!(task.await.unwrap(), AskAiResult::Answered);
    assert_eq!(gateway.live_messages()[0].1, "done");
}

#[tokio::test]
async fn test_transport_failure_completes_and_cleans_up() {
    let gateway = InMemoryChatGateway::new();

    let result = handler(Arc::new(UnreachableProvider), &gateway)
        .handle(Invocation::new(command(), "hello"))
        .await;

    assert_eq!(result, AskAiResult::Failed);
    assert_eq!(gateway.edits(), vec![replies::api_failure()]);
    assert_eq!(gateway.deleted().len(), 1);
    assert!(gateway.live_messages().is_empty());
}

#[tokio::test]
async fn test_reply_query_answers_referenced_message() {
    let provider = Arc::new(JsonBodyProvider::new(
        json!({"choices": [{"message": {"content": "- one\n- two"}}]}),
    ));
    let gateway = InMemoryChatGateway::new();
    let referenced = MessageHandle::new(-1001, 4);

    let invocation = Invocation::new(command(), "").replying_to(ReferencedMessage::new(
        referenced,
        Some("list two things".to_string()),
    ));
    handler(provider, &gateway).handle(invocation).await;

    let sent = gateway.sent();
    let (_, reply_to, answer) = sent.last().unwrap();
    assert_eq!(*reply_to, referenced);
    assert_eq!(answer.html, "• one\n• two");
}

#[tokio::test]
async fn test_concurrent_invocations_do_not_interfere() {
    let provider = Arc::new(JsonBodyProvider::new(
        json!({"choices": [{"message": {"content": "ok"}}]}),
    ));
    let gateway = InMemoryChatGateway::new();
    let handler = Arc::new(handler(provider.clone(), &gateway));

    let tasks: Vec<_> = (0..5)
        .map(|i| {
            let handler = handler.clone();
            tokio::spawn(async move {
                handler
                    .handle(Invocation::new(MessageHandle::new(i, 1), "question"))
                    .await
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), AskAiResult::Answered);
    }

    assert_eq!(provider.request_count(), 5);
    assert_eq!(gateway.deleted().len(), 5);
    // One answer per chat remains
    assert_eq!(gateway.live_messages().len(), 5);
}
