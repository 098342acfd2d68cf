//! In-memory chat gateway.
//!
//! Records every send, edit and delete so tests can assert on the exact
//! message lifecycle. Edits and deletes of unknown or already deleted
//! messages fail the same way the Bot API does.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{MessageHandle, Reply};
use crate::ports::{ChatError, ChatGateway};

/// A recorded chat operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Sent {
        handle: MessageHandle,
        reply_to: MessageHandle,
        reply: Reply,
    },
    Edited {
        handle: MessageHandle,
        html: String,
    },
    Deleted {
        handle: MessageHandle,
    },
}

#[derive(Debug, Default)]
struct State {
    events: Vec<ChatEvent>,
    /// Current text of every message sent and not yet deleted.
    live: HashMap<MessageHandle, String>,
    next_message_id: i32,
    fail_sends_after: Option<usize>,
    fail_edits: bool,
}

/// Chat gateway that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatGateway {
    state: Arc<Mutex<State>>,
}

impl InMemoryChatGateway {
    /// Creates an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every send after the first `count` fail.
    pub fn with_failing_sends_after(self, count: usize) -> Self {
        self.lock().fail_sends_after = Some(count);
        self
    }

    /// Makes every edit fail.
    pub fn with_failing_edits(self) -> Self {
        self.lock().fail_edits = true;
        self
    }

    /// All recorded operations in order.
    pub fn events(&self) -> Vec<ChatEvent> {
        self.lock().events.clone()
    }

    /// Successfully sent messages as `(handle, reply_to, reply)`.
    pub fn sent(&self) -> Vec<(MessageHandle, MessageHandle, Reply)> {
        self.lock()
            .events
            .iter()
            .filter_map(|event| match event {
                ChatEvent::Sent {
                    handle,
                    reply_to,
                    reply,
                } => Some((*handle, *reply_to, reply.clone())),
                _ => None,
            })
            .collect()
    }

    /// Texts of successful edits, in order.
    pub fn edits(&self) -> Vec<String> {
        self.lock()
            .events
            .iter()
            .filter_map(|event| match event {
                ChatEvent::Edited { html, .. } => Some(html.clone()),
                _ => None,
            })
            .collect()
    }

    /// Handles of deleted messages, in order.
    pub fn deleted(&self) -> Vec<MessageHandle> {
        self.lock()
            .events
            .iter()
            .filter_map(|event| match event {
                ChatEvent::Deleted { handle } => Some(*handle),
                _ => None,
            })
            .collect()
    }

    /// Messages still visible in the chat, ordered by message ID.
    pub fn live_messages(&self) -> Vec<(MessageHandle, String)> {
        let state = self.lock();
        let mut live: Vec<_> = state
            .live
            .iter()
            .map(|(handle, html)| (*handle, html.clone()))
            .collect();
        live.sort_by_key(|(handle, _)| handle.message_id);
        live
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ChatGateway for InMemoryChatGateway {
    async fn send_reply(
        &self,
        reply_to: MessageHandle,
        reply: Reply,
    ) -> Result<MessageHandle, ChatError> {
        let mut state = self.lock();

        let sent_so_far = state.live.len() + state.deleted_count();
        if state.fail_sends_after.is_some_and(|limit| sent_so_far >= limit) {
            return Err(ChatError::request("Bad Request: simulated send failure"));
        }

        state.next_message_id += 1;
        let handle = MessageHandle::new(reply_to.chat_id, 1000 + state.next_message_id);
        state.live.insert(handle, reply.html.clone());
        state.events.push(ChatEvent::Sent {
            handle,
            reply_to,
            reply,
        });
        Ok(handle)
    }

    async fn edit_message(&self, message: MessageHandle, html: &str) -> Result<(), ChatError> {
        let mut state = self.lock();

        if state.fail_edits {
            return Err(ChatError::request("Bad Request: simulated edit failure"));
        }

        match state.live.get_mut(&message) {
            Some(text) => *text = html.to_string(),
            None => return Err(ChatError::MessageNotFound(message)),
        }
        state.events.push(ChatEvent::Edited {
            handle: message,
            html: html.to_string(),
        });
        Ok(())
    }

    async fn delete_message(&self, message: MessageHandle) -> Result<(), ChatError> {
        let mut state = self.lock();

        if state.live.remove(&message).is_none() {
            return Err(ChatError::MessageNotFound(message));
        }
        state.events.push(ChatEvent::Deleted { handle: message });
        Ok(())
    }
}

impl State {
    fn deleted_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ChatEvent::Deleted { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> MessageHandle {
        MessageHandle::new(1, 1)
    }

    #[tokio::test]
    async fn send_edit_delete_lifecycle() {
        let gateway = InMemoryChatGateway::new();

        let handle = gateway.send_reply(command(), Reply::html("one")).await.unwrap();
        gateway.edit_message(handle, "two").await.unwrap();
        assert_eq!(gateway.live_messages(), vec![(handle, "two".to_string())]);

        gateway.delete_message(handle).await.unwrap();
        assert!(gateway.live_messages().is_empty());
        assert_eq!(gateway.edits(), vec!["two".to_string()]);
        assert_eq!(gateway.deleted(), vec![handle]);
    }

    #[tokio::test]
    async fn deleted_messages_cannot_be_edited() {
        let gateway = InMemoryChatGateway::new();
        let handle = gateway.send_reply(command(), Reply::html("x")).await.unwrap();
        gateway.delete_message(handle).await.unwrap();

        assert_eq!(
            gateway.edit_message(handle, "y").await,
            Err(ChatError::MessageNotFound(handle))
        );
        assert_eq!(
            gateway.delete_message(handle).await,
            Err(ChatError::MessageNotFound(handle))
        );
    }

    #[tokio::test]
    async fn failing_sends_after_limit() {
        let gateway = InMemoryChatGateway::new().with_failing_sends_after(1);

        assert!(gateway.send_reply(command(), Reply::html("ok")).await.is_ok());
        assert!(gateway.send_reply(command(), Reply::html("nope")).await.is_err());
        assert_eq!(gateway.sent().len(), 1);
    }

    #[tokio::test]
    async fn sent_messages_get_distinct_handles() {
        let gateway = InMemoryChatGateway::new();
        let first = gateway.send_reply(command(), Reply::html("a")).await.unwrap();
        let second = gateway.send_reply(command(), Reply::html("b")).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(first.chat_id, command().chat_id);
    }
}
