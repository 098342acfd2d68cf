//! Start command handler.
//!
//! `/start` greets the user and points at `/ai`.

use std::sync::Arc;

use crate::domain::{replies, MessageHandle, Reply};
use crate::ports::{ChatError, ChatGateway};

/// Handler for the `/start` command.
pub struct StartHandler<G: ChatGateway> {
    gateway: Arc<G>,
}

impl<G: ChatGateway> StartHandler<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Sends the greeting followed by the usage hint.
    pub async fn handle(&self, command: MessageHandle) -> Result<(), ChatError> {
        self.gateway
            .send_reply(command, Reply::html(replies::welcome()))
            .await?;
        self.gateway
            .send_reply(command, Reply::html(replies::usage_hint()))
            .await?;
        Ok(())
    }
}
