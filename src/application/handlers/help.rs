//! Help command handler.
//!
//! `/help` lists the commands and links to the developer, the source
//! repository and the completion provider.

use std::sync::Arc;

use crate::domain::{replies, HelpLinks, MessageHandle, Reply};
use crate::ports::{ChatError, ChatGateway};

/// Handler for the `/help` command.
pub struct HelpHandler<G: ChatGateway> {
    gateway: Arc<G>,
    links: HelpLinks,
}

impl<G: ChatGateway> HelpHandler<G> {
    pub fn new(gateway: Arc<G>, links: HelpLinks) -> Self {
        Self { gateway, links }
    }

    /// Sends the help text with its link keyboard.
    pub async fn handle(&self, command: MessageHandle) -> Result<(), ChatError> {
        let reply = Reply::html(replies::help()).with_markup(replies::help_keyboard(&self.links));
        self.gateway.send_reply(command, reply).await?;
        Ok(())
    }
}
