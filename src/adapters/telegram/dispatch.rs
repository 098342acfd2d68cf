//! Command parsing and routing for the teloxide dispatcher.
//!
//! Incoming messages are filtered down to the bot's commands and routed to
//! the matching application handler. Endpoints never fail: handler errors
//! are logged here and the dispatcher moves on.

use std::sync::Arc;

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::requests::ResponseResult;
use teloxide::types::{Message, Update};
use teloxide::utils::command::BotCommands;
use teloxide::RequestError;

use crate::application::{AskAiHandler, HelpHandler, StartHandler};
use crate::domain::{Invocation, MessageHandle, ReferencedMessage};
use crate::ports::{ChatGateway, CompletionProvider};

/// Commands understood by the bot.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "Welcome")]
    Start,
    #[command(description = "Bot info")]
    Help,
    #[command(description = "Ask AI")]
    Ai(String),
}

impl Command {
    /// Command name for logs; never includes user text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Ai(_) => "ai",
        }
    }
}

/// Handlers shared by every dispatcher task.
pub struct BotServices<P, G>
where
    P: CompletionProvider,
    G: ChatGateway,
{
    pub start: StartHandler<G>,
    pub help: HelpHandler<G>,
    pub ask_ai: AskAiHandler<P, G>,
}

/// Builds the dispatcher's handler tree.
pub fn schema<P, G>() -> UpdateHandler<RequestError>
where
    P: CompletionProvider + 'static,
    G: ChatGateway + 'static,
{
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handle_command::<P, G>)
}

async fn handle_command<P, G>(
    msg: Message,
    command: Command,
    services: Arc<BotServices<P, G>>,
) -> ResponseResult<()>
where
    P: CompletionProvider + 'static,
    G: ChatGateway + 'static,
{
    let handle = message_handle(&msg);
    tracing::info!(chat_id = handle.chat_id, command = command.name(), "Command received");

    match command {
        Command::Start => {
            if let Err(e) = services.start.handle(handle).await {
                tracing::warn!(chat_id = handle.chat_id, "Failed to answer /start: {}", e);
            }
        }
        Command::Help => {
            if let Err(e) = services.help.handle(handle).await {
                tracing::warn!(chat_id = handle.chat_id, "Failed to answer /help: {}", e);
            }
        }
        Command::Ai(arguments) => {
            let result = services
                .ask_ai
                .handle(invocation_from_message(&msg, arguments))
                .await;
            tracing::debug!(chat_id = handle.chat_id, result = ?result, "/ai handled");
        }
    }

    Ok(())
}

fn message_handle(msg: &Message) -> MessageHandle {
    MessageHandle::new(msg.chat.id.0, msg.id.0)
}

/// Builds the handler input from a Telegram message and its command arguments.
pub fn invocation_from_message(msg: &Message, arguments: String) -> Invocation {
    let invocation = Invocation::new(message_handle(msg), arguments);
    match msg.reply_to_message() {
        Some(referenced) => invocation.replying_to(ReferencedMessage::new(
            message_handle(referenced),
            referenced.text().map(str::to_string),
        )),
        None => invocation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ai_with_arguments() {
        assert_eq!(
            Command::parse("/ai what is rust", "ai_bot").unwrap(),
            Command::Ai("what is rust".to_string())
        );
    }

    #[test]
    fn parses_ai_addressed_to_bot() {
        assert_eq!(
            Command::parse("/ai@ai_bot hello", "ai_bot").unwrap(),
            Command::Ai("hello".to_string())
        );
    }

    #[test]
    fn parses_start_and_help() {
        assert_eq!(Command::parse("/start", "ai_bot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/help", "ai_bot").unwrap(), Command::Help);
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(Command::parse("/unknown", "ai_bot").is_err());
    }

    #[test]
    fn descriptions_list_every_command() {
        let descriptions = Command::descriptions().to_string();
        for command in ["/start", "/help", "/ai"] {
            assert!(descriptions.contains(command), "missing {command}");
        }
    }

    #[test]
    fn command_name_hides_arguments() {
        assert_eq!(Command::Ai("secret question".to_string()).name(), "ai");
    }
}
