//! Telegram gateway - ChatGateway over the teloxide Bot API client.

use async_trait::async_trait;
use teloxide::payloads::{EditMessageTextSetters, SendMessageSetters};
use teloxide::requests::Requester;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode, ReplyParameters,
};
use teloxide::{Bot, RequestError};

use crate::domain::{MessageHandle, Reply, ReplyMarkup};
use crate::ports::{ChatError, ChatGateway};

/// Chat gateway backed by a teloxide `Bot`.
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    /// Wraps a bot client.
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

impl From<RequestError> for ChatError {
    fn from(err: RequestError) -> Self {
        ChatError::request(err.to_string())
    }
}

/// Converts link rows into a Telegram inline keyboard.
fn to_inline_keyboard(markup: &ReplyMarkup) -> Result<InlineKeyboardMarkup, ChatError> {
    let mut rows = Vec::with_capacity(markup.rows.len());
    for row in &markup.rows {
        let mut buttons = Vec::with_capacity(row.len());
        for button in row {
            let url = reqwest::Url::parse(&button.url)
                .map_err(|_| ChatError::InvalidButtonUrl(button.url.clone()))?;
            buttons.push(InlineKeyboardButton::url(button.label.clone(), url));
        }
        rows.push(buttons);
    }
    Ok(InlineKeyboardMarkup::new(rows))
}

fn chat_id(handle: MessageHandle) -> ChatId {
    ChatId(handle.chat_id)
}

fn message_id(handle: MessageHandle) -> MessageId {
    MessageId(handle.message_id)
}

#[async_trait]
impl ChatGateway for TelegramGateway {
    async fn send_reply(
        &self,
        reply_to: MessageHandle,
        reply: Reply,
    ) -> Result<MessageHandle, ChatError> {
        let request = self
            .bot
            .send_message(chat_id(reply_to), reply.html)
            .parse_mode(ParseMode::Html)
            .reply_parameters(ReplyParameters::new(message_id(reply_to)));

        let sent = match reply.markup {
            Some(ref markup) => request.reply_markup(to_inline_keyboard(markup)?).await?,
            None => request.await?,
        };

        Ok(MessageHandle::new(sent.chat.id.0, sent.id.0))
    }

    async fn edit_message(&self, message: MessageHandle, html: &str) -> Result<(), ChatError> {
        self.bot
            .edit_message_text(chat_id(message), message_id(message), html)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn delete_message(&self, message: MessageHandle) -> Result<(), ChatError> {
        self.bot
            .delete_message(chat_id(message), message_id(message))
            .await?;
        Ok(())
    }
}
