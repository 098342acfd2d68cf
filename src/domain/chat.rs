//! Chat primitives shared by handlers and gateways.
//!
//! These types describe outgoing messages independently of the Telegram
//! client library, so handlers can be exercised against an in-memory gateway.

use std::fmt;

/// Identity of a message in a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle {
    /// Chat the message lives in.
    pub chat_id: i64,
    /// Message ID, unique within the chat.
    pub message_id: i32,
}

impl MessageHandle {
    /// Creates a new handle.
    pub fn new(chat_id: i64, message_id: i32) -> Self {
        Self {
            chat_id,
            message_id,
        }
    }
}

impl fmt::Display for MessageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chat_id, self.message_id)
    }
}

/// An outgoing HTML message, optionally with an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message body in Telegram HTML.
    pub html: String,
    /// Inline keyboard attached below the message.
    pub markup: Option<ReplyMarkup>,
}

impl Reply {
    /// Creates a reply with an HTML body and no keyboard.
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            markup: None,
        }
    }

    /// Attaches an inline keyboard.
    pub fn with_markup(mut self, markup: ReplyMarkup) -> Self {
        self.markup = Some(markup);
        self
    }
}

/// Inline keyboard made of link buttons, laid out row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyMarkup {
    pub rows: Vec<Vec<LinkButton>>,
}

impl ReplyMarkup {
    /// Creates an empty keyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row of buttons.
    pub fn with_row(mut self, row: Vec<LinkButton>) -> Self {
        self.rows.push(row);
        self
    }
}

/// A keyboard button that opens a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub label: String,
    pub url: String,
}

impl LinkButton {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_displays_chat_and_message() {
        assert_eq!(MessageHandle::new(-100, 42).to_string(), "-100/42");
    }

    #[test]
    fn reply_builder_attaches_markup() {
        let markup = ReplyMarkup::new()
            .with_row(vec![LinkButton::new("Docs", "https://example.com")]);
        let reply = Reply::html("<b>hi</b>").with_markup(markup.clone());

        assert_eq!(reply.html, "<b>hi</b>");
        assert_eq!(reply.markup, Some(markup));
    }
}
