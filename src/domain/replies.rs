//! Fixed bot replies.
//!
//! All texts are Telegram HTML. Decorations use premium custom emoji, which
//! Telegram renders from `<tg-emoji>` tags; clients without access to the
//! custom set fall back to the plain glyph inside the tag.

use super::chat::{LinkButton, ReplyMarkup};
use super::formatting::escape_html;

/// Premium emoji used in bot replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumEmoji {
    Excited,
    Eyes,
    Running,
    Hurray,
    QuestionMark,
    Nice,
    Star,
    Cool,
    Ghost,
}

impl PremiumEmoji {
    /// Telegram custom emoji ID.
    pub fn id(self) -> &'static str {
        match self {
            Self::Excited => "5850583766048706194",
            Self::Eyes => "5877296091807878935",
            Self::Running => "5989913411369045839",
            Self::Hurray => "5987781295114030903",
            Self::QuestionMark => "5956290878367599999",
            Self::Nice => "5848061692533018037",
            Self::Star => "5850194835285217190",
            Self::Cool => "5987736155007750325",
            Self::Ghost => "5987594979432731998",
        }
    }

    /// Fallback glyph shown when the custom emoji is unavailable.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Excited => "🤩",
            Self::Eyes => "👀",
            Self::Running => "🏃",
            Self::Hurray => "🎉",
            Self::QuestionMark => "❕",
            Self::Nice => "😍",
            Self::Star => "✨",
            Self::Cool => "😎",
            Self::Ghost => "👻",
        }
    }

    /// `<tg-emoji>` markup for this emoji.
    pub fn markup(self) -> String {
        format!(r#"<tg-emoji emoji-id="{}">{}</tg-emoji>"#, self.id(), self.glyph())
    }
}

/// Greeting sent first on `/start`.
pub fn welcome() -> String {
    format!("{} Welcome!", PremiumEmoji::Excited.markup())
}

/// Usage hint sent after the greeting on `/start`.
pub fn usage_hint() -> String {
    format!(
        "{} Use <code>/ai &lt;message&gt;</code> to chat with me",
        PremiumEmoji::Eyes.markup()
    )
}

/// Guidance for `/ai` without a query.
pub fn usage_guide() -> String {
    format!(
        "{} <b>Ex:</b> <code>/ai best ai model</code>",
        PremiumEmoji::QuestionMark.markup()
    )
}

/// Placeholder shown while the completion call is in flight.
pub fn searching() -> String {
    format!("{} Searching...", PremiumEmoji::Running.markup())
}

/// Placeholder text once an answer has arrived.
pub fn found() -> String {
    format!("{} Found result!", PremiumEmoji::Hurray.markup())
}

/// Placeholder text for an error reported by the endpoint.
pub fn api_error(message: &str) -> String {
    format!(
        "{} <b>API Error:</b> {}",
        PremiumEmoji::Ghost.markup(),
        escape_html(message)
    )
}

/// Placeholder text for a body with neither choices nor an error.
pub fn unexpected_format() -> String {
    format!(
        "{} <b>Unexpected API response format.</b>",
        PremiumEmoji::Ghost.markup()
    )
}

/// Placeholder text for transport and delivery failures.
pub fn api_failure() -> String {
    format!(
        "{} <b>Sorry, something went wrong with the AI API.</b>",
        PremiumEmoji::Ghost.markup()
    )
}

/// Links shown as buttons under `/help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLinks {
    pub developer: String,
    pub repository: String,
    pub provider: String,
}

/// Body of the `/help` reply.
pub fn help() -> String {
    format!(
        "{nice} <b>Telegram AI Bot</b>\n\n\
         {star} <b>Commands:</b>\n\
         /start - Welcome\n\
         /ai &lt;message&gt; - Ask AI\n\
         /help - Bot info\n\n\
         {cool} <b>Powered by -</b> @unseen_crafts",
        nice = PremiumEmoji::Nice.markup(),
        star = PremiumEmoji::Star.markup(),
        cool = PremiumEmoji::Cool.markup(),
    )
}

/// Inline keyboard attached to the `/help` reply.
pub fn help_keyboard(links: &HelpLinks) -> ReplyMarkup {
    ReplyMarkup::new()
        .with_row(vec![
            LinkButton::new("👨🏻‍💻 Developer", &links.developer),
            LinkButton::new("👻 GitHub Repo", &links.repository),
        ])
        .with_row(vec![LinkButton::new("🤖 Hyperbolic", &links.provider)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_markup_carries_id_and_glyph() {
        assert_eq!(
            PremiumEmoji::Ghost.markup(),
            r#"<tg-emoji emoji-id="5987594979432731998">👻</tg-emoji>"#
        );
    }

    #[test]
    fn api_error_escapes_upstream_message() {
        let text = api_error("limit <exceeded> & retry");
        assert!(text.ends_with("<b>API Error:</b> limit &lt;exceeded&gt; &amp; retry"));
    }

    #[test]
    fn help_lists_every_command() {
        let text = help();
        for command in ["/start", "/ai", "/help"] {
            assert!(text.contains(command), "missing {command}");
        }
    }

    #[test]
    fn help_keyboard_has_two_rows() {
        let links = HelpLinks {
            developer: "https://t.me/dev".to_string(),
            repository: "https://github.com/example/bot".to_string(),
            provider: "https://example.ai".to_string(),
        };
        let keyboard = help_keyboard(&links);

        assert_eq!(keyboard.rows.len(), 2);
        assert_eq!(keyboard.rows[0].len(), 2);
        assert_eq!(keyboard.rows[1][0].url, "https://example.ai");
    }
}
