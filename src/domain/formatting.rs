//! Response formatting - Markdown-ish model output to Telegram HTML.
//!
//! Completion endpoints answer in a lightweight Markdown dialect. Telegram
//! renders a small HTML subset, so before an answer is delivered the markup
//! is rewritten:
//!
//! | Input        | Output               |
//! |--------------|----------------------|
//! | `**bold**`   | `<b>bold</b>`        |
//! | `*italic*`   | `<i>italic</i>`      |
//! | `` `code` `` | `<code>code</code>`  |
//! | `- item`     | `• item` (per line)  |
//!
//! Rules run in that order. Bold must run before italics, otherwise `**x**`
//! would be split into two empty italic spans. Spans never cross a line break.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").expect("code pattern"));
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- (.*?)$").expect("bullet pattern"));

/// Bullet glyph substituted for a leading `- ` list marker.
pub const BULLET_GLYPH: &str = "•";

/// Converts model markup into Telegram HTML.
///
/// Total and pure: text without markup is returned unchanged and empty input
/// yields an empty string. Nested or unbalanced markup is rewritten
/// left-to-right without any attempt at repair.
pub fn format_ai_response(text: &str) -> String {
    let text = BOLD.replace_all(text, "<b>${1}</b>");
    let text = ITALIC.replace_all(&text, "<i>${1}</i>");
    let text = INLINE_CODE.replace_all(&text, "<code>${1}</code>");
    let text = BULLET.replace_all(&text, format!("{BULLET_GLYPH} ${{1}}").as_str());
    text.into_owned()
}

/// Escapes the characters Telegram's HTML parse mode treats as markup.
///
/// Applied to untrusted text (model output, upstream error messages) before
/// it is embedded in an HTML reply.
pub fn escape_html(text: &str) -> String {
    teloxide::utils::html::escape(text)
}
