//! Query extraction for the `/ai` command.
//!
//! A query comes either from the command arguments or, when the command has
//! none, from the text of the message the command replies to. Arguments
//! always win; the referenced text is never merged in.

use super::chat::MessageHandle;

/// Inbound command context handed to a handler by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The command message itself.
    pub message: MessageHandle,
    /// Raw text following the command name.
    pub arguments: String,
    /// Message the command replies to, if any.
    pub reply_to: Option<ReferencedMessage>,
}

impl Invocation {
    /// Creates an invocation without a reply reference.
    pub fn new(message: MessageHandle, arguments: impl Into<String>) -> Self {
        Self {
            message,
            arguments: arguments.into(),
            reply_to: None,
        }
    }

    /// Sets the message this invocation replies to.
    pub fn replying_to(mut self, referenced: ReferencedMessage) -> Self {
        self.reply_to = Some(referenced);
        self
    }
}

/// A message referenced by a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencedMessage {
    pub handle: MessageHandle,
    /// Text body; `None` for media without a caption, stickers and the like.
    pub text: Option<String>,
}

impl ReferencedMessage {
    pub fn new(handle: MessageHandle, text: Option<String>) -> Self {
        Self { handle, text }
    }
}

/// Where the query text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    /// Command arguments.
    Arguments,
    /// Text of the referenced message.
    ReferencedMessage(MessageHandle),
}

/// A validated query ready to be sent to the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    source: QuerySource,
}

impl Query {
    /// Extracts the query from an invocation.
    ///
    /// Arguments are split on whitespace and re-joined with single spaces.
    /// Returns `None` when there are no arguments and no referenced message
    /// with text, in which case the caller should answer with usage guidance.
    pub fn from_invocation(invocation: &Invocation) -> Option<Self> {
        let arguments = invocation
            .arguments
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if !arguments.is_empty() {
            return Some(Self {
                text: arguments,
                source: QuerySource::Arguments,
            });
        }

        let referenced = invocation.reply_to.as_ref()?;
        let text = referenced.text.as_deref().filter(|t| !t.trim().is_empty())?;

        Some(Self {
            text: text.to_string(),
            source: QuerySource::ReferencedMessage(referenced.handle),
        })
    }

    /// The query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the text came from.
    pub fn source(&self) -> QuerySource {
        self.source
    }

    /// Message the answer should reply to.
    ///
    /// The referenced message when it supplied the query, otherwise the
    /// command message.
    pub fn answer_target(&self, command: MessageHandle) -> MessageHandle {
        match self.source {
            QuerySource::Arguments => command,
            QuerySource::ReferencedMessage(handle) => handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> MessageHandle {
        MessageHandle::new(7, 100)
    }

    fn referenced(text: Option<&str>) -> ReferencedMessage {
        ReferencedMessage::new(MessageHandle::new(7, 90), text.map(str::to_string))
    }

    #[test]
    fn no_arguments_and_no_reply_yields_none() {
        let invocation = Invocation::new(command(), "");
        assert_eq!(Query::from_invocation(&invocation), None);
    }

    #[test]
    fn whitespace_arguments_count_as_none() {
        let invocation = Invocation::new(command(), "   \n ");
        assert_eq!(Query::from_invocation(&invocation), None);
    }

    #[test]
    fn arguments_are_joined_with_single_spaces() {
        let invocation = Invocation::new(command(), "  best   ai\tmodel ");
        let query = Query::from_invocation(&invocation).unwrap();

        assert_eq!(query.text(), "best ai model");
        assert_eq!(query.source(), QuerySource::Arguments);
    }

    #[test]
    fn referenced_text_is_used_without_arguments() {
        let invocation = Invocation::new(command(), "").replying_to(referenced(Some("what is rust")));
        let query = Query::from_invocation(&invocation).unwrap();

        assert_eq!(query.text(), "what is rust");
        assert_eq!(
            query.source(),
            QuerySource::ReferencedMessage(MessageHandle::new(7, 90))
        );
    }

    #[test]
    fn arguments_win_over_referenced_text() {
        let invocation =
            Invocation::new(command(), "explicit").replying_to(referenced(Some("ignored")));
        let query = Query::from_invocation(&invocation).unwrap();

        assert_eq!(query.text(), "explicit");
        assert_eq!(query.source(), QuerySource::Arguments);
    }

    #[test]
    fn referenced_message_without_text_yields_none() {
        let invocation = Invocation::new(command(), "").replying_to(referenced(None));
        assert_eq!(Query::from_invocation(&invocation), None);
    }

    #[test]
    fn answer_target_follows_source() {
        let from_args = Query::from_invocation(&Invocation::new(command(), "hi")).unwrap();
        assert_eq!(from_args.answer_target(command()), command());

        let from_reply = Query::from_invocation(
            &Invocation::new(command(), "").replying_to(referenced(Some("hi"))),
        )
        .unwrap();
        assert_eq!(from_reply.answer_target(command()), MessageHandle::new(7, 90));
    }
}
