//! Outcome of a single completion call.

use std::fmt;

/// What came back from the completion endpoint.
///
/// Every expected failure mode is a variant, so callers match explicitly
/// instead of relying on a catch-all error boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The first choice's message content.
    Answer(String),
    /// The endpoint reported a structured error; carries its message.
    ApiError(String),
    /// The body had neither usable choices nor an error object.
    MalformedResponse,
    /// The body named a choice or an error but lacked the field it needs.
    IncompleteResponse(String),
    /// The request never produced a readable body.
    TransportFailure(String),
}

impl CompletionOutcome {
    /// Creates an answer outcome.
    pub fn answer(content: impl Into<String>) -> Self {
        Self::Answer(content.into())
    }

    /// Creates an API error outcome.
    pub fn api_error(message: impl Into<String>) -> Self {
        Self::ApiError(message.into())
    }

    /// Creates a transport failure outcome.
    pub fn transport_failure(reason: impl Into<String>) -> Self {
        Self::TransportFailure(reason.into())
    }

    /// Creates an incomplete response outcome.
    pub fn incomplete(reason: impl Into<String>) -> Self {
        Self::IncompleteResponse(reason.into())
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Answer(_) => "answer",
            Self::ApiError(_) => "api_error",
            Self::MalformedResponse => "malformed_response",
            Self::IncompleteResponse(_) => "incomplete_response",
            Self::TransportFailure(_) => "transport_failure",
        }
    }
}

impl fmt::Display for CompletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answer(content) => write!(f, "answer ({} chars)", content.chars().count()),
            Self::ApiError(message) => write!(f, "api error: {}", message),
            Self::MalformedResponse => write!(f, "unexpected response format"),
            Self::IncompleteResponse(reason) => write!(f, "incomplete response: {}", reason),
            Self::TransportFailure(reason) => write!(f, "transport failure: {}", reason),
        }
    }
}
