// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types shared by row mapping, token filtering and view rendering.
//!
//! Only a few of these ever reach a caller. Column decode failures are kept
//! in a [`MapReport`](crate::MapReport) and candidate provider failures are
//! logged and skipped; everything else propagates as [`Error`] up to the
//! controller layer, which turns it into an HTTP error response.

#[cfg(feature = "api")]
mod api;

use serde::{Deserialize, Serialize};

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A single user-facing message attached to a [`Error::Fatal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message text shown to the user.
    pub body: String
}

impl Message {
    /// Create a message from any string-like body.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into()
        }
    }
}

/// Errors raised by the entity layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A column was present but its value could not be decoded.
    #[error("column `{column}` could not be decoded: {reason}")]
    Column {
        /// Column name.
        column: String,
        /// Decoder message.
        reason: String
    },

    /// A candidate provider failed while resolving options for a field.
    #[error("candidate provider failed for field `{field}`: {reason}")]
    CandidateProvider {
        /// Field the provider was asked about.
        field:  String,
        /// Provider message.
        reason: String
    },

    /// The top-N candidate search against a referenced type failed.
    #[error("candidate search for `{target}` failed: {reason}")]
    CandidateSearch {
        /// Referenced entity type.
        target: String,
        /// Search layer message.
        reason: String
    },

    /// Entity data could not be serialized for a non-form page.
    #[error("failed to serialize `{type_name}`: {source}")]
    Serialize {
        /// Entity type name.
        type_name: &'static str,
        /// Underlying serializer error.
        #[source]
        source:    serde_json::Error
    },

    /// Render configuration could not be parsed.
    #[error("invalid render configuration: {0}")]
    Config(#[source] serde_json::Error),

    /// The request carries no logged-in user.
    #[error("login required")]
    LoginRequired,

    /// Unrecoverable failure with an optional headline and message list.
    #[error("{}", fatal_message(.message, .messages))]
    Fatal {
        /// Headline message.
        message:  Option<String>,
        /// Detail messages, rendered after the headline.
        messages: Vec<Message>
    }
}

impl Error {
    /// Column decode failure.
    pub fn column(column: impl Into<String>, reason: impl ToString) -> Self {
        Self::Column {
            column: column.into(),
            reason: reason.to_string()
        }
    }

    /// Candidate provider failure for `field`.
    pub fn candidate_provider(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::CandidateProvider {
            field:  field.into(),
            reason: reason.to_string()
        }
    }

    /// Candidate search failure for `target`.
    pub fn candidate_search(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::CandidateSearch {
            target: target.into(),
            reason: reason.to_string()
        }
    }

    /// Fatal error with a headline only.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message:  Some(message.into()),
            messages: Vec::new()
        }
    }

    /// Fatal error built from a list of messages.
    pub fn fatal_with(messages: Vec<Message>) -> Self {
        Self::Fatal {
            message: None,
            messages
        }
    }

    /// Append a detail message. No-op for non-fatal variants.
    pub fn add_message(&mut self, extra: Message) {
        if let Self::Fatal {
            messages, ..
        } = self
        {
            messages.push(extra);
        }
    }

    /// Detail messages carried by a fatal error.
    pub fn messages(&self) -> &[Message] {
        match self {
            Self::Fatal {
                messages, ..
            } => messages,
            _ => &[]
        }
    }

    /// Whether any detail messages are attached.
    pub fn has_errors(&self) -> bool {
        !self.messages().is_empty()
    }
}

/// Headline, then `:` and every message body concatenated.
fn fatal_message(message: &Option<String>, messages: &[Message]) -> String {
    if messages.is_empty() {
        return message.clone().unwrap_or_default();
    }

    let mut out = String::new();
    if let Some(message) = message {
        out.push_str(message);
        out.push(':');
    }
    for extra in messages {
        out.push_str(&extra.body);
    }
    out
}
