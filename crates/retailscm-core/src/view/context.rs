// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-request render context.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Response header naming the page component class.
pub const X_CLASS_HEADER: &str = "X-Class";

/// What the renderer knows about the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    user:    Option<String>,
    headers: BTreeMap<String, String>
}

impl RenderContext {
    /// Anonymous context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a logged-in user.
    #[must_use]
    pub fn for_user(user: impl Into<String>) -> Self {
        Self {
            user:    Some(user.into()),
            headers: BTreeMap::new()
        }
    }

    /// Logged-in user id.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Fail with [`Error::LoginRequired`] unless a user is logged in.
    ///
    /// # Errors
    ///
    /// [`Error::LoginRequired`] for anonymous contexts.
    pub fn need_login(&self) -> Result<()> {
        match self.user {
            Some(_) => Ok(()),
            None => Err(Error::LoginRequired)
        }
    }

    /// Set the `X-Class` response header, replacing any earlier value.
    pub fn force_response_x_class_header(&mut self, class: impl Into<String>) {
        self.headers.insert(X_CLASS_HEADER.to_owned(), class.into());
    }

    /// Response header value.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Every response header set so far.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
