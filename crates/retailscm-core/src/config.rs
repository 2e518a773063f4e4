// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Renderer configuration.
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! | Key | Default |
//! |-----|---------|
//! | `candidateLimit` | `20` |
//! | `defaultPageTitle` | `默认页面` |
//! | `defaultGroup` | `default` |
//! | `formClass` | `com.terapico.caf.viewcomponent.GenericFormPage` |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Candidate cap when a field declares none.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 20;

/// Page title when an entity declares none.
pub const DEFAULT_PAGE_TITLE: &str = "默认页面";

/// Group a field lands in when it declares none.
pub const DEFAULT_GROUP: &str = "default";

/// `X-Class` header value announcing a generic form page.
pub const FORM_PAGE_CLASS: &str = "com.terapico.caf.viewcomponent.GenericFormPage";

/// Settings of a [`ViewRender`](crate::view::ViewRender).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Candidate cap when a field declares none.
    pub candidate_limit:    usize,
    /// Page title when an entity declares none.
    pub default_page_title: String,
    /// Group a field lands in when it declares none.
    pub default_group:      String,
    /// Class announced in the response `X-Class` header.
    pub form_class:         String
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            candidate_limit:    DEFAULT_CANDIDATE_LIMIT,
            default_page_title: DEFAULT_PAGE_TITLE.to_owned(),
            default_group:      DEFAULT_GROUP.to_owned(),
            form_class:         FORM_PAGE_CLASS.to_owned()
        }
    }
}

impl RenderConfig {
    /// Parse from a JSON value.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when a key has the wrong type.
    pub fn from_json(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::Config)
    }

    /// Parse from JSON text.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] on malformed JSON or a key of the wrong type.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::Config)
    }
}
