// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | No | `{snake_name}_data` | Table rows come from |
//! | `owner` | No | `{camelName}` | Owner name scoping token sets |
//! | `processor` | No | `{owner}Manager` | Prefix of action URLs |
//! | `title` | No | renderer default | Page title |
//! | `page_type` | No | `form` | Page type |
//! | `action` | No | none | Page action `"Title:code"`, repeatable |

use darling::FromDeriveInput;
use syn::{Generics, Ident, Visibility};

/// Entity-level attributes parsed from `#[entity(...)]`.
///
/// ```rust,ignore
/// #[entity(
///     title = "联系人",
///     action = "Edit:edit",
///     action = "Delete:delete"
/// )]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), allow_unknown_fields)]
pub struct EntityAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility, propagated to generated items.
    pub vis: Visibility,

    /// Struct generics; must be empty.
    pub generics: Generics,

    /// Table override.
    #[darling(default)]
    pub table: Option<String>,

    /// Owner-name override.
    #[darling(default)]
    pub owner: Option<String>,

    /// Processor-name override.
    #[darling(default)]
    pub processor: Option<String>,

    /// Page title.
    #[darling(default)]
    pub title: Option<String>,

    /// Page type.
    #[darling(default)]
    pub page_type: Option<String>,

    /// Page actions in declaration order.
    #[darling(multiple, rename = "action")]
    pub actions: Vec<String>
}
