// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage roles of a field.
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[id]` | primary key, `Option<String>` |
//! | `#[version]` | optimistic-concurrency counter, `i32` |
//! | `#[display]` | candidate title of this entity |
//! | `#[column(name = "...")]` | column the row mapper reads |
//! | `#[field(skip)]` | neither mapped nor rendered |

use syn::{Attribute, LitStr};

/// Storage configuration of one field.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    /// `#[id]` present.
    pub is_id:      bool,
    /// `#[version]` present.
    pub is_version: bool,
    /// `#[display]` present.
    pub is_display: bool,
    /// `#[field(skip)]` present.
    pub skip:       bool,
    /// Column override.
    pub column:     Option<String>
}

impl StorageConfig {
    /// Read `#[column(name = "...")]`.
    pub fn parse_column(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                self.column = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unknown column option, expected `name`"))
            }
        })
    }

    /// Read `#[field(skip)]`.
    pub fn parse_field(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                self.skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown field option, expected `skip`"))
            }
        })
    }
}
