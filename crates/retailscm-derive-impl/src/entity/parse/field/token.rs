// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[token(groups(...))]` parsing.

use syn::{Attribute, LitStr, Token, punctuated::Punctuated};

/// View groups a relation token applies to. Empty means the default group.
#[derive(Debug, Clone, Default)]
pub struct TokenConfig {
    /// Declared groups.
    pub groups: Vec<String>
}

impl TokenConfig {
    /// Read `#[token(groups("default", "audit"))]`.
    pub fn parse_attr(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("groups") {
                let content;
                syn::parenthesized!(content in meta.input);
                let groups = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                self.groups.extend(groups.iter().map(LitStr::value));
                Ok(())
            } else {
                Err(meta.error("unknown token option, expected `groups`"))
            }
        })
    }
}
