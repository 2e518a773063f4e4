// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[ui(...)]` parsing.
//!
//! | Option | Effect |
//! |--------|--------|
//! | `label = "..."` | field label (default: doc summary, then field name) |
//! | `group = "..."` | form group (default: `default`) |
//! | `ui_type = "..."` | explicit UI type |
//! | `ignore` | never rendered |
//! | `no_candidate` | no candidate list |
//! | `candidate_limit = N` | candidate cap |
//! | `action(key = "...", value = "Title:code")` | field action, repeatable |

use syn::{Attribute, LitInt, LitStr};

/// UI hints of one field.
#[derive(Debug, Clone, Default)]
pub struct UiConfig {
    /// Explicit label.
    pub label:           Option<String>,
    /// Form group.
    pub group:           Option<String>,
    /// Explicit UI type.
    pub ui_type:         Option<String>,
    /// Never rendered.
    pub ignore:          bool,
    /// No candidate list.
    pub no_candidate:    bool,
    /// Candidate cap.
    pub candidate_limit: Option<usize>,
    /// `(key, action)` pairs.
    pub actions:         Vec<(String, String)>
}

impl UiConfig {
    /// Merge one `#[ui(...)]` attribute into this config.
    pub fn parse_attr(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("label") {
                self.label = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("group") {
                self.group = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("ui_type") {
                self.ui_type = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("ignore") {
                self.ignore = true;
            } else if meta.path.is_ident("no_candidate") {
                self.no_candidate = true;
            } else if meta.path.is_ident("candidate_limit") {
                let limit: LitInt = meta.value()?.parse()?;
                self.candidate_limit = Some(limit.base10_parse()?);
            } else if meta.path.is_ident("action") {
                let mut key = None;
                let mut value = None;
                meta.parse_nested_meta(|inner| {
                    if inner.path.is_ident("key") {
                        key = Some(inner.value()?.parse::<LitStr>()?.value());
                        Ok(())
                    } else if inner.path.is_ident("value") {
                        value = Some(inner.value()?.parse::<LitStr>()?.value());
                        Ok(())
                    } else {
                        Err(inner.error("unknown action option, expected `key` or `value`"))
                    }
                })?;
                match (key, value) {
                    (Some(key), Some(value)) => self.actions.push((key, value)),
                    _ => return Err(meta.error("action requires both `key` and `value`"))
                }
            } else {
                return Err(meta.error("unknown ui option"));
            }
            Ok(())
        })
    }
}
