// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Entity)]` for the retail supply-chain admin console.
//!
//! Use it through the `retailscm` facade, which re-exports both this macro
//! and the `retailscm_core` runtime the generated code targets.
//!
//! # Attribute Quick Reference
//!
//! ## Entity-Level
//!
//! ```rust,ignore
//! #[derive(Default, Entity)]
//! #[entity(
//!     table = "stock_count_issue_track_data", // Optional: default `{snake}_data`
//!     owner = "stockCountIssueTrack",         // Optional: default camelCase name
//!     processor = "stockCountIssueTrackManager", // Optional: default `{owner}Manager`
//!     title = "盘点问题",                      // Optional: page title
//!     page_type = "form",                     // Optional: page type
//!     action = "Edit:edit"                    // Optional, repeatable: page action
//! )]
//! #[has_many(IssuePhoto)]                     // list token `issuePhotoList`
//! #[pass(layout = "wide")]                    // copied onto the page
//! pub struct StockCountIssueTrack { /* ... */ }
//! ```
//!
//! ## Field-Level
//!
//! ```rust,ignore
//! pub struct StockCountIssueTrack {
//!     #[id]                                   // Required: Option<String>
//!     pub id: Option<String>,
//!
//!     /// Issue title.                        // default label "Issue title"
//!     #[display]                              // candidate title
//!     pub title: Option<String>,
//!
//!     #[column(name = "count_time")]          // column override
//!     pub count_time: Option<NaiveDateTime>,
//!
//!     #[belongs_to(GoodsShelfStockCount)]     // stub reference + object token
//!     #[token(groups("default", "audit"))]    // token view groups
//!     #[ui(group = "relations", candidate_limit = 10)]
//!     pub stock_count: Option<GoodsShelfStockCount>,
//!
//!     #[belongs_to(StockCountStatus, constant)] // candidates from the code list
//!     pub status: Option<StockCountStatus>,
//!
//!     #[ui(action(key = "resetUrl", value = "Reset:reset"))]
//!     #[pass(placeholder = "...")]            // copied onto the form field
//!     pub summary: Option<String>,
//!
//!     #[field(skip)]                          // not mapped, not rendered
//!     pub cache: Vec<u8>,
//!
//!     #[version]                              // Required: i32
//!     #[ui(ignore)]
//!     pub version: i32,
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Generated Item | Description |
//! |----------------|-------------|
//! | `impl Entity for T` | type/owner names, id and version access, static `EntitySchema` |
//! | `impl RowMapper for T` | one `map_scalar`/`map_reference` call per field |
//! | `TTokens` | `Tokens<T>` alias |
//! | `TTokensExt` | `with_<relation>()` and `with_<relation>_tokens()` helpers |
//!
//! # Compile-Time Checks
//!
//! - exactly one `#[id]` field, of type `Option<_>`
//! - exactly one `#[version]` field
//! - at most one `#[display]` field
//! - `#[belongs_to]` fields are `Option<_>`
//! - `#[token]` only on `#[belongs_to]` fields
//! - no generic parameters

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod entity;
mod utils;

use proc_macro::TokenStream;

/// Derive the entity layer of one admin-console record.
///
/// Generates the `Entity` implementation with its static schema, the
/// `RowMapper` implementation and the token builder helpers. The struct
/// must also implement `Default`.
///
/// # Entity Attributes
///
/// | Attribute | Required | Default | Description |
/// |-----------|----------|---------|-------------|
/// | `table` | No | `{snake_name}_data` | Table rows come from |
/// | `owner` | No | `{camelName}` | Owner name scoping token sets |
/// | `processor` | No | `{owner}Manager` | Prefix of action URLs |
/// | `title` | No | renderer default | Page title |
/// | `page_type` | No | `form` | Page type |
/// | `action` | No | none | Page action `"Title:code"`, repeatable |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[id]` | Primary key, `Option<String>` |
/// | `#[version]` | Optimistic-concurrency counter, `i32` |
/// | `#[display]` | Display name used as candidate title |
/// | `#[column(name = "...")]` | Column override; default is the snake_case field name |
/// | `#[field(skip)]` | Not mapped, not rendered |
/// | `#[belongs_to(T)]` | Foreign key resolved into a stub `T`; declares an object token |
/// | `#[belongs_to(T, constant)]` | Reference to a `ConstantCodes` list |
/// | `#[token(groups("a", "b"))]` | View groups of the relation token |
/// | `#[ui(...)]` | `label`, `group`, `ui_type`, `ignore`, `no_candidate`, `candidate_limit`, `action(key, value)` |
/// | `#[pass(key = "value")]` | Copied verbatim onto the rendered field or page |
///
/// A field without a `#[ui(label)]` is labelled with the first line of its
/// doc comment.
///
/// # Example
///
/// ```rust,ignore
/// use retailscm::Entity;
///
/// #[derive(Debug, Default, Entity)]
/// pub struct PotentialCustomerContactPerson {
///     #[id]
///     pub id: Option<String>,
///
///     /// Name.
///     #[display]
///     pub name: Option<String>,
///
///     pub mobile: Option<String>,
///
///     #[belongs_to(PotentialCustomer)]
///     pub potential_customer: Option<PotentialCustomer>,
///
///     #[version]
///     pub version: i32,
/// }
///
/// let tokens = PotentialCustomerContactPersonTokens::start()
///     .with_potential_customer()
///     .done();
/// ```
#[proc_macro_derive(
    Entity,
    attributes(entity, id, version, display, column, field, belongs_to, has_many, token, ui, pass)
)]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
