// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for the retail supply-chain admin console.
//!
//! This crate holds the runtime half of the entity layer. Code generated by
//! `#[derive(Entity)]` targets it, and it can also be used standalone with
//! hand-written [`Entity`] implementations.
//!
//! # Overview
//!
//! - [`Entity`] and [`EntitySchema`]: a record and its compile-time field
//!   table
//! - [`Row`] and [`RowMapper`]: result row to entity, foreign keys resolved
//!   into stub references
//! - [`Tokens`] and [`TokenSet`]: which relations to load for a request
//! - [`ViewRender`]: entity to form page
//! - [`Resolved`]: value, absent, or failed
//! - [`prelude`]: convenient re-exports
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `postgres` | implements [`Row`] for `sqlx::postgres::PgRow` |
//! | `api` | converts [`Error`] into `masterror::AppError` |
//!
//! # Logging
//!
//! The crate emits `tracing` events and never installs a subscriber.
//! Swallowed column failures are logged at `debug`, swallowed candidate
//! provider failures at `warn`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod prelude;
pub mod resolved;
pub mod row;
pub mod schema;
pub mod tokens;
pub mod value;
pub mod view;

pub use config::RenderConfig;
pub use error::{Error, Message, Result};
pub use resolved::Resolved;
pub use row::{ColumnOutcome, ColumnValue, MapReport, MapRow, Row, RowMapper, Scalar};
pub use schema::{
    Entity, EntitySchema, FieldAction, FieldDescriptor, PageHints, Reference, UNKNOWN_VERSION,
    UiHints
};
pub use tokens::{TokenDecl, TokenKind, TokenSet, Tokens};
pub use value::{ConstantCodes, FieldKind, FieldValue, KeyValuePair};
pub use view::{
    Action, ActionUrlBuilder, Candidate, CandidateItem, CandidateProvider, CandidateSearch,
    FieldGroup, FormField, NoCandidates, NoSearch, Page, ProcessorUrls, RenderContext, View,
    ViewRender
};

