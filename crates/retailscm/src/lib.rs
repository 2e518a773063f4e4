// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # retailscm
//!
//! Entity layer of the retail supply-chain admin console. Re-exports:
//! - [`Entity`] derive macro from `retailscm-derive-impl`
//! - All types from `retailscm-core` ([`RowMapper`], [`Tokens`],
//!   [`ViewRender`], [`Error`])
//!
//! and defines the console's record types in [`model`] with their
//! processors in [`processor`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use retailscm::{MapRow, RenderContext, RowMapper, ViewRender};
//! use retailscm::model::{StockCountIssueTrack, StockCountIssueTrackTokens, StockCountIssueTrackTokensExt};
//!
//! let row = MapRow::new()
//!     .with("id", "SCIT000001")
//!     .with("title", "Missing labels")
//!     .with("stock_count", "GSSC000001")
//!     .with("version", 3);
//! let track = StockCountIssueTrack::map_row(&row);
//! assert!(track.stock_count.as_ref().is_some_and(|count| count.is_stub()));
//!
//! let tokens = StockCountIssueTrackTokens::start().with_stock_count().done();
//!
//! let mut ctx = RenderContext::for_user("admin");
//! let page = ViewRender::<StockCountIssueTrack>::default().render_as_form(&mut ctx, &track)?;
//! ```
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `postgres` | `Row` for `sqlx::postgres::PgRow` |
//! | `api` | `From<Error> for masterror::AppError` |

pub mod model;
pub mod processor;

pub use retailscm_core::*;
pub use retailscm_derive_impl::Entity;
