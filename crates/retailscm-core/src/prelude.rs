// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use retailscm_core::prelude::*;
//! ```

pub use crate::{
    CandidateItem, CandidateProvider, CandidateSearch, ConstantCodes, Entity, Error, MapRow,
    Page, RenderConfig, RenderContext, Resolved, Result, Row, RowMapper, TokenSet, Tokens, View,
    ViewRender
};
