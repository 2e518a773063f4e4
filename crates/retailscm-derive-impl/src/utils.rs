// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`docs`]: Doc comment extraction, used for default field labels
//! - [`lit`]: Optional values and string pairs as generated literals

pub mod docs;
pub mod lit;
