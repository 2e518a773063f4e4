// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for `#[derive(Entity)]`.
//!
//! # Structure
//!
//! ```text
//! parse/
//! ├── entity.rs      → EntityDef (struct-level attributes + fields)
//! │   └── attrs.rs   → #[entity(...)] via darling
//! ├── field.rs       → FieldDef (one struct field)
//! │   ├── storage.rs → #[id], #[version], #[display], #[column], #[field(skip)]
//! │   ├── relation.rs→ #[belongs_to(Target)], #[belongs_to(Target, constant)]
//! │   ├── token.rs   → #[token(groups(...))]
//! │   └── ui.rs      → #[ui(...)]
//! └── pass.rs        → #[pass(key = "value")] on structs and fields
//! ```

mod entity;
mod field;
mod pass;

pub use entity::EntityDef;
pub use field::{FieldDef, UiConfig};
