// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (orchestrator)
//! │
//! ├── parse/      → Attribute parsing (EntityDef, FieldDef)
//! │
//! ├── schema.rs   → impl Entity + static EntitySchema
//! ├── mapper.rs   → impl RowMapper
//! └── tokens.rs   → {Name}Tokens alias + {Name}TokensExt helpers
//! ```
//!
//! # Generated Code
//!
//! | Item | Purpose |
//! |------|---------|
//! | `impl Entity for Contact` | Type and owner names, id/version access, field table |
//! | `impl RowMapper for Contact` | Column by column row mapping |
//! | `ContactTokens` | Token builder bound to the owner name |
//! | `ContactTokensExt` | `with_<relation>()` helpers |

mod mapper;
pub mod parse;
mod schema;
mod tokens;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => generate(&entity),
        Err(err) => err.write_errors().into()
    }
}

fn generate(entity: &EntityDef) -> TokenStream {
    let schema = schema::generate(entity);
    let mapper = mapper::generate(entity);
    let tokens = tokens::generate(entity);

    let expanded = quote! {
        #schema
        #mapper
        #tokens
    };

    expanded.into()
}
