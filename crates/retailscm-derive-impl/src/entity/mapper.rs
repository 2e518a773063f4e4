// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `RowMapper` implementation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::retailscm_core::RowMapper for Contact {
//!     fn map_row_into(&mut self, row: &dyn Row, report: &mut MapReport) {
//!         ::retailscm_core::row::map_scalar(row, "id", &mut self.id, report);
//!         ::retailscm_core::row::map_reference(
//!             row, "potential_customer", &mut self.potential_customer, report
//!         );
//!         ::retailscm_core::row::map_scalar(row, "version", &mut self.version, report);
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{EntityDef, FieldDef};

/// Generates the `RowMapper` implementation.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let name = entity.name();
    let columns = entity.fields.iter().map(map_column);

    quote! {
        impl ::retailscm_core::RowMapper for #name {
            fn map_row_into(
                &mut self,
                row: &dyn ::retailscm_core::Row,
                report: &mut ::retailscm_core::MapReport,
            ) {
                #(#columns)*
            }
        }
    }
}

fn map_column(field: &FieldDef) -> TokenStream {
    let ident = field.name();
    let column = field.column();

    if field.relation().is_some() {
        quote! { ::retailscm_core::row::map_reference(row, #column, &mut self.#ident, report); }
    } else {
        quote! { ::retailscm_core::row::map_scalar(row, #column, &mut self.#ident, report); }
    }
}
