// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[belongs_to(...)]` parsing.

use syn::{Attribute, Ident, Token, parse::ParseStream};

/// Reference from a field to another entity.
///
/// ```rust,ignore
/// #[belongs_to(PotentialCustomer)]
/// pub potential_customer: Option<PotentialCustomer>,
///
/// #[belongs_to(StockCountStatus, constant)]
/// pub status: Option<StockCountStatus>,
/// ```
#[derive(Debug, Clone)]
pub struct RelationDef {
    /// Referenced entity type.
    pub target:   Ident,
    /// Referenced type is a constant code list.
    pub constant: bool
}

impl RelationDef {
    /// Parse `#[belongs_to(Target)]` or `#[belongs_to(Target, constant)]`.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        attr.parse_args_with(|input: ParseStream<'_>| {
            let target: Ident = input.parse()?;
            let mut constant = false;
            while input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
                if input.is_empty() {
                    break;
                }
                let flag: Ident = input.parse()?;
                if flag == "constant" {
                    constant = true;
                } else {
                    return Err(syn::Error::new(
                        flag.span(),
                        "unknown belongs_to option, expected `constant`"
                    ));
                }
            }
            Ok(Self {
                target,
                constant
            })
        })
    }
}
