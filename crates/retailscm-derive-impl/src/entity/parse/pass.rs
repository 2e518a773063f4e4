// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Pass-through attributes.
//!
//! `#[pass(key = "value", ...)]` entries are copied verbatim onto the
//! rendered page (struct level) or form field (field level). Several
//! `#[pass]` attributes accumulate in order.

use syn::{Attribute, LitStr};

/// Collect every `#[pass(...)]` entry.
///
/// # Errors
///
/// A key that is not a plain identifier or a value that is not a string
/// literal.
pub fn parse_pass_attrs(attrs: &[Attribute]) -> syn::Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("pass")) {
        attr.parse_nested_meta(|meta| {
            let key = meta
                .path
                .get_ident()
                .ok_or_else(|| meta.error("expected `key = \"value\"`"))?
                .to_string();
            let value: LitStr = meta.value()?.parse()?;
            pairs.push((key, value.value()));
            Ok(())
        })?;
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    #[test]
    fn collects_in_order() {
        let input: DeriveInput = syn::parse_quote! {
            #[pass(layout = "wide")]
            #[pass(theme = "dark", density = "compact")]
            struct Page {}
        };
        let pairs = parse_pass_attrs(&input.attrs).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("layout".to_string(), "wide".to_string()),
                ("theme".to_string(), "dark".to_string()),
                ("density".to_string(), "compact".to_string())
            ]
        );
    }

    #[test]
    fn rejects_non_string_value() {
        let input: DeriveInput = syn::parse_quote! {
            #[pass(width = 3)]
            struct Page {}
        };
        assert!(parse_pass_attrs(&input.attrs).is_err());
    }

    #[test]
    fn ignores_other_attributes() {
        let input: DeriveInput = syn::parse_quote! {
            #[derive(Debug)]
            struct Page {}
        };
        assert!(parse_pass_attrs(&input.attrs).unwrap().is_empty());
    }
}
