// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Literal helpers for static schema tables.

use proc_macro2::TokenStream;
use quote::quote;

/// `Some("..")` or `None`.
pub fn opt_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote! { ::core::option::Option::Some(#value) },
        None => quote! { ::core::option::Option::None }
    }
}

/// `Some(n)` or `None`.
pub fn opt_usize(value: Option<usize>) -> TokenStream {
    match value {
        Some(value) => quote! { ::core::option::Option::Some(#value) },
        None => quote! { ::core::option::Option::None }
    }
}

/// `&[("k", "v"), ...]`.
pub fn str_pairs(pairs: &[(String, String)]) -> TokenStream {
    let items = pairs.iter().map(|(key, value)| quote! { (#key, #value) });
    quote! { &[#(#items),*] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_string() {
        assert_eq!(
            opt_str(Some("label")).to_string(),
            quote! { ::core::option::Option::Some("label") }.to_string()
        );
        assert!(opt_str(None).to_string().contains("None"));
    }

    #[test]
    fn optional_limit() {
        assert!(opt_usize(Some(5)).to_string().contains("5usize"));
    }

    #[test]
    fn pairs_render_as_slice() {
        let pairs = vec![("layout".to_string(), "wide".to_string())];
        assert_eq!(
            str_pairs(&pairs).to_string(),
            quote! { &[("layout", "wide")] }.to_string()
        );
        assert_eq!(str_pairs(&[]).to_string(), quote! { &[] }.to_string());
    }
}
