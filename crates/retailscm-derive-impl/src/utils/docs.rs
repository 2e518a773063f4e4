// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Doc comment extraction.
//!
//! A field without `#[ui(label = "...")]` is labelled with the first line of
//! its doc comment:
//!
//! ```rust,ignore
//! /// Mobile phone.
//! pub mobile: Option<String>,   // label "Mobile phone"
//! ```

use syn::Attribute;

/// Trimmed `#[doc = "..."]` lines in order.
fn doc_lines(attrs: &[Attribute]) -> impl Iterator<Item = String> + '_ {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value().trim().to_string());
            }
            None
        })
}

/// First non-empty doc line.
pub fn extract_doc_summary(attrs: &[Attribute]) -> Option<String> {
    doc_lines(attrs).find(|line| !line.is_empty())
}

/// Doc summary as a form label: trailing sentence punctuation removed.
pub fn doc_label(attrs: &[Attribute]) -> Option<String> {
    extract_doc_summary(attrs)
        .map(|summary| summary.trim_end_matches(['.', '。']).trim_end().to_string())
        .filter(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_attrs(input: &str) -> Vec<Attribute> {
        let item: syn::ItemStruct = syn::parse_str(input).unwrap();
        item.attrs
    }

    #[test]
    fn summary_is_first_line() {
        let attrs = parse_attrs(
            r#"
            /// Mobile phone.
            /// Used for contact.
            struct Foo;
        "#
        );
        assert_eq!(extract_doc_summary(&attrs), Some("Mobile phone.".to_string()));
    }

    #[test]
    fn summary_skips_empty_first_line() {
        let attrs = parse_attrs(
            r#"
            ///
            /// Actual summary.
            struct Foo;
        "#
        );
        assert_eq!(extract_doc_summary(&attrs), Some("Actual summary.".to_string()));
    }

    #[test]
    fn no_docs() {
        let attrs = parse_attrs(
            r#"
            #[derive(Debug)]
            struct Foo;
        "#
        );
        assert_eq!(doc_label(&attrs), None);
    }

    #[test]
    fn label_drops_trailing_period() {
        let attrs = parse_attrs(
            r#"
            /// Mobile phone.
            struct Foo;
        "#
        );
        assert_eq!(doc_label(&attrs), Some("Mobile phone".to_string()));
    }

    #[test]
    fn label_drops_full_width_period() {
        let attrs = parse_attrs(
            r#"
            /// 联系人。
            struct Foo;
        "#
        );
        assert_eq!(doc_label(&attrs), Some("联系人".to_string()));
    }
}
