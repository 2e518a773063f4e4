// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Token builder helpers.
//!
//! # Generated Code
//!
//! For an entity `StockCountIssueTrack` with a `stock_count` relation:
//!
//! ```rust,ignore
//! pub type StockCountIssueTrackTokens = ::retailscm_core::Tokens<StockCountIssueTrack>;
//!
//! pub trait StockCountIssueTrackTokensExt: Sized {
//!     fn with_stock_count(self) -> Self;
//!     fn with_stock_count_tokens(&self) -> ::retailscm_core::Tokens<GoodsShelfStockCount>;
//! }
//!
//! impl StockCountIssueTrackTokensExt for StockCountIssueTrackTokens { ... }
//! ```
//!
//! A `#[has_many(Child)]` relation adds `with_child_list()` and
//! `with_child_list_tokens()`. The extension trait is only generated when
//! the entity declares at least one token.

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

use super::parse::EntityDef;

/// `TokenDecl` constructors for the schema's token table.
pub fn decls(entity: &EntityDef) -> Vec<TokenStream> {
    let objects = entity.relation_fields().map(|field| {
        let token = field.wire_name();
        let groups = field.token_groups();
        if groups.is_empty() {
            quote! { ::retailscm_core::TokenDecl::object(#token) }
        } else {
            quote! { ::retailscm_core::TokenDecl::object(#token).in_groups(&[#(#groups),*]) }
        }
    });
    let lists = entity.has_many_relations().iter().map(|child| {
        let token = EntityDef::list_token(child);
        quote! { ::retailscm_core::TokenDecl::list(#token) }
    });
    objects.chain(lists).collect()
}

struct Helper {
    method: Ident,
    token:  String,
    target: Ident
}

fn helpers(entity: &EntityDef) -> Vec<Helper> {
    let objects = entity.relation_fields().filter_map(|field| {
        let relation = field.relation()?;
        Some(Helper {
            method: format_ident!("{}", field.name_str()),
            token:  field.wire_name(),
            target: relation.target.clone()
        })
    });
    let lists = entity.has_many_relations().iter().map(|child| Helper {
        method: format_ident!("{}_list", child.to_string().to_case(Case::Snake)),
        token:  EntityDef::list_token(child),
        target: child.clone()
    });
    objects.chain(lists).collect()
}

/// Generates the token alias and extension trait.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let vis = &entity.vis;
    let name = entity.name();
    let alias = entity.ident_with("", "Tokens");
    let alias_doc = format!("Token builder of [`{name}`].");

    let helpers = helpers(entity);
    if helpers.is_empty() {
        return quote! {
            #[doc = #alias_doc]
            #vis type #alias = ::retailscm_core::Tokens<#name>;
        };
    }

    let ext = entity.ident_with("", "TokensExt");
    let ext_doc = format!("Named token helpers of [`{name}`].");

    let signatures: Vec<TokenStream> = helpers
        .iter()
        .map(|helper| {
            let with = format_ident!("with_{}", helper.method);
            let with_tokens = format_ident!("with_{}_tokens", helper.method);
            let target = &helper.target;
            let add_doc = format!("Load `{}`.", helper.token);
            let start_doc = format!("Start the token builder of [`{target}`].");
            quote! {
                #[doc = #add_doc]
                #[must_use]
                fn #with(self) -> Self;

                #[doc = #start_doc]
                fn #with_tokens(&self) -> ::retailscm_core::Tokens<#target>;
            }
        })
        .collect();

    let bodies = helpers.iter().map(|helper| {
        let with = format_ident!("with_{}", helper.method);
        let with_tokens = format_ident!("with_{}_tokens", helper.method);
        let target = &helper.target;
        let token = &helper.token;
        quote! {
            fn #with(self) -> Self {
                self.with(#token)
            }

            fn #with_tokens(&self) -> ::retailscm_core::Tokens<#target> {
                ::retailscm_core::Tokens::<#target>::start()
            }
        }
    });

    quote! {
        #[doc = #alias_doc]
        #vis type #alias = ::retailscm_core::Tokens<#name>;

        #[doc = #ext_doc]
        #vis trait #ext: Sized {
            #(#signatures)*
        }

        impl #ext for ::retailscm_core::Tokens<#name> {
            #(#bodies)*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> EntityDef {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[has_many(IssuePhoto)]
            pub struct StockCountIssueTrack {
                #[id]
                pub id: Option<String>,
                #[belongs_to(GoodsShelfStockCount)]
                #[token(groups("default", "audit"))]
                pub stock_count: Option<GoodsShelfStockCount>,
                #[version]
                pub version: i32,
            }
        };
        EntityDef::from_derive_input(&input).unwrap()
    }

    #[test]
    fn decls_for_objects_and_lists() {
        let decls: Vec<String> = decls(&track()).iter().map(ToString::to_string).collect();
        assert_eq!(decls.len(), 2);
        assert!(decls[0].contains("TokenDecl :: object (\"stockCount\") . in_groups (& [\"default\" , \"audit\"])"));
        assert!(decls[1].contains("TokenDecl :: list (\"issuePhotoList\")"));
    }

    #[test]
    fn default_groups_are_left_to_the_runtime() {
        let input: syn::DeriveInput = syn::parse_quote! {
            pub struct Contact {
                #[id]
                pub id: Option<String>,
                #[belongs_to(PotentialCustomer)]
                pub potential_customer: Option<PotentialCustomer>,
                #[version]
                pub version: i32,
            }
        };
        let decls = decls(&EntityDef::from_derive_input(&input).unwrap());
        assert!(!decls[0].to_string().contains("in_groups"));
    }

    #[test]
    fn extension_trait_helpers() {
        let output = generate(&track()).to_string();
        assert!(output.contains("pub type StockCountIssueTrackTokens"));
        assert!(output.contains("pub trait StockCountIssueTrackTokensExt : Sized"));
        assert!(output.contains("fn with_stock_count (self) -> Self"));
        assert!(output.contains("self . with (\"stockCount\")"));
        assert!(output.contains("fn with_issue_photo_list (self) -> Self"));
        assert!(output.contains("self . with (\"issuePhotoList\")"));
        assert!(output.contains("Tokens :: < GoodsShelfStockCount > :: start ()"));
    }

    #[test]
    fn no_relations_only_alias() {
        let input: syn::DeriveInput = syn::parse_quote! {
            pub struct Shelf {
                #[id]
                pub id: Option<String>,
                #[version]
                pub version: i32,
            }
        };
        let output = generate(&EntityDef::from_derive_input(&input).unwrap()).to_string();
        assert!(output.contains("pub type ShelfTokens"));
        assert!(!output.contains("trait"));
    }
}
