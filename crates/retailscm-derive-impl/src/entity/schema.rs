// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Entity` implementation with the static schema.
//!
//! # Generated Code
//!
//! For an entity `Contact`, generates:
//!
//! ```rust,ignore
//! impl ::retailscm_core::Entity for Contact {
//!     const TYPE_NAME: &'static str = "Contact";
//!     const OWNER: &'static str = "contact";
//!
//!     fn schema() -> &'static ::retailscm_core::EntitySchema<Self> {
//!         fn read_name(entity: &Contact) -> ::retailscm_core::FieldValue { ... }
//!         static SCHEMA: ::retailscm_core::EntitySchema<Contact> = ...;
//!         &SCHEMA
//!     }
//!
//!     fn id(&self) -> Option<&str> { self.id.as_deref() }
//!     // set_id, version, set_version, display_name
//! }
//! ```
//!
//! The schema lives in a `static` inside `schema()` so every entity gets its
//! own table without a global registry.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{
    parse::{EntityDef, FieldDef, UiConfig},
    tokens
};
use crate::utils::lit::{opt_str, opt_usize, str_pairs};

/// Generates the `Entity` implementation.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let name = entity.name();
    let type_name = entity.name_str();
    let owner = &entity.owner;
    let table = &entity.table;
    let processor = &entity.processor;

    let readers = entity.fields.iter().map(|field| reader(entity, field));
    let descriptors = entity.fields.iter().map(descriptor);
    let token_decls = tokens::decls(entity);
    let page = page_hints(entity);

    let id = entity.id_field().name();
    let version = entity.version_field().name();
    let display_name = display_name(entity);

    quote! {
        impl ::retailscm_core::Entity for #name {
            const TYPE_NAME: &'static str = #type_name;
            const OWNER: &'static str = #owner;

            fn schema() -> &'static ::retailscm_core::EntitySchema<Self> {
                #(#readers)*

                static SCHEMA: ::retailscm_core::EntitySchema<#name> =
                    ::retailscm_core::EntitySchema {
                        type_name: #type_name,
                        owner: #owner,
                        table: #table,
                        processor: #processor,
                        page: #page,
                        fields: &[#(#descriptors),*],
                        tokens: &[#(#token_decls),*],
                    };
                &SCHEMA
            }

            fn id(&self) -> ::core::option::Option<&str> {
                self.#id.as_deref()
            }

            fn set_id(&mut self, id: ::std::string::String) {
                self.#id = ::core::option::Option::Some(id);
            }

            fn version(&self) -> i32 {
                self.#version
            }

            fn set_version(&mut self, version: i32) {
                self.#version = version;
            }

            #display_name
        }
    }
}

fn reader_ident(field: &FieldDef) -> syn::Ident {
    format_ident!("read_{}", field.name_str())
}

/// `fn read_<field>(entity: &Entity) -> FieldValue`.
fn reader(entity: &EntityDef, field: &FieldDef) -> TokenStream {
    let name = entity.name();
    let ident = field.name();
    let fn_name = reader_ident(field);

    let body = if field.relation().is_some() {
        quote! { ::retailscm_core::FieldValue::reference(entity.#ident.as_ref()) }
    } else {
        quote! { ::retailscm_core::Scalar::to_value(&entity.#ident) }
    };

    quote! {
        fn #fn_name(entity: &#name) -> ::retailscm_core::FieldValue {
            #body
        }
    }
}

fn descriptor(field: &FieldDef) -> TokenStream {
    let name = field.wire_name();
    let column = field.column();
    let ty = &field.ty;
    let read = reader_ident(field);
    let ui = ui_hints(&field.ui, &field.pass);

    let (kind, reference) = match field.relation() {
        Some(relation) => {
            let target = &relation.target;
            let constants = if relation.constant {
                quote! {
                    ::core::option::Option::Some(
                        <#target as ::retailscm_core::ConstantCodes>::CODE_NAME_LIST
                    )
                }
            } else {
                quote! { ::core::option::Option::None }
            };
            (
                quote! { ::retailscm_core::FieldKind::Reference },
                quote! {
                    ::core::option::Option::Some(::retailscm_core::Reference {
                        target: <#target as ::retailscm_core::Entity>::TYPE_NAME,
                        owner: <#target as ::retailscm_core::Entity>::OWNER,
                        constants: #constants,
                    })
                }
            )
        }
        None => (
            quote! { <#ty as ::retailscm_core::Scalar>::KIND },
            quote! { ::core::option::Option::None }
        )
    };

    quote! {
        ::retailscm_core::FieldDescriptor {
            name: #name,
            column: #column,
            kind: #kind,
            reference: #reference,
            ui: #ui,
            read: #read,
        }
    }
}

fn ui_hints(ui: &UiConfig, pass: &[(String, String)]) -> TokenStream {
    let label = opt_str(ui.label.as_deref());
    let group = opt_str(ui.group.as_deref());
    let ui_type = opt_str(ui.ui_type.as_deref());
    let ignore = ui.ignore;
    let no_candidate = ui.no_candidate;
    let candidate_limit = opt_usize(ui.candidate_limit);
    let actions = ui.actions.iter().map(|(key, action)| {
        quote! { ::retailscm_core::FieldAction { key: #key, action: #action } }
    });
    let pass_through = str_pairs(pass);

    quote! {
        ::retailscm_core::UiHints {
            label: #label,
            group: #group,
            ui_type: #ui_type,
            ignore: #ignore,
            no_candidate: #no_candidate,
            candidate_limit: #candidate_limit,
            actions: &[#(#actions),*],
            pass_through: #pass_through,
        }
    }
}

fn page_hints(entity: &EntityDef) -> TokenStream {
    let page_type = opt_str(entity.page_type.as_deref());
    let title = opt_str(entity.title.as_deref());
    let actions = &entity.actions;
    let pass_through = str_pairs(&entity.pass);

    quote! {
        ::retailscm_core::PageHints {
            page_type: #page_type,
            title: #title,
            actions: &[#(#actions),*],
            pass_through: #pass_through,
        }
    }
}

/// `display_name()` override; the trait default (the id) applies without
/// a `#[display]` field.
fn display_name(entity: &EntityDef) -> TokenStream {
    let Some(field) = entity.display_field() else {
        return TokenStream::new();
    };
    let ident = field.name();
    let body = if field.is_option() {
        quote! { ::core::clone::Clone::clone(&self.#ident) }
    } else {
        quote! { ::core::option::Option::Some(::std::string::ToString::to_string(&self.#ident)) }
    };

    quote! {
        fn display_name(&self) -> ::core::option::Option<::std::string::String> {
            #body
        }
    }
}
