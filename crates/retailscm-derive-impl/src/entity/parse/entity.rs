// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity definition parsing.
//!
//! [`EntityDef`] combines the `#[entity(...)]` attributes, struct-level
//! `#[has_many]` and `#[pass]` attributes, and every field definition. It is
//! the single input of all code generators.

mod attrs;
#[cfg(test)]
mod tests;

use attrs::EntityAttrs;
use convert_case::{Case, Casing};
use darling::FromDeriveInput;
use proc_macro2::Span;
use syn::{Attribute, DeriveInput, Ident, Visibility};

use super::{field::FieldDef, pass::parse_pass_attrs};

/// Parse `#[has_many(Entity)]` attributes from struct attributes.
///
/// ```rust,ignore
/// #[has_many(StockCountIssueTrack)]
/// struct GoodsShelfStockCount { ... }
///
/// // Returns: vec![Ident("StockCountIssueTrack")]
/// ```
fn parse_has_many_attrs(attrs: &[Attribute]) -> darling::Result<Vec<Ident>> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("has_many"))
        .map(|attr| attr.parse_args::<Ident>().map_err(darling::Error::from))
        .collect()
}

/// Complete parsed entity definition.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility.
    pub vis: Visibility,

    /// Table rows come from.
    pub table: String,

    /// Owner name scoping token sets.
    pub owner: String,

    /// Processor name prefixing action URLs.
    pub processor: String,

    /// Page title.
    pub title: Option<String>,

    /// Page type.
    pub page_type: Option<String>,

    /// Page actions.
    pub actions: Vec<String>,

    /// Page pass-through attributes.
    pub pass: Vec<(String, String)>,

    /// Mapped fields; `#[field(skip)]` fields are dropped.
    pub fields: Vec<FieldDef>,

    /// Child entities declared with `#[has_many]`.
    pub has_many: Vec<Ident>,

    id_field_index: usize,

    version_field_index: usize,

    display_field_index: Option<usize>
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to anything but a struct with named fields
    /// - Generic structs
    /// - Missing or repeated `#[id]` / `#[version]`, repeated `#[display]`
    /// - Malformed attributes
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;
        let syn::Data::Struct(syn::DataStruct {
            fields: syn::Fields::Named(named),
            ..
        }) = &input.data
        else {
            return Err(darling::Error::custom(
                "Entity can only be derived for structs with named fields"
            )
            .with_span(&input.ident));
        };
        let mut errors = darling::Error::accumulator();

        if !attrs.generics.params.is_empty() {
            errors.push(
                darling::Error::custom("Entity cannot be derived for generic structs")
                    .with_span(&attrs.generics)
            );
        }

        let fields: Vec<FieldDef> = named
            .named
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field)))
            .filter(|field| !field.is_skipped())
            .collect();

        let has_many = errors
            .handle(parse_has_many_attrs(&input.attrs))
            .unwrap_or_default();
        let pass = errors
            .handle(parse_pass_attrs(&input.attrs).map_err(darling::Error::from))
            .unwrap_or_default();

        let id_field_index = errors.handle(single(&fields, FieldDef::is_id, "#[id]", &attrs.ident));
        let version_field_index =
            errors.handle(single(&fields, FieldDef::is_version, "#[version]", &attrs.ident));
        let display: Vec<usize> = positions(&fields, FieldDef::is_display);
        if display.len() > 1 {
            errors.push(
                darling::Error::custom("Entity may have at most one #[display] field")
                    .with_span(&attrs.ident)
            );
        }

        errors.finish()?;

        let name = attrs.ident.to_string();
        let owner = attrs.owner.unwrap_or_else(|| name.to_case(Case::Camel));
        let table = attrs
            .table
            .unwrap_or_else(|| format!("{}_data", name.to_case(Case::Snake)));
        let processor = attrs
            .processor
            .unwrap_or_else(|| format!("{owner}Manager"));

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            table,
            owner,
            processor,
            title: attrs.title,
            page_type: attrs.page_type,
            actions: attrs.actions,
            pass,
            fields,
            has_many,
            id_field_index: id_field_index.unwrap_or_default(),
            version_field_index: version_field_index.unwrap_or_default(),
            display_field_index: display.first().copied()
        })
    }

    /// Get the entity name as an identifier.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the entity name as a string.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// The `#[id]` field.
    pub fn id_field(&self) -> &FieldDef {
        &self.fields[self.id_field_index]
    }

    /// The `#[version]` field.
    pub fn version_field(&self) -> &FieldDef {
        &self.fields[self.version_field_index]
    }

    /// The `#[display]` field, if any.
    pub fn display_field(&self) -> Option<&FieldDef> {
        self.display_field_index.map(|index| &self.fields[index])
    }

    /// Fields with `#[belongs_to]`.
    pub fn relation_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.relation().is_some())
    }

    /// Child entities declared with `#[has_many]`.
    pub fn has_many_relations(&self) -> &[Ident] {
        &self.has_many
    }

    /// List token of a `#[has_many]` child: `{childCamel}List`.
    pub fn list_token(child: &Ident) -> String {
        format!("{}List", child.to_string().to_case(Case::Camel))
    }

    /// Create a new identifier with prefix and/or suffix.
    ///
    /// ```rust,ignore
    /// entity.ident_with("", "Tokens")    // StockCountIssueTrackTokens
    /// entity.ident_with("", "TokensExt") // StockCountIssueTrackTokensExt
    /// ```
    pub fn ident_with(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(
            &format!("{}{}{}", prefix, self.name_str(), suffix),
            Span::call_site()
        )
    }
}

fn positions(fields: &[FieldDef], pick: fn(&FieldDef) -> bool) -> Vec<usize> {
    fields
        .iter()
        .enumerate()
        .filter(|(_, field)| pick(field))
        .map(|(index, _)| index)
        .collect()
}

/// Index of the one field matching `pick`.
fn single(
    fields: &[FieldDef],
    pick: fn(&FieldDef) -> bool,
    attribute: &str,
    ident: &Ident
) -> darling::Result<usize> {
    match positions(fields, pick).as_slice() {
        [index] => Ok(*index),
        _ => Err(darling::Error::custom(format!(
            "Entity must have exactly one field with {attribute} attribute"
        ))
        .with_span(ident))
    }
}
