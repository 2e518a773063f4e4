// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! # Attribute Reference
//!
//! ```rust,ignore
//! #[id]                                   // primary key
//! pub id: Option<String>,
//!
//! /// Contact name.                       // default label
//! #[display]                              // candidate title
//! #[column(name = "contact_name")]        // column override
//! pub name: Option<String>,
//!
//! #[belongs_to(PotentialCustomer)]        // stub reference + object token
//! #[token(groups("default", "sales"))]
//! #[ui(group = "relations", candidate_limit = 10)]
//! pub potential_customer: Option<PotentialCustomer>,
//!
//! #[version]
//! #[ui(ignore)]
//! pub version: i32,
//! ```

mod relation;
mod storage;
mod token;
mod ui;

use convert_case::{Case, Casing};
pub use relation::RelationDef;
use storage::StorageConfig;
use syn::{Field, Ident, Type, ext::IdentExt};
use token::TokenConfig;
pub use ui::UiConfig;

use super::pass::parse_pass_attrs;
use crate::utils::docs::doc_label;

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident:    Ident,
    /// Field type.
    pub ty:       Type,
    /// Storage roles and column override.
    storage:      StorageConfig,
    /// `#[belongs_to(...)]` relation.
    pub relation: Option<RelationDef>,
    /// Token groups of the relation.
    token:        TokenConfig,
    /// UI hints.
    pub ui:       UiConfig,
    /// Pass-through attributes.
    pub pass:     Vec<(String, String)>
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Unnamed fields and malformed attributes.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Entity fields must be named").with_span(field)
        })?;

        let mut errors = darling::Error::accumulator();
        let mut storage = StorageConfig::default();
        let mut relation = None;
        let mut token = TokenConfig::default();
        let mut ui = UiConfig::default();

        for attr in &field.attrs {
            let path = attr.path();
            if path.is_ident("id") {
                storage.is_id = true;
            } else if path.is_ident("version") {
                storage.is_version = true;
            } else if path.is_ident("display") {
                storage.is_display = true;
            } else if path.is_ident("column") {
                errors.handle(storage.parse_column(attr).map_err(darling::Error::from));
            } else if path.is_ident("field") {
                errors.handle(storage.parse_field(attr).map_err(darling::Error::from));
            } else if path.is_ident("belongs_to") {
                relation = errors.handle(RelationDef::from_attr(attr).map_err(darling::Error::from));
            } else if path.is_ident("token") {
                errors.handle(token.parse_attr(attr).map_err(darling::Error::from));
            } else if path.is_ident("ui") {
                errors.handle(ui.parse_attr(attr).map_err(darling::Error::from));
            }
        }

        let pass = errors
            .handle(parse_pass_attrs(&field.attrs).map_err(darling::Error::from))
            .unwrap_or_default();

        if ui.label.is_none() {
            ui.label = doc_label(&field.attrs);
        }

        if !token.groups.is_empty() && relation.is_none() {
            errors.push(
                darling::Error::custom("#[token] requires #[belongs_to] on the same field")
                    .with_span(&ident)
            );
        }

        let def = Self {
            ident,
            ty: field.ty.clone(),
            storage,
            relation,
            token,
            ui,
            pass
        };

        if (def.is_id() || def.relation.is_some()) && !def.is_option() {
            errors.push(
                darling::Error::custom("#[id] and #[belongs_to] fields must be `Option<_>`")
                    .with_span(&def.ident)
            );
        }

        errors.finish_with(def)
    }

    /// Field identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Field name as written, without a raw prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Field name on the wire (lower camel case).
    #[must_use]
    pub fn wire_name(&self) -> String {
        self.name_str().to_case(Case::Camel)
    }

    /// Column the row mapper reads.
    #[must_use]
    pub fn column(&self) -> String {
        self.storage
            .column
            .clone()
            .unwrap_or_else(|| self.name_str().to_case(Case::Snake))
    }

    /// Check if the field type is `Option<T>`.
    #[must_use]
    pub fn is_option(&self) -> bool {
        if let Type::Path(type_path) = &self.ty
            && let Some(segment) = type_path.path.segments.last()
        {
            return segment.ident == "Option";
        }
        false
    }

    /// Primary key.
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.storage.is_id
    }

    /// Version counter.
    #[must_use]
    pub fn is_version(&self) -> bool {
        self.storage.is_version
    }

    /// Candidate title.
    #[must_use]
    pub fn is_display(&self) -> bool {
        self.storage.is_display
    }

    /// Excluded from mapping and rendering.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.storage.skip
    }

    /// Referenced entity, for `#[belongs_to]` fields.
    #[must_use]
    pub fn relation(&self) -> Option<&RelationDef> {
        self.relation.as_ref()
    }

    /// Token groups; empty means the default group.
    #[must_use]
    pub fn token_groups(&self) -> &[String] {
        &self.token.groups
    }
}
