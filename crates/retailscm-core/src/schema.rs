// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static per-entity schema.
//!
//! Every entity carries an [`EntitySchema`]: a table of
//! [`FieldDescriptor`]s built at compile time by `#[derive(Entity)]` (or by
//! hand). The renderer and the token filter read names, kinds, UI hints and
//! relations from here instead of inspecting types at runtime.
//!
//! ```rust,ignore
//! let schema = PotentialCustomerContactPerson::schema();
//! assert_eq!(schema.owner, "potentialCustomerContactPerson");
//! let field = schema.field("potentialCustomer").unwrap();
//! assert!(field.reference.is_some());
//! ```

use std::fmt;

use crate::{
    tokens::TokenDecl,
    value::{FieldKind, FieldValue, KeyValuePair}
};

/// Version marker of a stub reference whose real version is not loaded.
pub const UNKNOWN_VERSION: i32 = i32::MAX;

/// A persistent record of the admin console.
///
/// Implemented by `#[derive(Entity)]`; see the crate docs for the attribute
/// reference.
pub trait Entity: Default + Send + Sync + 'static {
    /// Rust type name, used as the page id.
    const TYPE_NAME: &'static str;

    /// Owner-object name that scopes token sets (lower camel case).
    const OWNER: &'static str;

    /// The compile-time schema of this entity.
    fn schema() -> &'static EntitySchema<Self>;

    /// Primary key, if set.
    fn id(&self) -> Option<&str>;

    /// Set the primary key.
    fn set_id(&mut self, id: String);

    /// Optimistic-concurrency version.
    fn version(&self) -> i32;

    /// Set the optimistic-concurrency version.
    fn set_version(&mut self, version: i32);

    /// Human readable name used as candidate title.
    ///
    /// Falls back to the id.
    fn display_name(&self) -> Option<String> {
        self.id().map(str::to_owned)
    }

    /// A placeholder carrying only `id`, pending full hydration.
    fn stub(id: impl Into<String>) -> Self {
        let mut entity = Self::default();
        entity.set_id(id.into());
        entity.set_version(UNKNOWN_VERSION);
        entity
    }

    /// Whether this instance is a stub built from a foreign key.
    fn is_stub(&self) -> bool {
        self.version() == UNKNOWN_VERSION
    }
}

/// Reference from a field to another entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// Referenced type name.
    pub target:    &'static str,
    /// Referenced owner-object name.
    pub owner:     &'static str,
    /// Static code list when the referenced type is a constant.
    pub constants: Option<&'static [KeyValuePair]>
}

impl Reference {
    /// Whether the referenced type is a constant code list.
    pub const fn is_constant(&self) -> bool {
        self.constants.is_some()
    }
}

/// Action attached to a single field: `key` names the link on the rendered
/// field, `action` is the `"Title:code"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAction {
    /// Property set on the rendered field.
    pub key:    &'static str,
    /// Action, `"Title:code"` or `"code"`.
    pub action: &'static str
}

/// UI hints of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiHints {
    /// Field label; defaults to the field name.
    pub label:           Option<&'static str>,
    /// Group the field is rendered in.
    pub group:           Option<&'static str>,
    /// Explicit UI type, overriding the kind-based default.
    pub ui_type:         Option<&'static str>,
    /// Never render this field.
    pub ignore:          bool,
    /// Never attach candidates to this field.
    pub no_candidate:    bool,
    /// Maximum number of candidates.
    pub candidate_limit: Option<usize>,
    /// Field-level actions.
    pub actions:         &'static [FieldAction],
    /// Attributes copied verbatim onto the rendered field.
    pub pass_through:    &'static [(&'static str, &'static str)]
}

impl UiHints {
    /// No hints.
    pub const EMPTY: Self = Self {
        label:           None,
        group:           None,
        ui_type:         None,
        ignore:          false,
        no_candidate:    false,
        candidate_limit: None,
        actions:         &[],
        pass_through:    &[]
    };
}

impl Default for UiHints {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Page-level hints of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHints {
    /// Page type; `None` means a form page.
    pub page_type:    Option<&'static str>,
    /// Page title.
    pub title:        Option<&'static str>,
    /// Entity-level actions.
    pub actions:      &'static [&'static str],
    /// Attributes copied verbatim onto the page.
    pub pass_through: &'static [(&'static str, &'static str)]
}

impl PageHints {
    /// No hints.
    pub const EMPTY: Self = Self {
        page_type:    None,
        title:        None,
        actions:      &[],
        pass_through: &[]
    };
}

impl Default for PageHints {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Descriptor of one entity field.
pub struct FieldDescriptor<E: 'static> {
    /// Field name on the wire (lower camel case).
    pub name:      &'static str,
    /// Column the row mapper reads.
    pub column:    &'static str,
    /// Declared kind.
    pub kind:      FieldKind,
    /// Referenced type, for relation fields.
    pub reference: Option<Reference>,
    /// UI hints.
    pub ui:        UiHints,
    /// Reads the current value from an entity.
    pub read:      fn(&E) -> FieldValue
}

impl<E> FieldDescriptor<E> {
    /// Current value of this field on `entity`.
    pub fn value(&self, entity: &E) -> FieldValue {
        (self.read)(entity)
    }

    /// Whether the field references a constant code list.
    pub fn is_constant_reference(&self) -> bool {
        self.reference.is_some_and(|r| r.is_constant())
    }

    /// Whether the field references a regular entity.
    pub fn is_object_reference(&self) -> bool {
        self.reference.is_some_and(|r| !r.is_constant())
    }

    /// Label, falling back to the field name.
    pub fn label(&self) -> &'static str {
        self.ui.label.unwrap_or(self.name)
    }
}

impl<E> fmt::Debug for FieldDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("kind", &self.kind)
            .field("reference", &self.reference)
            .field("ui", &self.ui)
            .finish_non_exhaustive()
    }
}

/// Compile-time schema of an entity type.
#[derive(Debug)]
pub struct EntitySchema<E: 'static> {
    /// Rust type name.
    pub type_name: &'static str,
    /// Owner-object name.
    pub owner:     &'static str,
    /// Table the rows come from.
    pub table:     &'static str,
    /// Processor name that prefixes action URLs.
    pub processor: &'static str,
    /// Page-level hints.
    pub page:      PageHints,
    /// Fields in declaration order.
    pub fields:    &'static [FieldDescriptor<E>],
    /// Relation tokens the entity declares.
    pub tokens:    &'static [TokenDecl]
}

impl<E> EntitySchema<E> {
    /// Look up a field by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<E>> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields that are rendered on a form.
    pub fn visible_fields(&self) -> impl Iterator<Item = &FieldDescriptor<E>> {
        self.fields.iter().filter(|field| !field.ui.ignore)
    }

    /// Column names in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.column)
    }
}
