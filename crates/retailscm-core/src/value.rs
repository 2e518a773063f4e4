// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field values as seen by the renderer.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::schema::Entity;

/// Wire format for date-time values on form pages.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire format for date values on form pages.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Declared kind of an entity field.
///
/// Drives the default UI field type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Floating point number.
    Double,
    /// Boolean flag.
    Bool,
    /// Date and time.
    DateTime,
    /// Calendar date.
    Date,
    /// Reference to another entity.
    Reference
}

impl FieldKind {
    /// Whether this kind is rendered as a date picker.
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::DateTime | Self::Date)
    }

    /// Whether this kind is an integral number.
    pub const fn is_integral(&self) -> bool {
        matches!(self, Self::Integer | Self::Long)
    }
}

/// Current value of an entity field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Field is unset.
    Null,
    /// Text value.
    Text(String),
    /// Integral value.
    Integer(i64),
    /// Floating point value.
    Double(f64),
    /// Boolean value.
    Bool(bool),
    /// Date-time value.
    DateTime(NaiveDateTime),
    /// Date value.
    Date(NaiveDate),
    /// Referenced entity, projected to id and display name.
    Reference {
        /// Referenced entity id.
        id:    Option<String>,
        /// Referenced entity display name.
        title: Option<String>
    }
}

impl FieldValue {
    /// Project an optional related entity.
    pub fn reference<R: Entity>(related: Option<&R>) -> Self {
        match related {
            Some(related) => Self::Reference {
                id:    related.id().map(str::to_owned),
                title: related.display_name()
            },
            None => Self::Null
        }
    }

    /// Returns `true` for [`FieldValue::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value candidates are compared against.
    ///
    /// References compare by id; scalars by their text form.
    pub fn id_equivalent(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(text) => Some(text.clone()),
            Self::Integer(value) => Some(value.to_string()),
            Self::Double(value) => Some(value.to_string()),
            Self::Bool(value) => Some(value.to_string()),
            Self::DateTime(value) => Some(value.format(DATETIME_FORMAT).to_string()),
            Self::Date(value) => Some(value.format(DATE_FORMAT).to_string()),
            Self::Reference {
                id, ..
            } => id.clone()
        }
    }

    /// The value placed on a rendered form field. `None` leaves it out.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Self::Null => None,
            Self::Text(text) => Some(Value::from(text.as_str())),
            Self::Integer(value) => Some(Value::from(*value)),
            Self::Double(value) => Some(Value::from(*value)),
            Self::Bool(value) => Some(Value::from(*value)),
            Self::DateTime(_) | Self::Date(_) => self.id_equivalent().map(Value::from),
            Self::Reference {
                id, ..
            } => id.as_deref().map(Value::from)
        }
    }
}

/// Code/name pair from a constant code list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeyValuePair {
    /// Stable code.
    pub key:   &'static str,
    /// Display name.
    pub value: &'static str
}

impl KeyValuePair {
    /// Create a pair.
    pub const fn new(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value
        }
    }
}

/// Entities whose rows are a fixed code list, such as statuses.
pub trait ConstantCodes {
    /// Every code with its display name, in display order.
    const CODE_NAME_LIST: &'static [KeyValuePair];

    /// Look up the display name of `code`.
    fn name_of(code: &str) -> Option<&'static str> {
        Self::CODE_NAME_LIST
            .iter()
            .find(|pair| pair.key == code)
            .map(|pair| pair.value)
    }
}
