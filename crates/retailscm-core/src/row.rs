// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row mapping.
//!
//! A [`Row`] exposes typed, named column access. [`RowMapper`] copies a row
//! onto an entity field by field:
//!
//! | Column state | Effect on the field | [`ColumnOutcome`] |
//! |--------------|---------------------|-------------------|
//! | value present | assigned | `Mapped` |
//! | SQL `NULL`, missing column, empty FK | left untouched | `Absent` |
//! | decode failure | left untouched, logged | `Failed` |
//!
//! Foreign-key columns resolve into stub references: a fresh
//! [`Entity::stub`] when the field is empty, or only the id replaced when a
//! reference is already loaded.
//!
//! ```rust,ignore
//! let row = MapRow::new()
//!     .with("id", "PCCP000001")
//!     .with("potential_customer", "PC000001")
//!     .with("version", 3);
//! let person = PotentialCustomerContactPerson::map_row(&row);
//! assert!(person.potential_customer.unwrap().is_stub());
//! ```

#[cfg(feature = "postgres")]
mod postgres;

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    error::Error,
    resolved::Resolved,
    schema::Entity,
    value::{FieldKind, FieldValue}
};

/// Typed access to the named columns of one result row.
///
/// Every getter returns [`Resolved::Absent`] for SQL `NULL` and for a column
/// the row does not carry.
pub trait Row {
    /// Read a text column.
    fn get_string(&self, column: &str) -> Resolved<String>;

    /// Read a 32-bit integer column.
    fn get_i32(&self, column: &str) -> Resolved<i32>;

    /// Read a 64-bit integer column.
    fn get_i64(&self, column: &str) -> Resolved<i64>;

    /// Read a floating point column.
    fn get_f64(&self, column: &str) -> Resolved<f64>;

    /// Read a boolean column.
    fn get_bool(&self, column: &str) -> Resolved<bool>;

    /// Read a timestamp column.
    fn get_datetime(&self, column: &str) -> Resolved<NaiveDateTime>;

    /// Read a date column.
    fn get_date(&self, column: &str) -> Resolved<NaiveDate>;
}

/// A decoded column value held by a [`MapRow`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    /// SQL `NULL`.
    Null,
    /// Text.
    Text(String),
    /// Any integer.
    Integer(i64),
    /// Floating point.
    Double(f64),
    /// Boolean.
    Bool(bool),
    /// Timestamp.
    DateTime(NaiveDateTime),
    /// Date.
    Date(NaiveDate)
}

impl ColumnValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Double(_) => "double",
            Self::Bool(_) => "bool",
            Self::DateTime(_) => "datetime",
            Self::Date(_) => "date"
        }
    }
}

macro_rules! column_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ColumnValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

column_value_from! {
    String => Text,
    &str => Text,
    i32 => Integer,
    i64 => Integer,
    f64 => Double,
    bool => Bool,
    NaiveDateTime => DateTime,
    NaiveDate => Date,
}

impl<T: Into<ColumnValue>> From<Option<T>> for ColumnValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// In-memory row keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapRow {
    columns: BTreeMap<String, ColumnValue>
}

impl MapRow {
    /// Empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MapRow::insert`].
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<ColumnValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a column, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<ColumnValue>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Raw column value.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&ColumnValue> {
        self.columns.get(column)
    }

    fn read<T>(
        &self,
        column: &str,
        expected: &str,
        pick: impl FnOnce(&ColumnValue) -> Option<Result<T, String>>
    ) -> Resolved<T> {
        let Some(value) = self.columns.get(column) else {
            return Resolved::Absent;
        };
        if matches!(value, ColumnValue::Null) {
            return Resolved::Absent;
        }
        match pick(value) {
            Some(Ok(value)) => Resolved::Value(value),
            Some(Err(reason)) => Resolved::Failed(Error::column(column, reason)),
            None => Resolved::Failed(Error::column(
                column,
                format!("expected {expected}, found {}", value.type_name())
            ))
        }
    }
}

impl<K: Into<String>, V: Into<ColumnValue>> FromIterator<(K, V)> for MapRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect()
        }
    }
}

impl Row for MapRow {
    fn get_string(&self, column: &str) -> Resolved<String> {
        self.read(column, "text", |value| match value {
            ColumnValue::Text(text) => Some(Ok(text.clone())),
            _ => None
        })
    }

    fn get_i32(&self, column: &str) -> Resolved<i32> {
        self.read(column, "integer", |value| match value {
            ColumnValue::Integer(number) => {
                Some(i32::try_from(*number).map_err(|err| err.to_string()))
            }
            _ => None
        })
    }

    fn get_i64(&self, column: &str) -> Resolved<i64> {
        self.read(column, "integer", |value| match value {
            ColumnValue::Integer(number) => Some(Ok(*number)),
            _ => None
        })
    }

    fn get_f64(&self, column: &str) -> Resolved<f64> {
        self.read(column, "double", |value| match value {
            ColumnValue::Double(number) => Some(Ok(*number)),
            ColumnValue::Integer(number) => Some(Ok(*number as f64)),
            _ => None
        })
    }

    fn get_bool(&self, column: &str) -> Resolved<bool> {
        self.read(column, "bool", |value| match value {
            ColumnValue::Bool(flag) => Some(Ok(*flag)),
            _ => None
        })
    }

    fn get_datetime(&self, column: &str) -> Resolved<NaiveDateTime> {
        self.read(column, "datetime", |value| match value {
            ColumnValue::DateTime(at) => Some(Ok(*at)),
            _ => None
        })
    }

    fn get_date(&self, column: &str) -> Resolved<NaiveDate> {
        self.read(column, "date", |value| match value {
            ColumnValue::Date(day) => Some(Ok(*day)),
            ColumnValue::DateTime(at) => Some(Ok(at.date())),
            _ => None
        })
    }
}

/// A field type that can be read from a column and shown on a form.
pub trait Scalar: Sized {
    /// Declared kind, driving the default UI type.
    const KIND: FieldKind;

    /// Read from `column` of `row`.
    fn read(row: &dyn Row, column: &str) -> Resolved<Self>;

    /// Render the current value.
    fn to_value(&self) -> FieldValue;
}

macro_rules! scalar {
    ($ty:ty, $kind:ident, $getter:ident, |$v:ident| $render:expr) => {
        impl Scalar for $ty {
            const KIND: FieldKind = FieldKind::$kind;

            fn read(row: &dyn Row, column: &str) -> Resolved<Self> {
                row.$getter(column)
            }

            fn to_value(&self) -> FieldValue {
                let $v = self;
                $render
            }
        }
    };
}

scalar!(String, Text, get_string, |v| FieldValue::Text(v.clone()));
scalar!(i32, Integer, get_i32, |v| FieldValue::Integer(i64::from(*v)));
scalar!(i64, Long, get_i64, |v| FieldValue::Integer(*v));
scalar!(f64, Double, get_f64, |v| FieldValue::Double(*v));
scalar!(bool, Bool, get_bool, |v| FieldValue::Bool(*v));
scalar!(NaiveDateTime, DateTime, get_datetime, |v| FieldValue::DateTime(*v));
scalar!(NaiveDate, Date, get_date, |v| FieldValue::Date(*v));

impl<T: Scalar> Scalar for Option<T> {
    const KIND: FieldKind = T::KIND;

    fn read(row: &dyn Row, column: &str) -> Resolved<Self> {
        T::read(row, column).map(Some)
    }

    fn to_value(&self) -> FieldValue {
        self.as_ref().map_or(FieldValue::Null, Scalar::to_value)
    }
}

/// What happened to one column during mapping.
#[derive(Debug)]
pub enum ColumnOutcome {
    /// The value was copied onto the entity.
    Mapped,
    /// Nothing to copy.
    Absent,
    /// The column could not be decoded.
    Failed(Error)
}

/// Per-column outcomes of one [`RowMapper::map_row_with_report`] call.
#[derive(Debug, Default)]
pub struct MapReport {
    outcomes: Vec<(&'static str, ColumnOutcome)>
}

impl MapReport {
    /// Empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `column`.
    pub fn record(&mut self, column: &'static str, outcome: ColumnOutcome) {
        self.outcomes.push((column, outcome));
    }

    /// Outcome of `column`, if it was visited.
    #[must_use]
    pub fn outcome(&self, column: &str) -> Option<&ColumnOutcome> {
        self.outcomes
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, outcome)| outcome)
    }

    /// Columns that were copied.
    pub fn mapped(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, ColumnOutcome::Mapped))
            .map(|(name, _)| *name)
    }

    /// Columns that failed to decode, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &Error)> + '_ {
        self.outcomes.iter().filter_map(|(name, outcome)| match outcome {
            ColumnOutcome::Failed(err) => Some((*name, err)),
            _ => None
        })
    }

    /// Whether every visited column either mapped or was absent.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Maps result rows onto an entity.
///
/// Generated by `#[derive(Entity)]`. Only [`RowMapper::map_row_into`] is
/// required.
pub trait RowMapper: Entity {
    /// Copy every mapped column of `row` onto `self`.
    fn map_row_into(&mut self, row: &dyn Row, report: &mut MapReport);

    /// Map `row` onto a fresh entity.
    fn map_row(row: &dyn Row) -> Self {
        Self::map_row_with_report(row).0
    }

    /// Map `row` onto a fresh entity, keeping the per-column outcomes.
    fn map_row_with_report(row: &dyn Row) -> (Self, MapReport) {
        let mut entity = Self::default();
        let mut report = MapReport::new();
        entity.map_row_into(row, &mut report);
        (entity, report)
    }

    /// Map every row in order.
    fn map_rows<'a, R, I>(rows: I) -> Vec<Self>
    where
        R: Row + 'a,
        I: IntoIterator<Item = &'a R>
    {
        rows.into_iter().map(|row| Self::map_row(row)).collect()
    }
}

/// Copy a scalar column onto `slot`.
pub fn map_scalar<T: Scalar>(
    row: &dyn Row,
    column: &'static str,
    slot: &mut T,
    report: &mut MapReport
) {
    let outcome = match T::read(row, column) {
        Resolved::Value(value) => {
            *slot = value;
            ColumnOutcome::Mapped
        }
        Resolved::Absent => ColumnOutcome::Absent,
        Resolved::Failed(err) => {
            tracing::debug!(column, error = %err, "skipping unreadable column");
            ColumnOutcome::Failed(err)
        }
    };
    report.record(column, outcome);
}

/// Resolve a foreign-key column into a stub reference on `slot`.
///
/// An empty id counts as absent. A loaded reference only has its id
/// replaced.
pub fn map_reference<R: Entity>(
    row: &dyn Row,
    column: &'static str,
    slot: &mut Option<R>,
    report: &mut MapReport
) {
    let resolved = row
        .get_string(column)
        .and_then(|id| if id.is_empty() { Resolved::Absent } else { Resolved::Value(id) });
    let outcome = match resolved {
        Resolved::Value(id) => {
            match slot {
                Some(existing) => existing.set_id(id),
                None => *slot = Some(R::stub(id))
            }
            ColumnOutcome::Mapped
        }
        Resolved::Absent => ColumnOutcome::Absent,
        Resolved::Failed(err) => {
            tracing::debug!(
                column,
                entity = R::TYPE_NAME,
                error = %err,
                "skipping unreadable reference"
            );
            ColumnOutcome::Failed(err)
        }
    };
    report.record(column, outcome);
}
