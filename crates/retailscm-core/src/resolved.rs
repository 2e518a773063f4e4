// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Three-way lookup outcome.
//!
//! Column reads and candidate providers can succeed, find nothing (a null
//! column, a provider with no opinion on a field) or fail outright.
//! [`Resolved`] keeps those apart so callers decide which failures to
//! absorb and tests can tell them apart.

use crate::error::{Error, Result};

/// Outcome of resolving a value that may legitimately be missing.
#[derive(Debug)]
pub enum Resolved<T> {
    /// A value was found.
    Value(T),

    /// Nothing to resolve; expected and not an error.
    Absent,

    /// Resolution was attempted and failed.
    Failed(Error)
}

impl<T> Resolved<T> {
    /// Returns `true` for [`Resolved::Value`].
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` for [`Resolved::Absent`].
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` for [`Resolved::Failed`].
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Map the contained value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Self::Value(value) => Resolved::Value(f(value)),
            Self::Absent => Resolved::Absent,
            Self::Failed(err) => Resolved::Failed(err)
        }
    }

    /// Chain a resolution that may itself be absent or fail.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Resolved<U>) -> Resolved<U> {
        match self {
            Self::Value(value) => f(value),
            Self::Absent => Resolved::Absent,
            Self::Failed(err) => Resolved::Failed(err)
        }
    }

    /// The value, discarding the reason it may be missing.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None
        }
    }

    /// Collapse into a `Result`, keeping absence as `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>> {
        match self {
            Self::Value(value) => Ok(Some(value)),
            Self::Absent => Ok(None),
            Self::Failed(err) => Err(err)
        }
    }
}

impl<T> From<Option<T>> for Resolved<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Absent
        }
    }
}

impl<T> From<Result<Option<T>>> for Resolved<T> {
    fn from(value: Result<Option<T>>) -> Self {
        match value {
            Ok(Some(value)) => Self::Value(value),
            Ok(None) => Self::Absent,
            Err(err) => Self::Failed(err)
        }
    }
}
