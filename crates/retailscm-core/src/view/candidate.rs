// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Candidate sources for reference fields.

use super::RenderContext;
use crate::{
    error::Result,
    resolved::Resolved,
    schema::{Entity, FieldDescriptor, Reference},
    value::KeyValuePair
};

/// A selectable option before it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateItem {
    /// Option id.
    pub id:    String,
    /// Option title.
    pub title: Option<String>
}

impl CandidateItem {
    /// Option with an explicit id and title.
    pub fn new(id: impl Into<String>, title: Option<String>) -> Self {
        Self {
            id: id.into(),
            title
        }
    }

    /// Project an entity to id and display name. `None` without an id.
    pub fn from_entity<R: Entity>(entity: &R) -> Option<Self> {
        entity
            .id()
            .map(|id| Self::new(id, entity.display_name()))
    }
}

impl From<&KeyValuePair> for CandidateItem {
    fn from(pair: &KeyValuePair) -> Self {
        Self::new(pair.key, Some(pair.value.to_owned()))
    }
}

/// Per-entity candidate hook, consulted before any other source.
///
/// Return [`Resolved::Absent`] for fields the provider has no opinion on.
/// A [`Resolved::Failed`] is logged and the next source is tried.
pub trait CandidateProvider<E: 'static>: Send + Sync {
    /// Options for `field` of `entity`.
    fn candidates_for(
        &self,
        ctx: &RenderContext,
        entity: &E,
        field: &FieldDescriptor<E>
    ) -> Resolved<Vec<CandidateItem>>;
}

/// Provider without custom candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCandidates;

impl<E: 'static> CandidateProvider<E> for NoCandidates {
    fn candidates_for(
        &self,
        _ctx: &RenderContext,
        _entity: &E,
        _field: &FieldDescriptor<E>
    ) -> Resolved<Vec<CandidateItem>> {
        Resolved::Absent
    }
}

/// Top-N lookup of a referenced type's default listing.
pub trait CandidateSearch: Send + Sync {
    /// At most `limit` rows of `reference.target`.
    ///
    /// # Errors
    ///
    /// Implementations report failures as
    /// [`Error::CandidateSearch`](crate::Error::CandidateSearch).
    fn top(
        &self,
        ctx: &RenderContext,
        reference: &Reference,
        limit: usize
    ) -> Result<Vec<CandidateItem>>;
}

/// Search that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSearch;

impl CandidateSearch for NoSearch {
    fn top(
        &self,
        _ctx: &RenderContext,
        _reference: &Reference,
        _limit: usize
    ) -> Result<Vec<CandidateItem>> {
        Ok(Vec::new())
    }
}
