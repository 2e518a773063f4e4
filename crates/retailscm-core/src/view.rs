// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Form page rendering.
//!
//! [`ViewRender`] turns an entity and its static schema into a [`Page`].
//! Everything it needs beyond the schema is injected at construction:
//!
//! | Collaborator | Default | Used for |
//! |--------------|---------|----------|
//! | [`CandidateProvider`] | [`NoCandidates`] | custom options per field |
//! | [`CandidateSearch`] | [`NoSearch`] | top-N options of a referenced type |
//! | [`ActionUrlBuilder`] | [`ProcessorUrls`] | `linkToUrl` of actions |
//!
//! # Candidate resolution
//!
//! First match wins; fields marked `no_candidate` get none.
//!
//! 1. The candidate provider. `Absent` falls through; `Failed` is logged at
//!    `warn` and falls through.
//! 2. The code list of a constant reference.
//! 3. A top-N search of an object reference, capped at the field's limit.
//!    Search errors propagate.
//!
//! ```rust,ignore
//! let render = ViewRender::<StockCountIssueTrack>::default()
//!     .with_candidate_provider(StockCountIssueTrackProcessor);
//! let mut ctx = RenderContext::for_user("U000001");
//! let view = render.view(&mut ctx, &track)?;
//! assert_eq!(ctx.header(X_CLASS_HEADER), Some(FORM_PAGE_CLASS));
//! ```

mod action;
mod candidate;
mod context;
mod page;

use std::{collections::BTreeSet, fmt};

pub use action::{ActionUrlBuilder, ProcessorUrls, split_action};
pub use candidate::{CandidateItem, CandidateProvider, CandidateSearch, NoCandidates, NoSearch};
pub use context::{RenderContext, X_CLASS_HEADER};
pub use page::{Action, Candidate, FieldGroup, FormField, Page, View};
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::RenderConfig,
    error::{Error, Result},
    resolved::Resolved,
    schema::{Entity, FieldDescriptor},
    value::FieldKind
};

/// Page type rendered as a form.
pub const FORM: &str = "form";

/// Renders entities of type `E` into pages.
pub struct ViewRender<E: Entity> {
    config:     RenderConfig,
    candidates: Box<dyn CandidateProvider<E>>,
    search:     Box<dyn CandidateSearch>,
    urls:       Box<dyn ActionUrlBuilder>
}

impl<E: Entity> Default for ViewRender<E> {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl<E: Entity> fmt::Debug for ViewRender<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRender")
            .field("entity", &E::TYPE_NAME)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<E: Entity> ViewRender<E> {
    /// Renderer with default collaborators.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            candidates: Box::new(NoCandidates),
            search: Box::new(NoSearch),
            urls: Box::new(ProcessorUrls)
        }
    }

    /// Replace the candidate provider.
    #[must_use]
    pub fn with_candidate_provider(mut self, provider: impl CandidateProvider<E> + 'static) -> Self {
        self.candidates = Box::new(provider);
        self
    }

    /// Replace the candidate search.
    #[must_use]
    pub fn with_candidate_search(mut self, search: impl CandidateSearch + 'static) -> Self {
        self.search = Box::new(search);
        self
    }

    /// Replace the action URL builder.
    #[must_use]
    pub fn with_action_urls(mut self, urls: impl ActionUrlBuilder + 'static) -> Self {
        self.urls = Box::new(urls);
        self
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `entity` according to its declared page type.
    ///
    /// # Errors
    ///
    /// Candidate search failures, and [`Error::Serialize`] when a non-form
    /// entity cannot be serialized.
    pub fn view(&self, ctx: &mut RenderContext, entity: &E) -> Result<View>
    where
        E: Serialize
    {
        match E::schema().page.page_type.unwrap_or(FORM) {
            FORM => self.render_as_form(ctx, entity).map(View::Form),
            _ => serde_json::to_value(entity)
                .map(View::Data)
                .map_err(|source| Error::Serialize {
                    type_name: E::TYPE_NAME,
                    source
                })
        }
    }

    /// Build the form page of `entity`.
    ///
    /// # Errors
    ///
    /// Candidate search failures.
    pub fn render_as_form(&self, ctx: &mut RenderContext, entity: &E) -> Result<Page> {
        let schema = E::schema();
        tracing::debug!(entity = schema.type_name, "rendering form page");

        ctx.force_response_x_class_header(self.config.form_class.as_str());

        let mut page = Page {
            id: schema.type_name.to_owned(),
            page_title: schema
                .page
                .title
                .unwrap_or(self.config.default_page_title.as_str())
                .to_owned(),
            action_list: self.form_actions(),
            ..Page::default()
        };

        for field in schema.visible_fields() {
            let group = field.ui.group.unwrap_or(self.config.default_group.as_str());
            let form_field = self.form_field(ctx, entity, field)?;
            page.group_mut(group).field_list.push(form_field);
        }

        pass_through(E::TYPE_NAME, schema.page.pass_through.iter().copied(), |key, value| {
            page.set_attribute(key, value)
        });
        Ok(page)
    }

    /// Require a logged-in user.
    ///
    /// # Errors
    ///
    /// [`Error::LoginRequired`] for anonymous contexts.
    pub fn check_access(&self, ctx: &RenderContext) -> Result<()> {
        ctx.need_login()
    }

    /// Replace the actions of `page` with the single `action`.
    pub fn set_form_action(&self, page: &mut Page, action: &str) {
        page.action_list = vec![self.create_action(action)];
    }

    /// Render an action `"Title:code"` or `"code"`.
    #[must_use]
    pub fn create_action(&self, action: &str) -> Action {
        let (title, code) = split_action(action);
        Action {
            title:       title.to_owned(),
            code:        code.to_owned(),
            link_to_url: self.make_action_url(code)
        }
    }

    /// URL of `code` on this entity's processor.
    #[must_use]
    pub fn make_action_url(&self, code: &str) -> String {
        self.urls.action_url(E::schema().processor, code)
    }

    /// UI type of a field without an explicit override.
    #[must_use]
    pub fn default_form_field_type(&self, field: &FieldDescriptor<E>) -> &'static str {
        if field.is_constant_reference() {
            return "single-select";
        }
        match field.kind {
            FieldKind::DateTime | FieldKind::Date => "datetime",
            FieldKind::Double => "double",
            FieldKind::Integer | FieldKind::Long => "integer",
            _ => "text"
        }
    }

    fn form_actions(&self) -> Vec<Action> {
        let schema = E::schema();
        let actions: BTreeSet<&str> = schema
            .page
            .actions
            .iter()
            .copied()
            .chain(
                schema
                    .fields
                    .iter()
                    .flat_map(|field| field.ui.actions)
                    .map(|action| action.action)
            )
            .collect();
        actions.into_iter().map(|action| self.create_action(action)).collect()
    }

    fn form_field(
        &self,
        ctx: &RenderContext,
        entity: &E,
        field: &FieldDescriptor<E>
    ) -> Result<FormField> {
        let current = field.value(entity);
        let current_id = current.id_equivalent();

        let mut form_field = FormField {
            name: field.name.to_owned(),
            label: field.label().to_owned(),
            field_type: field
                .ui
                .ui_type
                .unwrap_or_else(|| self.default_form_field_type(field))
                .to_owned(),
            value: current.to_json(),
            ..FormField::default()
        };

        if let Some(mut candidates) = self.prepare_candidates(ctx, entity, field)? {
            candidates.truncate(self.candidate_limit(field));
            form_field.candidate_values = candidates
                .into_iter()
                .map(|item| Candidate {
                    selected: current_id.as_deref() == Some(item.id.as_str()),
                    id:       item.id,
                    title:    item.title
                })
                .collect();
        }

        let urls: Vec<(&str, String)> = field
            .ui
            .actions
            .iter()
            .map(|action| (action.key, self.make_action_url(split_action(action.action).1)))
            .collect();
        let attributes = urls
            .iter()
            .map(|(key, url)| (*key, url.as_str()))
            .chain(field.ui.pass_through.iter().map(|(key, value)| (*key, *value)));
        pass_through(field.name, attributes, |key, value| form_field.set_attribute(key, value));
        Ok(form_field)
    }

    fn prepare_candidates(
        &self,
        ctx: &RenderContext,
        entity: &E,
        field: &FieldDescriptor<E>
    ) -> Result<Option<Vec<CandidateItem>>> {
        if field.ui.no_candidate {
            return Ok(None);
        }

        match self.candidates.candidates_for(ctx, entity, field) {
            Resolved::Value(items) => return Ok(Some(items)),
            Resolved::Absent => {}
            Resolved::Failed(err) => {
                tracing::warn!(
                    entity = E::TYPE_NAME,
                    field = field.name,
                    error = %err,
                    "candidate provider failed, falling back"
                );
            }
        }

        let Some(reference) = field.reference else {
            return Ok(None);
        };
        if let Some(constants) = reference.constants {
            return Ok(Some(constants.iter().map(CandidateItem::from).collect()));
        }
        let limit = self.candidate_limit(field);
        self.search.top(ctx, &reference, limit).map(Some)
    }

    fn candidate_limit(&self, field: &FieldDescriptor<E>) -> usize {
        field.ui.candidate_limit.unwrap_or(self.config.candidate_limit)
    }
}

fn pass_through<'a>(
    owner: &str,
    attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    mut set: impl FnMut(&str, Value) -> bool
) {
    for (key, value) in attributes {
        if !set(key, Value::from(value)) {
            tracing::warn!(owner, key, "attribute would replace a list, ignored");
        }
    }
}
