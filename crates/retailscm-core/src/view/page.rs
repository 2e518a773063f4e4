// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Page descriptors sent to the console.
//!
//! Serialized shape of a form page:
//!
//! ```json
//! {
//!   "id": "PotentialCustomerContactPerson",
//!   "pageTitle": "联系人",
//!   "actionList": [{ "title": "Edit", "code": "edit", "linkToUrl": "..." }],
//!   "groupList": [{
//!     "name": "default",
//!     "fieldList": [{
//!       "name": "potentialCustomer",
//!       "label": "潜在客户",
//!       "type": "text",
//!       "value": "PC000001",
//!       "candidateValues": [{ "id": "PC000001", "title": "Acme", "selected": true }]
//!     }]
//!   }]
//! }
//! ```
//!
//! Pass-through attributes are flattened next to the fixed keys. An attribute
//! named like a fixed key overwrites that key instead, so every key appears
//! once.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A rendered view: a form page, or the entity data as-is for any other
/// page type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum View {
    /// Form page.
    Form(Page),
    /// Raw entity data.
    Data(Value)
}

impl View {
    /// The form page, if this is one.
    #[must_use]
    pub fn as_page(&self) -> Option<&Page> {
        match self {
            Self::Form(page) => Some(page),
            Self::Data(_) => None
        }
    }
}

/// A form page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page id (entity type name).
    pub id:          String,
    /// Page title.
    pub page_title:  String,
    /// Page actions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_list: Vec<Action>,
    /// Field groups in order of first appearance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_list:  Vec<FieldGroup>,
    /// Pass-through attributes.
    #[serde(flatten)]
    pub extra:       Map<String, Value>
}

impl Page {
    /// Group named `name`, appended when missing.
    pub fn group_mut(&mut self, name: &str) -> &mut FieldGroup {
        let index = match self.group_list.iter().position(|group| group.name == name) {
            Some(index) => index,
            None => {
                self.group_list.push(FieldGroup::new(name));
                self.group_list.len() - 1
            }
        };
        &mut self.group_list[index]
    }

    /// Group named `name`.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&FieldGroup> {
        self.group_list.iter().find(|group| group.name == name)
    }

    /// Field named `name`, in any group.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.group_list
            .iter()
            .flat_map(|group| &group.field_list)
            .find(|field| field.name == name)
    }

    /// Action with `code`.
    #[must_use]
    pub fn action(&self, code: &str) -> Option<&Action> {
        self.action_list.iter().find(|action| action.code == code)
    }

    /// Set a page attribute. `id` and `pageTitle` are overwritten in place.
    ///
    /// Returns `false` for `actionList` and `groupList`, which are left as is.
    pub fn set_attribute(&mut self, key: &str, value: Value) -> bool {
        match key {
            "id" => self.id = text(value),
            "pageTitle" => self.page_title = text(value),
            "actionList" | "groupList" => return false,
            _ => {
                self.extra.insert(key.to_owned(), value);
            }
        }
        true
    }
}

/// A named group of form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup {
    /// Group name.
    pub name:       String,
    /// Fields in declaration order.
    #[serde(default)]
    pub field_list: Vec<FormField>
}

impl FieldGroup {
    /// Empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            field_list: Vec::new()
        }
    }
}

/// One form field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Field name.
    pub name:             String,
    /// Field label.
    pub label:            String,
    /// UI field type.
    #[serde(rename = "type")]
    pub field_type:       String,
    /// Current value; left out when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value:            Option<Value>,
    /// Selectable options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidate_values: Vec<Candidate>,
    /// Field-action URLs and pass-through attributes.
    #[serde(flatten)]
    pub extra:            Map<String, Value>
}

impl FormField {
    /// The candidate marked selected.
    #[must_use]
    pub fn selected(&self) -> Option<&Candidate> {
        self.candidate_values.iter().find(|candidate| candidate.selected)
    }

    /// Set a field attribute. `name`, `label`, `type` and `value` are
    /// overwritten in place.
    ///
    /// Returns `false` for `candidateValues`, which is left as is.
    pub fn set_attribute(&mut self, key: &str, value: Value) -> bool {
        match key {
            "name" => self.name = text(value),
            "label" => self.label = text(value),
            "type" => self.field_type = text(value),
            "value" => self.value = Some(value),
            "candidateValues" => return false,
            _ => {
                self.extra.insert(key.to_owned(), value);
            }
        }
        true
    }
}

fn text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string()
    }
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Option id.
    pub id:       String,
    /// Option title.
    pub title:    Option<String>,
    /// Whether this is the current value.
    pub selected: bool
}

/// A page action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Button title.
    pub title:       String,
    /// Action code.
    pub code:        String,
    /// Target URL.
    pub link_to_url: String
}
