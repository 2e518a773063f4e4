// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use serde::Serialize;

use super::PotentialCustomer;
use crate::Entity;

/// A person to talk to at a [`PotentialCustomer`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Entity)]
#[serde(rename_all = "camelCase")]
#[entity(title = "联系人", action = "Edit:edit")]
pub struct PotentialCustomerContactPerson {
    /// Id.
    #[id]
    pub id: Option<String>,

    /// Name.
    #[display]
    pub name: Option<String>,

    /// Mobile phone.
    pub mobile: Option<String>,

    /// Customer.
    #[belongs_to(PotentialCustomer)]
    #[ui(candidate_limit = 10)]
    pub potential_customer: Option<PotentialCustomer>,

    /// Description.
    pub description: Option<String>,

    /// Version.
    #[version]
    #[ui(ignore)]
    pub version: i32
}
