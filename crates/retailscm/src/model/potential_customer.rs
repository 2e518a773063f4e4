// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::NaiveDateTime;
use serde::Serialize;

use super::PotentialCustomerContactPerson;
use crate::Entity;

/// A prospect tracked by the sales team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Entity)]
#[serde(rename_all = "camelCase")]
#[entity(title = "潜在客户", action = "Edit:edit", action = "Delete:delete")]
#[has_many(PotentialCustomerContactPerson)]
pub struct PotentialCustomer {
    /// Id.
    #[id]
    pub id: Option<String>,

    /// Name.
    #[display]
    pub name: Option<String>,

    /// Mobile phone.
    #[pass(placeholder = "13900000000")]
    pub mobile: Option<String>,

    /// Description.
    pub description: Option<String>,

    /// Last update time.
    #[ui(group = "audit")]
    pub last_update_time: Option<NaiveDateTime>,

    /// Version.
    #[version]
    #[ui(ignore)]
    pub version: i32
}
