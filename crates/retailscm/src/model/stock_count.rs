// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;
use serde::Serialize;

use super::{StockCountIssueTrack, StockCountStatus};
use crate::Entity;

/// One stock count of a goods shelf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Entity)]
#[serde(rename_all = "camelCase")]
#[entity(title = "货架盘点", action = "Edit:edit", action = "Delete:delete")]
#[has_many(StockCountIssueTrack)]
pub struct GoodsShelfStockCount {
    /// Id.
    #[id]
    pub id: Option<String>,

    /// Title.
    #[display]
    pub title: Option<String>,

    /// Count date.
    pub count_time: Option<NaiveDate>,

    /// Summary.
    pub summary: Option<String>,

    /// Status.
    #[belongs_to(StockCountStatus, constant)]
    #[token(groups("default", "audit"))]
    pub status: Option<StockCountStatus>,

    /// Version.
    #[version]
    #[ui(ignore)]
    pub version: i32
}

impl GoodsShelfStockCount {
    /// Whether the count is closed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|status| status.is(StockCountStatus::FINISHED))
    }
}
