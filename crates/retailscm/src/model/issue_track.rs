// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;
use serde::Serialize;

use super::GoodsShelfStockCount;
use crate::Entity;

/// An issue found during a [`GoodsShelfStockCount`] and its follow-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Entity)]
#[serde(rename_all = "camelCase")]
#[entity(title = "盘点问题跟踪", action = "Edit:edit")]
pub struct StockCountIssueTrack {
    /// Id.
    #[id]
    pub id: Option<String>,

    /// Title.
    #[display]
    pub title: Option<String>,

    /// Count date.
    pub count_time: Option<NaiveDate>,

    /// Summary.
    #[ui(ui_type = "longtext")]
    pub summary: Option<String>,

    /// Stock count.
    #[belongs_to(GoodsShelfStockCount)]
    #[token(groups("default", "audit"))]
    #[ui(group = "relations", action(key = "transferUrl", value = "Transfer:transferToAnotherStockCount"))]
    pub stock_count: Option<GoodsShelfStockCount>,

    /// Version.
    #[version]
    #[ui(ignore)]
    pub version: i32
}
