// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::{ConstantCodes, Entity, KeyValuePair};

/// Progress of a [`GoodsShelfStockCount`](super::GoodsShelfStockCount).
///
/// A constant code list: the id of a status is its code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Entity)]
#[serde(rename_all = "camelCase")]
#[entity(title = "盘点状态")]
pub struct StockCountStatus {
    /// Id.
    #[id]
    pub id: Option<String>,

    /// Name.
    #[display]
    pub name: Option<String>,

    /// Version.
    #[version]
    #[ui(ignore)]
    pub version: i32
}

impl StockCountStatus {
    /// Waiting for staff.
    pub const PENDING: &'static str = "PENDING";
    /// Shelves are being counted.
    pub const COUNTING: &'static str = "COUNTING";
    /// Count closed.
    pub const FINISHED: &'static str = "FINISHED";

    /// Status with `code`, named from the code list. `None` for unknown codes.
    #[must_use]
    pub fn of(code: &str) -> Option<Self> {
        let name = Self::name_of(code)?;
        Some(Self {
            id:      Some(code.to_owned()),
            name:    Some(name.to_owned()),
            version: 1
        })
    }

    /// Whether this status is `code`.
    #[must_use]
    pub fn is(&self, code: &str) -> bool {
        self.id.as_deref() == Some(code)
    }
}

impl ConstantCodes for StockCountStatus {
    const CODE_NAME_LIST: &'static [KeyValuePair] = &[
        KeyValuePair::new(Self::PENDING, "待盘点"),
        KeyValuePair::new(Self::COUNTING, "盘点中"),
        KeyValuePair::new(Self::FINISHED, "已完成")
    ];
}
