// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Records of the admin console.
//!
//! | Entity | Relations |
//! |--------|-----------|
//! | [`PotentialCustomer`] | has many [`PotentialCustomerContactPerson`] |
//! | [`PotentialCustomerContactPerson`] | belongs to [`PotentialCustomer`] |
//! | [`GoodsShelfStockCount`] | status [`StockCountStatus`], has many [`StockCountIssueTrack`] |
//! | [`StockCountIssueTrack`] | belongs to [`GoodsShelfStockCount`] |
//! | [`StockCountStatus`] | constant code list |

mod contact_person;
mod issue_track;
mod potential_customer;
mod stock_count;
mod stock_count_status;

pub use contact_person::{
    PotentialCustomerContactPerson, PotentialCustomerContactPersonTokens,
    PotentialCustomerContactPersonTokensExt
};
pub use issue_track::{
    StockCountIssueTrack, StockCountIssueTrackTokens, StockCountIssueTrackTokensExt
};
pub use potential_customer::{
    PotentialCustomer, PotentialCustomerTokens, PotentialCustomerTokensExt
};
pub use stock_count::{GoodsShelfStockCount, GoodsShelfStockCountTokens, GoodsShelfStockCountTokensExt};
pub use stock_count_status::{StockCountStatus, StockCountStatusTokens};
