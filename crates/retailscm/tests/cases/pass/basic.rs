// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Minimal entity: id and version only.

use retailscm::{Entity, EntitySchema, RowMapper, Tokens};

#[derive(Debug, Default, Entity)]
pub struct Warehouse {
    #[id]
    pub id: Option<String>,

    #[version]
    pub version: i32,
}

fn main() {
    let _: &'static EntitySchema<Warehouse> = Warehouse::schema();
    let _: &str = Warehouse::TYPE_NAME;
    let _: fn(&dyn retailscm::Row) -> Warehouse = Warehouse::map_row;
    let _: Tokens<Warehouse> = WarehouseTokens::start();

    let warehouse = Warehouse::stub("W000001");
    assert!(warehouse.is_stub());
}
