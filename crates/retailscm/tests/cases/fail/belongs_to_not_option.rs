// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use retailscm::Entity;

pub struct Warehouse;

#[derive(Entity)]
pub struct Shelf {
    #[id]
    pub id: Option<String>,
    #[belongs_to(Warehouse)]
    pub warehouse: Warehouse,
    #[version]
    pub version: i32,
}

fn main() {}
