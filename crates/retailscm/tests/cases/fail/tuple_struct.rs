// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use retailscm::Entity;

#[derive(Entity)]
pub struct Warehouse(Option<String>, i32);

fn main() {}
