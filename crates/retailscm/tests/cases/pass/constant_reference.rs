// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[belongs_to(Target, constant)]` requires `ConstantCodes` on the target.

use retailscm::{ConstantCodes, Entity, KeyValuePair};

#[derive(Debug, Default, Entity)]
pub struct Priority {
    #[id]
    pub id: Option<String>,

    #[version]
    pub version: i32,
}

impl ConstantCodes for Priority {
    const CODE_NAME_LIST: &'static [KeyValuePair] = &[
        KeyValuePair::new("LOW", "Low"),
        KeyValuePair::new("HIGH", "High"),
    ];
}

#[derive(Debug, Default, Entity)]
pub struct Ticket {
    #[id]
    pub id: Option<String>,

    #[belongs_to(Priority, constant)]
    pub priority: Option<Priority>,

    #[version]
    pub version: i32,
}

fn main() {
    let field = Ticket::schema().field("priority").unwrap();
    assert!(field.is_constant_reference());
}
