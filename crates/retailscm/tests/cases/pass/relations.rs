// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[belongs_to]`, `#[has_many]` and `#[token]`.

use retailscm::{Entity, TokenSet};

#[derive(Debug, Default, Entity)]
#[has_many(Shelf)]
pub struct Store {
    #[id]
    pub id: Option<String>,

    #[display]
    pub name: Option<String>,

    #[version]
    pub version: i32,
}

#[derive(Debug, Default, Entity)]
pub struct Shelf {
    #[id]
    pub id: Option<String>,

    #[belongs_to(Store)]
    #[token(groups("default", "layout"))]
    pub store: Option<Store>,

    #[version]
    pub version: i32,
}

fn main() {
    let _: TokenSet = StoreTokens::start().with_shelf_list().done();
    let _: TokenSet = ShelfTokens::start().with_store().done();
    let _: StoreTokens = ShelfTokens::start().with_store_tokens();

    // trait methods are generated for every relation
    fn _check_shelf_ext<T: ShelfTokensExt>(tokens: T) -> T {
        tokens.with_store()
    }
    fn _check_store_ext<T: StoreTokensExt>(tokens: T) -> T {
        tokens.with_shelf_list()
    }
}
