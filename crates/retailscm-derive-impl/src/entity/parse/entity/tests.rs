// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use syn::DeriveInput;

use super::*;

fn parse(input: DeriveInput) -> EntityDef {
    EntityDef::from_derive_input(&input).unwrap()
}

#[test]
fn defaults_from_struct_name() {
    let def = parse(syn::parse_quote! {
        pub struct StockCountIssueTrack {
            #[id]
            pub id: Option<String>,
            #[version]
            pub version: i32,
        }
    });
    assert_eq!(def.owner, "stockCountIssueTrack");
    assert_eq!(def.table, "stock_count_issue_track_data");
    assert_eq!(def.processor, "stockCountIssueTrackManager");
    assert!(def.title.is_none());
    assert!(def.display_field().is_none());
}

#[test]
fn explicit_overrides() {
    let def = parse(syn::parse_quote! {
        #[entity(table = "track", owner = "issueTrack", processor = "trackManager")]
        #[entity(title = "盘点问题", page_type = "detail")]
        pub struct StockCountIssueTrack {
            #[id]
            pub id: Option<String>,
            #[version]
            pub version: i32,
        }
    });
    assert_eq!(def.table, "track");
    assert_eq!(def.owner, "issueTrack");
    assert_eq!(def.processor, "trackManager");
    assert_eq!(def.title.as_deref(), Some("盘点问题"));
    assert_eq!(def.page_type.as_deref(), Some("detail"));
}

#[test]
fn processor_follows_owner_override() {
    let def = parse(syn::parse_quote! {
        #[entity(owner = "issueTrack")]
        pub struct StockCountIssueTrack {
            #[id]
            pub id: Option<String>,
            #[version]
            pub version: i32,
        }
    });
    assert_eq!(def.processor, "issueTrackManager");
}

#[test]
fn actions_keep_order() {
    let def = parse(syn::parse_quote! {
        #[entity(action = "Edit:edit", action = "Delete:delete")]
        pub struct Shelf {
            #[id]
            pub id: Option<String>,
            #[version]
            pub version: i32,
        }
    });
    assert_eq!(def.actions, vec!["Edit:edit", "Delete:delete"]);
}

#[test]
fn roles_are_located() {
    let def = parse(syn::parse_quote! {
        pub struct Shelf {
            #[field(skip)]
            pub cache: Vec<u8>,
            #[display]
            pub title: Option<String>,
            #[id]
            pub id: Option<String>,
            #[version]
            pub version: i32,
        }
    });
    assert_eq!(def.fields.len(), 3);
    assert_eq!(def.id_field().name_str(), "id");
    assert_eq!(def.version_field().name_str(), "version");
    assert_eq!(def.display_field().unwrap().name_str(), "title");
}

#[test]
fn has_many_and_pass() {
    let def = parse(syn::parse_quote! {
        #[has_many(StockCountIssueTrack)]
        #[pass(layout = "wide")]
        pub struct GoodsShelfStockCount {
            #[id]
            pub id: Option<String>,
            #[version]
            pub version: i32,
        }
    });
    assert_eq!(def.has_many_relations().len(), 1);
    assert_eq!(
        EntityDef::list_token(&def.has_many_relations()[0]),
        "stockCountIssueTrackList"
    );
    assert_eq!(def.pass, vec![("layout".to_string(), "wide".to_string())]);
}

#[test]
fn relation_fields_are_filtered() {
    let def = parse(syn::parse_quote! {
        pub struct Contact {
            #[id]
            pub id: Option<String>,
            pub name: Option<String>,
            #[belongs_to(PotentialCustomer)]
            pub potential_customer: Option<PotentialCustomer>,
            #[version]
            pub version: i32,
        }
    });
    let relations: Vec<_> = def.relation_fields().map(FieldDef::name_str).collect();
    assert_eq!(relations, vec!["potential_customer"]);
}

#[test]
fn ident_with_suffix() {
    let def = parse(syn::parse_quote! {
        pub struct Shelf {
            #[id]
            pub id: Option<String>,
            #[version]
            pub version: i32,
        }
    });
    assert_eq!(def.ident_with("", "Tokens").to_string(), "ShelfTokens");
}

#[test]
fn missing_id_fails() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Shelf {
            #[version]
            pub version: i32,
        }
    };
    assert!(EntityDef::from_derive_input(&input).is_err());
}

#[test]
fn duplicate_id_fails() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Shelf {
            #[id]
            pub id: Option<String>,
            #[id]
            pub code: Option<String>,
            #[version]
            pub version: i32,
        }
    };
    assert!(EntityDef::from_derive_input(&input).is_err());
}

#[test]
fn missing_version_fails() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Shelf {
            #[id]
            pub id: Option<String>,
        }
    };
    assert!(EntityDef::from_derive_input(&input).is_err());
}

#[test]
fn two_display_fields_fail() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Shelf {
            #[id]
            pub id: Option<String>,
            #[display]
            pub title: Option<String>,
            #[display]
            pub code: Option<String>,
            #[version]
            pub version: i32,
        }
    };
    assert!(EntityDef::from_derive_input(&input).is_err());
}

#[test]
fn generic_struct_fails() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Shelf<T> {
            #[id]
            pub id: Option<String>,
            #[version]
            pub version: i32,
            pub extra: T,
        }
    };
    assert!(EntityDef::from_derive_input(&input).is_err());
}

#[test]
fn enum_fails() {
    let input: DeriveInput = syn::parse_quote! {
        pub enum Shelf {
            A,
        }
    };
    assert!(EntityDef::from_derive_input(&input).is_err());
}

#[test]
fn tuple_struct_fails() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Shelf(Option<String>, i32);
    };
    let err = EntityDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("named fields"));
}
