// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Token filter integration tests.

use retailscm::{
    Entity, TokenSet,
    model::{
        GoodsShelfStockCount, GoodsShelfStockCountTokens, GoodsShelfStockCountTokensExt,
        PotentialCustomerContactPersonTokens, PotentialCustomerTokens, PotentialCustomerTokensExt,
        StockCountIssueTrack, StockCountIssueTrackTokens, StockCountIssueTrackTokensExt,
        StockCountStatusTokens
    },
    tokens::{ALL_LISTS_ANALYZE, OWNER_KEY}
};
use serde_json::json;

fn keys(set: &TokenSet) -> Vec<&str> {
    set.keys().collect()
}

#[test]
fn generated_helpers_add_named_tokens() {
    let set = StockCountIssueTrackTokens::start().with_stock_count().done();

    assert_eq!(set.owner(), Some(StockCountIssueTrack::OWNER));
    assert!(StockCountIssueTrackTokens::check_options(Some(&set), "stockCount"));
    assert!(!StockCountIssueTrackTokens::check_options(Some(&set), "summary"));
}

#[test]
fn list_helpers_use_list_token_names() {
    let set = GoodsShelfStockCountTokens::start()
        .with_stock_count_issue_track_list()
        .done();
    assert_eq!(keys(&set), vec!["stockCountIssueTrackList"]);

    let customers = PotentialCustomerTokens::start()
        .with_potential_customer_contact_person_list()
        .done();
    assert!(PotentialCustomerTokens::check_options(
        Some(&customers),
        "potentialCustomerContactPersonList"
    ));
}

#[test]
fn tokens_of_the_referenced_entity() {
    let nested = StockCountIssueTrackTokens::start()
        .with_stock_count_tokens()
        .with_status()
        .done();
    assert_eq!(nested.owner(), Some(GoodsShelfStockCount::OWNER));
    assert!(GoodsShelfStockCountTokens::check_options(Some(&nested), "status"));
}

#[test]
fn wrong_owner_never_matches() {
    let set = StockCountIssueTrackTokens::start().with_stock_count().done();

    assert!(!GoodsShelfStockCountTokens::check_options(Some(&set), "stockCount"));
    assert!(!StockCountIssueTrackTokens::check_options(None, "stockCount"));
}

#[test]
fn everything_overrides_owner() {
    let set = TokenSet::everything();
    assert!(GoodsShelfStockCountTokens::check_options(Some(&set), "anything"));
    assert!(StockCountIssueTrackTokens::check_options(Some(&set), "stockCount"));
}

#[test]
fn declared_tokens_follow_relations() {
    let declared: Vec<_> = GoodsShelfStockCountTokens::declared()
        .iter()
        .map(|decl| decl.name)
        .collect();
    assert_eq!(declared, vec!["status", "stockCountIssueTrackList"]);
    assert!(StockCountStatusTokens::declared().is_empty());
}

#[test]
fn load_group_tokens_filters_by_view_group() {
    let audit = GoodsShelfStockCountTokens::load_group_tokens(&["audit"]).done();
    assert_eq!(keys(&audit), vec!["status"]);

    let default = GoodsShelfStockCountTokens::load_group_tokens(&["default"]).done();
    assert_eq!(keys(&default), vec!["status", "stockCountIssueTrackList"]);

    let unknown = GoodsShelfStockCountTokens::load_group_tokens(&["report"]).done();
    assert!(keys(&unknown).is_empty());
}

#[test]
fn no_groups_means_all_tokens() {
    assert_eq!(
        GoodsShelfStockCountTokens::load_group_tokens(&[]).done(),
        GoodsShelfStockCountTokens::all()
    );
}

#[test]
fn without_lists_keeps_object_tokens() {
    assert_eq!(keys(&GoodsShelfStockCountTokens::without_lists()), vec!["status"]);
    assert!(keys(&PotentialCustomerContactPersonTokens::without_lists()).contains(&"potentialCustomer"));
    assert!(keys(&GoodsShelfStockCountTokens::empty()).is_empty());
}

#[test]
fn merge_and_list_names() {
    let set = StockCountIssueTrackTokens::merge_all(["extra"])
        .with_token_from_list_name("photoList")
        .analyze_all_lists()
        .done();
    assert_eq!(
        keys(&set),
        vec![ALL_LISTS_ANALYZE, "extra", "photoList", "stockCount"]
    );
}

#[test]
fn options_round_trip_through_search_layer() {
    let set = StockCountIssueTrackTokens::start().with_stock_count().done();
    let options = set.to_options();

    assert_eq!(
        serde_json::Value::Object(options.clone()),
        json!({ OWNER_KEY: "stockCountIssueTrack", "stockCount": true })
    );
    assert_eq!(TokenSet::from_options(&options), set);
}
