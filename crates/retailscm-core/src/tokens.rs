// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Relation tokens.
//!
//! A [`TokenSet`] tells the load layer which relations of one owner entity
//! to hydrate for the current request. It is built with [`Tokens`], a
//! typed builder over the tokens an entity declares in its schema:
//!
//! | Declared by | Token name | Kind |
//! |-------------|------------|------|
//! | `#[belongs_to(Target)] field` | `field` (camel case) | [`TokenKind::Object`] |
//! | `#[has_many(Target)]` | `targetList` | [`TokenKind::List`] |
//!
//! A set is bound to exactly one owner name. [`TokenSet::check`] against a
//! different owner is always `false`, unless the set carries [`ALL`].
//!
//! ```rust,ignore
//! let tokens = StockCountIssueTrackTokens::start().with_stock_count().done();
//! assert!(StockCountIssueTrackTokens::check_options(Some(&tokens), "stockCount"));
//! assert!(!GoodsShelfStockCountTokens::check_options(Some(&tokens), "stockCount"));
//! ```

use std::{collections::BTreeSet, fmt, marker::PhantomData};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::Entity;

/// Key that makes every check pass. Never hand this to regular users.
pub const ALL: &str = "__all__";

/// Options key holding the owner-object name.
pub const OWNER_KEY: &str = "__owner__";

/// Marker asking the load layer to analyze every list.
pub const ALL_LISTS_ANALYZE: &str = "__analyze_all_lists__";

/// Groups a token belongs to when none are declared.
pub const DEFAULT_GROUPS: &[&str] = &["default"];

/// What a token loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single referenced object.
    Object,
    /// A list of child objects.
    List
}

/// A token declared by an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDecl {
    /// Token name.
    pub name:   &'static str,
    /// What the token loads.
    pub kind:   TokenKind,
    /// View groups the token applies to.
    pub groups: &'static [&'static str]
}

impl TokenDecl {
    /// Object token in the default group.
    pub const fn object(name: &'static str) -> Self {
        Self {
            name,
            kind: TokenKind::Object,
            groups: DEFAULT_GROUPS
        }
    }

    /// List token in the default group.
    pub const fn list(name: &'static str) -> Self {
        Self {
            name,
            kind: TokenKind::List,
            groups: DEFAULT_GROUPS
        }
    }

    /// Replace the applicable groups.
    pub const fn in_groups(mut self, groups: &'static [&'static str]) -> Self {
        self.groups = groups;
        self
    }

    /// Whether a request for `group` selects this token.
    pub fn applies_to(&self, group: &str) -> bool {
        self.groups.iter().any(|declared| *declared == group)
    }
}

/// A finished set of tokens bound to one owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    owner: Option<String>,
    keys:  BTreeSet<String>
}

impl TokenSet {
    /// Empty set bound to `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
            keys:  BTreeSet::new()
        }
    }

    /// Set carrying only [`ALL`]; passes every check.
    #[must_use]
    pub fn everything() -> Self {
        Self {
            owner: None,
            keys:  BTreeSet::from([ALL.to_owned()])
        }
    }

    /// Owner-object name.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Token keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Whether `key` is present, ignoring the owner.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Whether the set carries [`ALL`].
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.contains(ALL)
    }

    /// Whether `key` should be loaded for `owner`.
    #[must_use]
    pub fn check(&self, owner: &str, key: &str) -> bool {
        if self.is_all() {
            return true;
        }
        self.owner.as_deref() == Some(owner) && self.contains(key)
    }

    fn insert(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    /// Map form handed to the search layer.
    #[must_use]
    pub fn to_options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        if let Some(owner) = &self.owner {
            options.insert(OWNER_KEY.to_owned(), Value::from(owner.as_str()));
        }
        for key in &self.keys {
            options.insert(key.clone(), Value::Bool(true));
        }
        options
    }

    /// Rebuild a set from its map form. A key is present whatever its value,
    /// so `false` and `null` entries still count.
    #[must_use]
    pub fn from_options(options: &Map<String, Value>) -> Self {
        let mut set = Self::default();
        for (key, value) in options {
            if key == OWNER_KEY {
                set.owner = value.as_str().map(str::to_owned);
            } else {
                set.insert(key.clone());
            }
        }
        set
    }
}

/// Typed token builder for entity `E`.
pub struct Tokens<E> {
    set:     TokenSet,
    _entity: PhantomData<fn() -> E>
}

impl<E> Clone for Tokens<E> {
    fn clone(&self) -> Self {
        Self {
            set:     self.set.clone(),
            _entity: PhantomData
        }
    }
}

impl<E> fmt::Debug for Tokens<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tokens").field(&self.set).finish()
    }
}

impl<E: Entity> Tokens<E> {
    /// Empty builder bound to `E`'s owner name.
    #[must_use]
    pub fn start() -> Self {
        Self {
            set:     TokenSet::new(E::OWNER),
            _entity: PhantomData
        }
    }

    /// Continue building from an existing set.
    #[must_use]
    pub fn of(set: TokenSet) -> Self {
        Self {
            set,
            _entity: PhantomData
        }
    }

    /// Tokens `E` declares.
    #[must_use]
    pub fn declared() -> &'static [TokenDecl] {
        E::schema().tokens
    }

    /// Add `token` unconditionally.
    #[must_use]
    pub fn with(mut self, token: &str) -> Self {
        self.set.insert(token);
        self
    }

    /// Add a list token by name.
    #[must_use]
    pub fn with_token_from_list_name(self, list_name: &str) -> Self {
        self.with(list_name)
    }

    /// Add arbitrary tokens.
    #[must_use]
    pub fn merge<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        for token in tokens {
            self.set.insert(token);
        }
        self
    }

    /// Every declared token plus `tokens`.
    #[must_use]
    pub fn merge_all<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self::all_tokens().merge(tokens)
    }

    /// Every declared token.
    #[must_use]
    pub fn all_tokens() -> Self {
        Self::start().merge(Self::declared().iter().map(|decl| decl.name))
    }

    /// Declared object tokens only.
    #[must_use]
    pub fn without_lists_tokens() -> Self {
        Self::start().merge(
            Self::declared()
                .iter()
                .filter(|decl| decl.kind == TokenKind::Object)
                .map(|decl| decl.name)
        )
    }

    /// Declared tokens applicable to any of `groups`; all of them when
    /// `groups` is empty.
    #[must_use]
    pub fn load_group_tokens(groups: &[&str]) -> Self {
        if groups.is_empty() {
            return Self::all_tokens();
        }
        Self::start().merge(
            Self::declared()
                .iter()
                .filter(|decl| groups.iter().any(|group| decl.applies_to(group)))
                .map(|decl| decl.name)
        )
    }

    /// Add the [`ALL_LISTS_ANALYZE`] marker.
    #[must_use]
    pub fn analyze_all_lists(self) -> Self {
        self.with(ALL_LISTS_ANALYZE)
    }

    /// Finish building.
    #[must_use]
    pub fn done(self) -> TokenSet {
        self.set
    }

    /// Finished set with every declared token.
    #[must_use]
    pub fn all() -> TokenSet {
        Self::all_tokens().done()
    }

    /// Finished set with the declared object tokens.
    #[must_use]
    pub fn without_lists() -> TokenSet {
        Self::without_lists_tokens().done()
    }

    /// Finished set with no tokens.
    #[must_use]
    pub fn empty() -> TokenSet {
        Self::start().done()
    }

    /// Whether `key` should be loaded for `E`.
    ///
    /// `false` for missing options, a different owner or a missing key;
    /// `true` whenever the options carry [`ALL`].
    #[must_use]
    pub fn check_options(options: Option<&TokenSet>, key: &str) -> bool {
        options.is_some_and(|set| set.check(E::OWNER, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EntitySchema, PageHints};

    #[derive(Debug, Default)]
    struct Track {
        id:      Option<String>,
        version: i32
    }

    impl Entity for Track {
        const TYPE_NAME: &'static str = "Track";
        const OWNER: &'static str = "track";

        fn schema() -> &'static EntitySchema<Self> {
            static SCHEMA: EntitySchema<Track> = EntitySchema {
                type_name: "Track",
                owner:     "track",
                table:     "track_data",
                processor: "trackManager",
                page:      PageHints::EMPTY,
                fields:    &[],
                tokens:    &[
                    TokenDecl::object("stockCount"),
                    TokenDecl::object("reviewer").in_groups(&["audit"]),
                    TokenDecl::list("noteList").in_groups(&["default", "audit"])
                ]
            };
            &SCHEMA
        }

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn set_id(&mut self, id: String) {
            self.id = Some(id);
        }

        fn version(&self) -> i32 {
            self.version
        }

        fn set_version(&mut self, version: i32) {
            self.version = version;
        }
    }

    type TrackTokens = Tokens<Track>;

    fn keys(set: &TokenSet) -> Vec<&str> {
        set.keys().collect()
    }

    #[test]
    fn start_is_bound_to_owner() {
        let set = TrackTokens::empty();
        assert_eq!(set.owner(), Some("track"));
        assert_eq!(set.keys().count(), 0);
    }

    #[test]
    fn empty_groups_load_everything() {
        assert_eq!(TrackTokens::load_group_tokens(&[]).done(), TrackTokens::all());
    }

    #[test]
    fn groups_select_matching_tokens() {
        let set = TrackTokens::load_group_tokens(&["audit"]).done();
        assert_eq!(keys(&set), vec!["noteList", "reviewer"]);
        let set = TrackTokens::load_group_tokens(&["default"]).done();
        assert_eq!(keys(&set), vec!["noteList", "stockCount"]);
        let set = TrackTokens::load_group_tokens(&["unknown"]).done();
        assert!(keys(&set).is_empty());
    }

    #[test]
    fn without_lists_skips_list_tokens() {
        let set = TrackTokens::without_lists();
        assert_eq!(keys(&set), vec!["reviewer", "stockCount"]);
    }

    #[test]
    fn check_requires_matching_owner() {
        let set = TokenSet::new("goodsShelfStockCount");
        let set = Tokens::<Track>::of(set).with("stockCount").done();
        assert!(!TrackTokens::check_options(Some(&set), "stockCount"));
        assert!(set.check("goodsShelfStockCount", "stockCount"));
    }

    #[test]
    fn check_missing_options_or_key() {
        let set = TrackTokens::start().with("stockCount").done();
        assert!(TrackTokens::check_options(Some(&set), "stockCount"));
        assert!(!TrackTokens::check_options(Some(&set), "noteList"));
        assert!(!TrackTokens::check_options(None, "stockCount"));
    }

    #[test]
    fn all_marker_overrides_owner() {
        let set = TokenSet::everything();
        assert!(TrackTokens::check_options(Some(&set), "anything"));
    }

    #[test]
    fn merge_all_adds_extra_tokens() {
        let set = TrackTokens::merge_all(["extra"]).done();
        assert!(set.contains("extra"));
        assert!(set.contains("stockCount"));
    }

    #[test]
    fn analyze_and_list_name() {
        let set = TrackTokens::start()
            .with_token_from_list_name("noteList")
            .analyze_all_lists()
            .done();
        assert!(set.contains(ALL_LISTS_ANALYZE));
        assert!(set.contains("noteList"));
    }

    #[test]
    fn options_map_shape() {
        let set = TrackTokens::start().with("stockCount").done();
        let options = set.to_options();
        assert_eq!(options.get(OWNER_KEY), Some(&Value::from("track")));
        assert_eq!(options.get("stockCount"), Some(&Value::Bool(true)));
        assert_eq!(TokenSet::from_options(&options), set);
    }

    #[test]
    fn from_options_keeps_keys_whatever_their_value() {
        let mut options = Map::new();
        options.insert(OWNER_KEY.into(), Value::from("track"));
        options.insert("stockCount".into(), Value::Bool(false));
        options.insert("status".into(), Value::Null);
        let set = TokenSet::from_options(&options);
        assert!(set.check("track", "stockCount"));
        assert!(set.check("track", "status"));
        assert!(!set.check("shelf", "stockCount"));
    }
}
