//! # Card Search
//!
//! Substring search over the card catalog. Pure and synchronous; the TUI
//! debounces keystrokes before committing a query here.
//!
//! A query that normalizes to the empty string matches nothing and means
//! "no active search", which callers keep distinct from a real search with
//! zero hits.

use crate::catalog::{Card, Catalog};

/// Canonical query form: surrounding whitespace stripped, Unicode-lowercased.
/// Two queries with the same normal form are the same search.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Cards matching `query`, lazily, in catalog order.
///
/// A card matches when the normalized query is a substring of its
/// normalized title, body text, or any hashtag. An empty normalized query
/// yields nothing.
pub fn matches<'a>(catalog: &'a Catalog, query: &str) -> impl Iterator<Item = &'a Card> {
    let needle = normalize(query);
    catalog
        .cards()
        .iter()
        .filter(move |card| !needle.is_empty() && card_matches(card, &needle))
}

/// Collected [`matches`], for callers that want the whole result set.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Card> {
    matches(catalog, query).collect()
}

fn card_matches(card: &Card, needle: &str) -> bool {
    card.title.to_lowercase().contains(needle)
        || card.text.to_lowercase().contains(needle)
        || card
            .hashtags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
