//! # Application State
//!
//! Core business state for Pausenknopf. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── catalog: Catalog                  // immutable card/category data
//! ├── nav: Nav                          // current screen + back history
//! ├── favorites: FavoritesStore         // persisted favorite card ids
//! ├── audio: Arc<dyn AudioTransport>    // playback seam (null today)
//! ├── search: SearchState               // committed query + result ids
//! ├── selected_signs: BTreeSet         // checked exhaustion signs
//! └── status_message: String            // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::catalog::{Card, Catalog};
use crate::core::audio::AudioTransport;
use crate::core::favorites::FavoritesStore;
use crate::core::nav::Nav;

/// Committed search state for the exercises tab.
///
/// `results` is `None` while no search is active; `Some(vec![])` means a
/// search ran and found nothing. Result ids stay in catalog order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Option<Vec<String>>,
}

pub struct App {
    pub catalog: Catalog,
    pub nav: Nav,
    pub favorites: FavoritesStore,
    pub audio: Arc<dyn AudioTransport>,
    pub search: SearchState,
    /// Exhaustion signs currently checked in the questionnaire.
    /// BTreeSet so iteration order is stable for rendering and tests.
    pub selected_signs: BTreeSet<String>,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog, favorites: FavoritesStore, audio: Arc<dyn AudioTransport>) -> Self {
        Self {
            catalog,
            nav: Nav::new(),
            favorites,
            audio,
            search: SearchState::default(),
            selected_signs: BTreeSet::new(),
            status_message: String::from("Für Momente, die gerade viel sind"),
        }
    }

    /// Favorite cards resolved against the catalog, in the order they were
    /// added. Ids that no longer resolve are skipped.
    pub fn favorite_cards(&self) -> Vec<&Card> {
        self.favorites
            .card_ids()
            .iter()
            .filter_map(|id| self.catalog.card_by_id(id))
            .collect()
    }

    /// Committed search results resolved against the catalog.
    pub fn search_result_cards(&self) -> Option<Vec<&Card>> {
        self.search.results.as_ref().map(|ids| {
            ids.iter()
                .filter_map(|id| self.catalog.card_by_id(id))
                .collect()
        })
    }
}
