//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::core::audio::NullAudio;
use crate::core::favorites::FavoritesStore;
use crate::core::state::App;

static STORE_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A fresh directory path under the system temp dir that no other test
/// uses. The directory itself is only created once something is saved.
pub fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!(
        "pausenknopf-test-{}-{}",
        std::process::id(),
        STORE_COUNTER.fetch_add(1, Ordering::Relaxed)
    ))
}

/// Creates a test App with the embedded catalog, an empty favorites store
/// backed by a scratch directory, and no-op audio.
pub fn test_app() -> App {
    let catalog = Catalog::load_default().unwrap();
    let favorites = FavoritesStore::open(scratch_dir());
    App::new(catalog, favorites, Arc::new(NullAudio))
}
