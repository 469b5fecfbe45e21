//! # Favorites Persistence
//!
//! The persisted set of favorite card ids, stored as a single JSON file
//! (`favorites.json`) in the app data directory (`~/.pausenknopf/` by
//! default).
//!
//! The in-memory set is authoritative: it is loaded once at startup and
//! written through after every toggle. A missing or unreadable file means
//! "no favorites yet", never an error, and a failed write is logged and
//! swallowed so the running session keeps working.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// File name of the favorites store inside the data directory.
pub const FAVORITES_FILE: &str = "favorites.json";

/// On-disk shape of the favorites file.
#[derive(Serialize, Deserialize, Default, Debug)]
struct FavoritesData {
    saved_at: i64,
    card_ids: Vec<String>,
}

/// Favorite card ids with write-through persistence.
///
/// Semantically a set; insertion order is kept so the favorites list shows
/// cards in the order they were added.
pub struct FavoritesStore {
    card_ids: Vec<String>,
    dir: PathBuf,
}

impl FavoritesStore {
    /// Returns `~/.pausenknopf/`, creating it if needed.
    pub fn default_dir() -> io::Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
        let dir = home.join(".pausenknopf");
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Open the store backed by `dir`, loading any existing favorites.
    /// Absent or malformed data collapses to an empty set.
    pub fn open(dir: PathBuf) -> Self {
        let card_ids = load_card_ids(&dir.join(FAVORITES_FILE));
        debug!("Favorites loaded: {} card(s)", card_ids.len());
        Self { card_ids, dir }
    }

    pub fn is_favorite(&self, card_id: &str) -> bool {
        self.card_ids.iter().any(|id| id == card_id)
    }

    /// Flip membership of `card_id`. Returns whether the card is a favorite
    /// afterwards. Applying the same toggle twice restores the prior state.
    pub fn toggle(&mut self, card_id: &str) -> bool {
        if self.is_favorite(card_id) {
            self.card_ids.retain(|id| id != card_id);
            false
        } else {
            self.card_ids.push(card_id.to_string());
            true
        }
    }

    /// Favorite card ids in insertion order.
    pub fn card_ids(&self) -> &[String] {
        &self.card_ids
    }

    pub fn len(&self) -> usize {
        self.card_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.card_ids.is_empty()
    }

    /// Write the current set to disk. Failures are logged and swallowed;
    /// the in-memory set stays authoritative either way.
    pub fn save(&self) {
        let data = FavoritesData {
            saved_at: Utc::now().timestamp(),
            card_ids: self.card_ids.clone(),
        };
        if let Err(e) = self.try_save(&data) {
            warn!("Failed to save favorites: {}", e);
        } else {
            debug!("Favorites saved: {} card(s)", self.card_ids.len());
        }
    }

    fn try_save(&self, data: &FavoritesData) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        atomic_write_json(&self.dir.join(FAVORITES_FILE), data)
    }
}

fn load_card_ids(path: &Path) -> Vec<String> {
    if !path.exists() {
        return Vec::new();
    }
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to read favorites file: {}", e);
            return Vec::new();
        }
    };
    match serde_json::from_str::<FavoritesData>(&json) {
        Ok(data) => data.card_ids,
        Err(e) => {
            warn!("Favorites file is malformed, starting empty: {}", e);
            Vec::new()
        }
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
