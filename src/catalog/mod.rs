//! # Catalog
//!
//! The immutable content dataset: categories, cards, recovery types,
//! situations and affirmations, plus id-based lookups over them.
//!
//! The dataset ships embedded in the binary (`assets/catalog.json`) and can
//! be swapped for an external file via config or `--catalog`. All
//! cross-references between entities are string ids resolved through the
//! index maps here; referential integrity is validated once at load time so
//! lookups during navigation can never hard-fail.
//!
//! Submodules:
//! - [`search`]: substring search over cards
//! - [`recovery`]: recovery-type scoring for the questionnaire

pub mod recovery;
pub mod search;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

const DEFAULT_CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

/// A content category ("Mein Herz rast", "Ich brauche Ruhe", ...).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub description: String,
    pub label: String,
    pub keyword: String,
    pub short_description: String,
    pub badge_labels: Vec<String>,
}

/// A single coping exercise. `text` is preformatted: embedded newlines are
/// part of the content and are rendered as-is.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Card {
    pub id: String,
    pub category_id: String,
    pub title: String,
    pub text: String,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_clip: Option<String>,
}

/// A recovery dimension with its symptom signs and suggested helps.
/// `signs` is ordered and deliberately not deduplicated; the same sign
/// string may appear under several types.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RecoveryType {
    pub id: String,
    pub name: String,
    pub title: String,
    pub color: String,
    pub short_description: String,
    pub signs: Vec<String>,
    pub helps: Vec<String>,
}

/// An acute situation ("Panikattacke", "Kann nicht einschlafen") pointing
/// at the cards that help with it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Situation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub relevant_card_ids: Vec<String>,
}

/// A short encouraging sentence, shown on the SOS screen.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Affirmation {
    pub id: String,
    pub text: String,
}

/// Raw file shape of a catalog dataset.
#[derive(Deserialize, Debug)]
struct CatalogFile {
    categories: Vec<Category>,
    cards: Vec<Card>,
    recovery_types: Vec<RecoveryType>,
    situations: Vec<Situation>,
    #[serde(default)]
    affirmations: Vec<Affirmation>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::Invalid(msg) => write!(f, "invalid catalog: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The loaded, validated dataset. Entities live in source-order `Vec`s;
/// the id maps index into them. Immutable after construction.
#[derive(Debug)]
pub struct Catalog {
    categories: Vec<Category>,
    cards: Vec<Card>,
    recovery_types: Vec<RecoveryType>,
    situations: Vec<Situation>,
    affirmations: Vec<Affirmation>,
    category_index: HashMap<String, usize>,
    card_index: HashMap<String, usize>,
    recovery_index: HashMap<String, usize>,
    situation_index: HashMap<String, usize>,
}

impl Catalog {
    /// Load the dataset embedded at compile time.
    pub fn load_default() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(DEFAULT_CATALOG_JSON)?;
        info!(
            "Loaded builtin catalog: {} cards in {} categories",
            catalog.cards.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Load an external dataset file (config `catalog_path` or `--catalog`).
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded catalog from {}: {} cards in {} categories",
            path.display(),
            catalog.cards.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::from_file(file)
    }

    fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        validate(&file)?;

        let category_index = index_by_id(file.categories.iter().map(|c| c.id.as_str()));
        let card_index = index_by_id(file.cards.iter().map(|c| c.id.as_str()));
        let recovery_index = index_by_id(file.recovery_types.iter().map(|r| r.id.as_str()));
        let situation_index = index_by_id(file.situations.iter().map(|s| s.id.as_str()));

        Ok(Self {
            categories: file.categories,
            cards: file.cards,
            recovery_types: file.recovery_types,
            situations: file.situations,
            affirmations: file.affirmations,
            category_index,
            card_index,
            recovery_index,
            situation_index,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn recovery_types(&self) -> &[RecoveryType] {
        &self.recovery_types
    }

    pub fn situations(&self) -> &[Situation] {
        &self.situations
    }

    pub fn affirmations(&self) -> &[Affirmation] {
        &self.affirmations
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    pub fn card_by_id(&self, id: &str) -> Option<&Card> {
        self.card_index.get(id).map(|&i| &self.cards[i])
    }

    pub fn recovery_type_by_id(&self, id: &str) -> Option<&RecoveryType> {
        self.recovery_index.get(id).map(|&i| &self.recovery_types[i])
    }

    pub fn situation_by_id(&self, id: &str) -> Option<&Situation> {
        self.situation_index.get(id).map(|&i| &self.situations[i])
    }

    /// All cards of a category, in dataset order.
    pub fn cards_by_category(&self, category_id: &str) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|card| card.category_id == category_id)
            .collect()
    }

    /// The cards a situation points at, in the situation's own order.
    /// `None` if the situation id is unknown.
    pub fn cards_for_situation(&self, situation_id: &str) -> Option<Vec<&Card>> {
        let situation = self.situation_by_id(situation_id)?;
        Some(
            situation
                .relevant_card_ids
                .iter()
                .filter_map(|id| self.card_by_id(id))
                .collect(),
        )
    }

    /// Pick a card uniformly at random. Every call re-rolls; the previous
    /// pick is not excluded.
    pub fn random_card(&self) -> Option<&Card> {
        let card = self.cards.choose(&mut rand::thread_rng());
        if let Some(card) = card {
            debug!("Random card pick: {}", card.id);
        }
        card
    }

    /// Pick an affirmation uniformly at random.
    pub fn random_affirmation(&self) -> Option<&Affirmation> {
        self.affirmations.choose(&mut rand::thread_rng())
    }

    /// All distinct sign strings across recovery types, in first-appearance
    /// order. This is the questionnaire checklist; the per-type `signs`
    /// lists themselves stay untouched for scoring.
    pub fn unique_signs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut signs = Vec::new();
        for recovery_type in &self.recovery_types {
            for sign in &recovery_type.signs {
                if seen.insert(sign.as_str()) {
                    signs.push(sign.as_str());
                }
            }
        }
        signs
    }
}

fn index_by_id<'a>(ids: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    ids.enumerate().map(|(i, id)| (id.to_string(), i)).collect()
}

/// Referential integrity checks. Violations abort startup instead of
/// surfacing as broken navigation later.
fn validate(file: &CatalogFile) -> Result<(), CatalogError> {
    let mut card_ids = HashSet::new();
    for card in &file.cards {
        if !card_ids.insert(card.id.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "duplicate card id '{}'",
                card.id
            )));
        }
    }

    let category_ids: HashSet<&str> = file.categories.iter().map(|c| c.id.as_str()).collect();
    if category_ids.len() != file.categories.len() {
        return Err(CatalogError::Invalid("duplicate category id".to_string()));
    }

    for card in &file.cards {
        if !category_ids.contains(card.category_id.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "card '{}' references unknown category '{}'",
                card.id, card.category_id
            )));
        }
    }

    for situation in &file.situations {
        for card_id in &situation.relevant_card_ids {
            if !card_ids.contains(card_id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "situation '{}' references unknown card '{}'",
                    situation.id, card_id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::load_default().unwrap();
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.cards().len(), 31);
        assert_eq!(catalog.recovery_types().len(), 3);
        assert_eq!(catalog.situations().len(), 6);
        assert_eq!(catalog.affirmations().len(), 31);
    }

    #[test]
    fn test_card_lookup_resolves_category() {
        let catalog = Catalog::load_default().unwrap();
        let card = catalog.card_by_id("blau-1").unwrap();
        assert_eq!(card.title, "Lange Ausatmung");
        let category = catalog.category_by_id(&card.category_id).unwrap();
        assert_eq!(category.name, "Mein Herz rast");
    }

    #[test]
    fn test_unknown_ids_return_none() {
        let catalog = Catalog::load_default().unwrap();
        assert!(catalog.card_by_id("does-not-exist").is_none());
        assert!(catalog.category_by_id("does-not-exist").is_none());
        assert!(catalog.recovery_type_by_id("does-not-exist").is_none());
        assert!(catalog.situation_by_id("does-not-exist").is_none());
        assert!(catalog.cards_for_situation("does-not-exist").is_none());
    }

    #[test]
    fn test_cards_by_category_preserves_dataset_order() {
        let catalog = Catalog::load_default().unwrap();
        let blau: Vec<&str> = catalog
            .cards_by_category("blau")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(
            blau,
            vec!["blau-1", "blau-2", "blau-3", "blau-4", "blau-innerer-ort"]
        );
    }

    #[test]
    fn test_cards_for_situation_in_situation_order() {
        let catalog = Catalog::load_default().unwrap();
        let panik: Vec<&str> = catalog
            .cards_for_situation("panik")
            .unwrap()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(panik, vec!["blau-1", "blau-innerer-ort", "rosa-innerer-ort"]);
    }

    #[test]
    fn test_random_card_comes_from_catalog() {
        let catalog = Catalog::load_default().unwrap();
        for _ in 0..20 {
            let card = catalog.random_card().unwrap();
            assert!(catalog.card_by_id(&card.id).is_some());
        }
    }

    #[test]
    fn test_unique_signs_first_appearance_order() {
        let json = r##"{
            "categories": [],
            "cards": [],
            "recovery_types": [
                {
                    "id": "a", "name": "A", "title": "A", "color": "#000",
                    "short_description": "",
                    "signs": ["s1", "s2", "s1"],
                    "helps": []
                },
                {
                    "id": "b", "name": "B", "title": "B", "color": "#000",
                    "short_description": "",
                    "signs": ["s2", "s3"],
                    "helps": []
                }
            ],
            "situations": []
        }"##;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.unique_signs(), vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_validate_rejects_duplicate_card_ids() {
        let json = r##"{
            "categories": [{
                "id": "c", "name": "C", "color": "#000", "description": "",
                "label": "", "keyword": "", "short_description": "", "badge_labels": []
            }],
            "cards": [
                {"id": "x", "category_id": "c", "title": "", "text": "", "hashtags": []},
                {"id": "x", "category_id": "c", "title": "", "text": "", "hashtags": []}
            ],
            "recovery_types": [],
            "situations": []
        }"##;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
        assert!(err.to_string().contains("duplicate card id"));
    }

    #[test]
    fn test_validate_rejects_unknown_category_reference() {
        let json = r#"{
            "categories": [],
            "cards": [
                {"id": "x", "category_id": "missing", "title": "", "text": "", "hashtags": []}
            ],
            "recovery_types": [],
            "situations": []
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[test]
    fn test_validate_rejects_unknown_situation_card() {
        let json = r##"{
            "categories": [],
            "cards": [],
            "recovery_types": [],
            "situations": [{
                "id": "s", "name": "S", "description": "", "color": "#000",
                "icon": "!", "relevant_card_ids": ["missing"]
            }]
        }"##;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("unknown card"));
    }

    #[test]
    fn test_missing_affirmations_default_to_empty() {
        let json = r#"{
            "categories": [],
            "cards": [],
            "recovery_types": [],
            "situations": []
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.affirmations().is_empty());
        assert!(catalog.random_card().is_none());
        assert!(catalog.random_affirmation().is_none());
    }

    #[test]
    fn test_builtin_dataset_card_texts_keep_newlines() {
        let catalog = Catalog::load_default().unwrap();
        let card = catalog.card_by_id("gruen-2").unwrap();
        assert!(card.text.contains("5 Dinge, die du siehst.\n"));
    }
}
