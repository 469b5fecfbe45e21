use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use pausenknopf::catalog::{recovery, Catalog};
use pausenknopf::core::action::{update, Action, Effect};
use pausenknopf::core::audio::NullAudio;
use pausenknopf::core::favorites::FavoritesStore;
use pausenknopf::core::nav::{Screen, Tab};
use pausenknopf::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

/// Creates an App whose favorites live in the given directory.
fn app_with_store(dir: &Path) -> App {
    let catalog = Catalog::load_default().unwrap();
    let favorites = FavoritesStore::open(dir.to_path_buf());
    App::new(catalog, favorites, Arc::new(NullAudio))
}

fn fresh_app() -> App {
    let dir = tempfile::tempdir().unwrap();
    app_with_store(dir.path())
}

fn signs(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_navigation_back_unwinds_in_reverse_order() {
    let mut app = fresh_app();
    update(&mut app, Action::Go(Screen::Orientation));
    update(
        &mut app,
        Action::Go(Screen::Category {
            category_id: "blau".to_string(),
        }),
    );
    update(
        &mut app,
        Action::Go(Screen::Card {
            card_id: "blau-1".to_string(),
        }),
    );

    update(&mut app, Action::Back);
    assert_eq!(
        app.nav.current,
        Screen::Category {
            category_id: "blau".to_string()
        }
    );
    update(&mut app, Action::Back);
    assert_eq!(app.nav.current, Screen::Orientation);
    update(&mut app, Action::Back);
    assert_eq!(app.nav.current, Screen::Start);
    // past the bottom of the history stays on Start
    update(&mut app, Action::Back);
    assert_eq!(app.nav.current, Screen::Start);
}

#[test]
fn test_home_is_idempotent() {
    let mut app = fresh_app();
    update(&mut app, Action::Go(Screen::Orientation));
    update(&mut app, Action::Go(Screen::Situations));

    update(&mut app, Action::Home);
    assert_eq!(app.nav.current, Screen::Start);
    assert_eq!(app.nav.depth(), 0);

    update(&mut app, Action::Home);
    assert_eq!(app.nav.current, Screen::Start);
    assert_eq!(app.nav.depth(), 0);
}

#[test]
fn test_tab_switch_lands_on_entry_screen_with_empty_history() {
    let mut app = fresh_app();
    update(&mut app, Action::Go(Screen::Orientation));
    update(
        &mut app,
        Action::Go(Screen::Card {
            card_id: "blau-1".to_string(),
        }),
    );

    update(&mut app, Action::SwitchTab(Tab::Recovery));
    assert_eq!(app.nav.current, Screen::RecoveryTypes);
    assert_eq!(app.nav.depth(), 0);

    // switching to the already-active tab still resets depth
    update(
        &mut app,
        Action::Go(Screen::RecoveryDetail {
            recovery_id: "mental".to_string(),
        }),
    );
    update(&mut app, Action::SwitchTab(Tab::Recovery));
    assert_eq!(app.nav.current, Screen::RecoveryTypes);
    assert_eq!(app.nav.depth(), 0);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_is_case_and_whitespace_insensitive() {
    let mut app = fresh_app();
    update(&mut app, Action::CommitSearch("  PANIK ".to_string()));
    let loud = app.search.results.clone().unwrap();
    assert!(loud.contains(&"blau-1".to_string()));

    update(&mut app, Action::CommitSearch("xyz".to_string()));
    update(&mut app, Action::CommitSearch("panik".to_string()));
    assert_eq!(app.search.results.unwrap(), loud);
}

#[test]
fn test_search_without_matches_reports_empty_not_inactive() {
    let mut app = fresh_app();
    update(&mut app, Action::CommitSearch("xyz-nomatch".to_string()));
    assert_eq!(app.search.results, Some(Vec::new()));
    assert!(app.status_message.contains("Keine Treffer"));
}

#[test]
fn test_blank_query_deactivates_search() {
    let mut app = fresh_app();
    update(&mut app, Action::CommitSearch("panik".to_string()));
    assert!(app.search.results.is_some());

    update(&mut app, Action::CommitSearch("   ".to_string()));
    assert!(app.search.results.is_none());
    assert!(app.search.query.is_empty());
}

#[test]
fn test_random_card_opens_existing_card() {
    let mut app = fresh_app();
    update(&mut app, Action::Go(Screen::Orientation));
    update(&mut app, Action::ShowRandomCard);

    match &app.nav.current {
        Screen::Card { card_id } => assert!(app.catalog.card_by_id(card_id).is_some()),
        other => panic!("expected a card screen, got {:?}", other),
    }
    update(&mut app, Action::Back);
    assert_eq!(app.nav.current, Screen::Orientation);
}

// ============================================================================
// Questionnaire
// ============================================================================

#[test]
fn test_questionnaire_flow_scores_selection() {
    let mut app = fresh_app();
    update(&mut app, Action::SwitchTab(Tab::Recovery));
    update(&mut app, Action::Go(Screen::Questionnaire));

    update(
        &mut app,
        Action::ToggleSign("schwere Müdigkeit".to_string()),
    );
    update(&mut app, Action::ToggleSign("Reizbarkeit".to_string()));
    update(&mut app, Action::EvaluateSigns);

    let selected = match &app.nav.current {
        Screen::QuestionnaireResult { selected_signs } => selected_signs.clone(),
        other => panic!("expected the result screen, got {:?}", other),
    };
    assert_eq!(selected, signs(&["schwere Müdigkeit", "Reizbarkeit"]));

    let ranked = recovery::rank(&app.catalog, &selected);
    let ids: Vec<&str> = ranked.iter().map(|s| s.recovery_type.id.as_str()).collect();
    let counts: Vec<usize> = ranked.iter().map(|s| s.matched).collect();
    assert_eq!(ids, vec!["koerperlich", "mental", "emotional"]);
    assert_eq!(counts, vec![1, 1, 0]);
}

#[test]
fn test_questionnaire_result_keeps_evaluated_snapshot() {
    let mut app = fresh_app();
    update(&mut app, Action::Go(Screen::Questionnaire));
    update(&mut app, Action::ToggleSign("Gedankenchaos".to_string()));
    update(&mut app, Action::EvaluateSigns);

    // later selection changes must not rewrite the shown result
    update(&mut app, Action::ToggleSign("Rückzug".to_string()));
    match &app.nav.current {
        Screen::QuestionnaireResult { selected_signs } => {
            assert_eq!(*selected_signs, signs(&["Gedankenchaos"]));
        }
        other => panic!("expected the result screen, got {:?}", other),
    }
}

#[test]
fn test_reentering_questionnaire_starts_fresh() {
    let mut app = fresh_app();
    update(&mut app, Action::Go(Screen::Questionnaire));
    update(&mut app, Action::ToggleSign("Rückzug".to_string()));

    // Back keeps the selection, a new entry clears it
    update(&mut app, Action::Back);
    update(&mut app, Action::Go(Screen::Questionnaire));
    assert!(app.selected_signs.is_empty());
}

// ============================================================================
// Favorites
// ============================================================================

#[test]
fn test_favorite_toggle_is_involutive() {
    let mut app = fresh_app();
    assert_eq!(
        update(&mut app, Action::ToggleFavorite("blau-1".to_string())),
        Effect::SaveFavorites
    );
    assert!(app.favorites.is_favorite("blau-1"));

    assert_eq!(
        update(&mut app, Action::ToggleFavorite("blau-1".to_string())),
        Effect::SaveFavorites
    );
    assert!(!app.favorites.is_favorite("blau-1"));
}

#[test]
fn test_favorites_survive_reload_from_same_dir() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = app_with_store(dir.path());
    update(&mut app, Action::ToggleFavorite("blau-1".to_string()));
    update(&mut app, Action::ToggleFavorite("gruen-2".to_string()));
    app.favorites.save();
    drop(app);

    let reloaded = app_with_store(dir.path());
    assert!(reloaded.favorites.is_favorite("blau-1"));
    assert!(reloaded.favorites.is_favorite("gruen-2"));
    let titles: Vec<&str> = reloaded
        .favorite_cards()
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Lange Ausatmung", "5-4-3-2-1-Übung"]);
}

#[test]
fn test_unfavoriting_persists_too() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = app_with_store(dir.path());
    update(&mut app, Action::ToggleFavorite("rosa-1".to_string()));
    app.favorites.save();
    update(&mut app, Action::ToggleFavorite("rosa-1".to_string()));
    app.favorites.save();
    drop(app);

    let reloaded = app_with_store(dir.path());
    assert!(reloaded.favorites.is_empty());
}
