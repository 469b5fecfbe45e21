//! # Actions
//!
//! Everything that can happen in Pausenknopf becomes an `Action`.
//! User presses Enter on a category? That's `Action::Go(Screen::Category { .. })`.
//! The search debounce fires? That's `Action::CommitSearch(query)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the caller must run. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state.
//! And debuggable: log every action, replay the exact session.

use log::debug;

use crate::catalog::search;
use crate::core::nav::{Screen, Tab};
use crate::core::state::{App, SearchState};

/// Every state transition in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Push a new screen onto the navigation history.
    Go(Screen),
    /// Pop back to the previous screen (Start when history is empty).
    Back,
    /// Clear history and return to the start screen.
    Home,
    /// Jump to a tab's entry screen, clearing history.
    SwitchTab(Tab),
    /// Open a randomly chosen card.
    ShowRandomCard,
    /// A (debounced) search query is ready to run.
    CommitSearch(String),
    /// Drop the active search and show the category grid again.
    ClearSearch,
    /// Check or uncheck an exhaustion sign in the questionnaire.
    ToggleSign(String),
    /// Uncheck all questionnaire signs.
    ClearSigns,
    /// Score the checked signs and show the result screen.
    EvaluateSigns,
    /// Add or remove a card from favorites.
    ToggleFavorite(String),
    /// Request playback of a card's audio clip.
    PlayClip(String),
    Quit,
}

/// Side effects `update()` asks the caller to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Write the favorites set to disk.
    SaveFavorites,
    /// Hand a clip id to the audio transport.
    PlayClip(String),
}

/// The reducer. Applies `action` to `app` and returns the follow-up effect.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::Go(screen) => {
            // Entering the questionnaire from outside starts it fresh;
            // coming back to it via Back keeps the checked signs.
            if screen == Screen::Questionnaire && app.nav.current != Screen::Questionnaire {
                app.selected_signs.clear();
            }
            app.nav.go(screen);
            Effect::None
        }
        Action::Back => {
            app.nav.back();
            Effect::None
        }
        Action::Home => {
            app.nav.home();
            app.search = SearchState::default();
            Effect::None
        }
        Action::SwitchTab(tab) => {
            app.nav.switch_tab(tab);
            app.search = SearchState::default();
            Effect::None
        }
        Action::ShowRandomCard => {
            let card_id = app.catalog.random_card().map(|c| c.id.clone());
            match card_id {
                Some(card_id) => app.nav.go(Screen::Card { card_id }),
                None => app.status_message = String::from("Keine Karten verfügbar"),
            }
            Effect::None
        }
        Action::CommitSearch(raw) => {
            let query = search::normalize(&raw);
            if query.is_empty() {
                // Clearing the box drops the results and shows the grid.
                if app.search != SearchState::default() {
                    app.search = SearchState::default();
                }
                return Effect::None;
            }
            // A late debounce fire for the query already on screen is a no-op.
            if query == app.search.query && app.search.results.is_some() {
                return Effect::None;
            }
            let ids: Vec<String> = search::search(&app.catalog, &query)
                .into_iter()
                .map(|c| c.id.clone())
                .collect();
            app.status_message = if ids.is_empty() {
                format!("Keine Treffer für \"{query}\"")
            } else {
                format!("{} Treffer für \"{query}\"", ids.len())
            };
            app.search = SearchState {
                query,
                results: Some(ids),
            };
            Effect::None
        }
        Action::ClearSearch => {
            app.search = SearchState::default();
            Effect::None
        }
        Action::ToggleSign(sign) => {
            if !app.selected_signs.remove(&sign) {
                app.selected_signs.insert(sign);
            }
            Effect::None
        }
        Action::ClearSigns => {
            app.selected_signs.clear();
            Effect::None
        }
        Action::EvaluateSigns => {
            app.nav.go(Screen::QuestionnaireResult {
                selected_signs: app.selected_signs.clone(),
            });
            Effect::None
        }
        Action::ToggleFavorite(card_id) => {
            let now_favorite = app.favorites.toggle(&card_id);
            app.status_message = if now_favorite {
                String::from("Zu Favoriten hinzugefügt")
            } else {
                String::from("Aus Favoriten entfernt")
            };
            Effect::SaveFavorites
        }
        Action::PlayClip(clip_id) => Effect::PlayClip(clip_id),
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_go_then_back_returns_to_previous_screen() {
        let mut app = test_app();
        update(&mut app, Action::Go(Screen::Orientation));
        update(
            &mut app,
            Action::Go(Screen::Category {
                category_id: "blau".to_string(),
            }),
        );
        update(&mut app, Action::Back);
        assert_eq!(app.nav.current, Screen::Orientation);
    }

    #[test]
    fn test_back_on_empty_history_lands_on_start() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert_eq!(app.nav.current, Screen::Start);
    }

    #[test]
    fn test_switch_tab_resets_history_and_search() {
        let mut app = test_app();
        update(&mut app, Action::Go(Screen::Orientation));
        update(&mut app, Action::CommitSearch("atmen".to_string()));
        assert!(app.search.results.is_some());

        update(&mut app, Action::SwitchTab(Tab::Recovery));
        assert_eq!(app.nav.current, Screen::RecoveryTypes);
        assert_eq!(app.nav.depth(), 0);
        assert!(app.search.results.is_none());
        assert!(app.search.query.is_empty());
    }

    #[test]
    fn test_commit_search_stores_results_and_status() {
        let mut app = test_app();
        update(&mut app, Action::CommitSearch("  ATMEN ".to_string()));
        assert_eq!(app.search.query, "atmen");
        let results = app.search.results.as_ref().unwrap();
        assert!(results.contains(&"blau-1".to_string()));
        assert!(app.status_message.contains("Treffer für \"atmen\""));
    }

    #[test]
    fn test_commit_search_no_match_keeps_empty_results() {
        let mut app = test_app();
        update(&mut app, Action::CommitSearch("xyzzy".to_string()));
        assert_eq!(app.search.results, Some(vec![]));
        assert_eq!(app.status_message, "Keine Treffer für \"xyzzy\"");
    }

    #[test]
    fn test_commit_search_empty_query_clears_results() {
        let mut app = test_app();
        update(&mut app, Action::CommitSearch("atmen".to_string()));
        update(&mut app, Action::CommitSearch("   ".to_string()));
        assert_eq!(app.search, SearchState::default());
    }

    #[test]
    fn test_commit_search_duplicate_query_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::CommitSearch("atmen".to_string()));
        let before = app.search.clone();
        app.status_message = String::from("unchanged");
        update(&mut app, Action::CommitSearch("Atmen".to_string()));
        assert_eq!(app.search, before);
        assert_eq!(app.status_message, "unchanged");
    }

    #[test]
    fn test_toggle_favorite_saves_and_updates_status() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ToggleFavorite("blau-1".to_string()));
        assert_eq!(effect, Effect::SaveFavorites);
        assert!(app.favorites.is_favorite("blau-1"));
        assert_eq!(app.status_message, "Zu Favoriten hinzugefügt");

        let effect = update(&mut app, Action::ToggleFavorite("blau-1".to_string()));
        assert_eq!(effect, Effect::SaveFavorites);
        assert!(!app.favorites.is_favorite("blau-1"));
        assert_eq!(app.status_message, "Aus Favoriten entfernt");
    }

    #[test]
    fn test_toggle_sign_checks_and_unchecks() {
        let mut app = test_app();
        update(&mut app, Action::ToggleSign("Reizbarkeit".to_string()));
        assert!(app.selected_signs.contains("Reizbarkeit"));
        update(&mut app, Action::ToggleSign("Reizbarkeit".to_string()));
        assert!(app.selected_signs.is_empty());
    }

    #[test]
    fn test_evaluate_signs_carries_selection_to_result() {
        let mut app = test_app();
        update(&mut app, Action::Go(Screen::Questionnaire));
        update(&mut app, Action::ToggleSign("Reizbarkeit".to_string()));
        update(&mut app, Action::EvaluateSigns);
        match &app.nav.current {
            Screen::QuestionnaireResult { selected_signs } => {
                assert!(selected_signs.contains("Reizbarkeit"));
            }
            other => panic!("expected result screen, got {other:?}"),
        }
        // Back into the questionnaire keeps the checked signs for editing.
        update(&mut app, Action::Back);
        assert_eq!(app.nav.current, Screen::Questionnaire);
        assert!(app.selected_signs.contains("Reizbarkeit"));
    }

    #[test]
    fn test_entering_questionnaire_fresh_clears_signs() {
        let mut app = test_app();
        update(&mut app, Action::Go(Screen::Questionnaire));
        update(&mut app, Action::ToggleSign("Reizbarkeit".to_string()));
        update(&mut app, Action::SwitchTab(Tab::Recovery));
        update(&mut app, Action::Go(Screen::Questionnaire));
        assert!(app.selected_signs.is_empty());
    }

    #[test]
    fn test_show_random_card_opens_a_card_screen() {
        let mut app = test_app();
        update(&mut app, Action::ShowRandomCard);
        match &app.nav.current {
            Screen::Card { card_id } => {
                assert!(app.catalog.card_by_id(card_id).is_some());
            }
            other => panic!("expected a card screen, got {other:?}"),
        }
    }

    #[test]
    fn test_play_clip_becomes_effect() {
        let mut app = test_app();
        let effect = update(&mut app, Action::PlayClip("clip-42".to_string()));
        assert_eq!(effect, Effect::PlayClip("clip-42".to_string()));
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
