//! # Screen Composition
//!
//! `draw_ui` is the single entry point the event loop renders through. It
//! lays out the three frame bands (title bar, screen, tab bar), picks the
//! component for the current screen and feeds it the slice of `App` it
//! needs.
//!
//! `menu_targets` is the other half of that contract: for every screen it
//! returns the action behind each selectable row, in render order. The
//! event loop maps Enter on row `n` to `targets[n]`, so a screen component
//! and its target list must stay aligned.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::catalog::recovery;
use crate::core::action::Action;
use crate::core::nav::Screen;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::start::START_ITEMS;
use crate::tui::components::{
    CardView, CategoryScreen, FavoritesScreen, LegalKind, LegalScreen, OrientationScreen,
    QuestionnaireResultScreen, QuestionnaireScreen, RecoveryDetailScreen, RecoveryTypesScreen,
    SituationResultScreen, SituationsScreen, SosScreen, StartScreen, TabBar, TitleBar,
};
use crate::tui::{InputMode, TuiState};

/// Parse a `#RRGGBB` accent color from the catalog. Anything malformed
/// falls back to white rather than failing the render.
pub fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}

/// The part of a category label after the color word, e.g.
/// "Blau – Runterfahren & Atmung" → "Runterfahren & Atmung".
pub fn label_suffix(label: &str) -> &str {
    label.split_once(" – ").map(|(_, s)| s).unwrap_or(label)
}

/// Title-bar text for a screen. Unresolvable ids yield the same "nicht
/// gefunden" wording the main area shows.
pub fn screen_title(app: &App, screen: &Screen) -> String {
    match screen {
        Screen::Start => String::new(),
        Screen::Orientation => String::from("Übungen"),
        Screen::Category { category_id } => app
            .catalog
            .category_by_id(category_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| String::from("Kategorie nicht gefunden")),
        Screen::Card { card_id } => app
            .catalog
            .card_by_id(card_id)
            .map(|c| c.title.clone())
            .unwrap_or_else(|| String::from("Karte nicht gefunden")),
        Screen::Situations => String::from("Situationen"),
        Screen::SituationResult { situation_id } => app
            .catalog
            .situation_by_id(situation_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| String::from("Situation nicht gefunden")),
        Screen::Sos => String::from("SOS"),
        Screen::RecoveryTypes => String::from("Erholung"),
        Screen::RecoveryDetail { recovery_id } => app
            .catalog
            .recovery_type_by_id(recovery_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| String::from("Erholungstyp nicht gefunden")),
        Screen::Questionnaire => String::from("Erschöpfungs-Check"),
        Screen::QuestionnaireResult { .. } => String::from("Dein Ergebnis"),
        Screen::Favorites => String::from("Favoriten"),
        Screen::Impressum => String::from("Impressum"),
        Screen::Datenschutz => String::from("Datenschutz"),
    }
}

/// The action behind each selectable row of a screen, in render order.
/// Screens without a cursor return an empty list.
pub fn menu_targets(app: &App, screen: &Screen) -> Vec<Action> {
    match screen {
        Screen::Start => {
            debug_assert_eq!(START_ITEMS.len(), 4);
            vec![
                Action::Go(Screen::Orientation),
                Action::Go(Screen::Sos),
                Action::Go(Screen::Impressum),
                Action::Go(Screen::Datenschutz),
            ]
        }
        Screen::Orientation => match app.search_result_cards() {
            Some(cards) => cards
                .iter()
                .map(|card| {
                    Action::Go(Screen::Card {
                        card_id: card.id.clone(),
                    })
                })
                .collect(),
            None => app
                .catalog
                .categories()
                .iter()
                .map(|category| {
                    Action::Go(Screen::Category {
                        category_id: category.id.clone(),
                    })
                })
                .collect(),
        },
        Screen::Category { category_id } => app
            .catalog
            .cards_by_category(category_id)
            .iter()
            .map(|card| {
                Action::Go(Screen::Card {
                    card_id: card.id.clone(),
                })
            })
            .collect(),
        Screen::Situations => app
            .catalog
            .situations()
            .iter()
            .map(|situation| {
                Action::Go(Screen::SituationResult {
                    situation_id: situation.id.clone(),
                })
            })
            .collect(),
        Screen::SituationResult { situation_id } => app
            .catalog
            .cards_for_situation(situation_id)
            .unwrap_or_default()
            .iter()
            .map(|card| {
                Action::Go(Screen::Card {
                    card_id: card.id.clone(),
                })
            })
            .collect(),
        Screen::Sos => app
            .catalog
            .cards_for_situation("panik")
            .unwrap_or_default()
            .iter()
            .map(|card| {
                Action::Go(Screen::Card {
                    card_id: card.id.clone(),
                })
            })
            .collect(),
        Screen::RecoveryTypes => {
            let mut targets: Vec<Action> = app
                .catalog
                .recovery_types()
                .iter()
                .map(|rt| {
                    Action::Go(Screen::RecoveryDetail {
                        recovery_id: rt.id.clone(),
                    })
                })
                .collect();
            targets.push(Action::Go(Screen::Questionnaire));
            targets
        }
        Screen::Questionnaire => app
            .catalog
            .unique_signs()
            .into_iter()
            .map(|sign| Action::ToggleSign(sign.to_string()))
            .collect(),
        Screen::Favorites => app
            .favorite_cards()
            .iter()
            .map(|card| {
                Action::Go(Screen::Card {
                    card_id: card.id.clone(),
                })
            })
            .collect(),
        Screen::Card { .. }
        | Screen::RecoveryDetail { .. }
        | Screen::QuestionnaireResult { .. }
        | Screen::Impressum
        | Screen::Datenschutz => Vec::new(),
    }
}

/// Render one frame. Reads `App` for domain state and `TuiState` for
/// presentation state (cursor, search box, scroll, animation clock).
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let (title_area, main_area, tab_area) = if app.nav.shows_tab_bar() {
        let [title, main, tabs] =
            Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
        (title, main, Some(tabs))
    } else {
        let [title, main] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());
        (title, main, None)
    };

    TitleBar::new(
        screen_title(app, &app.nav.current),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    // Row counts change under the cursor (search results, favorites), so
    // clamp before the screen renders.
    tui.menu.clamp(menu_targets(app, &app.nav.current).len());

    let elapsed = if tui.reduced_motion {
        0.0
    } else {
        tui.animation_started.elapsed().as_secs_f32()
    };

    match &app.nav.current {
        Screen::Start => {
            let pulse = if tui.reduced_motion {
                0.5
            } else {
                (elapsed * 2.0).sin() * 0.5 + 0.5
            };
            StartScreen::new(pulse, &mut tui.menu).render(frame, main_area);
        }
        Screen::Orientation => {
            let search_input = match tui.input_mode {
                InputMode::Search => Some(tui.search_box.buffer()),
                InputMode::Browse => None,
            };
            OrientationScreen {
                categories: app.catalog.categories(),
                results: app.search_result_cards(),
                committed_query: &app.search.query,
                search_input,
                menu: &mut tui.menu,
            }
            .render(frame, main_area);
        }
        Screen::Category { category_id } => match app.catalog.category_by_id(category_id) {
            Some(category) => CategoryScreen {
                category,
                cards: app.catalog.cards_by_category(category_id),
                menu: &mut tui.menu,
            }
            .render(frame, main_area),
            None => render_not_found(frame, main_area, "Kategorie nicht gefunden"),
        },
        Screen::Card { card_id } => match app.catalog.card_by_id(card_id) {
            Some(card) => CardView {
                card,
                category: app.catalog.category_by_id(&card.category_id),
                is_favorite: app.favorites.is_favorite(card_id),
                scroll: &mut tui.scroll,
            }
            .render(frame, main_area),
            None => render_not_found(frame, main_area, "Karte nicht gefunden"),
        },
        Screen::Situations => SituationsScreen {
            situations: app.catalog.situations(),
            menu: &mut tui.menu,
        }
        .render(frame, main_area),
        Screen::SituationResult { situation_id } => {
            match app.catalog.situation_by_id(situation_id) {
                Some(situation) => SituationResultScreen {
                    situation,
                    cards: app
                        .catalog
                        .cards_for_situation(situation_id)
                        .unwrap_or_default(),
                    menu: &mut tui.menu,
                }
                .render(frame, main_area),
                None => render_not_found(frame, main_area, "Situation nicht gefunden"),
            }
        }
        Screen::Sos => SosScreen {
            elapsed,
            reduced_motion: tui.reduced_motion,
            affirmation: tui.sos_affirmation.as_deref(),
            shortcuts: app
                .catalog
                .cards_for_situation("panik")
                .unwrap_or_default(),
            menu: &mut tui.menu,
        }
        .render(frame, main_area),
        Screen::RecoveryTypes => RecoveryTypesScreen {
            recovery_types: app.catalog.recovery_types(),
            menu: &mut tui.menu,
        }
        .render(frame, main_area),
        Screen::RecoveryDetail { recovery_id } => {
            match app.catalog.recovery_type_by_id(recovery_id) {
                Some(recovery_type) => {
                    RecoveryDetailScreen { recovery_type }.render(frame, main_area)
                }
                None => render_not_found(frame, main_area, "Erholungstyp nicht gefunden"),
            }
        }
        Screen::Questionnaire => QuestionnaireScreen {
            signs: app.catalog.unique_signs(),
            selected: &app.selected_signs,
            menu: &mut tui.menu,
        }
        .render(frame, main_area),
        Screen::QuestionnaireResult { selected_signs } => QuestionnaireResultScreen {
            scores: recovery::rank(&app.catalog, selected_signs),
        }
        .render(frame, main_area),
        Screen::Favorites => FavoritesScreen {
            cards: app.favorite_cards(),
            menu: &mut tui.menu,
        }
        .render(frame, main_area),
        Screen::Impressum => LegalScreen {
            kind: LegalKind::Impressum,
            scroll: &mut tui.scroll,
        }
        .render(frame, main_area),
        Screen::Datenschutz => LegalScreen {
            kind: LegalKind::Datenschutz,
            scroll: &mut tui.scroll,
        }
        .render(frame, main_area),
    }

    if let Some(tab_area) = tab_area {
        TabBar::new(app.nav.active_tab()).render(frame, tab_area);
    }
}

/// Last-resort screen after a draw panic. Must stay trivial enough that
/// it cannot itself fail: plain paragraphs, no catalog access.
pub fn draw_recovery(frame: &mut Frame, message: &str) {
    let [body_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    let lines = vec![
        Line::from(Span::styled(
            "Da ist etwas schiefgelaufen.",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), body_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " r Neustart  q Beenden ",
            Style::default().fg(Color::DarkGray),
        ))),
        hint_area,
    );
}

/// Minimal fallback for ids that no longer resolve. Esc still works, so
/// the user always has a path back to a known screen.
fn render_not_found(frame: &mut Frame, area: Rect, label: &str) {
    let [message_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ))),
        message_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Esc Zurück  h Start ",
            Style::default().fg(Color::DarkGray),
        ))),
        hint_area,
    );
}
