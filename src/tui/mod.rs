//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, mobile)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (start screen pulse, SOS breathing): draws every ~80ms
//!   for smooth animation.
//! - **Idle** (everything else, and all screens under `--reduced-motion`):
//!   sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Search Debounce
//!
//! Typing in the search box does not run a search per keystroke. Every
//! edit aborts the pending commit task and spawns a new one that sleeps
//! for the configured debounce window, then sends `CommitSearch` through
//! the action channel. Enter commits immediately. One slot, so at most one
//! commit is ever in flight.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::catalog::Catalog;
use crate::core::action::{update, Action, Effect};
use crate::core::audio::NullAudio;
use crate::core::config::ResolvedConfig;
use crate::core::favorites::FavoritesStore;
use crate::core::nav::{Screen, Tab};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchBox, SearchEvent};
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate menus and trigger shortcuts.
    Browse,
    /// Text editing in the search box. Esc switches back to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub menu: components::MenuState,
    pub search_box: SearchBox,
    // Modal input mode
    pub input_mode: InputMode,
    // Scroll offset for card bodies and legal text
    pub scroll: ScrollViewState,
    // Animation state
    pub reduced_motion: bool,
    pub animation_started: Instant,
    /// Affirmation picked when the SOS screen was entered.
    pub sos_affirmation: Option<String>,
    /// Screen the presentation state currently belongs to. A mismatch with
    /// `app.nav.current` means navigation happened and cursors reset.
    pub last_screen: Screen,
    /// Some = the last draw panicked; show the recovery screen.
    pub render_failure: Option<String>,
}

impl TuiState {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            menu: components::MenuState::new(),
            search_box: SearchBox::new(),
            input_mode: InputMode::Browse,
            scroll: ScrollViewState::default(),
            reduced_motion,
            animation_started: Instant::now(),
            sos_affirmation: None,
            last_screen: Screen::Start,
            render_failure: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture for wheel scrolling in card bodies
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Run an action through the reducer and execute the returned effect.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, action: Action) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::SaveFavorites => {
            app.favorites.save();
            false
        }
        Effect::PlayClip(clip_id) => {
            app.audio.play(&clip_id);
            false
        }
        Effect::None => false,
    }
}

/// Spawn the delayed commit behind the search debounce. The caller keeps
/// the handle and aborts it when a newer keystroke supersedes this one.
fn spawn_search_commit(
    tx: mpsc::Sender<Action>,
    query: String,
    delay: Duration,
) -> tokio::task::AbortHandle {
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(Action::CommitSearch(query)).is_err() {
            warn!("Debounced search dropped: receiver gone");
        }
    });
    task.abort_handle()
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unbekannter Fehler")
    }
}

pub fn run(config: ResolvedConfig, catalog: Catalog) -> std::io::Result<()> {
    let favorites = FavoritesStore::open(config.data_dir.clone());
    let mut app = App::new(catalog, favorites, Arc::new(NullAudio));
    let mut tui = TuiState::new(config.reduced_motion);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the pending debounced search commit
    let mut debounce_handle: Option<tokio::task::AbortHandle> = None;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Reset presentation state when navigation moved to another screen
        if app.nav.current != tui.last_screen {
            tui.menu.reset();
            tui.scroll = ScrollViewState::default();
            tui.animation_started = Instant::now();
            if app.nav.current == Screen::Sos {
                tui.sos_affirmation = app.catalog.random_affirmation().map(|a| a.text.clone());
            }
            if tui.input_mode == InputMode::Search && app.nav.current != Screen::Orientation {
                tui.input_mode = InputMode::Browse;
            }
            tui.last_screen = app.nav.current.clone();
            needs_redraw = true;
        }

        let animating = !tui.reduced_motion
            && tui.render_failure.is_none()
            && matches!(app.nav.current, Screen::Start | Screen::Sos);
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            if let Some(message) = tui.render_failure.clone() {
                terminal.draw(|f| ui::draw_recovery(f, &message))?;
            } else {
                let drawn = catch_unwind(AssertUnwindSafe(|| {
                    terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)).map(|_| ())
                }));
                match drawn {
                    Ok(io_result) => {
                        io_result?;
                    }
                    Err(panic) => {
                        let message = panic_message(panic);
                        warn!("Draw panicked: {}", message);
                        tui.render_failure = Some(message);
                        continue;
                    }
                }
            }
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(tui_event, TuiEvent::ForceQuit) {
                should_quit |= dispatch(&mut app, Action::Quit);
                continue;
            }

            // While the recovery screen is up, only restart or quit work
            if tui.render_failure.is_some() {
                match tui_event {
                    TuiEvent::InputChar('q') | TuiEvent::Escape => should_quit = true,
                    TuiEvent::InputChar('r') | TuiEvent::Submit => {
                        if let Some(handle) = debounce_handle.take() {
                            handle.abort();
                        }
                        app.nav.home();
                        app.search = Default::default();
                        app.selected_signs.clear();
                        tui = TuiState::new(config.reduced_motion);
                        needs_redraw = true;
                    }
                    _ => {}
                }
                continue;
            }

            match tui.input_mode {
                InputMode::Search => {
                    if let Some(search_event) = tui.search_box.handle_event(&tui_event) {
                        match search_event {
                            SearchEvent::Changed(text) => {
                                if let Some(handle) = debounce_handle.take() {
                                    handle.abort();
                                }
                                debounce_handle = Some(spawn_search_commit(
                                    tx.clone(),
                                    text,
                                    Duration::from_millis(config.search_debounce_ms),
                                ));
                            }
                            SearchEvent::Submit(text) => {
                                if let Some(handle) = debounce_handle.take() {
                                    handle.abort();
                                }
                                should_quit |= dispatch(&mut app, Action::CommitSearch(text));
                                tui.input_mode = InputMode::Browse;
                            }
                            SearchEvent::Cancel => {
                                if let Some(handle) = debounce_handle.take() {
                                    handle.abort();
                                }
                                tui.input_mode = InputMode::Browse;
                            }
                        }
                    }
                }
                InputMode::Browse => {
                    let scrollable = matches!(
                        app.nav.current,
                        Screen::Card { .. } | Screen::Impressum | Screen::Datenschutz
                    );
                    match tui_event {
                        TuiEvent::Escape => {
                            should_quit |= dispatch(&mut app, Action::Back);
                        }
                        TuiEvent::InputChar('q') => {
                            should_quit |= dispatch(&mut app, Action::Quit);
                        }
                        TuiEvent::InputChar('h') => {
                            should_quit |= dispatch(&mut app, Action::Home);
                        }
                        TuiEvent::InputChar('1') => {
                            should_quit |= dispatch(&mut app, Action::SwitchTab(Tab::Exercises));
                        }
                        TuiEvent::InputChar('2') => {
                            should_quit |= dispatch(&mut app, Action::SwitchTab(Tab::Recovery));
                        }
                        TuiEvent::InputChar('3') => {
                            should_quit |= dispatch(&mut app, Action::SwitchTab(Tab::Favorites));
                        }
                        TuiEvent::Tab => {
                            let next = app
                                .nav
                                .active_tab()
                                .map(Tab::next)
                                .unwrap_or(Tab::Exercises);
                            should_quit |= dispatch(&mut app, Action::SwitchTab(next));
                        }
                        TuiEvent::InputChar('s') => {
                            should_quit |= dispatch(&mut app, Action::Go(Screen::Sos));
                        }
                        TuiEvent::InputChar('/')
                            if app.nav.current == Screen::Orientation =>
                        {
                            tui.input_mode = InputMode::Search;
                            tui.search_box.set_text(&app.search.query);
                        }
                        TuiEvent::InputChar('w')
                            if app.nav.current == Screen::Orientation =>
                        {
                            should_quit |= dispatch(&mut app, Action::Go(Screen::Situations));
                        }
                        TuiEvent::InputChar('z')
                            if app.nav.current == Screen::Orientation =>
                        {
                            should_quit |= dispatch(&mut app, Action::ShowRandomCard);
                        }
                        TuiEvent::InputChar('f') => {
                            if let Screen::Card { card_id } = &app.nav.current {
                                let card_id = card_id.clone();
                                should_quit |=
                                    dispatch(&mut app, Action::ToggleFavorite(card_id));
                            }
                        }
                        TuiEvent::InputChar('p') => {
                            if let Screen::Card { card_id } = &app.nav.current {
                                let clip = app
                                    .catalog
                                    .card_by_id(card_id)
                                    .and_then(|card| card.audio_clip.clone());
                                if let Some(clip_id) = clip {
                                    should_quit |=
                                        dispatch(&mut app, Action::PlayClip(clip_id));
                                }
                            }
                        }
                        TuiEvent::InputChar(' ')
                            if app.nav.current == Screen::Questionnaire =>
                        {
                            let targets = ui::menu_targets(&app, &app.nav.current);
                            if let Some(action) = targets.into_iter().nth(tui.menu.selected) {
                                should_quit |= dispatch(&mut app, action);
                            }
                        }
                        TuiEvent::InputChar('e')
                            if app.nav.current == Screen::Questionnaire =>
                        {
                            should_quit |= dispatch(&mut app, Action::EvaluateSigns);
                        }
                        TuiEvent::InputChar('c')
                            if app.nav.current == Screen::Questionnaire =>
                        {
                            should_quit |= dispatch(&mut app, Action::ClearSigns);
                        }
                        TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                            if scrollable {
                                tui.scroll.scroll_up();
                            } else {
                                tui.menu.move_up();
                            }
                        }
                        TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                            if scrollable {
                                tui.scroll.scroll_down();
                            } else {
                                let len = ui::menu_targets(&app, &app.nav.current).len();
                                tui.menu.move_down(len);
                            }
                        }
                        TuiEvent::ScrollPageUp if scrollable => {
                            tui.scroll.scroll_page_up();
                        }
                        TuiEvent::ScrollPageDown if scrollable => {
                            tui.scroll.scroll_page_down();
                        }
                        TuiEvent::Submit => {
                            let targets = ui::menu_targets(&app, &app.nav.current);
                            if let Some(action) = targets.into_iter().nth(tui.menu.selected) {
                                should_quit |= dispatch(&mut app, action);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        // Handle background task actions (debounced search commits)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= dispatch(&mut app, action);
        }

        if should_quit {
            break;
        }
    }

    // Persist on exit; a no-op unless a toggle's write failed earlier
    app.favorites.save();

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_dispatch_quit() {
        let mut app = test_app();
        assert!(dispatch(&mut app, Action::Quit));
        assert!(!dispatch(&mut app, Action::Back));
    }

    #[test]
    fn test_dispatch_toggle_favorite_saves() {
        let mut app = test_app();
        assert!(!dispatch(&mut app, Action::ToggleFavorite("blau-1".to_string())));
        assert!(app.favorites.is_favorite("blau-1"));
    }

    #[test]
    fn test_tui_state_resets_with_screen() {
        let tui = TuiState::new(true);
        assert_eq!(tui.last_screen, Screen::Start);
        assert_eq!(tui.input_mode, InputMode::Browse);
        assert!(tui.render_failure.is_none());
        assert!(tui.reduced_motion);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_superseded_commit_never_fires() {
        let (tx, rx) = mpsc::channel();
        let first = spawn_search_commit(tx.clone(), "pan".to_string(), Duration::from_millis(300));

        // A keystroke 100ms in aborts the pending commit and arms a new one
        tokio::time::advance(Duration::from_millis(100)).await;
        first.abort();
        let _second =
            spawn_search_commit(tx.clone(), "panik".to_string(), Duration::from_millis(300));

        tokio::time::advance(Duration::from_millis(400)).await;
        tokio::task::yield_now().await;

        let committed: Vec<Action> = rx.try_iter().collect();
        assert_eq!(committed, vec![Action::CommitSearch("panik".to_string())]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_fires_after_quiet_window() {
        let (tx, rx) = mpsc::channel();
        let _handle = spawn_search_commit(tx, "atmen".to_string(), Duration::from_millis(300));

        tokio::time::advance(Duration::from_millis(299)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(rx.try_recv(), Ok(Action::CommitSearch("atmen".to_string())));
    }
}
