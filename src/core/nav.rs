//! # Navigation
//!
//! The screen-stack state machine. `Nav` owns the current screen and a
//! LIFO history; the only ways it changes are `go`, `back`, `home` and
//! `switch_tab`. Every transition is total: there is no invalid navigation
//! state and `back` on an empty history lands on the start screen.
//!
//! History is session-scoped and unbounded. `home` and tab switches clear
//! it, so forward depth stays shallow in practice.

use std::collections::BTreeSet;

/// Where the user is. Parameterized variants carry the minimal identifying
/// data; views re-derive everything else through the catalog index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Start,
    Orientation,
    Category { category_id: String },
    Card { card_id: String },
    Situations,
    SituationResult { situation_id: String },
    Sos,
    RecoveryTypes,
    RecoveryDetail { recovery_id: String },
    Questionnaire,
    /// Snapshot of the evaluated selection, so an older result further down
    /// the history keeps showing what was actually evaluated.
    QuestionnaireResult { selected_signs: BTreeSet<String> },
    Favorites,
    Impressum,
    Datenschutz,
}

impl Screen {
    /// The tab a screen belongs to. `None` for screens outside the tabbed
    /// flows (start page and the legal pages), which hide the tab bar.
    pub fn tab(&self) -> Option<Tab> {
        match self {
            Screen::Orientation
            | Screen::Category { .. }
            | Screen::Card { .. }
            | Screen::Situations
            | Screen::SituationResult { .. }
            | Screen::Sos => Some(Tab::Exercises),
            Screen::RecoveryTypes
            | Screen::RecoveryDetail { .. }
            | Screen::Questionnaire
            | Screen::QuestionnaireResult { .. } => Some(Tab::Recovery),
            Screen::Favorites => Some(Tab::Favorites),
            Screen::Start | Screen::Impressum | Screen::Datenschutz => None,
        }
    }
}

/// The three top-level flows of the tab bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Exercises,
    Recovery,
    Favorites,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Exercises, Tab::Recovery, Tab::Favorites];

    /// The screen a tab switch lands on.
    pub fn entry_screen(self) -> Screen {
        match self {
            Tab::Exercises => Screen::Orientation,
            Tab::Recovery => Screen::RecoveryTypes,
            Tab::Favorites => Screen::Favorites,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Exercises => "Übungen",
            Tab::Recovery => "Erholung",
            Tab::Favorites => "Favoriten",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Exercises => Tab::Recovery,
            Tab::Recovery => Tab::Favorites,
            Tab::Favorites => Tab::Exercises,
        }
    }
}

/// Current screen plus LIFO history.
#[derive(Debug)]
pub struct Nav {
    pub current: Screen,
    history: Vec<Screen>,
}

impl Nav {
    pub fn new() -> Self {
        Self {
            current: Screen::Start,
            history: Vec::new(),
        }
    }

    /// Navigate forward: the current screen is pushed onto the history.
    pub fn go(&mut self, screen: Screen) {
        let previous = std::mem::replace(&mut self.current, screen);
        self.history.push(previous);
    }

    /// Pop back to the previous screen. With an empty history this lands on
    /// [`Screen::Start`] and the history stays empty.
    pub fn back(&mut self) {
        self.current = self.history.pop().unwrap_or(Screen::Start);
    }

    /// Jump to the start screen and clear the history. Idempotent.
    pub fn home(&mut self) {
        self.history.clear();
        self.current = Screen::Start;
    }

    /// Switch to a tab's entry screen, resetting navigation depth. Also
    /// applies when the tab is already active.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.history.clear();
        self.current = tab.entry_screen();
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// The active tab, derived from the current screen.
    pub fn active_tab(&self) -> Option<Tab> {
        self.current.tab()
    }

    /// Whether the tab bar is visible on the current screen.
    pub fn shows_tab_bar(&self) -> bool {
        self.active_tab().is_some()
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}
