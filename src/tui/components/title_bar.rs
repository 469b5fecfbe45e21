//! # TitleBar Component
//!
//! Top status bar showing where the user is and transient notifications.
//!
//! ## Responsibilities
//!
//! - Display the app name and the current screen's title
//! - Display status messages (e.g. "3 Treffer für \"atmen\"",
//!   "Zu Favoriten hinzugefügt")
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state, which makes it trivial to test.
//!
//! Both props come from core App state (`nav` resolves the screen title,
//! `status_message` is set by the reducer). The TitleBar doesn't care where
//! they come from; it just renders what it's given.
//!
//! ### Conditional Formatting
//!
//! 1. **Screen + status**: `"Pausenknopf · Übungen | 3 Treffer für \"atmen\""`
//! 2. **Screen only**: `"Pausenknopf · Übungen"`
//! 3. **Start screen** (empty title): `"Pausenknopf"`

use crate::tui::component::Component;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

/// Top status bar component.
///
/// # Props
///
/// - `screen_title`: Title of the current screen ("" on the start screen)
/// - `status_message`: Transient status from the reducer
pub struct TitleBar {
    pub screen_title: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: String, status_message: String) -> Self {
        Self {
            screen_title,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line.
    ///
    /// Always height 1; a plain Span rather than a Block because there is
    /// nothing to border and the text is trivial to assert on in tests.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let base = if self.screen_title.is_empty() {
            String::from("Pausenknopf")
        } else {
            format!("Pausenknopf · {}", self.screen_title)
        };
        let title_text = if self.status_message.is_empty() {
            base
        } else {
            format!("{} | {}", base, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
