//! # SearchBox Component
//!
//! Single-line text input for the card search on the exercises screen.
//!
//! ## Responsibilities
//!
//! - Capture and edit the query text (chars, backspace)
//! - Emit `Changed` on every edit so the event loop can (re)arm the
//!   debounce timer
//! - Emit `Submit` on Enter (commit immediately, skipping the debounce)
//! - Emit `Cancel` on Esc
//!
//! The committed query lives in core state (`App.search`); this component
//! only owns the text being typed.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The buffer changed; carries the new text.
    Changed(String),
    /// User pressed Enter.
    Submit(String),
    /// User pressed Esc.
    Cancel,
}

pub struct SearchBox {
    buffer: String,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Prefill the buffer (used when reopening the box over an active search).
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            TuiEvent::Escape => Some(SearchEvent::Cancel),
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content = format!("{}▏", self.buffer);
        let input = Paragraph::new(content)
            .style(Style::default().fg(Color::White))
            .block(Block::bordered().title(" Suche "));
        frame.render_widget(input, area);
    }
}
