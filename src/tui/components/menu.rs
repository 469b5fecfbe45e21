//! Shared list-selection state for the menu-style screens.
//!
//! One `MenuState` lives in `TuiState` and is reused by whatever screen is
//! on top; the event loop resets it on every screen change.

use ratatui::widgets::ListState;

pub struct MenuState {
    pub selected: usize,
    pub list_state: ListState,
}

impl MenuState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.list_state.select(Some(self.selected));
    }

    /// Move down, clamped to the last row. No-op on an empty list.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
        self.list_state.select(Some(self.selected));
    }

    /// Re-clamp after the list content shrank under the cursor.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.list_state = ListState::default();
        self.list_state.select(Some(0));
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}
