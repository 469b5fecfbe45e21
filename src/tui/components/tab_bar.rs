//! # TabBar Component
//!
//! Bottom bar showing the three main areas and which one is active.
//! Hidden on the start and legal screens (the event loop decides).
//!
//! Stateless: receives the active tab as a prop and renders a single line.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::core::nav::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    /// The active tab, if the current screen belongs to one.
    pub active: Option<Tab>,
}

impl TabBar {
    pub fn new(active: Option<Tab>) -> Self {
        Self { active }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, tab) in Tab::ALL.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, tab.label());
            let style = if self.active == Some(*tab) {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(active: Option<Tab>) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tab_bar = TabBar::new(active);
        terminal
            .draw(|f| {
                tab_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_tab_bar_shows_all_labels() {
        let text = render_to_text(Some(Tab::Exercises));
        assert!(text.contains("Übungen"));
        assert!(text.contains("Erholung"));
        assert!(text.contains("Favoriten"));
    }

    #[test]
    fn test_tab_bar_shows_number_hints() {
        let text = render_to_text(None);
        assert!(text.contains("1 Übungen"));
        assert!(text.contains("2 Erholung"));
        assert!(text.contains("3 Favoriten"));
    }
}
