//! # Questionnaire Component
//!
//! Checklist of all exhaustion signs across the recovery types. Rows keep
//! first-appearance order; the selection set lives in [`crate::core::state::App`]
//! so it survives navigating away and back.

use std::collections::BTreeSet;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use crate::tui::component::Component;
use crate::tui::components::menu::MenuState;

pub struct QuestionnaireScreen<'a> {
    pub signs: Vec<&'a str>,
    pub selected: &'a BTreeSet<String>,
    pub menu: &'a mut MenuState,
}

impl Component for QuestionnaireScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, list_area, footer_area, hint_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let heading = vec![
            Line::from(Span::styled(
                "Welche Zeichen von Erschöpfung erkennst du bei dir?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Wähle alles aus, was gerade zutrifft.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(heading), heading_area);

        let items: Vec<ListItem> = self
            .signs
            .iter()
            .enumerate()
            .map(|(i, sign)| {
                let checked = self.selected.contains(*sign);
                let marker = if checked { "[x]" } else { "[ ]" };
                let style = if i == self.menu.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if checked {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(
                    format!(" {marker} {sign} "),
                    style,
                )))
            })
            .collect();
        frame.render_stateful_widget(List::new(items), list_area, &mut self.menu.list_state);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{} ausgewählt", self.selected.len()),
                Style::default().fg(Color::DarkGray),
            ))),
            footer_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " ↑↓ Wählen  Leertaste Umschalten  e Auswerten  c Zurücksetzen  Esc Zurück ",
                Style::default().fg(Color::DarkGray),
            ))),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(signs: Vec<&str>, selected: &BTreeSet<String>) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut menu = MenuState::new();
        terminal
            .draw(|f| {
                let mut screen = QuestionnaireScreen {
                    signs,
                    selected,
                    menu: &mut menu,
                };
                screen.render(f, f.area());
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
    fn test_questionnaire_marks_selected_signs() {
        let catalog = Catalog::load_default().unwrap();
        let signs = catalog.unique_signs();
        let first = signs[0].to_string();
        let selected: BTreeSet<String> = [first.clone()].into_iter().collect();
        let text = render_to_text(signs, &selected);
        assert!(text.contains("Welche Zeichen von Erschöpfung erkennst du bei dir?"));
        assert!(text.contains(&format!("[x] {first}")));
        assert!(text.contains("[ ] "));
        assert!(text.contains("1 ausgewählt"));
    }

    #[test]
    fn test_questionnaire_empty_selection() {
        let catalog = Catalog::load_default().unwrap();
        let text = render_to_text(catalog.unique_signs(), &BTreeSet::new());
        assert!(text.contains("0 ausgewählt"));
        assert!(!text.contains("[x]"));
    }
}
