//! # Recovery Types Component
//!
//! Entry screen of the recovery tab: the three recovery dimensions plus
//! a final row that starts the exhaustion questionnaire. Row order here
//! must match the action order the screen's menu resolves to.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use crate::catalog::RecoveryType;
use crate::tui::component::Component;
use crate::tui::components::menu::MenuState;
use crate::tui::ui::hex_color;

/// Label of the trailing questionnaire row.
pub const CHECK_ITEM: &str = "Erschöpfungs-Check starten";

pub struct RecoveryTypesScreen<'a> {
    pub recovery_types: &'a [RecoveryType],
    pub menu: &'a mut MenuState,
}

impl Component for RecoveryTypesScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, list_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Wovon bist du erschöpft?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))),
            heading_area,
        );

        let mut items: Vec<ListItem> = Vec::new();
        for (i, rt) in self.recovery_types.iter().enumerate() {
            let selected = i == self.menu.selected;
            let name_style = if selected {
                Style::default()
                    .fg(hex_color(&rt.color))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
                    .fg(hex_color(&rt.color))
                    .add_modifier(Modifier::BOLD)
            };
            items.push(ListItem::new(vec![
                Line::from(Span::styled(format!(" {} ", rt.name), name_style)),
                Line::from(Span::styled(
                    format!("   {}", rt.short_description),
                    Style::default().fg(Color::DarkGray),
                )),
            ]));
        }
        let check_selected = self.menu.selected == self.recovery_types.len();
        let check_style = if check_selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        items.push(ListItem::new(vec![
            Line::from(""),
            Line::from(Span::styled(format!(" {CHECK_ITEM} "), check_style)),
        ]));
        frame.render_stateful_widget(List::new(items), list_area, &mut self.menu.list_state);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " ↑↓ Wählen  Enter Öffnen  Esc Zurück ",
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

    fn render_to_text(recovery_types: &[RecoveryType]) -> String {
        let backend = TestBackend::new(90, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut menu = MenuState::new();
        terminal
            .draw(|f| {
                let mut screen = RecoveryTypesScreen {
                    recovery_types,
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
    fn test_recovery_types_shows_all_types_and_check() {
        let catalog = Catalog::load_default().unwrap();
        let text = render_to_text(catalog.recovery_types());
        assert!(text.contains("Wovon bist du erschöpft?"));
        assert!(text.contains("Körperliche Erholung"));
        assert!(text.contains("Mentale Erholung"));
        assert!(text.contains("Emotionale Erholung"));
        assert!(text.contains(CHECK_ITEM));
    }
}
