//! # Category Screen Component
//!
//! One category's header (name, description, badges) above the list of
//! its cards.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{Card, Category};
use crate::tui::component::Component;
use crate::tui::components::menu::MenuState;
use crate::tui::ui::{hex_color, label_suffix};

pub struct CategoryScreen<'a> {
    pub category: &'a Category,
    pub cards: Vec<&'a Card>,
    pub menu: &'a mut MenuState,
}

impl Component for CategoryScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, list_area, hint_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let color = hex_color(&self.category.color);
        let header_lines = vec![
            Line::from(Span::styled(
                label_suffix(&self.category.label),
                Style::default().fg(color),
            )),
            Line::from(Span::styled(
                self.category.name.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.category.description.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                self.category.badge_labels.join(" · "),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(header_lines).wrap(Wrap { trim: true }),
            header_area,
        );

        let items: Vec<ListItem> = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let style = if i == self.menu.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(format!(" {} ", card.title), style)))
            })
            .collect();
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

    #[test]
    fn test_category_screen_shows_header_and_cards() {
        let catalog = Catalog::load_default().unwrap();
        let category = catalog.category_by_id("blau").unwrap();
        let cards = catalog.cards_by_category("blau");
        let backend = TestBackend::new(90, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut menu = MenuState::new();
        terminal
            .draw(|f| {
                let mut screen = CategoryScreen {
                    category,
                    cards: cards.clone(),
                    menu: &mut menu,
                };
                screen.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Mein Herz rast"));
        assert!(text.contains("Runterfahren & Atmung"));
        assert!(text.contains("Lange Ausatmung"));
        assert!(text.contains("Hand auf Brust & Bauch"));
    }
}
