//! # Favorites Component

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use crate::catalog::Card;
use crate::tui::component::Component;
use crate::tui::components::menu::MenuState;

/// Saved cards in the order they were favorited. Unknown ids (catalog
/// changed under a stored list) are filtered out before this renders.
pub struct FavoritesScreen<'a> {
    pub cards: Vec<&'a Card>,
    pub menu: &'a mut MenuState,
}

impl Component for FavoritesScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [body_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        if self.cards.is_empty() {
            let [empty_area] = Layout::vertical([Constraint::Length(2)])
                .flex(Flex::Center)
                .areas(body_area);
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        "Noch keine Favoriten.",
                        Style::default().fg(Color::Gray),
                    ))
                    .centered(),
                    Line::from(Span::styled(
                        "Öffne eine Übung und drücke f.",
                        Style::default().fg(Color::DarkGray),
                    ))
                    .centered(),
                ]),
                empty_area,
            );
        } else {
            let [heading_area, list_area] =
                Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(body_area);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Deine Favoriten",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))),
                heading_area,
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
                    ListItem::new(Line::from(vec![
                        Span::styled(" ♥ ", Style::default().fg(Color::Red)),
                        Span::styled(format!("{} ", card.title), style),
                    ]))
                })
                .collect();
            frame.render_stateful_widget(List::new(items), list_area, &mut self.menu.list_state);
        }

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

    fn render_to_text(cards: Vec<&Card>) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut menu = MenuState::new();
        terminal
            .draw(|f| {
                let mut screen = FavoritesScreen {
                    cards,
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
    fn test_favorites_empty_state() {
        let text = render_to_text(Vec::new());
        assert!(text.contains("Noch keine Favoriten."));
        assert!(text.contains("Öffne eine Übung und drücke f."));
    }

    #[test]
    fn test_favorites_lists_saved_cards() {
        let catalog = Catalog::load_default().unwrap();
        let cards = vec![
            catalog.card_by_id("blau-1").unwrap(),
            catalog.card_by_id("gruen-2").unwrap(),
        ];
        let text = render_to_text(cards);
        assert!(text.contains("Lange Ausatmung"));
        assert!(text.contains("5-4-3-2-1-Übung"));
        assert!(text.contains("♥"));
        assert!(!text.contains("Noch keine Favoriten."));
    }
}
