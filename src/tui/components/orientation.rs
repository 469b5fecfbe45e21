//! # Orientation Screen Component
//!
//! Entry point of the exercises tab: the category grid, plus the search
//! box and result list when a search is active.
//!
//! Three display states:
//! - no search: heading + category list
//! - search with matches: query box + matching cards
//! - search without matches: query box + "Keine Treffer"

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::catalog::{Card, Category};
use crate::tui::component::Component;
use crate::tui::components::menu::MenuState;
use crate::tui::ui::hex_color;

pub struct OrientationScreen<'a> {
    pub categories: &'a [Category],
    /// Some = an active search replaces the category grid.
    pub results: Option<Vec<&'a Card>>,
    pub committed_query: &'a str,
    /// Some(buffer) while the search box has keyboard focus.
    pub search_input: Option<&'a str>,
    pub menu: &'a mut MenuState,
}

impl Component for OrientationScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let show_box = self.search_input.is_some() || self.results.is_some();
        let [top_area, list_area, hint_area] = Layout::vertical([
            Constraint::Length(if show_box { 3 } else { 2 }),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        if show_box {
            let focused = self.search_input.is_some();
            let content = match self.search_input {
                Some(buffer) => format!("{buffer}▏"),
                None => self.committed_query.to_string(),
            };
            let style = if focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            frame.render_widget(
                Paragraph::new(content)
                    .style(style)
                    .block(Block::bordered().title(" Suche ")),
                top_area,
            );
        } else {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Was brauchst du gerade?",
                    Style::default().add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center),
                top_area,
            );
        }

        match &self.results {
            Some(cards) if cards.is_empty() => {
                frame.render_widget(
                    Paragraph::new("Keine Treffer.")
                        .style(Style::default().fg(Color::DarkGray))
                        .alignment(Alignment::Center),
                    list_area,
                );
            }
            Some(cards) => {
                let items: Vec<ListItem> = cards
                    .iter()
                    .enumerate()
                    .map(|(i, card)| {
                        let selected = i == self.menu.selected;
                        let title_style = if selected {
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                        } else {
                            Style::default().fg(Color::Gray)
                        };
                        let tags = card
                            .hashtags
                            .iter()
                            .map(|t| format!("#{t}"))
                            .collect::<Vec<_>>()
                            .join(" ");
                        ListItem::new(Line::from(vec![
                            Span::styled(format!(" {} ", card.title), title_style),
                            Span::styled(tags, Style::default().fg(Color::DarkGray)),
                        ]))
                    })
                    .collect();
                frame.render_stateful_widget(
                    List::new(items),
                    list_area,
                    &mut self.menu.list_state,
                );
            }
            None => {
                let items: Vec<ListItem> = self
                    .categories
                    .iter()
                    .enumerate()
                    .map(|(i, category)| {
                        let selected = i == self.menu.selected;
                        let keyword_style = if selected {
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                        } else {
                            Style::default()
                                .fg(hex_color(&category.color))
                                .add_modifier(Modifier::BOLD)
                        };
                        ListItem::new(vec![
                            Line::from(Span::styled(
                                format!(" {} ", category.keyword),
                                keyword_style,
                            )),
                            Line::from(Span::styled(
                                format!("   {}", category.short_description),
                                Style::default().fg(Color::DarkGray),
                            )),
                        ])
                    })
                    .collect();
                frame.render_stateful_widget(
                    List::new(items),
                    list_area,
                    &mut self.menu.list_state,
                );
            }
        }

        let hint = if self.search_input.is_some() {
            " Enter Übernehmen  Esc Abbrechen "
        } else {
            " ↑↓ Wählen  Enter Öffnen  / Suchen  w Situationen  z Zufallskarte  Esc Zurück "
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
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

    fn render_to_text(
        results: Option<Vec<&Card>>,
        committed_query: &str,
        search_input: Option<&str>,
        catalog: &Catalog,
    ) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut menu = MenuState::new();
        terminal
            .draw(|f| {
                let mut screen = OrientationScreen {
                    categories: catalog.categories(),
                    results,
                    committed_query,
                    search_input,
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
    fn test_grid_shows_category_keywords() {
        let catalog = Catalog::load_default().unwrap();
        let text = render_to_text(None, "", None, &catalog);
        assert!(text.contains("Was brauchst du gerade?"));
        assert!(text.contains("Runterfahren"));
        assert!(text.contains("Regulieren"));
    }

    #[test]
    fn test_search_results_replace_grid() {
        let catalog = Catalog::load_default().unwrap();
        let card = catalog.card_by_id("blau-1").unwrap();
        let text = render_to_text(Some(vec![card]), "atmen", None, &catalog);
        assert!(text.contains("Lange Ausatmung"));
        assert!(!text.contains("Was brauchst du gerade?"));
    }

    #[test]
    fn test_empty_results_show_no_hits_message() {
        let catalog = Catalog::load_default().unwrap();
        let text = render_to_text(Some(vec![]), "xyzzy", None, &catalog);
        assert!(text.contains("Keine Treffer"));
    }

    #[test]
    fn test_focused_box_shows_buffer_and_cursor() {
        let catalog = Catalog::load_default().unwrap();
        let text = render_to_text(None, "", Some("atm"), &catalog);
        assert!(text.contains("atm▏"));
        assert!(text.contains("Esc Abbrechen"));
    }
}
