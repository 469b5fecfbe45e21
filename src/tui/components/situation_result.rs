//! # Situation Result Component
//!
//! The cards curated for one acute situation, in the order the dataset
//! lists them (most immediately helpful first).

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{Card, Situation};
use crate::tui::component::Component;
use crate::tui::components::menu::MenuState;
use crate::tui::ui::hex_color;

pub struct SituationResultScreen<'a> {
    pub situation: &'a Situation,
    pub cards: Vec<&'a Card>,
    pub menu: &'a mut MenuState,
}

impl Component for SituationResultScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, list_area, hint_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let color = hex_color(&self.situation.color);
        let header_lines = vec![
            Line::from(Span::styled(
                format!("{}  {}", self.situation.icon, self.situation.name),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.situation.description.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Das kann dir jetzt helfen:",
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
