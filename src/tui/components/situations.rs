//! # Situations Screen Component
//!
//! List of acute situations ("Panikattacke", "Kann nicht einschlafen", ...).
//! Picking one opens the cards curated for it.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use crate::catalog::Situation;
use crate::tui::component::Component;
use crate::tui::components::menu::MenuState;
use crate::tui::ui::hex_color;

pub struct SituationsScreen<'a> {
    pub situations: &'a [Situation],
    pub menu: &'a mut MenuState,
}

impl Component for SituationsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, list_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Was ist gerade los?",
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            heading_area,
        );

        let items: Vec<ListItem> = self
            .situations
            .iter()
            .enumerate()
            .map(|(i, situation)| {
                let selected = i == self.menu.selected;
                let name_style = if selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                        .fg(hex_color(&situation.color))
                        .add_modifier(Modifier::BOLD)
                };
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!(" {}  {} ", situation.icon, situation.name),
                        name_style,
                    )),
                    Line::from(Span::styled(
                        format!("    {}", situation.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
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
