//! # Recovery Detail Component
//!
//! Read-only view of one recovery dimension: its signs and its helps.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::RecoveryType;
use crate::tui::component::Component;
use crate::tui::ui::hex_color;

pub struct RecoveryDetailScreen<'a> {
    pub recovery_type: &'a RecoveryType,
}

impl Component for RecoveryDetailScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [body_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let rt = self.recovery_type;
        let color = hex_color(&rt.color);
        let mut lines = vec![
            Line::from(Span::styled(
                rt.name.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                rt.title.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                rt.short_description.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Typische Zeichen:",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        for sign in &rt.signs {
            lines.push(Line::from(Span::styled(
                format!("  • {sign}"),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Was hilft:",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        for help in &rt.helps {
            lines.push(Line::from(Span::styled(
                format!("  ✓ {help}"),
                Style::default().fg(color),
            )));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Esc Zurück ",
                Style::default().fg(Color::DarkGray),
            ))),
            hint_area,
        );
    }
}
