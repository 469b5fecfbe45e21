//! # Questionnaire Result Component
//!
//! Renders a precomputed ranking of the recovery types. The best match
//! gets its helps listed; an empty selection has no winner and says so
//! instead of crowning a zero-score type.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::recovery::{best_match, RecoveryScore};
use crate::tui::component::Component;
use crate::tui::ui::hex_color;

pub struct QuestionnaireResultScreen<'a> {
    pub scores: Vec<RecoveryScore<'a>>,
}

impl Component for QuestionnaireResultScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [body_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Dein Ergebnis",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        match best_match(&self.scores) {
            None => {
                lines.push(Line::from(Span::styled(
                    "Keine Zeichen ausgewählt.",
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::from(Span::styled(
                    "Geh zurück und wähle aus, was gerade zutrifft.",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Some(best) => {
                let best_color = hex_color(&best.recovery_type.color);
                for score in &self.scores {
                    let is_best = score.recovery_type.id == best.recovery_type.id;
                    let style = if is_best {
                        Style::default()
                            .fg(hex_color(&score.recovery_type.color))
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    lines.push(Line::from(Span::styled(
                        format!("{}  {} Zeichen", score.recovery_type.name, score.matched),
                        style,
                    )));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    best.recovery_type.title.clone(),
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Was dir jetzt helfen kann:",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )));
                for help in &best.recovery_type.helps {
                    lines.push(Line::from(Span::styled(
                        format!("  ✓ {help}"),
                        Style::default().fg(best_color),
                    )));
                }
            }
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Esc Zurück  h Start ",
                Style::default().fg(Color::DarkGray),
            ))),
            hint_area,
        );
    }
}
