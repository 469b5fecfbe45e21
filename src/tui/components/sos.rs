//! # SOS Component
//!
//! Immediate help for acute panic: a paced breathing bar, one affirmation
//! and shortcuts into the panic situation's cards.
//!
//! The pacer is a pure function of the elapsed animation clock so it can
//! be tested without a terminal. One cycle is 4s in, 2s hold, 6s out.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use crate::catalog::Card;
use crate::tui::component::Component;
use crate::tui::components::menu::MenuState;

pub const INHALE_SECS: f32 = 4.0;
pub const HOLD_SECS: f32 = 2.0;
pub const EXHALE_SECS: f32 = 6.0;
const CYCLE_SECS: f32 = INHALE_SECS + HOLD_SECS + EXHALE_SECS;

/// Width of the breathing bar when the lungs are full.
const BAR_CELLS: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    Einatmen,
    Halten,
    Ausatmen,
}

impl BreathPhase {
    pub fn label(&self) -> &'static str {
        match self {
            BreathPhase::Einatmen => "Einatmen",
            BreathPhase::Halten => "Halten",
            BreathPhase::Ausatmen => "Ausatmen",
        }
    }
}

/// Current phase and progress within it (0.0..1.0) for an elapsed clock.
pub fn breath_phase(elapsed: f32) -> (BreathPhase, f32) {
    let t = elapsed % CYCLE_SECS;
    if t < INHALE_SECS {
        (BreathPhase::Einatmen, t / INHALE_SECS)
    } else if t < INHALE_SECS + HOLD_SECS {
        (BreathPhase::Halten, (t - INHALE_SECS) / HOLD_SECS)
    } else {
        (BreathPhase::Ausatmen, (t - INHALE_SECS - HOLD_SECS) / EXHALE_SECS)
    }
}

/// Bar fill for the phase, in cells.
fn bar_width(phase: BreathPhase, progress: f32) -> usize {
    let fill = match phase {
        BreathPhase::Einatmen => progress * BAR_CELLS,
        BreathPhase::Halten => BAR_CELLS,
        BreathPhase::Ausatmen => (1.0 - progress) * BAR_CELLS,
    };
    fill.round() as usize
}

pub struct SosScreen<'a> {
    pub elapsed: f32,
    pub reduced_motion: bool,
    pub affirmation: Option<&'a str>,
    pub shortcuts: Vec<&'a Card>,
    pub menu: &'a mut MenuState,
}

impl Component for SosScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [body_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [breath_area, affirmation_area, shortcut_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .flex(Flex::Start)
        .areas(body_area);

        let mut breath_lines = vec![
            Line::from(Span::styled(
                "Atme mit.",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if self.reduced_motion {
            breath_lines.push(Line::from(Span::styled(
                "4 Sekunden einatmen · 2 Sekunden halten · 6 Sekunden ausatmen",
                Style::default().fg(Color::Cyan),
            )));
        } else {
            let (phase, progress) = breath_phase(self.elapsed);
            breath_lines.push(Line::from(Span::styled(
                phase.label(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            breath_lines.push(Line::from(Span::styled(
                "█".repeat(bar_width(phase, progress)),
                Style::default().fg(Color::Cyan),
            )));
        }
        frame.render_widget(Paragraph::new(breath_lines), breath_area);

        if let Some(text) = self.affirmation {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("„{text}“"),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                ))),
                affirmation_area,
            );
        }

        let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(Span::styled(
            "Schnelle Hilfe:",
            Style::default().fg(Color::DarkGray),
        )))];
        items.extend(self.shortcuts.iter().enumerate().map(|(i, card)| {
            let style = if i == self.menu.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(format!(" {} ", card.title), style)))
        }));
        frame.render_widget(List::new(items), shortcut_area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " ↑↓ Wählen  Enter Öffnen  Esc Zurück ",
                Style::default().fg(Color::DarkGray),
            ))),
            hint_area,
        );
    }
}
