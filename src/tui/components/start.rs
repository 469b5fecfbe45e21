//! # Start Screen Component
//!
//! The calm entry point: pause glyph, tagline, and a small menu.
//! The glyph breathes with the shared pulse value unless reduced motion
//! froze it.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use crate::tui::component::Component;
use crate::tui::components::menu::MenuState;

/// Menu rows, in render order. The event loop maps the selected row to an
/// action via `ui::menu_targets`, which must stay aligned with this list.
pub const START_ITEMS: [&str; 4] = [
    "Was brauche ich gerade?",
    "SOS – Sofort-Hilfe",
    "Impressum",
    "Datenschutz",
];

const PAUSE_GLYPH: [&str; 3] = ["▐▌ ▐▌", "▐▌ ▐▌", "▐▌ ▐▌"];

pub struct StartScreen<'a> {
    pub pulse: f32,
    pub menu: &'a mut MenuState,
}

impl<'a> StartScreen<'a> {
    pub fn new(pulse: f32, menu: &'a mut MenuState) -> Self {
        Self { pulse, menu }
    }
}

impl Component for StartScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let glyph_height = PAUSE_GLYPH.len() as u16;
        let menu_height = START_ITEMS.len() as u16;

        let [glyph_area, _, title_area, tagline_area, _, menu_area, _, hint_area] =
            Layout::vertical([
                Constraint::Length(glyph_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(menu_height),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .flex(Flex::Center)
            .areas(area);

        // Glyph brightness follows the breath pulse
        let v = (160.0 + 80.0 * self.pulse) as u8;
        let glyph_lines: Vec<Line> = PAUSE_GLYPH
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Rgb(v, v, v)))))
            .collect();
        frame.render_widget(
            Paragraph::new(glyph_lines).alignment(Alignment::Center),
            glyph_area,
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Pausenknopf",
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            title_area,
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Für Momente, die gerade viel sind",
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center),
            tagline_area,
        );

        let items: Vec<ListItem> = START_ITEMS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let style = if i == self.menu.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(format!(" {label} "), style)).centered())
            })
            .collect();
        frame.render_stateful_widget(List::new(items), menu_area, &mut self.menu.list_state);

        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                version,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_start_screen_renders_all_entries() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut menu = MenuState::new();
        terminal
            .draw(|f| {
                let mut start = StartScreen::new(0.5, &mut menu);
                start.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Pausenknopf"));
        assert!(text.contains("Für Momente, die gerade viel sind"));
        assert!(text.contains("Was brauche ich gerade?"));
        assert!(text.contains("SOS"));
        assert!(text.contains("Impressum"));
        assert!(text.contains("Datenschutz"));
    }
}
