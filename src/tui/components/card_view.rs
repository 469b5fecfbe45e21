//! # Card View Component
//!
//! Full view of a single exercise card: title, preformatted body text,
//! hashtags and the favorite marker. The body scrolls for cards longer
//! than the viewport.

use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::{Card, Category};
use crate::tui::component::Component;
use crate::tui::ui::{hex_color, label_suffix};

pub struct CardView<'a> {
    pub card: &'a Card,
    pub category: Option<&'a Category>,
    pub is_favorite: bool,
    pub scroll: &'a mut ScrollViewState,
}

impl Component for CardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, body_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let color = self
            .category
            .map(|c| hex_color(&c.color))
            .unwrap_or(Color::White);
        let mut title_spans = vec![Span::styled(
            self.card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if self.is_favorite {
            title_spans.push(Span::raw(" "));
            title_spans.push(Span::styled("♥", Style::default().fg(Color::Red)));
        }
        let header_lines = vec![
            Line::from(Span::styled(
                self.category
                    .map(|c| label_suffix(&c.label).to_string())
                    .unwrap_or_default(),
                Style::default().fg(color),
            )),
            Line::from(title_spans),
        ];
        frame.render_widget(Paragraph::new(header_lines), header_area);

        // Body goes into a scroll view; card texts keep their own line
        // breaks, long lines wrap.
        let content_width = body_area.width.saturating_sub(1);
        let text = Paragraph::new(self.card.text.as_str()).wrap(Wrap { trim: false });
        let text_height = text.line_count(content_width) as u16;

        let tags = self
            .card
            .hashtags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        let mut extra_lines = vec![
            Line::default(),
            Line::from(Span::styled(tags, Style::default().fg(Color::DarkGray))),
        ];
        if self.card.audio_clip.is_some() {
            extra_lines.push(Line::from(Span::styled(
                "♪ Audio verfügbar (p)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        let extra_height = extra_lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, text_height + extra_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(text, Rect::new(0, 0, content_width, text_height));
        scroll_view.render_widget(
            Paragraph::new(extra_lines),
            Rect::new(0, text_height, content_width, extra_height),
        );
        frame.render_stateful_widget(scroll_view, body_area, self.scroll);

        let hint = if self.card.audio_clip.is_some() {
            " f Favorit  p Abspielen  ↑↓ Scrollen  Esc Zurück "
        } else {
            " f Favorit  ↑↓ Scrollen  Esc Zurück "
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
