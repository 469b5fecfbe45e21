//! # Legal Components
//!
//! Impressum and Datenschutzerklärung as static text blocks. Both are
//! plain scrollable prose with no interaction beyond going back.

use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalKind {
    Impressum,
    Datenschutz,
}

impl LegalKind {
    pub fn title(&self) -> &'static str {
        match self {
            LegalKind::Impressum => "Impressum",
            LegalKind::Datenschutz => "Datenschutz",
        }
    }

    fn sections(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            LegalKind::Impressum => &[
                (
                    "Angaben gemäß § 5 TMG",
                    "Julia Reuter\nKontakt: juliareuter-design.com",
                ),
                (
                    "Haftungsausschluss",
                    "Die Inhalte dieser App wurden mit größter Sorgfalt erstellt. Für die \
                     Richtigkeit, Vollständigkeit und Aktualität der Inhalte kann jedoch keine \
                     Gewähr übernommen werden. Die Nutzung der Inhalte erfolgt auf eigene \
                     Verantwortung. Diese App ersetzt keine professionelle therapeutische oder \
                     medizinische Beratung.",
                ),
                (
                    "Urheberrecht",
                    "Die durch die Seitenbetreiber erstellten Inhalte und Werke auf dieser App \
                     unterliegen dem deutschen Urheberrecht. Die Vervielfältigung, Bearbeitung, \
                     Verbreitung und jede Art der Verwertung außerhalb der Grenzen des \
                     Urheberrechts bedürfen der schriftlichen Zustimmung des jeweiligen Autors \
                     bzw. Erstellers.",
                ),
            ],
            LegalKind::Datenschutz => &[
                ("Verantwortliche", "Julia Reuter\njuliareuter-design.com"),
                (
                    "Datenerfassung",
                    "Diese App erfasst und speichert keine personenbezogenen Daten. Alle Inhalte \
                     und Übungen werden lokal auf Ihrem Gerät ausgeführt. Es werden keine Daten \
                     an externe Server übermittelt.",
                ),
                (
                    "Keine Cookies oder Tracking",
                    "Diese App verwendet keine Cookies, Analytics-Tools oder andere \
                     Tracking-Mechanismen. Ihre Nutzung bleibt vollständig anonym.",
                ),
                (
                    "Ihre Rechte",
                    "Da wir keine personenbezogenen Daten erheben oder speichern, fallen die \
                     üblichen Auskunfts-, Berichtigungs- und Löschungsrechte nicht an. Bei Fragen \
                     zum Datenschutz können Sie uns über die auf der Impressum-Seite angegebenen \
                     Kontaktmöglichkeiten erreichen.",
                ),
                (
                    "Änderungen",
                    "Wir behalten uns vor, diese Datenschutzerklärung anzupassen, um sie an \
                     geänderte rechtliche Rahmenbedingungen oder bei Änderungen der App \
                     anzupassen. Die jeweils aktuelle Fassung finden Sie in der App.",
                ),
            ],
        }
    }
}

pub struct LegalScreen<'a> {
    pub kind: LegalKind,
    pub scroll: &'a mut ScrollViewState,
}

impl Component for LegalScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [body_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let mut lines = vec![
            Line::from(Span::styled(
                self.kind.title(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (heading, body) in self.kind.sections() {
            lines.push(Line::from(Span::styled(
                *heading,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            for part in body.split('\n') {
                lines.push(Line::from(Span::styled(
                    part,
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(""));
        }

        let content_width = body_area.width.saturating_sub(1);
        let text = Paragraph::new(lines).wrap(Wrap { trim: false });
        let text_height = text.line_count(content_width) as u16;
        let mut scroll_view = ScrollView::new(Size::new(content_width, text_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(text, Rect::new(0, 0, content_width, text_height));
        frame.render_stateful_widget(scroll_view, body_area, self.scroll);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " ↑↓ Scrollen  Esc Zurück ",
                Style::default().fg(Color::DarkGray),
            ))),
            hint_area,
        );
    }
}
