//! Bottom status line: last note on the left, key hints on the right

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use shepherd_app::{Pane, StatusNote};

use crate::theme::styles;

pub struct StatusLine<'a> {
    note: Option<&'a StatusNote>,
    pane: Pane,
}

impl<'a> StatusLine<'a> {
    pub fn new(note: Option<&'a StatusNote>, pane: Pane) -> Self {
        Self { note, pane }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.pane {
            Pane::Form => &[
                ("Tab", "next"),
                ("←/→", "tool"),
                ("^R", "refresh"),
                ("Esc", "table"),
                ("^C", "quit"),
            ],
            Pane::Table => &[
                ("j/k", "select"),
                ("d", "delete"),
                ("r", "refresh"),
                ("a", "form"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut hint_spans = Vec::new();
        for (key, label) in self.hints() {
            hint_spans.push(Span::styled(*key, styles::keybinding()));
            hint_spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
        }
        let hints = Line::from(hint_spans);
        let hints_width = hints.width() as u16;

        let note_width = area.width.saturating_sub(hints_width);
        if let Some(note) = self.note {
            let line = Line::from(vec![
                Span::styled(format!(" {} ", note.at.format("%H:%M:%S")), styles::text_muted()),
                Span::styled(note.text.clone(), styles::status_note(note.level)),
            ]);
            buf.set_line(area.x, area.y, &line, note_width);
        }

        if hints_width <= area.width {
            buf.set_line(area.right() - hints_width, area.y, &hints, hints_width);
        }
    }
}
