//! Blocking alert dialog
//!
//! Rendered over a dimmed screen. The same widget doubles as the quit
//! confirmation prompt with different key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 60;

pub struct AlertDialog<'a> {
    title: &'a str,
    message: &'a str,
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> AlertDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            message,
            hints: vec![("Enter", "OK")],
        }
    }

    /// Replace the key hints shown under the message
    pub fn hints(mut self, hints: Vec<(&'a str, &'a str)>) -> Self {
        self.hints = hints;
        self
    }

    fn hint_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (key, label) in &self.hints {
            spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_secondary()));
        }
        Line::from(spans).centered()
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let width = DIALOG_WIDTH.min(area.width.saturating_sub(4)).max(20);
        let text_width = width.saturating_sub(4).max(1) as usize;
        let message_lines: usize = self
            .message
            .lines()
            .map(|l| l.chars().count().div_ceil(text_width).max(1))
            .sum();
        // Border, padding line, message, padding line, hints, border
        let height = u16::try_from(message_lines.max(1))
            .unwrap_or(u16::MAX)
            .saturating_add(5);

        let dialog = modal_overlay::centered_rect(width, height, area);
        modal_overlay::clear_area(buf, dialog);
        modal_overlay::render_shadow(buf, dialog);

        let block = styles::modal_block(self.title);
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        if inner.height < 3 {
            return;
        }

        let message_area = Rect::new(
            inner.x + 1,
            inner.y + 1,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(3),
        );
        Paragraph::new(self.message)
            .style(styles::text_primary())
            .wrap(Wrap { trim: false })
            .render(message_area, buf);

        let hint_area = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        self.hint_line().render(hint_area, buf);
    }
}
