//! Header bar widget
//!
//! Shows the service the client talks to, how many tools are registered and
//! whether a request is in flight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Main header: app title, service URL, row count, activity indicator
pub struct MainHeader<'a> {
    service_url: &'a str,
    row_count: usize,
    activity: Option<&'a str>,
    tick: u64,
}

impl<'a> MainHeader<'a> {
    pub fn new(service_url: &'a str, row_count: usize) -> Self {
        Self {
            service_url,
            row_count,
            activity: None,
            tick: 0,
        }
    }

    /// Show a spinner with `label` (e.g. "Submitting")
    pub fn activity(mut self, label: Option<&'a str>, tick: u64) -> Self {
        self.activity = label;
        self.tick = tick;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let status_style = if self.activity.is_some() {
            Style::default().fg(palette::STATUS_YELLOW)
        } else {
            Style::default().fg(palette::STATUS_GREEN)
        };

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("●", status_style),
            Span::raw(" "),
            Span::styled(
                "GoShepherd",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.service_url, styles::text_secondary()),
        ]);

        let mut right_spans = Vec::new();
        if let Some(label) = self.activity {
            let frame = SPINNER[(self.tick % SPINNER.len() as u64) as usize];
            right_spans.push(Span::styled(format!("{} {}", frame, label), status_style));
            right_spans.push(Span::raw("  "));
        }
        let noun = if self.row_count == 1 { "tool" } else { "tools" };
        right_spans.push(Span::styled(
            format!("{} {} ", self.row_count, noun),
            styles::text_secondary(),
        ));
        let right = Line::from(right_spans);

        buf.set_line(inner.x, inner.y, &left, inner.width);

        let right_width = right.width() as u16;
        let left_width = left.width() as u16;
        if left_width + right_width < inner.width {
            buf.set_line(
                inner.right() - right_width,
                inner.y,
                &right,
                right_width,
            );
        }
    }
}
