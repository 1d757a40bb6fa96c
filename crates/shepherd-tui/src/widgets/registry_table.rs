//! Registry table widget
//!
//! One row per registered tool: name, access URL, one or two path lines and
//! the port that keys deletion.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use shepherd_app::RegistryView;
use shepherd_core::ServiceEndpoint;

use crate::theme::{palette, styles};

pub struct RegistryTable<'a> {
    view: &'a RegistryView,
    endpoint: &'a ServiceEndpoint,
    focused: bool,
}

impl<'a> RegistryTable<'a> {
    pub fn new(view: &'a RegistryView, endpoint: &'a ServiceEndpoint) -> Self {
        Self {
            view,
            endpoint,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(format!(" Registry ({}) ", self.view.len()))];
        if self.view.is_fetching() {
            spans.push(Span::styled("loading… ", styles::keybinding()));
        } else if let Some(at) = self.view.last_sync() {
            spans.push(Span::styled(
                format!("synced {} ", at.format("%H:%M:%S")),
                styles::text_muted(),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for RegistryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(self.title())
            .style(Style::default().bg(palette::CARD_BG));

        if self.view.is_empty() {
            let message = if self.view.is_fetching() {
                "Loading registry…"
            } else {
                "No registered tools"
            };
            Paragraph::new(Line::styled(format!("  {}", message), styles::text_muted()))
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(["Name", "URL", "Path", "Port"])
            .style(styles::accent_bold())
            .bottom_margin(0);

        let rows = self.view.rows().iter().map(|entry| {
            let lines = entry.path_lines();
            let height = lines.len() as u16;
            let paths = Text::from(
                lines
                    .into_iter()
                    .map(|p| Line::styled(p.to_string(), styles::text_primary()))
                    .collect::<Vec<_>>(),
            );
            Row::new(vec![
                Cell::from(entry.name.clone()).style(styles::text_primary()),
                Cell::from(self.endpoint.access_url(entry.port))
                    .style(Style::default().fg(palette::LINK)),
                Cell::from(paths),
                Cell::from(entry.port.to_string()).style(Style::default().fg(palette::PORT)),
            ])
            .height(height)
        });

        let widths = [
            Constraint::Percentage(20),
            Constraint::Length(24),
            Constraint::Fill(1),
            Constraint::Length(6),
        ];

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            Style::default().fg(palette::ACCENT)
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(highlight)
            .highlight_symbol("▸ ");

        let mut state = TableState::default().with_selected(self.view.selected_index());
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
