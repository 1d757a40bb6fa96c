//! Registration form widget
//!
//! One row per visible field, then a line holding the submit button or the
//! inline validation error.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use shepherd_app::{FormField, FormState};
use shepherd_core::ToolType;

use crate::theme::{palette, styles};

/// Width of the label column
const LABEL_WIDTH: usize = 13;

pub struct RegistrationForm<'a> {
    form: &'a FormState,
    focused: bool,
}

impl<'a> RegistrationForm<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self {
            form,
            focused: false,
        }
    }

    /// Whether the form pane has keyboard focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows needed inside the border
    pub fn content_height(form: &FormState) -> u16 {
        form.visible_fields().len() as u16 + 1
    }

    fn field_line(&self, field: FormField) -> Line<'a> {
        let is_focused = self.focused && self.form.focus == field;
        let marker = if is_focused { "▸ " } else { "  " };
        let label_style = if is_focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        let mut spans = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
        ];

        match field {
            FormField::Tool => spans.extend(self.tool_spans(is_focused)),
            _ => {
                let value = match field {
                    FormField::Name => self.form.name.as_str(),
                    FormField::Path1 => self.form.path1.as_str(),
                    FormField::Path2 => self.form.path2(),
                    FormField::Upload => self.form.upload_file.as_str(),
                    FormField::Tool => "",
                };
                if value.is_empty() && !is_focused {
                    spans.push(Span::styled(placeholder(field), styles::text_muted()));
                } else {
                    spans.push(Span::styled(value.to_string(), styles::text_primary()));
                }
                if is_focused {
                    spans.push(Span::styled("▏", styles::accent()));
                }
                if field == FormField::Upload && self.form.is_uploading() {
                    spans.push(Span::styled("  uploading…", styles::keybinding()));
                }
            }
        }
        Line::from(spans)
    }

    fn tool_spans(&self, is_focused: bool) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        for tool in ToolType::ALL {
            let style = if tool == self.form.tool() {
                if is_focused {
                    styles::focused_selected()
                } else {
                    styles::accent_bold()
                }
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(format!(" {} ", tool.label()), style));
            spans.push(Span::raw(" "));
        }
        spans
    }

    fn footer_line(&self) -> Line<'a> {
        let indent = Span::raw(" ".repeat(LABEL_WIDTH + 2));
        if let Some(error) = &self.form.error {
            return Line::from(vec![indent, Span::styled(error.clone(), styles::error())]);
        }

        let button = if self.form.is_busy() {
            Span::styled(
                " Submitting… ",
                Style::default()
                    .fg(palette::TEXT_MUTED)
                    .add_modifier(Modifier::DIM),
            )
        } else {
            Span::styled(" Submit ", styles::focused_selected())
        };
        Line::from(vec![
            indent,
            button,
            Span::styled("  Enter", styles::keybinding()),
            Span::styled(" submit  ", styles::text_muted()),
            Span::styled("Enter on upload", styles::keybinding()),
            Span::styled(" upload & submit", styles::text_muted()),
        ])
    }
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Name => "project name",
        FormField::Path1 => "/path/to/cpu.pprof",
        FormField::Path2 => "/path/to/base.pprof",
        FormField::Upload => "local file to upload (optional)",
        FormField::Tool => "",
    }
}

impl Widget for RegistrationForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(" Register ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = self
            .form
            .visible_fields()
            .into_iter()
            .map(|field| self.field_line(field))
            .collect();
        lines.push(self.footer_line());

        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x, y, line, inner.width);
        }
    }
}
