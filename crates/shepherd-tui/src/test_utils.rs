//! Test helpers for rendering widgets into an in-memory terminal

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, widgets::Widget, Frame, Terminal};

/// Default test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 30;

/// Terminal wrapper over [`TestBackend`]
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.backend().buffer().area;
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a single widget into `area`
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to draw");
    }

    /// Draw a full frame
    pub fn draw_with<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).expect("Failed to draw");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Whether any row of the buffer contains `text`
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().lines().any(|line| line.contains(text))
    }

    /// Buffer content as one line of text per row
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
