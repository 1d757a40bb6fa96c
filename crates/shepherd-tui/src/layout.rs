//! Screen layout for the main view
//!
//! Header on top, registration form below it sized to its fields, the
//! registry table taking what is left, and a one-row status line at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows of the header container (borders plus one content row)
pub const HEADER_HEIGHT: u16 = 3;

const STATUS_HEIGHT: u16 = 1;

/// Smallest table that still shows a header row and one entry
const MIN_TABLE_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    pub table: Rect,
    pub status: Rect,
}

/// Split the screen.
///
/// `form_content_height` is the number of rows the form needs inside its
/// borders. The form shrinks before the table drops below its minimum.
pub fn create(area: Rect, form_content_height: u16) -> ScreenAreas {
    let room = area
        .height
        .saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT + MIN_TABLE_HEIGHT);
    let form_height = (form_content_height + 2).min(room);

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(form_height),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        table: chunks[2],
        status: chunks[3],
    }
}
