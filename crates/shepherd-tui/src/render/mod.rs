//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use shepherd_app::{AppState, Pane, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Label for the header spinner while a request is in flight
fn activity_label(state: &AppState) -> Option<&'static str> {
    if state.form.is_uploading() {
        Some("Uploading")
    } else if state.form.is_busy() {
        Some("Submitting")
    } else if state.registry.is_fetching() {
        Some("Refreshing")
    } else {
        None
    }
}

/// Render the complete UI. Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let form_height = widgets::RegistrationForm::content_height(&state.form);
    let areas = layout::create(area, form_height);

    let service_url = state.endpoint.display_base();
    frame.render_widget(
        widgets::MainHeader::new(&service_url, state.registry.len())
            .activity(activity_label(state), state.tick),
        areas.header,
    );

    frame.render_widget(
        widgets::RegistrationForm::new(&state.form).focused(state.pane == Pane::Form),
        areas.form,
    );

    frame.render_widget(
        widgets::RegistryTable::new(&state.registry, &state.endpoint)
            .focused(state.pane == Pane::Table),
        areas.table,
    );

    frame.render_widget(
        widgets::StatusLine::new(state.status.as_ref(), state.pane),
        areas.status,
    );

    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::Alert => {
            if let Some(alert) = &state.alert {
                frame.render_widget(
                    widgets::AlertDialog::new(&alert.title, &alert.message),
                    area,
                );
            }
        }
        UiMode::ConfirmQuit => {
            frame.render_widget(
                widgets::AlertDialog::new("Quit", "Leave the GoShepherd client?")
                    .hints(vec![("y", "Quit"), ("n", "Cancel")]),
                area,
            );
        }
    }
}
