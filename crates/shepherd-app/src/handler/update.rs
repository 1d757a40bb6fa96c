//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Pane};

use super::{keys::handle_key, registry, submit, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit | Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNextField => {
            if !state.form.focus_next() {
                state.pane = Pane::Table;
            }
            UpdateResult::none()
        }

        Message::FocusPrevField => {
            if !state.form.focus_prev() {
                state.pane = Pane::Table;
            }
            UpdateResult::none()
        }

        Message::FocusPane(pane) => {
            state.pane = pane;
            UpdateResult::none()
        }

        Message::SelectTool(tool) => {
            state.form.on_tool_type_change(tool);
            UpdateResult::none()
        }

        Message::InputChar(c) => {
            state.form.input_char(c);
            UpdateResult::none()
        }

        Message::InputBackspace => {
            state.form.backspace();
            UpdateResult::none()
        }

        Message::ClearInput => {
            state.form.clear_field();
            UpdateResult::none()
        }

        Message::Submit => submit::handle_submit(state),
        Message::AddCompleted { request, outcome } => {
            submit::handle_add_completed(state, request, outcome)
        }
        Message::AddFailed { failure } => submit::handle_add_failed(state, failure),

        Message::StartUpload => submit::handle_start_upload(state),
        Message::UploadCompleted { path } => submit::handle_upload_completed(state, path),
        Message::UploadFailed { failure } => submit::handle_upload_failed(state, failure),

        // ─────────────────────────────────────────────────────────
        // Registry Messages
        // ─────────────────────────────────────────────────────────
        Message::RefreshRegistry => registry::handle_refresh(state),
        Message::RegistryFetched { ticket, entries } => {
            registry::handle_fetched(state, ticket, entries)
        }
        Message::RegistryFetchFailed { ticket, failure } => {
            registry::handle_fetch_failed(state, ticket, failure)
        }

        Message::SelectNextRow => {
            state.registry.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevRow => {
            state.registry.select_previous();
            UpdateResult::none()
        }
        Message::SelectFirstRow => {
            state.registry.select_first();
            UpdateResult::none()
        }
        Message::SelectLastRow => {
            state.registry.select_last();
            UpdateResult::none()
        }

        Message::RemoveSelected => registry::handle_remove_selected(state),
        Message::RemoveCompleted { port } => registry::handle_remove_completed(state, port),
        Message::RemoveFailed { port, failure } => {
            registry::handle_remove_failed(state, port, failure)
        }
    }
}
