//! Registration form and upload handlers

use shepherd_client::{AddOutcome, AddRequest};
use shepherd_core::prelude::*;
use shepherd_core::RegistryEntry;

use crate::alert::{AlertState, RequestFailure};
use crate::message::Message;
use crate::state::AppState;

use super::{Task, UpdateAction, UpdateResult};

/// Start a submit cycle; a no-op while one is already running
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.form.is_busy() {
        debug!("Submit ignored: a registration is in flight");
        return UpdateResult::none();
    }

    match state.form.begin_submit() {
        Some(request) => {
            info!(
                "Submitting '{}' ({}) for {}",
                request.name, request.tool, request.path1
            );
            UpdateResult::action(UpdateAction::SpawnTask(Task::Add(request)))
        }
        None => UpdateResult::none(),
    }
}

/// Finish the submit cycle with the service's answer
pub fn handle_add_completed(
    state: &mut AppState,
    request: AddRequest,
    outcome: AddOutcome,
) -> UpdateResult {
    state.form.finish_submit();

    match outcome {
        AddOutcome::Assigned(port) => {
            // Keep anything typed while the request was in flight
            let unchanged = state.form.holds(&request);
            let entry = RegistryEntry::new(
                request.name,
                request.path1,
                Some(request.path2),
                port,
            )
            .with_tool(request.tool);
            let url = state.endpoint.access_url(port);
            state.set_status(format!("Registered '{}' at {}", entry.name, url));
            state.registry.append_row(entry);
            if unchanged {
                state.form.reset_inputs();
            }
        }
        AddOutcome::Rejected(message) => {
            state.show_alert(AlertState::rejected(message));
        }
        AddOutcome::ServiceDown => {
            state.show_alert(AlertState::service_unavailable());
        }
    }
    UpdateResult::none()
}

/// Finish the submit cycle after a transport or protocol failure
pub fn handle_add_failed(state: &mut AppState, failure: RequestFailure) -> UpdateResult {
    state.form.finish_submit();
    warn!("Registration failed: {}", failure.reason());
    state.show_alert(failure.alert());
    UpdateResult::none()
}

pub fn handle_start_upload(state: &mut AppState) -> UpdateResult {
    match state.form.begin_upload() {
        Some(request) => {
            info!("Uploading {}", request.file.display());
            state.set_status(format!("Uploading {}…", request.file.display()));
            UpdateResult::action(UpdateAction::SpawnTask(Task::Upload(request)))
        }
        None => UpdateResult::none(),
    }
}

/// A finished upload fills the path and submits the form
pub fn handle_upload_completed(state: &mut AppState, path: String) -> UpdateResult {
    state.set_status(format!("Uploaded to {}", path));
    state.form.set_uploaded_path(path);
    UpdateResult::message(Message::Submit)
}

pub fn handle_upload_failed(state: &mut AppState, failure: RequestFailure) -> UpdateResult {
    state.form.finish_upload();
    warn!("Upload failed: {}", failure.reason());
    state.set_warning(format!("Upload failed: {}", failure.reason()));
    UpdateResult::none()
}
