//! Registry fetch and removal handlers

use shepherd_core::prelude::*;
use shepherd_core::{Port, RegistryEntry};

use crate::alert::RequestFailure;
use crate::registry_view::FetchTicket;
use crate::state::AppState;

use super::{Task, UpdateAction, UpdateResult};

/// Issue a new list fetch, superseding any still in flight
pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    let ticket = state.registry.begin_fetch();
    debug!("Fetching registry (ticket {})", ticket.seq());
    UpdateResult::action(UpdateAction::FetchRegistry { ticket })
}

pub fn handle_fetched(
    state: &mut AppState,
    ticket: FetchTicket,
    entries: Vec<RegistryEntry>,
) -> UpdateResult {
    let count = entries.len();
    if state.registry.apply_fetch(ticket, entries) {
        debug!("Registry synced: {} entries (ticket {})", count, ticket.seq());
        state.set_status(format!("Loaded {} registered tools", state.registry.len()));
    } else {
        debug!("Discarding superseded registry response (ticket {})", ticket.seq());
    }
    UpdateResult::none()
}

pub fn handle_fetch_failed(
    state: &mut AppState,
    ticket: FetchTicket,
    failure: RequestFailure,
) -> UpdateResult {
    if state.registry.fail_fetch(ticket) {
        warn!("Registry fetch failed: {}", failure.reason());
        state.show_alert(failure.alert());
    } else {
        debug!("Ignoring failure of superseded fetch (ticket {})", ticket.seq());
    }
    UpdateResult::none()
}

/// Delete the selected row now and unregister it in the background.
///
/// The row is not restored if the request later fails.
pub fn handle_remove_selected(state: &mut AppState) -> UpdateResult {
    let Some(entry) = state.registry.remove_selected() else {
        return UpdateResult::none();
    };

    let port = entry.port;
    info!("Removing '{}' on port {}", entry.name, port);
    state.set_status(format!("Removed '{}' (port {})", entry.name, port));
    UpdateResult::action(UpdateAction::SpawnTask(Task::Remove(port)))
}

pub fn handle_remove_completed(state: &mut AppState, port: Port) -> UpdateResult {
    debug!("Service confirmed removal of port {}", port);
    state.registry.confirm_removal(port);
    UpdateResult::none()
}

pub fn handle_remove_failed(
    state: &mut AppState,
    port: Port,
    failure: RequestFailure,
) -> UpdateResult {
    warn!("Removing port {} failed: {}", port, failure.reason());
    state.registry.forget_removal(port);
    state.set_warning(format!(
        "Service did not confirm removal of port {}: {}",
        port,
        failure.reason()
    ));
    UpdateResult::none()
}
