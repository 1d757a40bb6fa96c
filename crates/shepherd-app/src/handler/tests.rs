//! Tests for handler module

use super::*;
use crate::alert::{RequestFailure, SERVICE_UNAVAILABLE_MESSAGE};
use crate::config::Settings;
use crate::form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState, Pane, StatusLevel, UiMode};
use shepherd_client::AddOutcome;
use shepherd_core::{Port, RegistryEntry, ServiceEndpoint, ToolType, PATH2_PLACEHOLDER};

fn test_state() -> AppState {
    AppState::new(
        ServiceEndpoint::parse("http://10.0.0.5:7777").unwrap(),
        Settings::default(),
    )
}

fn port(n: u16) -> Port {
    Port::new(n).unwrap()
}

fn entry(name: &str, p: u16) -> RegistryEntry {
    RegistryEntry::new(name, format!("/{name}"), None, port(p))
}

/// Run a message and every follow-up message, collecting actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn fill_form(state: &mut AppState, tool: ToolType, name: &str, path1: &str) {
    state.form.on_tool_type_change(tool);
    state.form.name = name.to_string();
    state.form.path1 = path1.to_string();
}

/// Submit the form and return the add request it produced
fn submit(state: &mut AppState) -> AddRequest {
    match run(state, Message::Submit).as_slice() {
        [UpdateAction::SpawnTask(Task::Add(request))] => request.clone(),
        other => panic!("expected one add task, got {:?}", other),
    }
}

fn rows(state: &AppState) -> Vec<u16> {
    state.registry.rows().iter().map(|r| r.port.get()).collect()
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_in_table_requests_quit() {
    let mut state = test_state();
    state.pane = Pane::Table;
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::RequestQuit)
    ));
}

#[test]
fn test_q_in_form_types_character() {
    let mut state = test_state();
    state.form.focus = FormField::Name;
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::InputChar('q'))
    ));
}

#[test]
fn test_confirm_quit_flow() {
    let mut state = test_state();
    state.settings.ui.confirm_quit = true;

    update(&mut state, Message::RequestQuit);
    assert_eq!(state.ui_mode, UiMode::ConfirmQuit);

    run(&mut state, Message::Key(InputKey::Char('n')));
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!state.should_quit());

    update(&mut state, Message::RequestQuit);
    run(&mut state, Message::Key(InputKey::Char('y')));
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Submit cycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_sends_empty_path2_for_single_file_tools() {
    for tool in [ToolType::Profile, ToolType::Trace] {
        let mut state = test_state();
        fill_form(&mut state, tool, "demo", "/x");
        assert_eq!(state.form.path2(), PATH2_PLACEHOLDER);

        let request = submit(&mut state);
        assert_eq!(request.path2, "");
    }
}

#[test]
fn test_assigned_port_appends_one_row_without_warning() {
    let mut state = test_state();
    fill_form(&mut state, ToolType::Trace, "demo", "/x");
    let request = submit(&mut state);
    assert_eq!(request.tool.wire_value(), "1");
    assert!(state.form.is_busy());

    run(
        &mut state,
        Message::AddCompleted {
            request,
            outcome: AddOutcome::Assigned(port(8080)),
        },
    );

    assert_eq!(rows(&state), vec![8080]);
    assert_eq!(state.registry.rows()[0].name, "demo");
    assert_eq!(state.registry.rows()[0].tool, Some(ToolType::Trace));
    assert!(state.alert.is_none());
    assert!(!state.form.is_busy());
}

#[test]
fn test_service_down_shows_fixed_warning() {
    let mut state = test_state();
    fill_form(&mut state, ToolType::Trace, "demo", "/x");
    let request = submit(&mut state);

    run(
        &mut state,
        Message::AddCompleted {
            request,
            outcome: AddOutcome::ServiceDown,
        },
    );

    assert!(state.registry.is_empty());
    assert_eq!(state.ui_mode, UiMode::Alert);
    assert_eq!(
        state.alert.as_ref().unwrap().message,
        SERVICE_UNAVAILABLE_MESSAGE
    );
    assert!(!state.form.is_busy());
}

#[test]
fn test_rejection_shows_exact_text() {
    let mut state = test_state();
    fill_form(&mut state, ToolType::Trace, "demo", "/x");
    let request = submit(&mut state);

    run(
        &mut state,
        Message::AddCompleted {
            request,
            outcome: AddOutcome::Rejected("name already exists".to_string()),
        },
    );

    assert!(state.registry.is_empty());
    assert_eq!(state.alert.as_ref().unwrap().message, "name already exists");
    assert!(!state.form.is_busy());
    // Inputs are kept so the user can correct them
    assert_eq!(state.form.name, "demo");
}

#[test]
fn test_transport_failure_clears_busy() {
    let mut state = test_state();
    fill_form(&mut state, ToolType::Profile, "demo", "/x");
    submit(&mut state);

    run(
        &mut state,
        Message::AddFailed {
            failure: RequestFailure::ServiceUnavailable("connection refused".into()),
        },
    );

    assert!(!state.form.is_busy());
    assert_eq!(
        state.alert.as_ref().unwrap().message,
        SERVICE_UNAVAILABLE_MESSAGE
    );
}

#[test]
fn test_second_submit_while_busy_is_ignored() {
    let mut state = test_state();
    fill_form(&mut state, ToolType::Profile, "demo", "/x");
    submit(&mut state);

    assert!(run(&mut state, Message::Submit).is_empty());
    assert!(state.form.is_busy());
}

#[test]
fn test_invalid_form_shows_inline_error() {
    let mut state = test_state();
    fill_form(&mut state, ToolType::ProfileDiff, "demo", "/x");

    assert!(run(&mut state, Message::Submit).is_empty());
    assert!(state.form.error.is_some());
    assert!(!state.form.is_busy());
    assert!(state.alert.is_none());
}

#[test]
fn test_enter_in_form_submits() {
    let mut state = test_state();
    fill_form(&mut state, ToolType::Profile, "demo", "/x");
    state.form.focus = FormField::Path1;

    let actions = run(&mut state, Message::Key(InputKey::Enter));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SpawnTask(Task::Add(_))]
    ));
}

#[test]
fn test_tool_selector_keys() {
    let mut state = test_state();
    state.form.focus = FormField::Tool;

    run(&mut state, Message::Key(InputKey::Char('2')));
    assert_eq!(state.form.tool(), ToolType::ProfileDiff);
    assert!(state.form.path2_visible());

    run(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.form.tool(), ToolType::Profile);
    assert_eq!(state.form.path2(), PATH2_PLACEHOLDER);
}

#[test]
fn test_typing_fills_focused_field() {
    let mut state = test_state();
    state.form.focus = FormField::Name;
    for c in "demo".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }
    run(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.form.name, "dem");
}

#[test]
fn test_tab_past_last_field_moves_to_table() {
    let mut state = test_state();
    state.form.focus = FormField::Upload;
    run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.pane, Pane::Table);

    run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.pane, Pane::Form);
}

// ─────────────────────────────────────────────────────────
// Upload
// ─────────────────────────────────────────────────────────

#[test]
fn test_upload_completion_fills_path_and_submits_once() {
    let mut state = test_state();
    state.form.name = "demo".into();
    state.form.upload_file = "/home/me/cpu.pprof".into();

    let actions = run(&mut state, Message::StartUpload);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SpawnTask(Task::Upload(_))]
    ));

    let actions = run(
        &mut state,
        Message::UploadCompleted {
            path: "/tmp/x".into(),
        },
    );

    assert_eq!(state.form.path1, "/tmp/x");
    match actions.as_slice() {
        [UpdateAction::SpawnTask(Task::Add(request))] => assert_eq!(request.path1, "/tmp/x"),
        other => panic!("expected exactly one add, got {:?}", other),
    }
}

#[test]
fn test_upload_failure_is_noted_in_status_line() {
    let mut state = test_state();
    state.form.upload_file = "/home/me/cpu.pprof".into();
    run(&mut state, Message::StartUpload);

    run(
        &mut state,
        Message::UploadFailed {
            failure: RequestFailure::Other("Upload failed: null path".into()),
        },
    );

    assert!(!state.form.is_uploading());
    assert!(state.alert.is_none());
    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Warning);
}

// ─────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────

fn refresh(state: &mut AppState) -> crate::registry_view::FetchTicket {
    match run(state, Message::RefreshRegistry).as_slice() {
        [UpdateAction::FetchRegistry { ticket }] => *ticket,
        other => panic!("expected a fetch, got {:?}", other),
    }
}

#[test]
fn test_list_renders_rows() {
    let mut state = test_state();
    let ticket = refresh(&mut state);

    run(
        &mut state,
        Message::RegistryFetched {
            ticket,
            entries: vec![RegistryEntry::new("p1", "/a", Some(String::new()), port(8001))],
        },
    );

    assert_eq!(rows(&state), vec![8001]);
    let row = &state.registry.rows()[0];
    assert_eq!(state.access_url(row), "http://10.0.0.5:8001");
    assert_eq!(row.path_lines(), vec!["/a"]);
}

#[test]
fn test_superseded_list_never_changes_table() {
    let mut state = test_state();
    let stale = refresh(&mut state);
    let fresh = refresh(&mut state);

    run(
        &mut state,
        Message::RegistryFetched {
            ticket: stale,
            entries: vec![entry("old", 8001)],
        },
    );
    assert!(state.registry.is_empty());

    run(
        &mut state,
        Message::RegistryFetchFailed {
            ticket: stale,
            failure: RequestFailure::ServiceUnavailable("late".into()),
        },
    );
    assert!(state.alert.is_none());

    run(
        &mut state,
        Message::RegistryFetched {
            ticket: fresh,
            entries: vec![entry("new", 8002)],
        },
    );
    assert_eq!(rows(&state), vec![8002]);
}

#[test]
fn test_fetch_failure_shows_alert() {
    let mut state = test_state();
    let ticket = refresh(&mut state);

    run(
        &mut state,
        Message::RegistryFetchFailed {
            ticket,
            failure: RequestFailure::Malformed("expected value".into()),
        },
    );

    assert_eq!(state.ui_mode, UiMode::Alert);
    assert!(state.alert.as_ref().unwrap().message.contains("expected value"));
}

#[test]
fn test_delete_removes_exactly_matching_row_immediately() {
    let mut state = test_state();
    state
        .registry
        .render_all(vec![entry("a", 8001), entry("b", 8080), entry("c", 8002)]);
    state.pane = Pane::Table;
    state.registry.select_next();

    let actions = run(&mut state, Message::Key(InputKey::Char('d')));

    assert_eq!(rows(&state), vec![8001, 8002]);
    assert_eq!(
        actions,
        vec![UpdateAction::SpawnTask(Task::Remove(port(8080)))]
    );

    // Failure later does not bring the row back
    run(
        &mut state,
        Message::RemoveFailed {
            port: port(8080),
            failure: RequestFailure::ServiceUnavailable("refused".into()),
        },
    );
    assert_eq!(rows(&state), vec![8001, 8002]);
    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Warning);
}

#[test]
fn test_delete_then_refresh_before_service_confirms() {
    let mut state = test_state();
    state
        .registry
        .render_all(vec![entry("a", 8001), entry("b", 8002)]);
    state.pane = Pane::Table;

    run(&mut state, Message::SelectFirstRow);
    run(&mut state, Message::RemoveSelected);
    let ticket = refresh(&mut state);

    // The list is answered before the removal reached the service
    run(
        &mut state,
        Message::RegistryFetched {
            ticket,
            entries: vec![entry("a", 8001), entry("b", 8002)],
        },
    );
    assert_eq!(rows(&state), vec![8002]);

    run(&mut state, Message::RemoveCompleted { port: port(8001) });
    let ticket = refresh(&mut state);
    run(
        &mut state,
        Message::RegistryFetched {
            ticket,
            entries: vec![entry("b", 8002)],
        },
    );
    assert_eq!(rows(&state), vec![8002]);
}

#[test]
fn test_failed_delete_row_returns_on_next_refresh() {
    let mut state = test_state();
    state.registry.render_all(vec![entry("a", 8001)]);
    state.pane = Pane::Table;
    run(&mut state, Message::RemoveSelected);
    run(
        &mut state,
        Message::RemoveFailed {
            port: port(8001),
            failure: RequestFailure::ServiceUnavailable("refused".into()),
        },
    );
    assert!(state.registry.is_empty());

    let ticket = refresh(&mut state);
    run(
        &mut state,
        Message::RegistryFetched {
            ticket,
            entries: vec![entry("a", 8001)],
        },
    );
    assert_eq!(rows(&state), vec![8001]);
}

#[test]
fn test_delete_takes_selected_row_when_ports_repeat() {
    let mut state = test_state();
    state
        .registry
        .render_all(vec![entry("first", 8001), entry("second", 8001)]);
    state.pane = Pane::Table;

    run(&mut state, Message::SelectLastRow);
    let actions = run(&mut state, Message::RemoveSelected);

    assert_eq!(state.registry.rows().len(), 1);
    assert_eq!(state.registry.rows()[0].name, "first");
    assert_eq!(actions, vec![UpdateAction::SpawnTask(Task::Remove(port(8001)))]);
}

#[test]
fn test_edits_during_submit_survive_success() {
    let mut state = test_state();
    fill_form(&mut state, ToolType::Trace, "demo", "/x");
    let request = submit(&mut state);

    state.form.focus = FormField::Name;
    run(&mut state, Message::InputChar('2'));
    run(
        &mut state,
        Message::AddCompleted {
            request,
            outcome: AddOutcome::Assigned(port(8080)),
        },
    );

    assert_eq!(rows(&state), vec![8080]);
    assert_eq!(state.form.name, "demo2");
    assert_eq!(state.form.path1, "/x");
}

#[test]
fn test_unchanged_form_resets_after_success() {
    let mut state = test_state();
    fill_form(&mut state, ToolType::Trace, "demo", "/x");
    let request = submit(&mut state);
    run(
        &mut state,
        Message::AddCompleted {
            request,
            outcome: AddOutcome::Assigned(port(8080)),
        },
    );
    assert!(state.form.name.is_empty());
    assert!(state.form.path1.is_empty());
}

#[test]
fn test_delete_with_empty_table_does_nothing() {
    let mut state = test_state();
    assert!(run(&mut state, Message::RemoveSelected).is_empty());
}

#[test]
fn test_deleted_row_does_not_reappear_after_inflight_fetch() {
    let mut state = test_state();
    state
        .registry
        .render_all(vec![entry("a", 8001), entry("b", 8080)]);
    let ticket = refresh(&mut state);

    state.pane = Pane::Table;
    run(&mut state, Message::SelectLastRow);
    run(&mut state, Message::RemoveSelected);

    run(
        &mut state,
        Message::RegistryFetched {
            ticket,
            entries: vec![entry("a", 8001), entry("b", 8080)],
        },
    );
    assert_eq!(rows(&state), vec![8001]);
}

#[test]
fn test_added_row_survives_inflight_fetch() {
    let mut state = test_state();
    let ticket = refresh(&mut state);

    fill_form(&mut state, ToolType::Trace, "demo", "/x");
    let request = submit(&mut state);
    run(
        &mut state,
        Message::AddCompleted {
            request,
            outcome: AddOutcome::Assigned(port(8080)),
        },
    );

    run(
        &mut state,
        Message::RegistryFetched {
            ticket,
            entries: vec![entry("a", 8001)],
        },
    );
    assert_eq!(rows(&state), vec![8001, 8080]);
}

#[test]
fn test_r_in_table_refreshes() {
    let mut state = test_state();
    state.pane = Pane::Table;
    let actions = run(&mut state, Message::Key(InputKey::Char('r')));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchRegistry { .. }]
    ));
}

// ─────────────────────────────────────────────────────────
// Alert
// ─────────────────────────────────────────────────────────

#[test]
fn test_alert_swallows_all_keys_but_dismiss() {
    let mut state = test_state();
    state.registry.render_all(vec![entry("a", 8001)]);
    state.pane = Pane::Table;
    state.show_alert(crate::alert::AlertState::service_unavailable());

    for key in [
        InputKey::Char('d'),
        InputKey::Char('q'),
        InputKey::Char('r'),
        InputKey::Tab,
        InputKey::Delete,
        InputKey::CharCtrl('c'),
    ] {
        assert!(run(&mut state, Message::Key(key)).is_empty());
    }
    assert_eq!(rows(&state), vec![8001]);
    assert!(!state.should_quit());
    assert_eq!(state.pane, Pane::Table);

    run(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.alert.is_none());
}
