//! Key event handlers for different UI modes

use shepherd_core::ToolType;

use crate::form::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Pane, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Alert => handle_key_alert(key),
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
        UiMode::Normal => match state.pane {
            Pane::Form => handle_key_form(state, key),
            Pane::Table => handle_key_table(key),
        },
    }
}

/// The alert is blocking: only dismiss keys do anything
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::DismissAlert),
        _ => None,
    }
}

fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Form pane: printable keys type into the focused field
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.form.focus;

    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('r') => Some(Message::RefreshRegistry),
        InputKey::CharCtrl('s') => Some(Message::Submit),
        InputKey::CharCtrl('u') => Some(Message::ClearInput),

        InputKey::Tab | InputKey::Down => Some(Message::FocusNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrevField),
        InputKey::Esc => Some(Message::FocusPane(Pane::Table)),

        // Tool selector
        InputKey::Left if focus == FormField::Tool => {
            Some(Message::SelectTool(state.form.tool().prev()))
        }
        InputKey::Right | InputKey::Char(' ') if focus == FormField::Tool => {
            Some(Message::SelectTool(state.form.tool().next()))
        }
        InputKey::Char(c @ '0'..='2') if focus == FormField::Tool => {
            ToolType::from_wire(&c.to_string()).map(Message::SelectTool)
        }

        InputKey::Enter if focus == FormField::Upload => Some(Message::StartUpload),
        InputKey::Enter => Some(Message::Submit),

        InputKey::Char(c) if focus.is_text() => Some(Message::InputChar(c)),
        InputKey::Backspace if focus.is_text() => Some(Message::InputBackspace),

        _ => None,
    }
}

fn handle_key_table(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNextRow),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevRow),
        InputKey::Char('g') | InputKey::Home => Some(Message::SelectFirstRow),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLastRow),

        InputKey::Char('d') | InputKey::Delete => Some(Message::RemoveSelected),
        InputKey::Char('r') | InputKey::CharCtrl('r') => Some(Message::RefreshRegistry),

        InputKey::Char('a') | InputKey::Tab | InputKey::BackTab | InputKey::Esc => {
            Some(Message::FocusPane(Pane::Form))
        }

        _ => None,
    }
}
