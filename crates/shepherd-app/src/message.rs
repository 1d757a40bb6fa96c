//! Message types for the application (TEA pattern)

use shepherd_client::{AddOutcome, AddRequest};
use shepherd_core::{Port, RegistryEntry, ToolType};

use crate::alert::RequestFailure;
use crate::input_key::InputKey;
use crate::registry_view::FetchTicket;
use crate::state::Pane;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may ask for confirmation)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from the confirmation prompt
    ConfirmQuit,

    /// Cancel quit from the confirmation prompt
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    FocusNextField,
    FocusPrevField,
    FocusPane(Pane),
    SelectTool(ToolType),
    InputChar(char),
    InputBackspace,
    ClearInput,

    /// Submit the registration form
    Submit,

    /// The service answered an add request
    AddCompleted {
        request: AddRequest,
        outcome: AddOutcome,
    },

    /// An add request failed before it produced an answer
    AddFailed { failure: RequestFailure },

    /// Upload the file named in the form
    StartUpload,

    /// The service stored the upload at `path`
    UploadCompleted { path: String },

    UploadFailed { failure: RequestFailure },

    // ─────────────────────────────────────────────────────────
    // Registry Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch the full registry
    RefreshRegistry,

    RegistryFetched {
        ticket: FetchTicket,
        entries: Vec<RegistryEntry>,
    },

    RegistryFetchFailed {
        ticket: FetchTicket,
        failure: RequestFailure,
    },

    SelectNextRow,
    SelectPrevRow,
    SelectFirstRow,
    SelectLastRow,

    /// Delete the selected row and unregister its port
    RemoveSelected,

    RemoveCompleted { port: Port },

    RemoveFailed { port: Port, failure: RequestFailure },

    // ─────────────────────────────────────────────────────────
    // Alert Messages
    // ─────────────────────────────────────────────────────────
    DismissAlert,
}
