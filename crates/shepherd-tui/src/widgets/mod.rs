//! Widget components for the TUI

mod alert_dialog;
mod header;
pub mod modal_overlay;
mod registration_form;
mod registry_table;
mod status_line;

pub use alert_dialog::AlertDialog;
pub use header::MainHeader;
pub use registration_form::RegistrationForm;
pub use registry_table::RegistryTable;
pub use status_line::StatusLine;
