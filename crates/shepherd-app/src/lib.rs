//! shepherd-app - Application state and orchestration for the GoShepherd client
//!
//! Implements the TEA (The Elm Architecture) pattern: a single [`AppState`]
//! model, [`Message`]s describing everything that can happen, a pure
//! `handler::update` function, and [`UpdateAction`]s that the [`Engine`]
//! turns into background requests through a
//! [`RegistryClient`](shepherd_client::RegistryClient).

pub mod actions;
pub mod alert;
pub mod config;
pub mod engine;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod registry_view;
pub mod signals;
pub mod state;

// Re-export primary types
pub use alert::{AlertState, RequestFailure, SERVICE_UNAVAILABLE_MESSAGE};
pub use config::Settings;
pub use engine::Engine;
pub use form::{FormField, FormState};
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use registry_view::{FetchTicket, RegistryView};
pub use state::{AppPhase, AppState, Pane, StatusLevel, StatusNote, UiMode};
