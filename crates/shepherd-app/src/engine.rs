//! Engine - orchestration state shared by the TUI runner and tests
//!
//! Owns the model, the message channel and the registry client. Frontends
//! feed it input messages and read `state` to render.

use shepherd_client::RegistryClient;
use shepherd_core::prelude::*;
use shepherd_core::ServiceEndpoint;
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the message channel
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for the GoShepherd client.
pub struct Engine<C> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel.
    /// Clone this to give to input sources and background requests.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    client: C,
}

impl<C> Engine<C>
where
    C: RegistryClient + Clone + Send + Sync + 'static,
{
    /// Create an engine talking to `endpoint` through `client`.
    ///
    /// Spawns the signal handler, so it must be called inside a tokio runtime.
    pub fn new(client: C, endpoint: ServiceEndpoint, settings: Settings) -> Self {
        let state = AppState::new(endpoint, settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        info!("Engine ready for {}", state.endpoint.display_base());
        Self {
            state,
            msg_tx,
            msg_rx,
            client,
        }
    }

    /// Issue the initial registry fetch
    pub fn start(&mut self) {
        self.process_message(Message::RefreshRegistry);
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.client, &self.msg_tx);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message (usually a finished request) and process it.
    ///
    /// Returns false once every sender is gone.
    pub async fn process_next_message(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
