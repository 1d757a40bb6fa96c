//! Message processing
//!
//! Runs a message through the TEA update function, follows any chained
//! messages and dispatches the actions they produce.

use shepherd_client::RegistryClient;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    client: &C,
    msg_tx: &mpsc::Sender<Message>,
) where
    C: RegistryClient + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, client, msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
