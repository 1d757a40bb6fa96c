//! Action handlers: UpdateAction dispatch and background request spawning
//!
//! Every request runs on its own tokio task and reports back through the
//! message channel. Nothing here touches [`AppState`](crate::state::AppState).

use shepherd_client::RegistryClient;
use tokio::sync::mpsc;
use tracing::debug;

use crate::alert::RequestFailure;
use crate::handler::{Task, UpdateAction};
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, client: &C, msg_tx: mpsc::Sender<Message>)
where
    C: RegistryClient + Clone + Send + Sync + 'static,
{
    let client = client.clone();
    match action {
        UpdateAction::FetchRegistry { ticket } => {
            tokio::spawn(async move {
                let msg = match client.list().await {
                    Ok(entries) => Message::RegistryFetched { ticket, entries },
                    Err(e) => Message::RegistryFetchFailed {
                        ticket,
                        failure: RequestFailure::from(e),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, &client, &msg_tx).await;
            });
        }
    }
}

/// Run one request to completion and post its result
pub async fn execute_task<C>(task: Task, client: &C, msg_tx: &mpsc::Sender<Message>)
where
    C: RegistryClient + Sync,
{
    let msg = match task {
        Task::Add(request) => match client.add(request.clone()).await {
            Ok(outcome) => Message::AddCompleted { request, outcome },
            Err(e) => Message::AddFailed {
                failure: RequestFailure::from(e),
            },
        },

        Task::Remove(port) => match client.remove(port).await {
            Ok(()) => Message::RemoveCompleted { port },
            Err(e) => Message::RemoveFailed {
                port,
                failure: RequestFailure::from(e),
            },
        },

        Task::Upload(request) => match client.upload(request).await {
            Ok(path) => Message::UploadCompleted { path },
            Err(e) => Message::UploadFailed {
                failure: RequestFailure::from(e),
            },
        },
    };
    send(msg_tx, msg).await;
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(e) = msg_tx.send(msg).await {
        // Receiver gone: the app is shutting down
        debug!("Dropping result, channel closed: {:?}", e.0);
    }
}
