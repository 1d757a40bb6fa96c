//! TUI runner: owns the terminal for the lifetime of the session

use shepherd_app::{Engine, Message};
use shepherd_client::RegistryClient;
use shepherd_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive client until the user quits.
///
/// The terminal is restored on every exit path, including errors.
pub async fn run<C>(mut engine: Engine<C>) -> Result<()>
where
    C: RegistryClient + Clone + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    ratatui::restore();
    info!("TUI closed");
    result
}

/// Main event loop
fn run_loop<C>(term: &mut ratatui::DefaultTerminal, engine: &mut Engine<C>) -> Result<()>
where
    C: RegistryClient + Clone + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Finished requests and signals first, so the frame reflects them
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        term.draw(|frame| render::view(frame, &engine.state))?;

        match event::poll() {
            Ok(Some(message)) => engine.process_message(message),
            Ok(None) => {}
            Err(e) => {
                error!("Event polling failed: {}", e);
                engine.process_message(Message::Quit);
            }
        }
    }
    Ok(())
}
