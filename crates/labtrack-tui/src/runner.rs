//! Main TUI runner - entry point and event loop

use labtrack_app::config::Settings;
use labtrack_app::Engine;
use labtrack_core::{Error, Result, ResultExt};
use tracing::{error, info, warn};

use crate::{event, render, terminal};

/// Run the TUI against the backend named in `settings`
pub async fn run(settings: Settings) -> Result<()> {
    // Build the engine first so a bad base URL fails before the screen switches
    let mut engine = Engine::new(settings)?;

    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!("Lab tracker TUI started");

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    ratatui::restore();

    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("TUI stopped: {}", e);
        } else {
            warn!("TUI loop ended with error: {}", e);
        }
    }
    result
}

/// Main event loop: drain results, draw, poll input
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Request results and signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
