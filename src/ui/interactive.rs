use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::input::keys;
use crate::input::{Dispatch, Dispatcher, Surface};
use crate::renderer::SwatchTerminal;
use crate::shared::config::StartupSettings;

/// Runs one calibration session until a quit key is pressed.
///
/// The key handler is set up exactly once, after the terminal is ready.
pub fn run_calibration(settings: &StartupSettings) -> Result<()> {
    let mut surface = SwatchTerminal::new()?;
    let run_result = run_session(&mut surface, settings);
    let restore_result = surface.restore();

    if let Err(err) = restore_result {
        crate::utils::logger::error(&format!("Failed to restore terminal: {}", err));
    }

    run_result
}

fn run_session(surface: &mut SwatchTerminal, settings: &StartupSettings) -> Result<()> {
    let mut dispatcher = Dispatcher::new(settings.initial_state());
    surface.redraw(dispatcher.state())?;

    if settings.fullscreen {
        surface.request_fullscreen();
    }

    crate::utils::logger::info(&format!(
        "Session started at {}",
        dispatcher.state().render_color()
    ));

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if keys::is_quit(&key) {
                    break;
                }
                let Some(code) = keys::virtual_key(key.code) else {
                    continue;
                };
                if dispatcher.dispatch(code, surface)? == Dispatch::FullScreen {
                    crate::utils::logger::info("Full-screen requested");
                }
            }
            // New size, same color: refresh the status metrics.
            Event::Resize(_, _) => surface.redraw(dispatcher.state())?,
            _ => {}
        }
    }

    crate::utils::logger::info(&format!(
        "Session ended at {}",
        dispatcher.state().render_color()
    ));
    Ok(())
}
