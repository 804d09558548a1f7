use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::shared::constants;

/// Ways of asking the host to make the window full-screen, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenMethod {
    /// "Enter Full Screen" menu action of the front app (macOS).
    MacMenuAction,
    /// xterm window operation written to the terminal.
    XtermWindowOp,
    /// Simulated F11 key press sent through the window system.
    SimulatedF11,
}

/// What the host offers, captured once per request.
#[derive(Clone, Debug, Default)]
pub struct HostEnvironment {
    pub macos: bool,
    pub stdout_is_terminal: bool,
    pub term: Option<String>,
    pub window_system: bool,
    pub has_xdotool: bool,
}

impl HostEnvironment {
    pub fn capture() -> Self {
        Self {
            macos: cfg!(target_os = "macos"),
            stdout_is_terminal: io::stdout().is_terminal(),
            term: env::var("TERM").ok(),
            window_system: env::var("DISPLAY").is_ok() || env::var("WAYLAND_DISPLAY").is_ok(),
            has_xdotool: on_path("xdotool"),
        }
    }
}

fn on_path(program: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| Path::new(&dir).join(program).is_file()))
        .unwrap_or(false)
}

/// Native methods in the order they are tried, then the legacy key press.
/// An empty list means nothing can be done.
pub fn fullscreen_methods(host: &HostEnvironment) -> Vec<FullscreenMethod> {
    let mut native = Vec::new();
    if host.macos {
        native.push(FullscreenMethod::MacMenuAction);
    }
    let usable_term = host.term.as_deref().map(|t| !t.is_empty() && t != "dumb").unwrap_or(false);
    if host.stdout_is_terminal && usable_term {
        native.push(FullscreenMethod::XtermWindowOp);
    }
    if !native.is_empty() {
        return native;
    }

    if host.window_system && host.has_xdotool {
        vec![FullscreenMethod::SimulatedF11]
    } else {
        Vec::new()
    }
}

/// Requests full-screen through every available method. Never fails.
pub fn request_fullscreen() {
    let host = HostEnvironment::capture();
    let methods = fullscreen_methods(&host);
    if methods.is_empty() {
        crate::utils::logger::debug("Full-screen request: no method available");
        return;
    }

    for method in methods {
        crate::utils::logger::debug(&format!("Full-screen request via {:?}", method));
        match method {
            FullscreenMethod::MacMenuAction => request_macos_enter_fullscreen(),
            FullscreenMethod::XtermWindowOp => {
                let mut stdout = io::stdout();
                let _ = write!(stdout, "{}", constants::XTERM_ENTER_FULLSCREEN);
                let _ = stdout.flush();
            }
            FullscreenMethod::SimulatedF11 => run_quiet("xdotool", &["key", "F11"]),
        }
    }
}

fn request_macos_enter_fullscreen() {
    // Only "Enter Full Screen": never toggles back out.
    let script_lines = [
        "tell application \"System Events\"",
        "set frontApp to name of first application process whose frontmost is true",
        "tell process frontApp",
        "if exists menu bar 1 then",
        "if exists menu \"View\" of menu bar 1 then",
        "tell menu \"View\" of menu bar 1",
        "if exists menu item \"Enter Full Screen\" then",
        "click menu item \"Enter Full Screen\"",
        "end if",
        "end tell",
        "end if",
        "end if",
        "end tell",
        "end tell",
    ];

    let mut args = Vec::with_capacity(script_lines.len() * 2);
    for line in script_lines {
        args.push("-e");
        args.push(line);
    }
    run_quiet("osascript", &args);
}

fn run_quiet(program: &str, args: &[&str]) {
    match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => crate::utils::logger::info(&format!(
            "{} returned non-zero status: {}",
            program, status
        )),
        Err(e) => crate::utils::logger::info(&format!("{} failed: {}", program, e)),
    }
}

/// Leaves raw mode and the alternate screen. Safe to call when neither is active.
pub fn restore_terminal() {
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        io::stderr(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );
}
