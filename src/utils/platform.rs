use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::process::Command;

use crate::shared::constants;

/// Pixel size and color depth of the swatch surface, as reported right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub color_depth: u32,
}

impl ScreenMetrics {
    /// Reads the terminal's current size and color support. Never cached.
    pub fn query() -> Self {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        let reported = crossterm::terminal::window_size()
            .ok()
            .map(|size| (size.width as u32, size.height as u32));
        let (char_w, char_h) = char_size_from_env();
        let (pixel_width, pixel_height) = pixel_size(cols, rows, reported, char_w, char_h);

        Self {
            pixel_width,
            pixel_height,
            color_depth: color_depth(
                env::var("COLORTERM").ok().as_deref(),
                env::var("TERM").ok().as_deref(),
            ),
        }
    }

    /// `1920 x 1080 [ 24 bpp ]`
    pub fn describe(&self) -> String {
        format!(
            "{} x {} [ {} bpp ]",
            self.pixel_width, self.pixel_height, self.color_depth
        )
    }
}

fn char_size_from_env() -> (u32, u32) {
    let parse = |key: &str| env::var(key).ok().and_then(|v| v.parse::<u32>().ok());
    match (parse("CHAR_WIDTH"), parse("CHAR_HEIGHT")) {
        (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
        _ => (constants::DEFAULT_CHAR_WIDTH, constants::DEFAULT_CHAR_HEIGHT),
    }
}

/// Pixel size of the text area. Terminals that don't answer the size query
/// report zeros, in which case the cell grid is scaled by the character size.
pub fn pixel_size(
    cols: u16,
    rows: u16,
    reported: Option<(u32, u32)>,
    char_w: u32,
    char_h: u32,
) -> (u32, u32) {
    match reported {
        Some((w, h)) if w > 0 && h > 0 => (w, h),
        _ => (cols as u32 * char_w, rows as u32 * char_h),
    }
}

/// Bits per pixel the terminal can show, judged from `COLORTERM` and `TERM`.
pub fn color_depth(colorterm: Option<&str>, term: Option<&str>) -> u32 {
    if colorterm
        .map(|v| v.contains("truecolor") || v.contains("24bit"))
        .unwrap_or(false)
    {
        return 24;
    }
    match term {
        Some(t) if t.contains("direct") => 24,
        Some(t) if t.contains("256color") => 8,
        Some("dumb") => 1,
        _ => 4,
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub os_name: String,
    pub os_version: String,
    pub arch: String,
    pub terminal: String,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub screen: ScreenMetrics,
    pub screen_resolution: Option<(u32, u32)>,
    pub supports_truecolor: bool,
}

impl PlatformInfo {
    pub fn detect() -> Result<Self> {
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        let screen = ScreenMetrics::query();

        Ok(Self {
            os_name: env::consts::OS.to_string(),
            os_version: Self::detect_os_version(),
            arch: env::consts::ARCH.to_string(),
            terminal: Self::detect_terminal(),
            terminal_width: width,
            terminal_height: height,
            screen,
            screen_resolution: Self::detect_screen_resolution(),
            supports_truecolor: screen.color_depth >= 24,
        })
    }

    /// Resolution of the physical display, where the OS exposes it.
    fn detect_screen_resolution() -> Option<(u32, u32)> {
        if cfg!(target_os = "macos") {
            let output = Command::new("system_profiler")
                .arg("SPDisplaysDataType")
                .output()
                .ok()?;
            let text = String::from_utf8_lossy(&output.stdout);
            return text
                .lines()
                .filter_map(|line| line.split("Resolution:").nth(1))
                .find_map(parse_resolution);
        }

        if env::var("DISPLAY").is_ok() {
            let output = Command::new("xrandr").arg("--current").output().ok()?;
            let text = String::from_utf8_lossy(&output.stdout);
            // "Screen 0: minimum 8 x 8, current 2560 x 1440, maximum ..."
            return text
                .lines()
                .filter_map(|line| line.split("current").nth(1))
                .filter_map(|rest| rest.split(',').next())
                .find_map(parse_resolution);
        }

        None
    }

    fn detect_os_version() -> String {
        if let Ok(output) = Command::new("uname").arg("-r").output() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            "Unknown".to_string()
        }
    }

    fn detect_terminal() -> String {
        if let Ok(term) = env::var("TERM_PROGRAM") {
            return term;
        }
        if let Ok(term) = env::var("TERM") {
            return term;
        }
        "Unknown".to_string()
    }
}

/// Parses `2880 x 1864 Retina` or `2560 x 1440`.
fn parse_resolution(text: &str) -> Option<(u32, u32)> {
    let mut parts = text.split('x').map(|s| s.trim());
    let width = parts.next()?.parse::<u32>().ok()?;
    let height = parts.next()?.split_whitespace().next()?.parse::<u32>().ok()?;
    Some((width, height))
}
