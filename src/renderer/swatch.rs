use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;

use crate::color::ColorState;
use crate::input::Surface;
use crate::shared::constants;
use crate::utils::platform::ScreenMetrics;

type UiTerminal = Terminal<CrosstermBackend<io::Stderr>>;

/// The two status lines: color descriptor, then size and depth.
pub fn status_lines(color: &str, metrics: &ScreenMetrics) -> [String; 2] {
    [color.to_string(), metrics.describe()]
}

/// Black on light swatches, white on dark ones.
pub fn status_color(bg: (u8, u8, u8)) -> Color {
    let luma = bg.0 as u32 * 299 + bg.1 as u32 * 587 + bg.2 as u32 * 114;
    if luma >= 128 * 1000 {
        Color::Black
    } else {
        Color::White
    }
}

fn draw_swatch(frame: &mut Frame<'_>, bg: (u8, u8, u8), status: &[String; 2]) {
    let area = frame.size();
    let background = Style::default().bg(Color::Rgb(bg.0, bg.1, bg.2));

    frame.render_widget(Block::default().style(background), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(constants::STATUS_ROWS)])
        .split(area);

    let footer = Paragraph::new(status.iter().map(|l| Line::from(l.as_str())).collect::<Vec<_>>())
        .style(background.fg(status_color(bg)))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[1]);
}

/// Raw-mode alternate screen showing the swatch.
pub struct SwatchTerminal {
    terminal: UiTerminal,
}

impl SwatchTerminal {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen, Hide).context("failed to switch to alternate screen")?;

        let backend = CrosstermBackend::new(stderr);
        let terminal = Terminal::new(backend).context("failed to initialize terminal backend")?;

        Ok(Self { terminal })
    }

    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show)
            .context("failed to leave alternate screen")?;
        self.terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}

impl Surface for SwatchTerminal {
    fn redraw(&mut self, state: &ColorState) -> Result<()> {
        let color = state.render_color();
        let metrics = ScreenMetrics::query();
        let status = status_lines(&color, &metrics);
        let bg = state.rgb8();

        self.terminal
            .draw(|frame| draw_swatch(frame, bg, &status))
            .context("failed to draw swatch")?;

        crate::utils::logger::debug(&format!("Redraw: {} | {}", status[0], status[1]));
        Ok(())
    }

    fn request_fullscreen(&mut self) {
        crate::utils::terminal_control::request_fullscreen();
    }
}
