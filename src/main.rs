mod color;
mod input;
mod renderer;
mod shared;
mod ui;
mod utils;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::shared::config::StartupSettings;
use crate::shared::constants;

#[derive(Parser)]
#[command(author, version, about = "Full-screen color swatch for checking a display", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the swatch (default)
    Run(RunArgs),
    /// Print terminal and display info as JSON
    Detect,
    /// Query the terminal size as crossterm sees it
    TerminalSize,
    /// List the swatch keys
    Keys,
}

#[derive(Args, Default)]
struct RunArgs {
    /// Starting level in percent (0, 10, ..., 100)
    #[arg(short, long)]
    level: Option<i32>,
    /// Channels lit at start, any of r, g, b (e.g. "rb")
    #[arg(short, long)]
    channels: Option<String>,
    /// Request a full-screen window at start
    #[arg(short, long, default_value_t = false)]
    fullscreen: bool,
    /// Settings file (default: ./calibrate.config if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl RunArgs {
    fn settings(&self) -> Result<StartupSettings> {
        let mut settings = match &self.config {
            Some(path) => StartupSettings::load(path, true)?,
            None => StartupSettings::load(Path::new(constants::CALIBRATE_CONFIG_FILE), false)?,
        };
        if let Some(channels) = &self.channels {
            settings.set_channels(channels)?;
        }
        if let Some(level) = self.level {
            settings.set_level(level)?;
        }
        if self.fullscreen {
            settings.fullscreen = true;
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    crate::utils::logger::init();

    // Leftover raw mode from a crashed run would garble everything below.
    crate::utils::terminal_control::restore_terminal();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            let settings = args.settings()?;
            crate::utils::logger::debug(&format!("Startup settings: {:?}", settings));
            crate::ui::interactive::run_calibration(&settings)?;
        }
        Commands::Detect => {
            let info = crate::utils::platform::PlatformInfo::detect()?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::TerminalSize => {
            let (cols, rows) = crossterm::terminal::size()?;
            println!("{}x{}", cols, rows);
        }
        Commands::Keys => {
            for (key, action) in crate::input::keys::KEY_HELP {
                println!("{:<10} {}", key, action);
            }
        }
    }

    Ok(())
}
