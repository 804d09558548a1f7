use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::color::ColorState;
use crate::color::state::{LEVEL_STEP, MAX_LEVEL};

/// How the swatch looks when the session starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartupSettings {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    pub level: i32,
    pub fullscreen: bool,
}

impl Default for StartupSettings {
    fn default() -> Self {
        Self {
            red: true,
            green: true,
            blue: true,
            level: MAX_LEVEL,
            fullscreen: false,
        }
    }
}

impl StartupSettings {
    /// Reads `path`. A missing file gives the defaults unless `required`.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !path.exists() {
            if required {
                bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parses `key = value` lines; `#` starts a comment.
    pub fn parse(content: &str) -> Result<Self> {
        let mut settings = Self::default();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                bail!("line {}: expected `key = value`, got `{}`", idx + 1, line);
            };
            let value = value.trim();

            match key.trim() {
                "level" => {
                    let level = value
                        .parse::<i32>()
                        .with_context(|| format!("line {}: level must be a number", idx + 1))?;
                    settings.level = check_level(level)
                        .with_context(|| format!("line {}", idx + 1))?;
                }
                "red" => settings.red = parse_switch(value, idx + 1)?,
                "green" => settings.green = parse_switch(value, idx + 1)?,
                "blue" => settings.blue = parse_switch(value, idx + 1)?,
                "fullscreen" => settings.fullscreen = parse_switch(value, idx + 1)?,
                other => bail!("line {}: unknown key `{}`", idx + 1, other),
            }
        }

        Ok(settings)
    }

    /// Sets the channels from a subset of `rgb`, e.g. `rb` for magenta.
    pub fn set_channels(&mut self, channels: &str) -> Result<()> {
        let channels = channels.to_ascii_lowercase();
        if let Some(bad) = channels.chars().find(|c| !matches!(c, 'r' | 'g' | 'b')) {
            bail!("unknown channel `{}` (use any of r, g, b)", bad);
        }
        self.red = channels.contains('r');
        self.green = channels.contains('g');
        self.blue = channels.contains('b');
        Ok(())
    }

    pub fn set_level(&mut self, level: i32) -> Result<()> {
        self.level = check_level(level)?;
        Ok(())
    }

    /// Builds the session color through its normal operations.
    pub fn initial_state(&self) -> ColorState {
        let mut state = ColorState::new();
        if !self.red {
            state.toggle_red();
        }
        if !self.green {
            state.toggle_green();
        }
        if !self.blue {
            state.toggle_blue();
        }
        state.set_level(self.level);
        state
    }
}

// Off-grid levels would drift from the digit keys once stepped.
fn check_level(level: i32) -> Result<i32> {
    if !(0..=MAX_LEVEL).contains(&level) || level % LEVEL_STEP != 0 {
        bail!("level {} must be one of 0, 10, ..., 100", level);
    }
    Ok(level)
}

fn parse_switch(value: &str, line: usize) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => bail!("line {}: expected on/off, got `{}`", line, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let text = "# startup swatch\nlevel = 60\nred = off\nblue=0 # no blue\n\nfullscreen = yes\n";
        let settings = StartupSettings::parse(text).unwrap();
        assert_eq!(
            settings,
            StartupSettings {
                red: false,
                green: true,
                blue: false,
                level: 60,
                fullscreen: true,
            }
        );
        assert_eq!(settings.initial_state().render_color(), "rgb(0%, 60%, 0%)");
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        assert!(StartupSettings::parse("level = 55").is_err());
        assert!(StartupSettings::parse("level = 110").is_err());
        assert!(StartupSettings::parse("level = bright").is_err());
        assert!(StartupSettings::parse("red = maybe").is_err());
        assert!(StartupSettings::parse("gamma = 2.2").is_err());
        assert!(StartupSettings::parse("level 50").is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = StartupSettings::parse("red = off\nlevel = 20").unwrap();
        settings.set_channels("RG").unwrap();
        settings.set_level(80).unwrap();
        assert_eq!(settings.initial_state().render_color(), "rgb(80%, 80%, 0%)");

        assert!(settings.set_channels("rgx").is_err());
        assert!(settings.set_level(-10).is_err());
    }

    #[test]
    fn test_load_missing_and_present_files() {
        let dir = std::env::temp_dir().join("calibrate_config_test");
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("absent.config");
        assert_eq!(
            StartupSettings::load(&missing, false).unwrap(),
            StartupSettings::default()
        );
        assert!(StartupSettings::load(&missing, true).is_err());

        let path = dir.join("present.config");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "level = 30\ngreen = off").unwrap();
        drop(file);

        let settings = StartupSettings::load(&path, true).unwrap();
        assert_eq!(settings.level, 30);
        assert!(!settings.green);
    }

    #[test]
    fn test_default_initial_state() {
        assert_eq!(StartupSettings::default().initial_state(), ColorState::new());
    }
}
