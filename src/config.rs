use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::platform::{RealConsole, RealTerminal};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub console: ConsoleConfig,
    pub terminal: TerminalConfig,
}

/// Console device overrides. Unset means the platform default device.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// Width assumed when the terminal size cannot be determined.
    pub fallback_columns: u16,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            fallback_columns: crate::platform::DEFAULT_COLUMNS,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if config.terminal.fallback_columns == 0 {
            bail!("terminal.fallback_columns must be at least 1");
        }
        Ok(config)
    }

    /// Load the config for this run.
    ///
    /// An explicit path must exist. The default path is optional; when it is
    /// absent the built-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Return the default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("condialog")
            .join("config.toml")
    }

    /// The console device described by this config.
    pub fn console(&self) -> RealConsole {
        let default = RealConsole::new();
        let input = self
            .console
            .input
            .clone()
            .unwrap_or_else(|| default.input_path().to_path_buf());
        let output = self
            .console
            .output
            .clone()
            .unwrap_or_else(|| default.output_path().to_path_buf());
        RealConsole::with_devices(input, output)
    }

    /// The terminal-size source described by this config.
    pub fn terminal(&self) -> RealTerminal {
        RealTerminal::new(self.terminal.fallback_columns)
    }
}
