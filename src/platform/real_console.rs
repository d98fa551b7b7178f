//! Real console device backed by the OS terminal.

use anyhow::{Context, Result};
use std::cell::OnceCell;
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::debug;

use super::Console;
use crate::streams::StreamTriple;

#[cfg(windows)]
const DEFAULT_INPUT: &str = "CONIN$";
#[cfg(windows)]
const DEFAULT_OUTPUT: &str = "CONOUT$";
#[cfg(not(windows))]
const DEFAULT_INPUT: &str = "/dev/tty";
#[cfg(not(windows))]
const DEFAULT_OUTPUT: &str = "/dev/tty";

/// Real console. Opens the terminal device directly, bypassing whatever
/// stdin/stdout/stderr are currently redirected to.
///
/// The device is opened on first use and the handles are reused afterwards.
pub struct RealConsole {
    input_path: PathBuf,
    output_path: PathBuf,
    opened: OnceCell<StreamTriple>,
}

impl RealConsole {
    /// Console on the platform's default device (`/dev/tty`, or
    /// `CONIN$`/`CONOUT$` on Windows).
    pub fn new() -> Self {
        Self::with_devices(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }

    /// Console on explicit input and output devices. Error output shares the
    /// output device.
    pub fn with_devices(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input.into(),
            output_path: output.into(),
            opened: OnceCell::new(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn open_devices(&self) -> Result<StreamTriple> {
        let input = File::open(&self.input_path).with_context(|| {
            format!(
                "Failed to open console input {} (is a terminal attached?)",
                self.input_path.display()
            )
        })?;
        let output = OpenOptions::new()
            .write(true)
            .open(&self.output_path)
            .with_context(|| {
                format!(
                    "Failed to open console output {} (is a terminal attached?)",
                    self.output_path.display()
                )
            })?;
        let error = output.try_clone().with_context(|| {
            format!(
                "Failed to duplicate console output {}",
                self.output_path.display()
            )
        })?;
        debug!(
            "Opened console devices {} / {}",
            self.input_path.display(),
            self.output_path.display()
        );
        Ok(StreamTriple::new(
            Rc::new(RefCell::new(BufReader::new(input))),
            Rc::new(RefCell::new(output)),
            Rc::new(RefCell::new(error)),
        ))
    }
}

impl Default for RealConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for RealConsole {
    fn open(&self) -> Result<StreamTriple> {
        if let Some(triple) = self.opened.get() {
            return Ok(triple.clone());
        }
        let triple = self.open_devices()?;
        Ok(self.opened.get_or_init(|| triple).clone())
    }
}
