use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::guard::ConsoleIo;
use crate::platform::{Console, Terminal};
use crate::present::show_message;

/// Prompt shown under an informational message.
pub const CONTINUE_PROMPT: &str = "Hit [Return] to continue";

/// Informational dialog dismissed by any line of input.
#[derive(Debug, Clone)]
pub struct MessageDialog {
    pub message: String,
}

impl MessageDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Show the message on the console and wait for one line of input.
    ///
    /// Whatever is typed is discarded. Fails if the console cannot be bound
    /// or its input is closed before a line arrives.
    pub fn show(self, io: &ConsoleIo<'_, impl Console>, terminal: &impl Terminal) -> Result<()> {
        io.call(|| {
            let ctx = io.context();
            show_message(ctx, terminal, &self.message)?;
            let line = ctx
                .prompt_line(CONTINUE_PROMPT)
                .context("Failed to read acknowledgement from console")?;
            if line.is_none() {
                bail!("Console input closed before the message was acknowledged");
            }
            debug!("Message acknowledged");
            Ok(())
        })
    }
}
