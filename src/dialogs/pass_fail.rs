use anyhow::{Context, Result, bail};
use tracing::{debug, trace};

use crate::guard::ConsoleIo;
use crate::platform::{Console, Terminal};
use crate::present::show_message;

/// Prompt repeated until a valid answer is given.
///
/// The `[P]` suggests a default, but an empty answer is not accepted.
pub const PASS_FAIL_PROMPT: &str = "[P]ass or [f]ail? [P]";

/// Map a typed answer to a verdict: `p` is pass, `f` is fail, case and
/// surrounding whitespace ignored. Anything else, including an empty line,
/// is `None`.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "p" => Some(true),
        "f" => Some(false),
        _ => None,
    }
}

/// Dialog asking the operator whether something passed.
#[derive(Debug, Clone)]
pub struct PassFailDialog {
    pub message: String,
}

impl PassFailDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Show the message and prompt until `p` or `f` is entered.
    ///
    /// Returns `true` for pass. The console stays bound across retries.
    pub fn show(self, io: &ConsoleIo<'_, impl Console>, terminal: &impl Terminal) -> Result<bool> {
        io.call(|| {
            let ctx = io.context();
            show_message(ctx, terminal, &self.message)?;
            loop {
                let Some(line) = ctx
                    .prompt_line(PASS_FAIL_PROMPT)
                    .context("Failed to read pass/fail answer from console")?
                else {
                    bail!("Console input closed before a pass/fail answer was given");
                };
                match parse_answer(&line) {
                    Some(passed) => {
                        debug!(passed, "Pass/fail answered");
                        return Ok(passed);
                    }
                    None => trace!("Rejected pass/fail answer {line:?}"),
                }
            }
        })
    }
}
