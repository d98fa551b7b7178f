//! Modal terminal dialogs that always talk to the real console.
//!
//! Standard streams are modelled as an explicit [`StreamContext`]. A dialog
//! binds the context to the console device for the duration of its `show`
//! call (see [`guard`]), renders a bordered message block ([`present`]) and
//! blocks on console input, then restores whatever the context was bound to
//! before, even if the process's stdio is piped or captured.
//!
//! ```no_run
//! use console_dialogs::{ConsoleIo, PassFailDialog, RealConsole, RealTerminal, StreamContext};
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = StreamContext::stdio();
//! let io = ConsoleIo::new(&ctx, RealConsole::new());
//! let passed = PassFailDialog::new("Is the LED blinking?").show(&io, &RealTerminal::default())?;
//! # let _ = passed;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dialogs;
pub mod guard;
pub mod platform;
pub mod present;
pub mod streams;

#[cfg(test)]
mod test_helpers;

pub use dialogs::{MessageDialog, PassFailDialog};
pub use guard::{ConsoleBindingState, ConsoleGuard, ConsoleIo, console_scope, console_wrapped};
pub use platform::{Console, RealConsole, RealTerminal, Terminal};
pub use present::show_message;
pub use streams::{StreamContext, StreamTriple};
