//! The two dialogs.
//!
//! Each dialog is constructed with its message, shown once and discarded:
//! `show` takes the dialog by value. Showing binds the stream context to the
//! console for the whole interaction, renders the message block and then
//! blocks on console input.

mod message;
mod pass_fail;

pub use message::{CONTINUE_PROMPT, MessageDialog};
pub use pass_fail::{PASS_FAIL_PROMPT, PassFailDialog, parse_answer};
