//! Abstracted external collaborators for testability.
//!
//! Two traits cover everything outside the process: [`Console`] for the real
//! console device and [`Terminal`] for the terminal's column count.
//!
//! Production code uses the real implementations ([`RealConsole`],
//! [`RealTerminal`]). Tests substitute fakes via generics, no trait objects needed.

mod real_console;
mod real_terminal;

pub use real_console::RealConsole;
pub use real_terminal::{DEFAULT_COLUMNS, RealTerminal};

#[cfg(test)]
mod fake_console;
#[cfg(test)]
mod fake_terminal;

#[cfg(test)]
#[allow(unused_imports)]
pub use self::fake_console::{FakeConsole, SharedBuffer};
#[cfg(test)]
#[allow(unused_imports)]
pub use self::fake_terminal::FakeTerminal;

use anyhow::Result;

use crate::streams::StreamTriple;

// ---------------------------------------------------------------------------
// Console device
// ---------------------------------------------------------------------------

/// Abstraction over the OS-level console device.
///
/// The handles returned here are the console itself, never the process's
/// current (possibly redirected) standard streams.
pub trait Console {
    /// Return the console's (input, output, error) handles.
    ///
    /// Implementations should hand out the same handles on every call once
    /// the device is open, so that nested bindings are identical.
    fn open(&self) -> Result<StreamTriple>;
}

impl<C: Console + ?Sized> Console for &C {
    fn open(&self) -> Result<StreamTriple> {
        (**self).open()
    }
}

// ---------------------------------------------------------------------------
// Terminal size
// ---------------------------------------------------------------------------

/// Abstraction over the controlling terminal's width.
pub trait Terminal {
    /// Number of display columns. Best effort; may be zero or negative when
    /// a fake or a broken environment reports nonsense, and callers clamp.
    fn columns(&self) -> i32;
}
