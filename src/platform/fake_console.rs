//! Fake console for testing.
//!
//! Pre-loaded with the text the "user" will type. Output written to the
//! console is captured in a [`SharedBuffer`] the test can inspect. Every
//! `open()` returns the same triple, like the real device does.

use anyhow::{Result, bail};
use std::cell::{Cell, RefCell};
use std::io::{Cursor, Write};
use std::rc::Rc;

use super::Console;
use crate::streams::StreamTriple;

/// Cloneable in-memory sink. Clones share the same bytes.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// In-memory console with scripted input and captured output.
pub struct FakeConsole {
    triple: StreamTriple,
    output: SharedBuffer,
    error: SharedBuffer,
    unavailable: bool,
    opens: Cell<usize>,
}

impl FakeConsole {
    /// Console whose input yields `lines`, each followed by a newline.
    pub fn with_lines(lines: &[&str]) -> Self {
        let mut input = String::new();
        for line in lines {
            input.push_str(line);
            input.push('\n');
        }
        Self::with_input(input)
    }

    /// Console whose input yields exactly `input`.
    pub fn with_input(input: impl Into<String>) -> Self {
        Self::with_bytes(input.into().into_bytes())
    }

    /// Console whose input yields exactly these bytes, valid UTF-8 or not.
    pub fn with_bytes(input: impl Into<Vec<u8>>) -> Self {
        let output = SharedBuffer::new();
        let error = SharedBuffer::new();
        let triple = StreamTriple::new(
            Rc::new(RefCell::new(Cursor::new(input.into()))),
            Rc::new(RefCell::new(output.clone())),
            Rc::new(RefCell::new(error.clone())),
        );
        Self {
            triple,
            output,
            error,
            unavailable: false,
            opens: Cell::new(0),
        }
    }

    /// Console that cannot be opened (no terminal attached).
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::with_input("")
        }
    }

    /// Text written to the console's output stream.
    pub fn output(&self) -> String {
        self.output.contents()
    }

    /// Text written to the console's error stream.
    pub fn error_output(&self) -> String {
        self.error.contents()
    }

    /// The handles this console binds.
    pub fn triple(&self) -> &StreamTriple {
        &self.triple
    }

    /// How many times `open()` has been called.
    pub fn opens(&self) -> usize {
        self.opens.get()
    }
}

impl Console for FakeConsole {
    fn open(&self) -> Result<StreamTriple> {
        self.opens.set(self.opens.get() + 1);
        if self.unavailable {
            bail!("FakeConsole: no console device attached");
        }
        Ok(self.triple.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_returns_same_triple() {
        let console = FakeConsole::with_lines(&["a"]);
        let first = console.open().unwrap();
        let second = console.open().unwrap();
        assert!(first.same_as(&second));
        assert_eq!(console.opens(), 2);
    }

    #[test]
    fn output_is_captured() {
        let console = FakeConsole::with_lines(&[]);
        let triple = console.open().unwrap();
        triple.output.borrow_mut().write_all(b"hi").unwrap();
        triple.error.borrow_mut().write_all(b"oops").unwrap();
        assert_eq!(console.output(), "hi");
        assert_eq!(console.error_output(), "oops");
    }

    #[test]
    fn unavailable_fails() {
        let console = FakeConsole::unavailable();
        assert!(console.open().is_err());
    }
}
