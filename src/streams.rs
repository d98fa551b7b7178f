//! Standard-stream bindings as an explicit, injectable value.
//!
//! A [`StreamTriple`] is a snapshot of the input, output and error handles in
//! use at some point in time. A [`StreamContext`] holds the triple that is
//! currently bound; every component that performs console I/O reads its
//! handles from the context instead of reaching for the process globals.
//!
//! Only [`ConsoleGuard`](crate::guard::ConsoleGuard) rebinds a context.

use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, BufReader, Write};
use std::rc::Rc;

/// Shared handle to a line-oriented input stream.
pub type InputHandle = Rc<RefCell<dyn BufRead>>;

/// Shared handle to an output (or error) stream.
pub type OutputHandle = Rc<RefCell<dyn Write>>;

/// Snapshot of (input, output, error) handles.
///
/// Cloning a triple clones the handles, not the streams behind them. Two
/// triples are the "same" only when every handle points at the same stream;
/// see [`StreamTriple::same_as`].
#[derive(Clone)]
pub struct StreamTriple {
    pub input: InputHandle,
    pub output: OutputHandle,
    pub error: OutputHandle,
}

impl StreamTriple {
    pub fn new(input: InputHandle, output: OutputHandle, error: OutputHandle) -> Self {
        Self {
            input,
            output,
            error,
        }
    }

    /// The process's inherited standard streams.
    pub fn stdio() -> Self {
        Self {
            input: Rc::new(RefCell::new(BufReader::new(io::stdin()))),
            output: Rc::new(RefCell::new(io::stdout())),
            error: Rc::new(RefCell::new(io::stderr())),
        }
    }

    /// Identity comparison: true when all three handles are shared.
    pub fn same_as(&self, other: &StreamTriple) -> bool {
        Rc::ptr_eq(&self.input, &other.input)
            && Rc::ptr_eq(&self.output, &other.output)
            && Rc::ptr_eq(&self.error, &other.error)
    }
}

impl std::fmt::Debug for StreamTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamTriple")
            .field("input", &Rc::as_ptr(&self.input).cast::<()>())
            .field("output", &Rc::as_ptr(&self.output).cast::<()>())
            .field("error", &Rc::as_ptr(&self.error).cast::<()>())
            .finish()
    }
}

/// The currently bound stream triple.
///
/// Uses `Rc`/`RefCell`, so a context never crosses threads.
pub struct StreamContext {
    current: RefCell<StreamTriple>,
    depth: Cell<usize>,
}

impl StreamContext {
    pub fn new(initial: StreamTriple) -> Self {
        Self {
            current: RefCell::new(initial),
            depth: Cell::new(0),
        }
    }

    /// A context bound to the process's inherited standard streams.
    pub fn stdio() -> Self {
        Self::new(StreamTriple::stdio())
    }

    /// Snapshot of the triple bound right now.
    pub fn current(&self) -> StreamTriple {
        self.current.borrow().clone()
    }

    /// Number of console guards currently active on this context.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Swap in `triple`, returning the triple that was bound before.
    pub(crate) fn rebind(&self, triple: StreamTriple) -> StreamTriple {
        self.current.replace(triple)
    }

    pub(crate) fn set_depth(&self, depth: usize) {
        self.depth.set(depth);
    }

    /// Write `text` to the bound output stream and flush it.
    pub fn write_out(&self, text: &str) -> io::Result<()> {
        let output = self.current().output;
        let mut out = output.borrow_mut();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    /// Write `prompt` to the bound output, then read one line from the bound
    /// input with the trailing line terminator removed.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read. Returns `Ok(None)` at end of input.
    pub fn prompt_line(&self, prompt: &str) -> io::Result<Option<String>> {
        self.write_out(prompt)?;
        let input = self.current().input;
        let mut raw = Vec::new();
        let read = input.borrow_mut().read_until(b'\n', &mut raw)?;
        if read == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
