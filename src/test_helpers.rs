//! Shared test helpers for setting up in-memory stream contexts.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use crate::platform::SharedBuffer;
use crate::streams::{StreamContext, StreamTriple};

/// Build a triple reading `input` and writing to one shared capture buffer
/// (output and error both land in it).
pub fn memory_triple(input: &str) -> (StreamTriple, SharedBuffer) {
    let captured = SharedBuffer::new();
    let triple = StreamTriple::new(
        Rc::new(RefCell::new(Cursor::new(input.as_bytes().to_vec()))),
        Rc::new(RefCell::new(captured.clone())),
        Rc::new(RefCell::new(captured.clone())),
    );
    (triple, captured)
}

/// A context bound to captured, non-console streams, the way a test harness
/// or a pipe would leave the process.
///
/// Returns the context, the triple it starts bound to, and the capture buffer.
pub fn redirected_context() -> (StreamContext, StreamTriple, SharedBuffer) {
    let (triple, captured) = memory_triple("redirected input must never be read\n");
    let ctx = StreamContext::new(triple.clone());
    (ctx, triple, captured)
}
