//! Temporarily bind a [`StreamContext`] to the real console.
//!
//! [`ConsoleGuard`] is the single enter/exit primitive: entering snapshots the
//! context's current triple and rebinds it to the console device, and dropping
//! the guard puts the snapshot back. Because restoration happens in `Drop`, it
//! runs on normal return, on `?` early return and while a panic unwinds.
//!
//! Three thin adapters sit on top of it:
//! - [`console_scope`] runs a closure as a guarded block,
//! - [`console_wrapped`] turns a function into one that is guarded per call,
//! - [`ConsoleIo`] is a reusable value offering both, plus explicit `enter`.

use anyhow::Result;
use tracing::{debug, warn};

use crate::platform::Console;
use crate::streams::{StreamContext, StreamTriple};

/// The bindings captured when a guard was entered.
pub struct ConsoleBindingState {
    saved: StreamTriple,
}

impl ConsoleBindingState {
    fn capture(previous: StreamTriple) -> Self {
        Self { saved: previous }
    }

    /// The triple that will be restored on exit.
    pub fn saved(&self) -> &StreamTriple {
        &self.saved
    }
}

/// Active console binding. Restores the previous bindings when dropped.
///
/// Guards on the same context must be released in reverse order of entry.
#[must_use = "the console binding is released as soon as the guard is dropped"]
pub struct ConsoleGuard<'a> {
    ctx: &'a StreamContext,
    state: ConsoleBindingState,
    depth: usize,
}

impl<'a> ConsoleGuard<'a> {
    /// Bind `ctx` to `console`'s device handles.
    ///
    /// If the console cannot be opened the context is left untouched and the
    /// error is returned.
    pub fn enter(ctx: &'a StreamContext, console: &impl Console) -> Result<Self> {
        let console_streams = console.open()?;
        let state = ConsoleBindingState::capture(ctx.rebind(console_streams));
        let depth = ctx.depth() + 1;
        ctx.set_depth(depth);
        debug!(depth, "Bound standard streams to console");
        Ok(Self { ctx, state, depth })
    }

    pub fn state(&self) -> &ConsoleBindingState {
        &self.state
    }

    /// Restore the previous bindings now. Equivalent to dropping the guard.
    pub fn exit(self) {}
}

impl Drop for ConsoleGuard<'_> {
    fn drop(&mut self) {
        if self.ctx.depth() != self.depth {
            warn!(
                expected = self.depth,
                actual = self.ctx.depth(),
                "Console guards released out of order"
            );
        }
        self.ctx.rebind(self.state.saved.clone());
        self.ctx.set_depth(self.depth - 1);
        debug!(depth = self.depth, "Restored previous standard streams");
    }
}

/// Run `body` with `ctx` bound to the console.
///
/// Whatever `body` returns, including an error, is passed through unchanged
/// after the previous bindings are restored.
pub fn console_scope<R>(
    ctx: &StreamContext,
    console: &impl Console,
    body: impl FnOnce() -> Result<R>,
) -> Result<R> {
    let _guard = ConsoleGuard::enter(ctx, console)?;
    body()
}

/// Wrap `f` so that every call runs with `ctx` bound to the console.
///
/// Functions of several arguments take them as a tuple.
pub fn console_wrapped<'a, A, R, C, F>(
    ctx: &'a StreamContext,
    console: C,
    f: F,
) -> impl Fn(A) -> Result<R> + 'a
where
    C: Console + 'a,
    F: Fn(A) -> Result<R> + 'a,
{
    move |arg| {
        let _guard = ConsoleGuard::enter(ctx, &console)?;
        f(arg)
    }
}

/// Reusable console binder over one context and one console.
///
/// The same value can be entered explicitly, used around a block, or used to
/// wrap functions; all three go through [`ConsoleGuard`].
pub struct ConsoleIo<'a, C> {
    ctx: &'a StreamContext,
    console: C,
}

impl<'a, C: Console> ConsoleIo<'a, C> {
    pub fn new(ctx: &'a StreamContext, console: C) -> Self {
        Self { ctx, console }
    }

    /// The context this binder rebinds.
    pub fn context(&self) -> &'a StreamContext {
        self.ctx
    }

    /// Bind to the console until the returned guard is dropped.
    pub fn enter(&self) -> Result<ConsoleGuard<'a>> {
        ConsoleGuard::enter(self.ctx, &self.console)
    }

    /// Run `body` as a guarded block.
    pub fn call<R>(&self, body: impl FnOnce() -> Result<R>) -> Result<R> {
        console_scope(self.ctx, &self.console, body)
    }

    /// Wrap `f` so each call is guarded.
    pub fn wrap<'s, A, R>(
        &'s self,
        f: impl Fn(A) -> Result<R> + 's,
    ) -> impl Fn(A) -> Result<R> + 's
    where
        'a: 's,
    {
        console_wrapped(self.ctx, &self.console, f)
    }
}
