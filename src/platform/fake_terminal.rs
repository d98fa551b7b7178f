use std::cell::Cell;

use super::Terminal;

/// Test double reporting a fixed column count.
pub struct FakeTerminal {
    columns: i32,
    queries: Cell<usize>,
}

impl FakeTerminal {
    pub fn new(columns: i32) -> Self {
        Self {
            columns,
            queries: Cell::new(0),
        }
    }

    /// How many times the width has been asked for.
    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl Terminal for FakeTerminal {
    fn columns(&self) -> i32 {
        self.queries.set(self.queries.get() + 1);
        self.columns
    }
}
