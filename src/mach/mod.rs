/*!
## Rust Machine Module

This Rust module is the execution engine for Level I BASIC.

Numbered lines are kept in a [`Program`]. The [`Runtime`] walks the
statements of the program one at a time and reports what the outside
world needs to see as a stream of [`Event`].

*/

use crate::lang::{Error, LineNumber};

mod function;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use function::Function;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;

/// Largest subscript of an array.
pub const MAX_ARRAY_INDEX: usize = 4095;

/// Nested `FOR` loops allowed at once.
pub const MAX_FOR_DEPTH: usize = 64;

/// Nested `GOSUB` calls allowed at once.
pub const MAX_GOSUB_DEPTH: usize = 128;

/// Bytes free to BASIC on a 16K machine with nothing loaded.
pub const MEMORY_SIZE: usize = 15_572;

pub const SCREEN_COLUMNS: usize = 64;
pub const SCREEN_ROWS: usize = 16;

/// Width of a `PRINT` zone.
pub const PRINT_ZONE: usize = 16;

/// One statement within a line. The index counts statements in
/// execution order, so the statements after `THEN` follow the `IF`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Address {
    pub line: LineNumber,
    pub index: usize,
}

impl Address {
    pub fn successor(&self) -> Address {
        Address {
            line: self.line,
            index: self.index + 1,
        }
    }
}

/// What the runtime needs from its host.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Nothing to run. Waiting for a line from `enter`.
    Stopped,
    /// The cycle budget ran out; call `execute` again.
    Running,
    Print(String),
    /// Show the prompt and hand the answer to `enter`.
    Input(String),
    Cls,
    /// Move the cursor to row and column.
    Locate(usize, usize),
    List(String),
    Error(Error),
    Load(String),
    Merge(String),
    Save(String),
}
