/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of Level I BASIC.

A typed line goes through [`lex`] to become a vector of [`token::Token`]
and then through [`parse`] to become an optional line number and a
vector of [`ast::Statement`]. [`Line`] bundles both steps together with
the original source text.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use ident::Ident;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;

pub mod ast;
pub mod token;

#[cfg(test)]
mod tests;

/// Line numbers are `None` for direct (immediate) mode.
pub type LineNumber = Option<u16>;

/// Character positions within a source line.
pub type Column = std::ops::Range<usize>;

/// Largest line number a program may use.
pub const MAX_LINE_NUMBER: u16 = 32767;

pub trait MaxValue<T> {
    fn max_value() -> T;
}

impl MaxValue<u16> for LineNumber {
    fn max_value() -> u16 {
        MAX_LINE_NUMBER
    }
}
