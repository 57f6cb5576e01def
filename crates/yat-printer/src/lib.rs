//! Yat pretty printer.
//!
//! Renders an AST to canonical source text. The printer never mutates the
//! tree, and identical trees always render identical text.

pub mod printer;

pub use printer::{emit, pretty_print, print_program, PrettyPrinter};
