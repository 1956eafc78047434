//! Makefile fragment parsing and shell environment script generation
//!
//! This module handles the generated variable-definition fragment
//! (conventionally `<prefix>/include/upcxx.mak`, which `include`s the
//! GASNet conduit fragment) and turns every `NAME = value` assignment
//! found there into a shell variable declaration for the selected
//! dialect.

mod lines;
mod parser;
mod sanitize;
mod shell;
mod walker;

pub use lines::Reassembler;
pub use parser::{classify, MakItem};
pub use sanitize::sanitize_value;
pub use shell::ShellDialect;
pub use walker::{Declaration, MakFragment};
