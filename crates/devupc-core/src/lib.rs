//! devupc-core - Core library for devupc
//!
//! This crate provides the core functionality for devupc, including:
//! - Makefile fragment parsing (the generated upcxx.mak and the GASNet
//!   conduit fragment it includes)
//! - Shell environment script generation (POSIX and C-shell dialects)
//! - Source checkout, bootstrap, configure, make, install pipeline

pub mod error;
pub mod install;
pub mod mak;

pub use error::{Error, Result};
