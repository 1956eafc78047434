//! devupc - UPC++ installation and environment management tool
//!
//! This crate provides the CLI for devupc:
//! - `install`: check out, bootstrap, configure, build, and install UPC++
//! - `env shell`: translate the installed makefile fragment into shell
//!   variable declarations

pub mod commands;
