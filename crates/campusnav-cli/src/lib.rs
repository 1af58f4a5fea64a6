//! campusnav CLI library.
//!
//! This crate provides the subcommand handlers and output formatting used by
//! the `campusnav` binary.

pub mod commands;
pub mod output;
