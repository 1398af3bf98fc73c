//! Command line interface for mixspell.

pub mod args;
pub mod commands;
