//! Command-line interface

pub mod commands;
pub mod deploy;

pub use commands::CliArgs;
