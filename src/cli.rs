//! CLI argument parsing and command dispatch

pub mod args;
pub mod check;
pub mod common;
pub mod translate;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
pub use check::{CheckOptions, run_check};
pub use translate::run_translate;
