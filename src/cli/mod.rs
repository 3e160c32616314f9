//! CLI interface and argument parsing
//!
//! This module handles command-line parsing and hands the selected
//! configuration to the interpreter.

pub mod app;

// Re-export main types
pub use app::*;
