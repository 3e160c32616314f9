//! gmake - a minimal YAML-driven build script runner
//!
//! A gmake.yml file maps block names to lines of directives. Each line is
//! split like a shell word list, `{{var}}` references are filled in, and the
//! result either runs a built-in (`@var`, `@copy`, `@cd`, ...) or launches an
//! external program.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use error::{GmakeError, Result};

/// Current version of gmake
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
