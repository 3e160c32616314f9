//! Directive interpreter
//!
//! This module turns configuration lines into actions: tokenizing,
//! variable templating, built-in dispatch and external process execution.

pub mod builtins;
pub mod context;
pub mod directive;
#[cfg(feature = "download")]
pub mod download;
pub mod fs;
pub mod interpolate;
pub mod interpreter;
pub mod process;
pub mod tokenize;

// Re-export main types
pub use context::*;
pub use directive::*;
pub use interpolate::*;
pub use interpreter::*;
pub use process::*;
pub use tokenize::*;
