//! Configuration parsing and validation
//!
//! This module handles loading gmake.yml files and converting them
//! into an ordered list of executable blocks plus the seed variables.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
