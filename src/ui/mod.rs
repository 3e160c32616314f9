//! Terminal output helpers
//!
//! Log lines go to stderr with a colored tag so they never mix with the
//! stdout of `@echo` or of spawned commands.

use colored::Colorize;

/// `[RUN] cargo build --release`
pub fn run(invocation: &str) {
    eprintln!("{} {}", "[RUN]".cyan().bold(), invocation);
}

pub fn info(message: &str) {
    eprintln!("{} {}", "[INFO]".green().bold(), message);
}

pub fn warn(message: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

pub fn debug(message: &str) {
    eprintln!("{} {}", "[DEBUG]".dimmed(), message);
}

/// Print a fatal error before exiting
pub fn fatal(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
