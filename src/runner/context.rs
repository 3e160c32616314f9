//! Execution context for a run
//!
//! One context is threaded through every line of every block, so `@var`,
//! `@env` and `@cd` on one line are visible to the lines after it.

use crate::runner::fs::normalize;
use crate::ui;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// Execution context that tracks state during a run
pub struct Context {
    /// The interpreter's own directory; relative paths resolve against it
    pub working_dir: PathBuf,

    /// Directory set by `@cd` for spawned processes
    pub dir: Option<PathBuf>,

    /// Template variables (from `vars`, `time` and `@var`)
    pub vars: HashMap<String, String>,

    /// Environment overlay applied to spawned processes (from `@env`)
    pub env: HashMap<String, String>,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a new context rooted at the process's current directory
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            dir: None,
            vars: HashMap::new(),
            env: HashMap::new(),
            verbosity: Verbosity::Normal,
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set variables
    pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.vars = vars;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set a single variable, replacing any previous value
    pub fn set_var(&mut self, key: String, value: String) {
        self.vars.insert(key, value);
    }

    /// Get a variable value
    pub fn get_var(&self, key: &str) -> Option<&String> {
        self.vars.get(key)
    }

    /// Set an environment variable for every process spawned after this call
    pub fn set_env(&mut self, key: String, value: String) {
        self.env.insert(key, value);
    }

    /// Get an environment value set through this context
    pub fn get_env(&self, key: &str) -> Option<&String> {
        self.env.get(key)
    }

    /// Point subsequent processes at `path`.
    ///
    /// `path` is resolved against `working_dir`, not against an earlier
    /// `set_dir`. Existence is checked only when a process is spawned.
    pub fn set_dir(&mut self, path: &str) {
        self.dir = Some(self.resolve(path));
    }

    /// Directory spawned processes run in
    pub fn process_dir(&self) -> &Path {
        self.dir.as_deref().unwrap_or(self.working_dir.as_path())
    }

    /// Absolute, normalized form of a path argument
    pub fn resolve(&self, path: &str) -> PathBuf {
        normalize(&self.working_dir.join(path))
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            ui::info(message);
        }
    }

    /// Print a command line about to be launched
    pub fn print_run(&self, invocation: &str) {
        if self.verbosity >= Verbosity::Normal {
            ui::run(invocation);
        }
    }

    /// Print warning message
    pub fn print_warn(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            ui::warn(message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            ui::error(message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            ui::debug(message);
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
