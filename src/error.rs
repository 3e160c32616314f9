//! Error types for gmake

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gmake operations
pub type Result<T> = std::result::Result<T, GmakeError>;

/// Main error type for gmake
#[derive(Error, Debug)]
pub enum GmakeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed directive lines
    #[error("Malformed input: {0}")]
    Parse(#[from] ParseError),

    /// Variable template errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Directive execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// File operation errors
    #[error("File error: {0}")]
    Fs(#[from] FsError),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A failure while running a specific line of a block
    #[error("block '{block}', line {line}: {source}")]
    Line {
        block: String,
        line: usize,
        #[source]
        source: Box<GmakeError>,
    },

    /// Keep-going mode finished with failed lines
    #[error("{0} line(s) failed")]
    Incomplete(usize),
}

impl GmakeError {
    /// The error with any line location stripped
    pub fn root(&self) -> &GmakeError {
        match self {
            GmakeError::Line { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file '{0}' not found")]
    NotFound(PathBuf),

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid 'vars' entry: {0}")]
    InvalidVars(String),

    #[error("Block '{name}' must be a string, found {found}")]
    InvalidBlock { name: String, found: &'static str },
}

/// Line tokenization errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unclosed {quote} quote in: {line}")]
    UnclosedQuote { quote: char, line: String },

    #[error("Trailing backslash in: {0}")]
    DanglingEscape(String),

    #[error("Empty command")]
    EmptyCommand,
}

/// Variable template errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unclosed '{{{{' in: {0}")]
    Unclosed(String),

    #[error("Invalid template action '{{{{{0}}}}}'")]
    InvalidSyntax(String),

    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),
}

/// Directive execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("{directive} expects at least {expected} argument(s), got {found} (usage: {usage})")]
    Arity {
        directive: String,
        expected: usize,
        found: usize,
        usage: &'static str,
    },

    #[error("Failed waiting for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' failed with exit code {code:?}")]
    CommandFailed { program: String, code: Option<i32> },

    #[error("Download of '{url}' failed: {reason}")]
    Download { url: String, reason: String },
}

/// File operation errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("{op} '{path}': {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot copy '{src}' to '{dst}': {reason}")]
    InvalidTarget {
        src: PathBuf,
        dst: PathBuf,
        reason: &'static str,
    },
}

impl FsError {
    /// Build a closure that wraps an I/O error with the operation and path
    pub fn io(op: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> FsError {
        let path = path.into();
        move |source| FsError::Io { op, path, source }
    }
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for tokenization
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Specialized result type for template rendering
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for file operations
pub type FsResult<T> = std::result::Result<T, FsError>;
