//! Main CLI application

use crate::config::{parse_config_file, validate_config, Config, DEFAULT_CONFIG_FILE};
use crate::error::GmakeError;
use crate::runner::{Context, Interpreter, RunOptions, Verbosity};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// Parsed configuration
    config: Config,
    /// Config file path
    config_path: PathBuf,
    /// Failure handling switches
    options: RunOptions,
    verbosity: Verbosity,
}

impl App {
    /// Create app from a specific config file
    pub fn with_config_file(path: PathBuf) -> Result<Self, GmakeError> {
        let config = parse_config_file(&path)?;
        validate_config(&config)?;

        Ok(App {
            config,
            config_path: path,
            options: RunOptions::default(),
            verbosity: Verbosity::Normal,
        })
    }

    /// Create app from parsed command line arguments
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, GmakeError> {
        let path = matches
            .get_one::<String>("config")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut app = Self::with_config_file(path)?;
        app.options = get_run_options(matches);
        app.verbosity = get_verbosity(matches);
        Ok(app)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every block of the configuration
    pub fn run(self) -> Result<(), GmakeError> {
        let mut ctx = Context::new().with_verbosity(self.verbosity);
        ctx.print_debug(&format!("Using config {}", self.config_path.display()));

        Interpreter::new(self.options).run(&self.config, &mut ctx)
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("gmake")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse a gmake.yml file and execute its blocks")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value(DEFAULT_CONFIG_FILE)
                .help("Path to the config file"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no log output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check-status")
                .long("check-status")
                .help("Stop the run when a command exits with a non-zero status")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-going")
                .long("keep-going")
                .help("Report failing lines and continue with the next one")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict-vars")
                .long("strict-vars")
                .help("Fail on references to undefined variables")
                .action(ArgAction::SetTrue),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Get failure handling switches from matches
fn get_run_options(matches: &ArgMatches) -> RunOptions {
    RunOptions {
        check_status: matches.get_flag("check-status"),
        keep_going: matches.get_flag("keep-going"),
        strict_vars: matches.get_flag("strict-vars"),
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), GmakeError> {
    let matches = build_command().get_matches();
    App::from_matches(&matches)?.run()
}
