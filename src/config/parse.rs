//! Configuration file loading

use crate::config::schema::config_from_value;
use crate::config::types::Config;
use crate::error::{ConfigError, GmakeError};
use std::fs;
use std::io;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "gmake.yml";

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, GmakeError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config, GmakeError> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    Ok(config_from_value(value)?)
}
