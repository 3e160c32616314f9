//! Configuration schema
//!
//! Converts a raw YAML document into a typed [`Config`], rejecting shapes
//! the interpreter cannot run, and validates the result.

use crate::config::types::{Block, Config, NamedBlock, VARS_KEY};
use crate::error::{ConfigError, ConfigResult};
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;

/// Build a typed configuration from a parsed YAML document
pub fn config_from_value(value: Value) -> ConfigResult<Config> {
    let mapping = match value {
        Value::Mapping(m) => m,
        // An empty file parses as null
        Value::Null => Mapping::new(),
        other => {
            return Err(ConfigError::Invalid(format!(
                "top level must be a mapping, found {}",
                kind(&other)
            )))
        }
    };

    let mut config = Config::default();

    for (key, value) in mapping {
        let name = match key {
            Value::String(s) => s,
            other => {
                return Err(ConfigError::Invalid(format!(
                    "keys must be strings, found {}",
                    kind(&other)
                )))
            }
        };

        if name == VARS_KEY {
            config.vars = vars_from_value(value)?;
            continue;
        }

        let body = match value {
            Value::String(s) => Block::from_text(s),
            Value::Null => Block::Script(String::new()),
            other => {
                return Err(ConfigError::InvalidBlock {
                    name,
                    found: kind(&other),
                })
            }
        };

        config.blocks.push(NamedBlock { name, body });
    }

    Ok(config)
}

/// Convert the `vars` block into a string mapping
fn vars_from_value(value: Value) -> ConfigResult<HashMap<String, String>> {
    let mapping = match value {
        Value::Mapping(m) => m,
        Value::Null => return Ok(HashMap::new()),
        other => {
            return Err(ConfigError::InvalidVars(format!(
                "expected a mapping, found {}",
                kind(&other)
            )))
        }
    };

    let mut vars = HashMap::new();
    for (key, value) in mapping {
        let name = scalar_to_string(&key).ok_or_else(|| {
            ConfigError::InvalidVars(format!("variable names must be scalars, found {}", kind(&key)))
        })?;
        let value = match value {
            Value::Null => String::new(),
            ref v => scalar_to_string(v).ok_or_else(|| {
                ConfigError::InvalidVars(format!(
                    "variable '{}' must be a scalar, found {}",
                    name,
                    kind(v)
                ))
            })?,
        };
        vars.insert(name, value);
    }

    Ok(vars)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    for name in config.vars.keys() {
        if !is_identifier(name) {
            return Err(ConfigError::InvalidVars(format!(
                "'{}' is not a valid variable name",
                name
            )));
        }
    }

    for block in &config.blocks {
        if block.name.trim().is_empty() {
            return Err(ConfigError::Invalid("block names cannot be empty".to_string()));
        }
    }

    Ok(())
}

/// Whether a name can be referenced from a `{{name}}` template
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
