//! Common test utilities

#![allow(dead_code)]

use gmake::config::{parse_config, Config};
use gmake::runner::{Context, Verbosity};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with a gmake.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("gmake.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Parse a config and build a quiet context rooted in a fresh temp dir
pub fn setup(yaml: &str) -> (TempDir, Config, Context) {
    let temp_dir = TempDir::new().unwrap();
    let config = parse_config(yaml).unwrap();
    let ctx = Context::new()
        .with_working_dir(temp_dir.path().to_path_buf())
        .with_verbosity(Verbosity::Silent);
    (temp_dir, config, ctx)
}
