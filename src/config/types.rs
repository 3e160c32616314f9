//! Core configuration types
//!
//! This module defines the data structures that represent a gmake.yml configuration file.

use std::collections::HashMap;

/// Reserved top-level key holding the initial variable mapping
pub const VARS_KEY: &str = "vars";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Initial variables from the `vars` block
    pub vars: HashMap<String, String>,

    /// Executable blocks, in document order
    pub blocks: Vec<NamedBlock>,
}

/// An executable block together with its key in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBlock {
    pub name: String,
    pub body: Block,
}

/// The body of an executable block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `build: cargo build`
    Line(String),

    /// `build: |` followed by one directive per line
    Script(String),
}

impl Block {
    /// Wrap a string, picking the variant by whether it spans lines
    pub fn from_text(text: String) -> Self {
        if text.contains('\n') {
            Block::Script(text)
        } else {
            Block::Line(text)
        }
    }

    /// Raw text of the block
    pub fn text(&self) -> &str {
        match self {
            Block::Line(s) | Block::Script(s) => s,
        }
    }

    /// Iterate the block's lines with 1-based line numbers
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text().lines().enumerate().map(|(i, l)| (i + 1, l))
    }
}

impl Config {
    /// Look up a block by name
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.name == name).map(|b| &b.body)
    }

    /// Names of all executable blocks, in run order
    pub fn block_names(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_from_text() {
        assert_eq!(
            Block::from_text("echo hi".to_string()),
            Block::Line("echo hi".to_string())
        );
        assert!(matches!(
            Block::from_text("a\nb\n".to_string()),
            Block::Script(_)
        ));
    }

    #[test]
    fn test_block_lines_are_numbered_from_one() {
        let block = Block::Script("first\n\nthird\n".to_string());
        let lines: Vec<_> = block.lines().collect();
        assert_eq!(lines, vec![(1, "first"), (2, ""), (3, "third")]);
    }

    #[test]
    fn test_config_block_lookup() {
        let config = Config {
            vars: HashMap::new(),
            blocks: vec![NamedBlock {
                name: "build".to_string(),
                body: Block::Line("cargo build".to_string()),
            }],
        };
        assert_eq!(config.block("build").map(Block::text), Some("cargo build"));
        assert!(config.block("missing").is_none());
        assert_eq!(config.block_names(), vec!["build"]);
    }
}
