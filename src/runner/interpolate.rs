//! Variable templating for tokens
//!
//! This module replaces `{{name}}` (or `{{.name}}`) references with values from
//! the variable mapping.

use crate::error::{TemplateError, TemplateResult};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static ACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("valid action regex"));

static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\.?([A-Za-z_][A-Za-z0-9_]*)\s*$").expect("valid name regex")
});

/// How undefined variables are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Undefined {
    /// Render as the empty string
    #[default]
    Empty,
    /// Fail with [`TemplateError::UndefinedVariable`]
    Error,
}

/// Render a token against the variable mapping, missing names become empty
pub fn interpolate(s: &str, vars: &HashMap<String, String>) -> TemplateResult<String> {
    render(s, vars, Undefined::Empty)
}

/// Interpolate with strict mode - errors on undefined variables
pub fn interpolate_strict(s: &str, vars: &HashMap<String, String>) -> TemplateResult<String> {
    render(s, vars, Undefined::Error)
}

/// Render a token with an explicit policy for undefined names
pub fn render(
    s: &str,
    vars: &HashMap<String, String>,
    undefined: Undefined,
) -> TemplateResult<String> {
    if !s.contains("{{") {
        return Ok(s.to_string());
    }

    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for caps in ACTION.captures_iter(s) {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        let body = &caps[1];

        check_text(&s[last..whole.start], s)?;
        result.push_str(&s[last..whole.start]);

        let name = NAME
            .captures(body)
            .map(|c| c[1].to_string())
            .ok_or_else(|| TemplateError::InvalidSyntax(body.to_string()))?;

        match vars.get(&name) {
            Some(value) => result.push_str(value),
            None if undefined == Undefined::Error => {
                return Err(TemplateError::UndefinedVariable(name))
            }
            None => {}
        }

        last = whole.end;
    }

    check_text(&s[last..], s)?;
    result.push_str(&s[last..]);

    Ok(result)
}

/// Literal text between actions must not open another action
fn check_text(text: &str, whole: &str) -> TemplateResult<()> {
    if text.contains("{{") {
        return Err(TemplateError::Unclosed(whole.to_string()));
    }
    Ok(())
}

/// Render a list of tokens
pub fn interpolate_list(
    list: &[String],
    vars: &HashMap<String, String>,
    undefined: Undefined,
) -> TemplateResult<Vec<String>> {
    list.iter()
        .map(|s| render(s, vars, undefined))
        .collect::<TemplateResult<Vec<String>>>()
}
