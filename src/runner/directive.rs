//! Directive registry and dispatch
//!
//! The first word of a resolved line is looked up in a table of built-ins.
//! Anything not in the table is run as an external program.

use crate::error::{ExecutionError, ParseError, Result};
use crate::runner::process::{render_invocation, run_process};
use crate::runner::{builtins, Context};
use std::collections::HashMap;
use std::process::ExitStatus;

/// Signature shared by all built-in handlers; receives the words after the name
pub type Handler = fn(&mut Context, &[String]) -> Result<()>;

/// A named built-in
#[derive(Clone)]
pub struct Directive {
    pub name: &'static str,
    /// Arguments that must be present; extra ones are the handler's business
    pub min_args: usize,
    pub usage: &'static str,
    handler: Handler,
}

impl Directive {
    pub fn new(name: &'static str, min_args: usize, usage: &'static str, handler: Handler) -> Self {
        Directive {
            name,
            min_args,
            usage,
            handler,
        }
    }

    /// Check arity, then run the handler
    pub fn invoke(&self, ctx: &mut Context, args: &[String]) -> Result<()> {
        if args.len() < self.min_args {
            return Err(ExecutionError::Arity {
                directive: self.name.to_string(),
                expected: self.min_args,
                found: args.len(),
                usage: self.usage,
            }
            .into());
        }
        (self.handler)(ctx, args)
    }
}

/// What a dispatched line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    Builtin,
    Process(ExitStatus),
}

/// Table of built-in directives
#[derive(Clone, Default)]
pub struct Directives {
    table: HashMap<&'static str, Directive>,
}

impl Directives {
    /// A table with no built-ins; every line runs a program
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard `@`-directives
    pub fn builtin() -> Self {
        let mut directives = Self::empty();
        builtins::register(&mut directives);
        directives
    }

    /// Add or replace a directive
    pub fn register(&mut self, directive: Directive) {
        self.table.insert(directive.name, directive);
    }

    pub fn get(&self, name: &str) -> Option<&Directive> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.table.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Run one resolved command: a built-in if the name is registered,
    /// otherwise an external process.
    pub fn dispatch(&self, words: &[String], ctx: &mut Context) -> Result<Dispatched> {
        let (name, args) = words.split_first().ok_or(ParseError::EmptyCommand)?;
        if name.is_empty() {
            return Err(ParseError::EmptyCommand.into());
        }

        match self.get(name) {
            Some(directive) => {
                ctx.print_debug(&render_invocation(name, args));
                directive.invoke(ctx, args)?;
                Ok(Dispatched::Builtin)
            }
            None => Ok(Dispatched::Process(run_process(name, args, ctx)?)),
        }
    }
}
