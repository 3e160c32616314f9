//! Block and line execution
//!
//! Each line is tokenized, every word is rendered against the current
//! variables, and the result is dispatched. Lines run in order and blocks
//! run in document order; there is no dependency graph between blocks.

use crate::config::{Block, Config};
use crate::error::{ExecutionError, GmakeError, Result};
use crate::runner::interpolate::{interpolate_list, Undefined};
use crate::runner::tokenize::{is_skippable, tokenize};
use crate::runner::{Context, Directives, Dispatched};
use chrono::Local;

/// Name of the variable holding the run's start time
pub const TIME_VAR: &str = "time";

/// Format of the `time` variable
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Switches that change how failures are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// A non-zero exit from an external command aborts the run
    pub check_status: bool,
    /// Report a failing line and carry on with the next one
    pub keep_going: bool,
    /// Undefined template variables are an error instead of empty
    pub strict_vars: bool,
}

/// Runs configuration blocks against a context
pub struct Interpreter {
    directives: Directives,
    options: RunOptions,
}

impl Interpreter {
    /// Create an interpreter with the standard built-ins
    pub fn new(options: RunOptions) -> Self {
        Self::with_directives(Directives::builtin(), options)
    }

    /// Create an interpreter with a custom directive table
    pub fn with_directives(directives: Directives, options: RunOptions) -> Self {
        Interpreter {
            directives,
            options,
        }
    }

    /// Mutable access to the directive table, for registering extra built-ins
    pub fn directives_mut(&mut self) -> &mut Directives {
        &mut self.directives
    }

    /// Copy the configured variables into the context and stamp `time`
    pub fn seed(&self, config: &Config, ctx: &mut Context) {
        for (key, value) in &config.vars {
            ctx.set_var(key.clone(), value.clone());
        }
        ctx.set_var(
            TIME_VAR.to_string(),
            Local::now().format(TIME_FORMAT).to_string(),
        );
    }

    /// Seed the context and run every block in order
    pub fn run(&self, config: &Config, ctx: &mut Context) -> Result<()> {
        self.seed(config, ctx);

        let mut failed = 0;
        for block in &config.blocks {
            failed += self.run_block(&block.name, &block.body, ctx)?;
        }

        if failed > 0 {
            return Err(GmakeError::Incomplete(failed));
        }
        Ok(())
    }

    /// Run one block, returning how many lines failed in keep-going mode
    pub fn run_block(&self, name: &str, block: &Block, ctx: &mut Context) -> Result<usize> {
        ctx.print_info(&format!("Running block: {}", name));

        let mut failed = 0;
        for (number, line) in block.lines() {
            let result = self.run_line(line, ctx).map_err(|e| GmakeError::Line {
                block: name.to_string(),
                line: number,
                source: Box::new(e),
            });

            match result {
                Ok(()) => {}
                Err(e) if self.options.keep_going => {
                    ctx.print_error(&e.to_string());
                    failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(failed)
    }

    /// Tokenize, resolve and dispatch a single line
    pub fn run_line(&self, line: &str, ctx: &mut Context) -> Result<()> {
        if is_skippable(line) {
            if !line.trim().is_empty() {
                ctx.print_debug(&format!("skipping comment: {}", line.trim()));
            }
            return Ok(());
        }

        let words = tokenize(line)?;
        let undefined = if self.options.strict_vars {
            Undefined::Error
        } else {
            Undefined::Empty
        };
        let words = interpolate_list(&words, &ctx.vars, undefined)?;

        match self.directives.dispatch(&words, ctx)? {
            Dispatched::Builtin => Ok(()),
            Dispatched::Process(status) if status.success() => Ok(()),
            Dispatched::Process(status) => {
                if self.options.check_status {
                    return Err(ExecutionError::CommandFailed {
                        program: words[0].clone(),
                        code: status.code(),
                    }
                    .into());
                }
                ctx.print_warn(&format!("'{}' exited with {}", words[0], status));
                Ok(())
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(RunOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, TemplateError};
    use crate::runner::Verbosity;
    use tempfile::TempDir;

    fn ctx(dir: &TempDir) -> Context {
        Context::new()
            .with_working_dir(dir.path().to_path_buf())
            .with_verbosity(Verbosity::Silent)
    }

    #[test]
    fn test_var_then_resolve() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let interp = Interpreter::default();

        interp.run_line("@var x foo", &mut ctx).unwrap();
        interp.run_line("@var y {{x}}", &mut ctx).unwrap();
        assert_eq!(ctx.get_var("y"), Some(&"foo".to_string()));
    }

    #[test]
    fn test_variable_selects_directive() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let interp = Interpreter::default();

        interp.run_line("@var op @mkdir", &mut ctx).unwrap();
        interp.run_line("{{op}} made", &mut ctx).unwrap();
        assert!(tmp.path().join("made").is_dir());
    }

    #[test]
    fn test_context_vars_feed_templates() {
        let tmp = TempDir::new().unwrap();
        let mut vars = std::collections::HashMap::new();
        vars.insert("dir".to_string(), "from-vars".to_string());
        let mut ctx = ctx(&tmp).with_vars(vars);

        Interpreter::default().run_line("@mkdir {{dir}}", &mut ctx).unwrap();
        assert!(tmp.path().join("from-vars").is_dir());
    }

    #[test]
    fn test_extra_directive_through_interpreter() {
        fn stamp(ctx: &mut Context, args: &[String]) -> Result<()> {
            ctx.set_var("stamped".to_string(), args[0].clone());
            Ok(())
        }

        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let mut interp = Interpreter::default();
        interp
            .directives_mut()
            .register(crate::runner::Directive::new("@stamp", 1, "@stamp VALUE", stamp));

        interp.run_line("@stamp v1", &mut ctx).unwrap();
        assert_eq!(ctx.get_var("stamped"), Some(&"v1".to_string()));
        assert!(matches!(
            interp.run_line("@stamp", &mut ctx),
            Err(GmakeError::Execution(ExecutionError::Arity { .. }))
        ));
    }

    #[test]
    fn test_values_with_spaces_stay_one_word() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let interp = Interpreter::default();

        interp.run_line("@var name \"two words\"", &mut ctx).unwrap();
        interp.run_line("@touch {{name}}", &mut ctx).unwrap();
        assert!(tmp.path().join("two words").is_file());
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let interp = Interpreter::default();

        interp.run_line("", &mut ctx).unwrap();
        interp.run_line("   # no-such-program", &mut ctx).unwrap();
    }

    #[test]
    fn test_malformed_lines() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let interp = Interpreter::default();

        assert!(matches!(
            interp.run_line("echo \"oops", &mut ctx),
            Err(GmakeError::Parse(ParseError::UnclosedQuote { .. }))
        ));
        assert!(matches!(
            interp.run_line("@echo {{broken", &mut ctx),
            Err(GmakeError::Template(TemplateError::Unclosed(_)))
        ));
    }

    #[test]
    fn test_strict_vars() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let interp = Interpreter::new(RunOptions {
            strict_vars: true,
            ..RunOptions::default()
        });

        assert!(matches!(
            interp.run_line("@var a {{missing}}", &mut ctx),
            Err(GmakeError::Template(TemplateError::UndefinedVariable(_)))
        ));
    }

    #[test]
    fn test_seed_sets_time_after_vars() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let mut config = Config::default();
        config.vars.insert("time".to_string(), "configured".to_string());
        config.vars.insert("name".to_string(), "app".to_string());

        Interpreter::default().seed(&config, &mut ctx);

        assert_eq!(ctx.get_var("name"), Some(&"app".to_string()));
        let time = ctx.get_var(TIME_VAR).unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(time, TIME_FORMAT).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_is_not_fatal_by_default() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        assert!(Interpreter::default().run_line("false", &mut ctx).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_check_status() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let interp = Interpreter::new(RunOptions {
            check_status: true,
            ..RunOptions::default()
        });

        assert!(matches!(
            interp.run_line("false", &mut ctx),
            Err(GmakeError::Execution(ExecutionError::CommandFailed { .. }))
        ));
    }

    #[test]
    fn test_keep_going_runs_remaining_lines() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let interp = Interpreter::new(RunOptions {
            keep_going: true,
            ..RunOptions::default()
        });

        let block = Block::Script("@copy missing.txt x.txt\n@touch after.txt\n".to_string());
        let failed = interp.run_block("build", &block, &mut ctx).unwrap();

        assert_eq!(failed, 1);
        assert!(tmp.path().join("after.txt").is_file());
    }

    #[test]
    fn test_error_carries_block_and_line() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = ctx(&tmp);
        let block = Block::Script("@mkdir a\n\n@var\n@mkdir b\n".to_string());

        let err = Interpreter::default()
            .run_block("setup", &block, &mut ctx)
            .unwrap_err();

        assert!(matches!(err, GmakeError::Line { ref block, line: 3, .. } if block == "setup"));
        assert!(matches!(
            err.root(),
            GmakeError::Execution(ExecutionError::Arity { .. })
        ));
        assert!(tmp.path().join("a").is_dir());
        assert!(!tmp.path().join("b").exists());
    }
}
