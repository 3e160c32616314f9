//! External process execution
//!
//! Children inherit stdout/stderr so their output streams straight through
//! as it is produced.

use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::Context;
use std::process::{Command as StdCommand, ExitStatus, Stdio};

/// Launch `program` with `args` and wait for it to exit.
///
/// The child runs in the context's `@cd` directory (or its working
/// directory) with the `@env` overlay on top of the inherited environment.
/// The exit status is returned, not judged; callers decide what a failure means.
pub fn run_process(program: &str, args: &[String], ctx: &Context) -> ExecutionResult<ExitStatus> {
    ctx.print_run(&render_invocation(program, args));

    let mut command = StdCommand::new(program);
    command
        .args(args)
        .current_dir(ctx.process_dir())
        .envs(&ctx.env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = command.spawn().map_err(|source| ExecutionError::Launch {
        program: program.to_string(),
        source,
    })?;

    child.wait().map_err(|source| ExecutionError::Wait {
        program: program.to_string(),
        source,
    })
}

/// Render a command line for logging, quoting words that need it
pub fn render_invocation(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(quote_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_word(word: &str) -> String {
    let plain = !word.is_empty()
        && !word
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\'));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
