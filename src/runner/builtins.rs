//! Built-in `@` directives
//!
//! Path arguments resolve against the context's working directory. `@cd`
//! only affects spawned processes, never these built-ins.

use crate::error::Result;
use crate::runner::directive::{Directive, Directives};
use crate::runner::{fs, Context};

/// Register every built-in into `directives`
pub fn register(directives: &mut Directives) {
    directives.register(Directive::new("@var", 1, "@var NAME VALUE...", var));
    directives.register(Directive::new("@env", 1, "@env NAME VALUE...", env));
    directives.register(Directive::new("@echo", 0, "@echo TEXT...", echo));
    directives.register(Directive::new("@mv", 2, "@mv SRC DST", mv));
    directives.register(Directive::new("@copy", 2, "@copy SRC DST", copy));
    directives.register(Directive::new("@rm", 1, "@rm PATH", rm));
    directives.register(Directive::new("@mkdir", 1, "@mkdir PATH", mkdir));
    directives.register(Directive::new("@touch", 1, "@touch PATH", touch));
    directives.register(Directive::new("@cd", 1, "@cd PATH", cd));
    directives.register(Directive::new("#", 0, "# ...", comment));
    #[cfg(feature = "download")]
    directives.register(Directive::new("@download", 2, "@download DST URL", download));
}

fn var(ctx: &mut Context, args: &[String]) -> Result<()> {
    ctx.set_var(args[0].clone(), args[1..].join(" "));
    Ok(())
}

fn env(ctx: &mut Context, args: &[String]) -> Result<()> {
    ctx.set_env(args[0].clone(), args[1..].join(" "));
    Ok(())
}

fn echo(_ctx: &mut Context, args: &[String]) -> Result<()> {
    println!("@echo: {}", args.join(" "));
    Ok(())
}

fn mv(ctx: &mut Context, args: &[String]) -> Result<()> {
    Ok(fs::mv(&ctx.resolve(&args[0]), &ctx.resolve(&args[1]))?)
}

fn copy(ctx: &mut Context, args: &[String]) -> Result<()> {
    Ok(fs::copy(&ctx.resolve(&args[0]), &ctx.resolve(&args[1]))?)
}

fn rm(ctx: &mut Context, args: &[String]) -> Result<()> {
    Ok(fs::rm(&ctx.resolve(&args[0]))?)
}

fn mkdir(ctx: &mut Context, args: &[String]) -> Result<()> {
    Ok(fs::mkdir(&ctx.resolve(&args[0]))?)
}

fn touch(ctx: &mut Context, args: &[String]) -> Result<()> {
    Ok(fs::touch(&ctx.resolve(&args[0]))?)
}

fn cd(ctx: &mut Context, args: &[String]) -> Result<()> {
    ctx.set_dir(&args[0]);
    ctx.print_debug(&format!("processes now run in {}", ctx.process_dir().display()));
    Ok(())
}

fn comment(_ctx: &mut Context, _args: &[String]) -> Result<()> {
    Ok(())
}

#[cfg(feature = "download")]
fn download(ctx: &mut Context, args: &[String]) -> Result<()> {
    let dst = ctx.resolve(&args[0]);
    let bytes = crate::runner::download::download(&args[1], &dst)?;
    ctx.print_debug(&format!("downloaded {} bytes to {}", bytes, dst.display()));
    Ok(())
}
