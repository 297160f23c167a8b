//! Session-level commands: help, save, exit, scripts.

use crate::{Command, CommandError, Context, Outcome};
use std::io::Write as _;
use std::path::PathBuf;

pub(crate) struct Help;

impl Command for Help {
    fn description(&self) -> &'static str {
        "list available commands"
    }

    fn run(&self, _args: &[&str], _ctx: &mut Context) -> Result<Outcome, CommandError> {
        Ok(Outcome::ShowHelp)
    }
}

pub(crate) struct Save;

impl Command for Save {
    fn description(&self) -> &'static str {
        "write the collection to its file"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context) -> Result<Outcome, CommandError> {
        ctx.store.save(&ctx.groups)?;
        writeln!(
            ctx.out,
            "saved {} record(s) to {}",
            ctx.groups.len(),
            ctx.store.path().display()
        )?;
        Ok(Outcome::Continue)
    }
}

pub(crate) struct Exit;

impl Command for Exit {
    fn description(&self) -> &'static str {
        "stop without saving"
    }

    fn run(&self, _args: &[&str], _ctx: &mut Context) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit)
    }
}

pub(crate) struct ExecuteScript;

impl Command for ExecuteScript {
    fn description(&self) -> &'static str {
        "execute_script <path>: run commands from a file"
    }

    fn run(&self, args: &[&str], _ctx: &mut Context) -> Result<Outcome, CommandError> {
        if args.is_empty() {
            return Err(CommandError::MissingArgument("script path"));
        }
        Ok(Outcome::RunScript(PathBuf::from(args.join(" "))))
    }
}
