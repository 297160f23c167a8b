//! Command traits, handler registry and dispatch outcomes.

use crate::{CommandError, Context, LineSource};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// What the dispatch loop does after a command finishes.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading lines.
    Continue,
    /// Stop the loop; the program ends.
    Exit,
    /// Print the command listing. Deferred to the engine because only
    /// it can see the full registry.
    ShowHelp,
    /// Replay the given script file through the dispatch loop. Deferred
    /// to the engine, which owns the in-flight recursion set.
    RunScript(PathBuf),
}

/// A command that works from its arguments and the context alone.
pub trait Command {
    /// One-line description shown by `help`.
    fn description(&self) -> &'static str;

    /// Executes the command.
    fn run(&self, args: &[&str], ctx: &mut Context) -> Result<Outcome, CommandError>;
}

/// A command that additionally consumes further lines from the active
/// source, e.g. to build a record field by field.
///
/// Keeping this a separate capability lets the dispatcher hand the
/// *current* source to the handler: invoked from a script, the command
/// reads subsequent script lines instead of blocking on the terminal.
pub trait InputCommand {
    /// One-line description shown by `help`.
    fn description(&self) -> &'static str;

    /// Executes the command, reading extra lines from `source`.
    fn run(
        &self,
        args: &[&str],
        ctx: &mut Context,
        source: &mut dyn LineSource,
    ) -> Result<Outcome, CommandError>;
}

/// A registered handler of either capability.
pub enum Handler {
    Plain(Box<dyn Command>),
    Input(Box<dyn InputCommand>),
}

impl Handler {
    /// The handler's help line.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Handler::Plain(command) => command.description(),
            Handler::Input(command) => command.description(),
        }
    }
}

/// Name-to-handler table.
///
/// A `BTreeMap` keeps iteration sorted, which is the order `help`
/// prints in. Registering an existing name replaces the old handler.
#[derive(Default)]
pub struct Registry {
    commands: BTreeMap<&'static str, Handler>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, replacing any previous one.
    pub fn register(&mut self, name: &'static str, handler: Handler) {
        self.commands.insert(name, handler);
    }

    /// Looks up a handler by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.commands.get(name)
    }

    /// All handlers, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Handler)> {
        self.commands.iter().map(|(name, handler)| (*name, handler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop(&'static str);

    impl Command for Noop {
        fn description(&self) -> &'static str {
            self.0
        }

        fn run(&self, _args: &[&str], _ctx: &mut Context) -> Result<Outcome, CommandError> {
            Ok(Outcome::Continue)
        }
    }

    #[test]
    fn register_overwrites_existing_name() {
        let mut registry = Registry::new();
        registry.register("noop", Handler::Plain(Box::new(Noop("first"))));
        registry.register("noop", Handler::Plain(Box::new(Noop("second"))));

        let handler = registry.get("noop").unwrap();
        assert_eq!(handler.description(), "second");
        assert_eq!(registry.iter().count(), 1);
    }

    #[test]
    fn iteration_is_sorted_by_name() {
        let mut registry = Registry::new();
        registry.register("zeta", Handler::Plain(Box::new(Noop(""))));
        registry.register("alpha", Handler::Plain(Box::new(Noop(""))));
        registry.register("mid", Handler::Plain(Box::new(Noop(""))));

        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
