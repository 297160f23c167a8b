//! The dispatch loop.

use crate::commands::register_builtins;
use crate::{CommandError, Context, Handler, LineSource, Outcome, Registry, ScriptSource};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufReader, Write as _};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Reads lines from the active source and routes them to handlers.
///
/// Failures inside a command are rendered as messages and the loop
/// continues; only `exit`, end of input or an output failure stop it.
/// Scripts replay through the same dispatch path, guarded by an
/// in-flight set of canonicalized paths so no script can invoke itself,
/// directly or through another script.
pub struct Engine {
    registry: Registry,
    ctx: Context,
    running_scripts: HashSet<PathBuf>,
}

impl Engine {
    /// Creates an engine with the built-in command set.
    #[must_use]
    pub fn new(ctx: Context) -> Self {
        let mut registry = Registry::new();
        register_builtins(&mut registry);
        Self {
            registry,
            ctx,
            running_scripts: HashSet::new(),
        }
    }

    /// The shared command state.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Mutable access to the shared command state.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// Runs the loop until `exit`, end of input or an I/O failure.
    pub fn run(&mut self, source: &mut dyn LineSource) -> io::Result<()> {
        info!("dispatch loop started");
        let prompt = if source.is_interactive() { "> " } else { "" };
        while let Some(line) = source.read_line(prompt)? {
            if let Outcome::Exit = self.dispatch(&line, source)? {
                break;
            }
        }
        info!("dispatch loop finished");
        Ok(())
    }

    /// Dispatches one line. Command failures become messages; the
    /// returned outcome is only `Continue` or `Exit`.
    fn dispatch(&mut self, line: &str, source: &mut dyn LineSource) -> io::Result<Outcome> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(Outcome::Continue);
        };
        let args: Vec<&str> = parts.collect();

        let result = match self.registry.get(name) {
            None => {
                writeln!(self.ctx.out, "unknown command: {name} (try `help`)")?;
                return Ok(Outcome::Continue);
            }
            Some(Handler::Plain(command)) => command.run(&args, &mut self.ctx),
            Some(Handler::Input(command)) => command.run(&args, &mut self.ctx, source),
        };
        // Script failures surface here too, as ordinary command errors.
        let result = result.and_then(|outcome| match outcome {
            Outcome::RunScript(path) => self.run_script(&path),
            other => Ok(other),
        });

        match result {
            Ok(Outcome::ShowHelp) => {
                self.print_help()?;
                Ok(Outcome::Continue)
            }
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                warn!(command = name, error = %err, "command failed");
                writeln!(self.ctx.out, "error: {err}")?;
                Ok(Outcome::Continue)
            }
        }
    }

    fn print_help(&mut self) -> io::Result<()> {
        let mut listing = String::new();
        for (name, handler) in self.registry.iter() {
            let _ = writeln!(listing, "{name:<36} {}", handler.description());
        }
        self.ctx.out.write_all(listing.as_bytes())
    }

    /// Replays a script file through the dispatch loop.
    ///
    /// Returns `Exit` only when the script (or one it starts) runs the
    /// `exit` command, which then stops the outer loop too. Failures
    /// are reported as [`CommandError`]s and rendered by the caller.
    fn run_script(&mut self, path: &Path) -> Result<Outcome, CommandError> {
        let canonical = path
            .canonicalize()
            .map_err(|_| CommandError::ScriptNotFound(path.to_path_buf()))?;
        if self.running_scripts.contains(&canonical) {
            return Err(CommandError::Recursion(path.to_path_buf()));
        }
        let file = File::open(&canonical)?;

        info!(path = %canonical.display(), "running script");
        self.running_scripts.insert(canonical.clone());
        let mut source = ScriptSource::new(BufReader::new(file));
        let result = self.replay(&mut source);
        // Single removal point: the marker never outlives the run.
        self.running_scripts.remove(&canonical);
        Ok(result?)
    }

    fn replay(&mut self, source: &mut ScriptSource<BufReader<File>>) -> io::Result<Outcome> {
        while let Some(line) = source.read_line("")? {
            writeln!(self.ctx.out, ">> {line}")?;
            if let Outcome::Exit = self.dispatch(&line, source)? {
                return Ok(Outcome::Exit);
            }
        }
        Ok(Outcome::Continue)
    }
}
