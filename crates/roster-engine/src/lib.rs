//! Command dispatch engine for the roster tool.
//!
//! The engine reads one line at a time from the active [`LineSource`],
//! splits it into a command name plus positional arguments, and routes
//! it to a registered handler. Handlers come in two capabilities:
//! plain [`Command`]s, and [`InputCommand`]s that additionally consume
//! further lines from the *same* source - so a record-building command
//! invoked from a script reads subsequent script lines instead of
//! blocking on the terminal.
//!
//! Script files are replayed through the same dispatch path. An
//! in-flight set of canonicalized script paths blocks direct and
//! transitive recursion; the marker is removed on every exit path so a
//! finished script can run again.
//!
//! No error unwinds the dispatch loop: failures are converted to
//! user-facing messages at the command boundary and the loop continues.
//! Only the `exit` command stops the engine.

mod command;
mod commands;
mod context;
mod engine;
mod error;
mod prompt;
mod source;

pub use command::{Command, Handler, InputCommand, Outcome, Registry};
pub use context::Context;
pub use engine::Engine;
pub use error::CommandError;
pub use prompt::Prompter;
pub use source::{LineSource, MemorySource, ScriptSource};
