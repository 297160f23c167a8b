//! Entry point: load the collection file, then run the dispatch loop.

mod console;

use clap::Parser;
use console::ConsoleSource;
use roster_collection::GroupCollection;
use roster_engine::{Context, Engine};
use roster_model::IdAllocator;
use roster_storage::CollectionFile;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive manager for a study-group collection.
///
/// The collection is kept in memory and persisted to the given file by
/// the `save` command. A missing file starts an empty session.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
struct Args {
    /// Path of the collection file.
    file: PathBuf,
}

fn init_tracing() {
    // Diagnostics go to stderr so command output stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let store = CollectionFile::new(&args.file);
    let mut ids = IdAllocator::new();
    let groups = match store.load(&mut ids) {
        Ok(groups) => {
            println!("loaded {} record(s) from {}", groups.len(), args.file.display());
            groups
        }
        Err(err) if err.is_missing() => {
            println!(
                "collection file {} not found, starting with an empty collection",
                args.file.display()
            );
            GroupCollection::new()
        }
        Err(err) => {
            println!("could not load {}: {err}", args.file.display());
            println!("starting with an empty collection");
            GroupCollection::new()
        }
    };
    info!(path = %args.file.display(), "session started");

    let mut engine = Engine::new(Context::new(groups, ids, store));
    let mut console = ConsoleSource::new()?;
    engine.run(&mut console)?;
    Ok(())
}
