//! Shared mutable state passed to every command.

use roster_collection::GroupCollection;
use roster_model::IdAllocator;
use roster_storage::CollectionFile;
use std::io::{self, Write};

/// Everything a command may touch: the collection, the id allocator,
/// the persistence handle and the output sink.
///
/// Output goes through an owned writer rather than `stdout` directly so
/// tests can capture what commands print.
pub struct Context {
    pub groups: GroupCollection,
    pub ids: IdAllocator,
    pub store: CollectionFile,
    pub out: Box<dyn Write>,
}

impl Context {
    /// Creates a context writing to standard output.
    pub fn new(groups: GroupCollection, ids: IdAllocator, store: CollectionFile) -> Self {
        Self::with_output(groups, ids, store, Box::new(io::stdout()))
    }

    /// Creates a context with a caller-supplied output sink.
    pub fn with_output(
        groups: GroupCollection,
        ids: IdAllocator,
        store: CollectionFile,
        out: Box<dyn Write>,
    ) -> Self {
        Self {
            groups,
            ids,
            store,
            out,
        }
    }
}
