//! # API Facade
//!
//! [`RecordApi`] is the single entry point a UI uses. It dispatches to the command
//! layer and hands back structured results; it never prints and never exits.
//!
//! `RecordApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `RecordApi<FileStore>`
//! - Testing: `RecordApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::RecordStore;

pub struct RecordApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RecordApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate `line` and persist it as one record.
    pub fn ingest(&mut self, line: &str) -> Result<commands::CmdResult> {
        commands::ingest::run(&mut self.store, line)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
