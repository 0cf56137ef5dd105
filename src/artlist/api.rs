//! # API Facade
//!
//! A thin layer over the commands: one method per operation, generic over
//! the storage backend.
//!
//! - Production: `ArtlistApi<FileStore>`
//! - Testing: `ArtlistApi<InMemoryStore>`
//!
//! The facade does no printing and no argument parsing. Tests here only
//! check that each method reaches its command; the command modules test the
//! behavior itself.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::ArtistStore;

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct ArtlistApi<S: ArtistStore> {
    store: S,
}

impl<S: ArtistStore> ArtlistApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_artist(&mut self, id: Option<&str>, name: Option<&str>) -> Result<CmdResult> {
        commands::add::run(&mut self.store, id, name)
    }

    pub fn remove_artist(&mut self, id_or_name: Option<&str>) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id_or_name)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
