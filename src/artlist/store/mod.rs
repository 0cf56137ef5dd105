//! # Storage Layer
//!
//! The [`ArtistStore`] trait is the only way the rest of the crate reaches
//! persisted state. Commands take a store by generic parameter, so they run
//! unchanged against the filesystem or against memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - Artist list in `artists.json` (a JSON array of `[id, name]` pairs)
//!   - Report text in `output.txt`
//!   - Both names come from [`crate::config::ArtlistConfig`]
//!
//! - [`memory::InMemoryStore`]: for tests
//!   - No persistence; records every write so tests can assert on them
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── config.json     # Optional file-name overrides
//! ├── artists.json    # Canonical list, source of truth
//! └── output.txt      # Derived grouped report, write-only
//! ```
//!
//! Every invocation reads the whole list and writes both files in full. The
//! two writes are independent: a crash between them leaves the report out of
//! date with the list.

use crate::error::Result;
use crate::model::Entry;

pub mod fs;
pub mod memory;

pub trait ArtistStore {
    /// Read the canonical list. Never cached.
    fn load_artists(&self) -> Result<Vec<Entry>>;

    /// Replace the canonical list.
    fn save_artists(&mut self, entries: &[Entry]) -> Result<()>;

    /// Replace the report text.
    fn save_report(&mut self, text: &str) -> Result<()>;

    /// Where the report goes, for user-facing messages.
    fn report_location(&self) -> String;
}
