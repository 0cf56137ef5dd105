use super::ArtistStore;
use crate::error::Result;
use crate::model::Entry;

/// In-memory storage for tests.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    artists: Vec<Entry>,
    report: Option<String>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artists(entries: Vec<Entry>) -> Self {
        Self {
            artists: entries,
            ..Self::default()
        }
    }

    pub fn artists(&self) -> &[Entry] {
        &self.artists
    }

    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    /// Number of successful writes (list and report) since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ArtistStore for InMemoryStore {
    fn load_artists(&self) -> Result<Vec<Entry>> {
        Ok(self.artists.clone())
    }

    fn save_artists(&mut self, entries: &[Entry]) -> Result<()> {
        self.artists = entries.to_vec();
        self.writes += 1;
        Ok(())
    }

    fn save_report(&mut self, text: &str) -> Result<()> {
        self.report = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }

    fn report_location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---
