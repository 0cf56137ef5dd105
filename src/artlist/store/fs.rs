use super::ArtistStore;
use crate::config::ArtlistConfig;
use crate::error::{ArtlistError, Result};
use crate::model::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    list_path: PathBuf,
    report_path: PathBuf,
}

impl FileStore {
    pub fn new(list_path: PathBuf, report_path: PathBuf) -> Self {
        Self {
            list_path,
            report_path,
        }
    }

    /// Resolve the configured file names against `data_dir`.
    pub fn from_config(data_dir: &Path, config: &ArtlistConfig) -> Self {
        Self::new(
            data_dir.join(&config.list_file),
            data_dir.join(&config.report_file),
        )
    }

    pub fn list_path(&self) -> &Path {
        &self.list_path
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// Write to a sibling temp file, then rename over the target, so readers
    /// only ever see the old or the new content.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let stem = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp_file = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));

        fs::write(&tmp_file, content).map_err(|e| ArtlistError::storage(&tmp_file, e))?;
        if let Err(e) = fs::rename(&tmp_file, path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ArtlistError::storage(path, e));
        }
        Ok(())
    }
}

impl ArtistStore for FileStore {
    fn load_artists(&self) -> Result<Vec<Entry>> {
        debug!(path = %self.list_path.display(), "loading artist list");
        let content = fs::read_to_string(&self.list_path)
            .map_err(|e| ArtlistError::storage(&self.list_path, e))?;
        let entries: Vec<Entry> = serde_json::from_str(&content)
            .map_err(|e| ArtlistError::format(&self.list_path, e))?;
        debug!(count = entries.len(), "artist list loaded");
        Ok(entries)
    }

    fn save_artists(&mut self, entries: &[Entry]) -> Result<()> {
        let content =
            serde_json::to_string(entries).map_err(|e| ArtlistError::format(&self.list_path, e))?;
        Self::write_atomic(&self.list_path, &content)?;
        debug!(path = %self.list_path.display(), count = entries.len(), "artist list written");
        Ok(())
    }

    fn save_report(&mut self, text: &str) -> Result<()> {
        Self::write_atomic(&self.report_path, text)?;
        debug!(path = %self.report_path.display(), bytes = text.len(), "report written");
        Ok(())
    }

    fn report_location(&self) -> String {
        self.report_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::from_config(dir.path(), &ArtlistConfig::default());
        (dir, store)
    }

    #[test]
    fn missing_list_is_a_storage_error() {
        let (_dir, store) = setup();
        let err = store.load_artists().unwrap_err();
        assert!(matches!(err, ArtlistError::Storage { .. }));
    }

    #[test]
    fn malformed_list_is_a_format_error() {
        let (dir, store) = setup();
        fs::write(dir.path().join("artists.json"), r#"{"A": "Abba"}"#).unwrap();
        let err = store.load_artists().unwrap_err();
        assert!(matches!(err, ArtlistError::Format { .. }));
    }

    #[test]
    fn saves_and_reloads_pairs() {
        let (dir, mut store) = setup();
        let entries = vec![Entry::new("A", "Abba"), Entry::new("B", "Beatles")];
        store.save_artists(&entries).unwrap();

        let on_disk = fs::read_to_string(dir.path().join("artists.json")).unwrap();
        assert_eq!(on_disk, r#"[["A","Abba"],["B","Beatles"]]"#);
        assert_eq!(store.load_artists().unwrap(), entries);
    }

    #[test]
    fn report_overwrites_in_full() {
        let (dir, mut store) = setup();
        store.save_report("first, much longer report").unwrap();
        store.save_report("[A, Abba]").unwrap();
        let on_disk = fs::read_to_string(dir.path().join("output.txt")).unwrap();
        assert_eq!(on_disk, "[A, Abba]");
    }

    #[test]
    fn no_temp_files_left_behind() {
        let (dir, mut store) = setup();
        store.save_artists(&[Entry::new("A", "Abba")]).unwrap();
        store.save_report("[A, Abba]").unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn write_into_missing_directory_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(
            dir.path().join("nope").join("artists.json"),
            dir.path().join("nope").join("output.txt"),
        );
        let err = store.save_report("x").unwrap_err();
        assert!(matches!(err, ArtlistError::Storage { .. }));
    }
}
