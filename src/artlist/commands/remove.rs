use crate::commands::helpers::{publish, report_hint};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArtlistError, Result};
use crate::model::Entry;
use crate::store::ArtistStore;
use tracing::info;

pub const ACTION: &str = "remove";
pub const KEY_ARGUMENT: &str = "First argument (artist id or name)";

/// Removes the first entry whose id or name matches `key`, ignoring case and
/// surrounding whitespace. Returns the shrunk list and the removed entry.
///
/// When one entry's id and another's name both match, the earlier entry in
/// list order is the one removed.
pub fn apply(entries: &[Entry], key: &str) -> Result<(Vec<Entry>, Entry)> {
    let target = key.trim().to_lowercase();

    let position = entries
        .iter()
        .position(|e| e.id.to_lowercase() == target || e.name.to_lowercase() == target)
        .ok_or_else(|| ArtlistError::NotFound(key.trim().to_string()))?;

    let mut shrunk = entries.to_vec();
    let removed = shrunk.remove(position);
    Ok((shrunk, removed))
}

pub fn run<S: ArtistStore>(store: &mut S, key: Option<&str>) -> Result<CmdResult> {
    let key = key.filter(|k| !k.trim().is_empty()).ok_or(ArtlistError::Validation {
        action: ACTION,
        argument: KEY_ARGUMENT,
    })?;

    let entries = store.load_artists()?;
    let (shrunk, removed) = apply(&entries, key)?;

    let mut result = publish(store, &shrunk)?;
    info!(id = %removed.id, name = %removed.name, total = result.artists.len(), "artist removed");

    result.add_message(CmdMessage::success(format!(
        "Successfully removed: {}",
        removed.name
    )));
    result.add_message(report_hint(store));
    result.affected.push(removed);
    Ok(result)
}
