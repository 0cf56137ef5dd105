use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::report;
use crate::store::ArtistStore;

const STRIPPED_ID_CHARS: [char; 3] = ['[', ']', '\''];

/// Strips brackets and quotes, trims, then capitalizes: `" [ac/DC'] "` → `"Ac/dc"`.
///
/// Empty input stays empty; callers decide whether that is acceptable.
pub fn normalize_id(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !STRIPPED_ID_CHARS.contains(c)).collect();
    let mut chars = stripped.trim().chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// Sorts, groups and renders `entries`, then writes the report followed by
/// the list. Nothing is written if rendering fails; a failed list write
/// leaves the new report behind.
pub fn publish<S: ArtistStore>(store: &mut S, entries: &[Entry]) -> Result<CmdResult> {
    let (sorted, text) = report::build(entries);
    store.save_report(&text)?;
    store.save_artists(&sorted)?;

    Ok(CmdResult {
        artists: sorted,
        report: text,
        ..CmdResult::default()
    })
}

/// The trailing hint every successful mutation prints.
pub fn report_hint<S: ArtistStore>(store: &S) -> CmdMessage {
    CmdMessage::info(format!(
        "Copy content from the {} file",
        store.report_location()
    ))
}
