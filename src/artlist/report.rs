//! # Report Pipeline
//!
//! Turns an artist list into the copy-ready text written next to the list
//! file. The pipeline is three pure steps:
//!
//! ```text
//! entries ──sort_alphabetically──▶ sorted ──group──▶ groups ──render──▶ text
//! ```
//!
//! - [`sort_alphabetically`] orders by name with a locale-aware collator,
//!   ignoring case, and keeps equal names in their original order.
//! - [`group`] walks the sorted list once, starting a new group whenever the
//!   lowercased first letter of the name changes. It never re-sorts: feeding
//!   it an unsorted list fragments the groups.
//! - [`render`] prints each entry as `[id, name]`, one per line inside a
//!   group, with a blank line between groups.
//!
//! Nothing here touches the filesystem; the commands layer decides where the
//! text goes.

use crate::model::Entry;
use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

const ENTRY_SEPARATOR: &str = ", \n";
const GROUP_SEPARATOR: &str = "\n\n";

/// Returns a copy of `entries` sorted by name. The sort is stable.
///
/// Names are lowercased, then compared with the root-locale collator, so
/// `MØ` sorts among the other `m` names and punctuation comes before letters.
/// Names that lowercase identically compare equal and keep their order.
pub fn sort_alphabetically(entries: &[Entry]) -> Vec<Entry> {
    let mut keyed: Vec<(String, &Entry)> = entries
        .iter()
        .map(|entry| (entry.name.to_lowercase(), entry))
        .collect();

    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => keyed.sort_by(|a, b| collator.compare(&a.0, &b.0)),
        Err(e) => {
            warn!(error = ?e, "collation data unavailable, sorting by code point");
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
        }
    }

    keyed.into_iter().map(|(_, entry)| entry.clone()).collect()
}

/// Splits an already sorted list into runs sharing a first letter.
pub fn group(sorted: &[Entry]) -> Vec<Vec<Entry>> {
    let mut groups: Vec<Vec<Entry>> = Vec::new();
    let mut current_letter: Option<Option<String>> = None;

    for entry in sorted {
        let letter = entry.group_letter();
        match groups.last_mut() {
            Some(current) if current_letter.as_ref() == Some(&letter) => {
                current.push(entry.clone());
            }
            _ => {
                groups.push(vec![entry.clone()]);
                current_letter = Some(letter);
            }
        }
    }

    groups
}

pub fn render(groups: &[Vec<Entry>]) -> String {
    groups
        .iter()
        .map(|entries| {
            entries
                .iter()
                .map(|entry| format!("[{}, {}]", entry.id, entry.name))
                .collect::<Vec<_>>()
                .join(ENTRY_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join(GROUP_SEPARATOR)
}

/// Full pipeline: the sorted list and its rendered report.
pub fn build(entries: &[Entry]) -> (Vec<Entry>, String) {
    let sorted = sort_alphabetically(entries);
    let text = render(&group(&sorted));
    (sorted, text)
}
