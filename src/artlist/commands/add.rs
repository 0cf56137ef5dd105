use crate::commands::helpers::{normalize_id, publish, report_hint};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArtlistError, Result};
use crate::model::Entry;
use crate::store::ArtistStore;
use tracing::info;

pub const ACTION: &str = "add";
pub const ID_ARGUMENT: &str = "First argument (artist id)";
pub const NAME_ARGUMENT: &str = "Second argument (artist name)";

fn missing(argument: &'static str) -> ArtlistError {
    ArtlistError::Validation {
        action: ACTION,
        argument,
    }
}

/// Appends a new entry to `entries` and returns the grown list with the
/// entry as stored. The input list is left as it was.
pub fn apply(entries: &[Entry], id: Option<&str>, name: Option<&str>) -> Result<(Vec<Entry>, Entry)> {
    let raw_id = id.filter(|s| !s.is_empty()).ok_or_else(|| missing(ID_ARGUMENT))?;
    let raw_name = name.filter(|s| !s.is_empty()).ok_or_else(|| missing(NAME_ARGUMENT))?;

    let id = normalize_id(raw_id);
    if id.is_empty() {
        return Err(missing(ID_ARGUMENT));
    }
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(missing(NAME_ARGUMENT));
    }

    if entries.iter().any(|e| e.id == id) {
        return Err(ArtlistError::Duplicate {
            id,
            name: name.to_string(),
        });
    }

    let entry = Entry::new(id, name);
    let mut grown = entries.to_vec();
    grown.push(entry.clone());
    Ok((grown, entry))
}

pub fn run<S: ArtistStore>(store: &mut S, id: Option<&str>, name: Option<&str>) -> Result<CmdResult> {
    let entries = store.load_artists()?;
    let (grown, entry) = apply(&entries, id, name)?;

    let mut result = publish(store, &grown)?;
    info!(id = %entry.id, name = %entry.name, total = result.artists.len(), "artist added");

    result.add_message(CmdMessage::success(format!(
        "Successfully added: {}",
        entry.name
    )));
    result.add_message(report_hint(store));
    result.affected.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::abba_and_beatles;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_normalized_entry() {
        let list = vec![Entry::new("A", "Abba")];
        let (grown, entry) = apply(&list, Some(" ['bEATLES'] "), Some("  The Beatles ")).unwrap();
        assert_eq!(entry, Entry::new("Beatles", "The Beatles"));
        assert_eq!(grown.len(), 2);
        assert_eq!(grown[1], entry);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn missing_id_is_reported_first() {
        let err = apply(&[], None, None).unwrap_err();
        assert!(matches!(
            err,
            ArtlistError::Validation { argument: ID_ARGUMENT, .. }
        ));
        let err = apply(&[], Some(""), Some("Abba")).unwrap_err();
        assert!(matches!(
            err,
            ArtlistError::Validation { argument: ID_ARGUMENT, .. }
        ));
    }

    #[test]
    fn missing_name_is_reported() {
        for name in [None, Some(""), Some("   ")] {
            let err = apply(&[], Some("a"), name).unwrap_err();
            assert!(matches!(
                err,
                ArtlistError::Validation { argument: NAME_ARGUMENT, .. }
            ));
        }
    }

    #[test]
    fn id_that_strips_to_nothing_is_rejected() {
        let err = apply(&[], Some("['']"), Some("Abba")).unwrap_err();
        assert!(matches!(
            err,
            ArtlistError::Validation { argument: ID_ARGUMENT, .. }
        ));
    }

    #[test]
    fn duplicate_id_names_the_rejected_artist() {
        let list = vec![Entry::new("A", "Abba"), Entry::new("B", "Beatles")];
        let err = apply(&list, Some("b"), Some("Blur")).unwrap_err();
        match err {
            ArtlistError::Duplicate { id, name } => {
                assert_eq!(id, "B");
                assert_eq!(name, "Blur");
            }
            other => panic!("expected duplicate, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_check_is_exact_on_normalized_id() {
        let list = vec![Entry::new("ABBA", "Abba")];
        let (grown, _) = apply(&list, Some("abba"), Some("Abba again")).unwrap();
        assert_eq!(grown.len(), 2);
    }

    #[test]
    fn run_sorts_groups_and_persists() {
        let mut store = abba_and_beatles();
        let result = run(&mut store, Some("c"), Some("Coldplay")).unwrap();

        assert_eq!(
            store.artists(),
            &[
                Entry::new("A", "Abba"),
                Entry::new("B", "Beatles"),
                Entry::new("C", "Coldplay"),
            ]
        );
        assert_eq!(
            store.report(),
            Some("[A, Abba]\n\n[B, Beatles]\n\n[C, Coldplay]")
        );
        assert_eq!(result.affected, vec![Entry::new("C", "Coldplay")]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Successfully added: Coldplay");
        assert_eq!(result.messages[1].content, "Copy content from the memory file");
    }

    #[test]
    fn run_keeps_new_entry_in_name_order() {
        let mut store = abba_and_beatles();
        run(&mut store, Some("ac"), Some("AC/DC")).unwrap();
        let names: Vec<&str> = store.artists().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Abba", "AC/DC", "Beatles"]);
        assert_eq!(store.report(), Some("[A, Abba], \n[Ac, AC/DC]\n\n[B, Beatles]"));
    }

    #[test]
    fn failures_write_nothing() {
        let mut store = abba_and_beatles();
        assert!(run(&mut store, Some("a"), Some("")).is_err());
        assert!(run(&mut store, Some("a"), Some("Another A")).is_err());
        assert_eq!(store.writes(), 0);
        assert_eq!(store.artists().len(), 2);
    }

    #[test]
    fn first_entry_into_empty_list() {
        let mut store = InMemoryStore::with_artists(Vec::new());
        run(&mut store, Some("r"), Some("Radiohead")).unwrap();
        assert_eq!(store.report(), Some("[R, Radiohead]"));
    }
}
