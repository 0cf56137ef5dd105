use serde::{Deserialize, Serialize};

/// One artist record.
///
/// On disk an entry is a two-element JSON array `["<id>", "<name>"]`; in code
/// the fields are named so nothing indexes into a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Entry {
    pub id: String,
    pub name: String,
}

impl Entry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Lowercased first character of the name, the key the report groups on.
    pub fn group_letter(&self) -> Option<String> {
        self.name.chars().next().map(|c| c.to_lowercase().collect())
    }
}

impl From<(String, String)> for Entry {
    fn from((id, name): (String, String)) -> Self {
        Self { id, name }
    }
}

impl From<Entry> for (String, String) {
    fn from(entry: Entry) -> Self {
        (entry.id, entry.name)
    }
}
