//! Tracked time data
//!
//! A [`Store`] maps each tag to its entries in the order they were started.
//! Only the last entry of a tag is ever modified; it is "open" while it has a
//! start but no stop.

pub(crate) mod file;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub(crate) use file::{load, save};

/// One start/stop interval and the notes taken while it ran.
///
/// Blank timestamps are kept as empty strings so that existing track files,
/// which always carry all three fields, stay readable and writable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Entry {
    #[serde(rename = "Start", default)]
    pub(crate) start: String,
    #[serde(rename = "Stop", default)]
    pub(crate) stop: String,
    #[serde(rename = "Notes", default)]
    pub(crate) notes: Vec<String>,
}

impl Entry {
    pub(crate) fn started_at(start: impl Into<String>) -> Self {
        Entry {
            start: start.into(),
            ..Entry::default()
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        !self.start.is_empty() && self.stop.is_empty()
    }

    pub(crate) fn is_stopped(&self) -> bool {
        !self.stop.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Store {
    tags: BTreeMap<String, Vec<Entry>>,
}

impl Store {
    /// Entries recorded for `tag`, oldest first. Unknown tags have none.
    pub(crate) fn entries(&self, tag: &str) -> &[Entry] {
        self.tags.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn last(&self, tag: &str) -> Option<&Entry> {
        self.entries(tag).last()
    }

    pub(crate) fn last_mut(&mut self, tag: &str) -> Option<&mut Entry> {
        self.tags.get_mut(tag).and_then(|entries| entries.last_mut())
    }

    pub(crate) fn push(&mut self, tag: &str, entry: Entry) {
        self.tags.entry(tag.to_string()).or_default().push(entry);
    }

    pub(crate) fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.tags.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
