use super::Page;
use serde::{Deserialize, Serialize};

/// One registered id and its position in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub seq: u64,
    pub id: String,
}

/// Persisted form of an index. Entries are kept sorted by `seq`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexDocument {
    pub next_seq: u64,
    pub entries: Vec<IndexEntry>,
    pub seeded: bool,
}

impl IndexDocument {
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Append `id` unless present. Returns whether it was added.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq = seq.saturating_add(1);
        self.entries.push(IndexEntry {
            seq,
            id: id.to_string(),
        });
        true
    }

    /// Drop `id`. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Entries with `seq` strictly greater than `after`, at most `limit` of them.
    #[must_use]
    pub fn page(&self, after: Option<u64>, limit: usize) -> Page<String> {
        let start = match after {
            Some(seq) => self.entries.partition_point(|e| e.seq <= seq),
            None => 0,
        };
        let mut remaining = self.entries.iter().skip(start);
        let items: Vec<&IndexEntry> = remaining.by_ref().take(limit).collect();
        let has_more = remaining.next().is_some();
        let next_cursor = if has_more {
            items.last().map(|e| e.seq.to_string())
        } else {
            None
        };
        Page {
            items: items.into_iter().map(|e| e.id.clone()).collect(),
            next_cursor,
        }
    }
}
