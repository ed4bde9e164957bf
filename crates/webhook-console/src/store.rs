use crate::LogEntry;

/// In-memory log collection, newest first.
///
/// The store is built once per load and never mutated afterwards, so an
/// index into [`LogStore::entries`] is a stable row identity for the
/// lifetime of the store.
#[derive(Debug, Clone, Default)]
pub struct LogStore {
    entries: Vec<LogEntry>,
}

impl LogStore {
    pub fn new(mut entries: Vec<LogEntry>) -> Self {
        sort_newest_first(&mut entries);
        Self { entries }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sorts descending by parsed timestamp. Unparseable timestamps go last and
/// keep their relative order.
pub fn sort_newest_first(entries: &mut [LogEntry]) {
    entries.sort_by(|a, b| b.parsed_timestamp().cmp(&a.parsed_timestamp()));
}
