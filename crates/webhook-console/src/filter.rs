use crate::LogEntry;

/// Status filter for the logs table. `All` matches every entry; `Only`
/// requires an exact status match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// Builds a filter from a raw select value, where the empty string means all.
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => expected == status,
        }
    }

    /// Next value in the `all -> success -> error -> all` cycle.
    pub fn cycle(&self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only("success".to_string()),
            StatusFilter::Only(s) if s == "success" => StatusFilter::Only("error".to_string()),
            StatusFilter::Only(_) => StatusFilter::All,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.as_str(),
        }
    }
}

/// Free-text query plus status filter for the logs table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    query: String,
    pub status: StatusFilter,
}

impl LogFilter {
    pub fn new(query: &str, status: StatusFilter) -> Self {
        Self {
            query: query.to_lowercase(),
            status,
        }
    }

    /// The lower-cased query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        let text_match = self.query.is_empty()
            || entry.email_or_empty().to_lowercase().contains(&self.query)
            || entry.event.to_lowercase().contains(&self.query);
        text_match && self.status.matches(&entry.status)
    }
}

/// Indices of the entries matching `filter`, in collection order.
///
/// Returning indices keeps the result tied to row identity in the store.
pub fn filter_logs(entries: &[LogEntry], filter: &LogFilter) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| filter.matches(entry))
        .map(|(index, _)| index)
        .collect()
}
