use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod cache;
pub mod client;
pub mod config;
pub mod events;
pub mod filter;
pub mod logging;
pub mod merge_map;
pub mod paginate;
pub mod replay;
pub mod report;
pub mod rows;
pub mod store;
pub mod summary;
pub mod tabs;

pub use cache::{cache_entries, filter_cache, CACHE_PAGE_SIZE};
pub use client::{AdminClient, PostOutcome};
pub use config::{ConsoleConfig, Credentials};
pub use events::{ConsoleEvent, LoadEvent, LoadPayload, SaveEvent};
pub use filter::{filter_logs, LogFilter, StatusFilter};
pub use merge_map::{MergeMap, MergeMapForm, SaveStatus, Section};
pub use paginate::{total_pages, Pagination, LOGS_PAGE_SIZE};
pub use replay::{dispatch_replay, ReplayEvent, ReplayStatus, ReplayTracker, RowKey};
pub use report::Format;
pub use store::LogStore;
pub use summary::DashboardSummary;
pub use tabs::{LoadToken, Tab, TabController};

/// Key inside `changes` that carries the Mailchimp sync error, if any.
pub const MAILCHIMP_ERROR_KEY: &str = "mailchimp_error";

/// Status value that the console treats as a successful delivery.
pub const SUCCESS_STATUS: &str = "success";

/// A single webhook delivery as recorded by the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl LogEntry {
    /// Parses `timestamp` as RFC 3339, falling back to a naive ISO-8601
    /// date-time interpreted as UTC.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    /// The Mailchimp error message stored under `changes.mailchimp_error`.
    pub fn mailchimp_error(&self) -> Option<String> {
        let value = self.changes.as_ref()?.get(MAILCHIMP_ERROR_KEY)?;
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// `changes` without the `mailchimp_error` key, or `None` when nothing is left.
    pub fn other_changes(&self) -> Option<Map<String, Value>> {
        let changes = self.changes.as_ref()?;
        let rest: Map<String, Value> = changes
            .iter()
            .filter(|(key, _)| key.as_str() != MAILCHIMP_ERROR_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if rest.is_empty() {
            None
        } else {
            Some(rest)
        }
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// A single id → email pair from the member email cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub id: String,
    pub email: String,
}
