use std::collections::HashMap;

use crossbeam_channel::Sender;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::client::AdminClient;
use crate::events::{spawn_worker, ConsoleEvent};

/// Identity of a log row: the load it came from and its index in that store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub generation: u64,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStatus {
    Pending,
    Replayed,
    HttpError(u16),
    Failed,
}

impl ReplayStatus {
    pub fn label(&self) -> String {
        match self {
            ReplayStatus::Pending => "⏳ Replaying...".to_string(),
            ReplayStatus::Replayed => "✅ Replayed".to_string(),
            ReplayStatus::HttpError(code) => format!("❌ Error ({})", code),
            ReplayStatus::Failed => "❌ Failed".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayEvent {
    pub key: RowKey,
    pub status: ReplayStatus,
}

/// Per-row replay state. A row's control is disabled while its replay is pending.
#[derive(Debug, Default)]
pub struct ReplayTracker {
    statuses: HashMap<RowKey, ReplayStatus>,
}

impl ReplayTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` pending. Returns false if a replay for it is already in flight.
    pub fn begin(&mut self, key: RowKey) -> bool {
        if self.statuses.get(&key) == Some(&ReplayStatus::Pending) {
            return false;
        }
        self.statuses.insert(key, ReplayStatus::Pending);
        true
    }

    /// Records the outcome of a pending replay. Outcomes for rows that are not
    /// pending (e.g. from a store that has since been reloaded) are ignored.
    pub fn finish(&mut self, event: ReplayEvent) {
        if let Some(status) = self.statuses.get_mut(&event.key) {
            if *status == ReplayStatus::Pending {
                *status = event.status;
            }
        }
    }

    pub fn status(&self, key: RowKey) -> Option<ReplayStatus> {
        self.statuses.get(&key).copied()
    }

    pub fn is_enabled(&self, key: RowKey) -> bool {
        self.status(key) != Some(ReplayStatus::Pending)
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}

/// Reports the replay outcome when dropped, so the row is re-enabled on
/// every path out of the worker, including a panic or a failed spawn.
struct CompletionGuard {
    key: RowKey,
    status: ReplayStatus,
    tx: Sender<ConsoleEvent>,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(ConsoleEvent::Replay(ReplayEvent {
            key: self.key,
            status: self.status,
        }));
    }
}

/// Replays `payload` for `key` on a worker thread.
///
/// Returns false without sending anything when the row already has a
/// replay in flight.
pub fn dispatch_replay(
    client: &AdminClient,
    tracker: &mut ReplayTracker,
    key: RowKey,
    payload: Value,
    tx: Sender<ConsoleEvent>,
) -> bool {
    if !tracker.begin(key) {
        return false;
    }

    let client = client.clone();
    let mut guard = CompletionGuard {
        key,
        status: ReplayStatus::Failed,
        tx,
    };
    spawn_worker("replay", move || {
        let event = payload.get("event").and_then(Value::as_str).unwrap_or("?");
        info!(event, row = key.index, "replaying payload");
        guard.status = match client.replay(&payload) {
            Ok(outcome) if outcome.is_success() => ReplayStatus::Replayed,
            Ok(outcome) => {
                warn!(event, status = outcome.status, "replay rejected");
                ReplayStatus::HttpError(outcome.status)
            }
            Err(e) => {
                error!("Replay error: {:#}", e);
                ReplayStatus::Failed
            }
        };
    });
    true
}
