use std::collections::HashMap;

use crossbeam_channel::Sender;
use tracing::{error, info};

use crate::client::AdminClient;
use crate::merge_map::{MergeMap, SaveStatus};
use crate::replay::ReplayEvent;
use crate::tabs::{LoadToken, Tab};
use crate::LogEntry;

/// Result body of a tab load. Errors are flattened to display strings.
#[derive(Debug)]
pub enum LoadPayload {
    Logs(Result<Vec<LogEntry>, String>),
    Cache(Result<HashMap<String, String>, String>),
    MergeMap(Result<MergeMap, String>),
}

#[derive(Debug)]
pub struct LoadEvent {
    pub token: LoadToken,
    pub payload: LoadPayload,
}

/// Outcome of a merge-map save, tagged with the load generation of the form
/// it was submitted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveEvent {
    pub generation: u64,
    pub status: SaveStatus,
}

/// Events posted from worker threads back to the UI loop.
#[derive(Debug)]
pub enum ConsoleEvent {
    Loaded(LoadEvent),
    MergeMapSaved(SaveEvent),
    Replay(ReplayEvent),
    Health(bool),
}

/// Runs the load for `token.tab` on a worker thread and posts one [`ConsoleEvent::Loaded`].
pub fn spawn_load(client: &AdminClient, token: LoadToken, tx: Sender<ConsoleEvent>) {
    let client = client.clone();
    spawn_worker("tab-load", move || {
        info!(tab = %token.tab, generation = token.generation, "loading tab");
        let payload = match token.tab {
            Tab::Dashboard | Tab::Logs => LoadPayload::Logs(flatten(client.fetch_logs(), token)),
            Tab::Cache => LoadPayload::Cache(flatten(client.fetch_email_cache(), token)),
            Tab::MergeMap => LoadPayload::MergeMap(flatten(client.fetch_merge_map(), token)),
        };
        let _ = tx.send(ConsoleEvent::Loaded(LoadEvent { token, payload }));
    });
}

/// POSTs `map` on a worker thread and posts the resulting [`SaveStatus`] for `generation`.
pub fn spawn_save_merge_map(
    client: &AdminClient,
    map: MergeMap,
    generation: u64,
    tx: Sender<ConsoleEvent>,
) {
    let client = client.clone();
    spawn_worker("merge-map-save", move || {
        let status = match client.save_merge_map(&map) {
            Ok(outcome) if outcome.is_success() => SaveStatus::Saved,
            Ok(outcome) => SaveStatus::Rejected(outcome.status),
            Err(e) => {
                error!("merge map save failed: {:#}", e);
                SaveStatus::Failed
            }
        };
        let _ = tx.send(ConsoleEvent::MergeMapSaved(SaveEvent { generation, status }));
    });
}

/// Checks `/health` once on a worker thread.
pub fn spawn_health_check(client: &AdminClient, tx: Sender<ConsoleEvent>) {
    let client = client.clone();
    spawn_worker("health-check", move || {
        let healthy = client.health().unwrap_or_else(|e| {
            error!("health check failed: {:#}", e);
            false
        });
        let _ = tx.send(ConsoleEvent::Health(healthy));
    });
}

pub(crate) fn spawn_worker<F>(name: &str, work: F)
where
    F: FnOnce() + Send + 'static,
{
    if let Err(e) = std::thread::Builder::new()
        .name(name.to_string())
        .spawn(work)
    {
        error!("failed to spawn {} worker: {}", name, e);
    }
}

fn flatten<T>(result: eyre::Result<T>, token: LoadToken) -> Result<T, String> {
    result.map_err(|e| {
        error!(tab = %token.tab, "load failed: {:#}", e);
        format!("{:#}", e)
    })
}
