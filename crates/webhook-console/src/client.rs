use std::collections::HashMap;

use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ConsoleConfig;
use crate::{LogEntry, MergeMap};

pub const LOGS_PATH: &str = "webhook_logs.json";
pub const CACHE_PATH: &str = "email_cache.json";
pub const MERGE_MAP_PATH: &str = "/api/merge-map";
pub const REPLAY_PATH: &str = "/replay-log";
pub const HEALTH_PATH: &str = "/health";

/// Signature header value marking a manual replay rather than a signed delivery.
pub const REPLAY_SIGNATURE: &str = "REPLAY";
pub const SIGNATURE_HEADER: &str = "X-Memberful-Webhook-Signature";

/// HTTP status of a completed POST. Non-success statuses are values, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOutcome {
    pub status: u16,
}

impl PostOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking client for the bridge's admin endpoints.
#[derive(Clone)]
pub struct AdminClient {
    agent: ureq::Agent,
    config: ConsoleConfig,
}

impl AdminClient {
    pub fn new(config: ConsoleConfig) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build();
        Self {
            agent: ureq::Agent::new_with_config(agent_config),
            config,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Fetches the webhook log. An empty object or `null` body counts as no logs.
    pub fn fetch_logs(&self) -> Result<Vec<LogEntry>> {
        match self.get_json::<Value>(LOGS_PATH)? {
            Value::Array(items) => {
                let logs = items
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<std::result::Result<Vec<LogEntry>, _>>()?;
                Ok(logs)
            }
            Value::Null => Ok(Vec::new()),
            Value::Object(map) if map.is_empty() => Ok(Vec::new()),
            _ => Err(eyre!("Invalid logs data: expected a JSON array")),
        }
    }

    /// Fetches the member id → email cache. A `null` body counts as empty.
    pub fn fetch_email_cache(&self) -> Result<HashMap<String, String>> {
        match self.get_json::<Value>(CACHE_PATH)? {
            Value::Null => Ok(HashMap::new()),
            value => Ok(serde_json::from_value(value)?),
        }
    }

    pub fn fetch_merge_map(&self) -> Result<MergeMap> {
        self.get_json(MERGE_MAP_PATH)
    }

    pub fn save_merge_map(&self, map: &MergeMap) -> Result<PostOutcome> {
        self.post_json(MERGE_MAP_PATH, map, &[])
    }

    /// Re-submits a stored payload to the replay endpoint.
    pub fn replay(&self, payload: &Value) -> Result<PostOutcome> {
        self.post_json(
            REPLAY_PATH,
            payload,
            &[(SIGNATURE_HEADER, REPLAY_SIGNATURE)],
        )
    }

    /// Returns true when `/health` answers `{"status": "ok"}`.
    pub fn health(&self) -> Result<bool> {
        let body: Value = self.get_json(HEALTH_PATH)?;
        Ok(body.get("status").and_then(Value::as_str) == Some("ok"))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.url(path);
        debug!(%url, "GET");

        let mut request = self.agent.get(&url);
        if let Some(credentials) = &self.config.credentials {
            request = request.header("Authorization", credentials.authorization_header().as_str());
        }

        let mut response = request.call()?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(eyre!("GET {} returned HTTP {}", url, status));
        }
        let value: T = response.body_mut().read_json()?;
        Ok(value)
    }

    fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<PostOutcome> {
        let url = self.config.url(path);
        debug!(%url, "POST");

        let mut request = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json");
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(credentials) = &self.config.credentials {
            request = request.header("Authorization", credentials.authorization_header().as_str());
        }

        let response = request.send_json(body)?;
        let outcome = PostOutcome {
            status: response.status().as_u16(),
        };
        if !outcome.is_success() {
            warn!(%url, status = outcome.status, "POST rejected");
        }
        Ok(outcome)
    }
}
