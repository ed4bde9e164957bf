use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5050";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// HTTP basic auth credentials for the admin routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn authorization_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.user, self.password));
        format!("Basic {}", token)
    }
}

/// Connection settings shared by the console and the summary command.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub base_url: String,
    pub credentials: Option<Credentials>,
    pub timeout: Duration,
}

impl ConsoleConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Sets credentials when a user is given. A missing password is sent as empty.
    pub fn with_credentials(mut self, user: Option<String>, password: Option<String>) -> Self {
        self.credentials = user.map(|user| Credentials {
            user,
            password: password.unwrap_or_default(),
        });
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins `path` onto the base url without doubling slashes.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
