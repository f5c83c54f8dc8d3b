use std::time::Duration;

use browserless_exporter_core::error::{ExporterError, Result};
use serde::Deserialize;

/// Optional YAML config file. Keys mirror the command-line flag names.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub listen_addr: Option<String>,
    pub timeout: Option<u64>,
    pub debug: Option<bool>,
    pub browserless_endpoint: Option<String>,
    pub metrics_endpoint: Option<String>,
}

/// Fully resolved exporter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    pub listen_addr: String,
    /// Upstream timeout in seconds.
    pub timeout_secs: u64,
    pub debug: bool,
    pub browserless_endpoint: String,
    pub metrics_path: String,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            timeout_secs: default_timeout_secs(),
            debug: false,
            browserless_endpoint: default_browserless_endpoint(),
            metrics_path: default_metrics_path(),
        }
    }
}

impl ExporterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.trim().is_empty() {
            return Err(ExporterError::BadConfig("listen-addr must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ExporterError::BadConfig(
                "timeout must be at least 1 second".into(),
            ));
        }
        if !(self.browserless_endpoint.starts_with("http://")
            || self.browserless_endpoint.starts_with("https://"))
        {
            return Err(ExporterError::BadConfig(format!(
                "browserless-endpoint must be an http(s) URL: {}",
                self.browserless_endpoint
            )));
        }
        if !self.metrics_path.starts_with('/') {
            return Err(ExporterError::BadConfig(
                "metrics-endpoint must start with '/'".into(),
            ));
        }
        if self.metrics_path == "/" || self.metrics_path == "/healthz" {
            return Err(ExporterError::BadConfig(format!(
                "metrics-endpoint collides with a built-in route: {}",
                self.metrics_path
            )));
        }
        Ok(())
    }
}

fn default_listen_addr() -> String {
    "localhost:3001".into()
}
fn default_timeout_secs() -> u64 {
    5
}
fn default_browserless_endpoint() -> String {
    "http://localhost:3000/metrics/total".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}
