//! Exporter config: flags, environment, and an optional strict YAML file.

pub mod cli;
pub mod schema;

use std::fs;
use std::path::Path;

use browserless_exporter_core::error::{ExporterError, Result};

pub use cli::Cli;
pub use schema::{ExporterConfig, FileConfig};

pub fn load_from_file(path: &Path) -> Result<FileConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        ExporterError::BadConfig(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<FileConfig> {
    serde_yaml::from_str(s).map_err(|e| ExporterError::BadConfig(format!("invalid yaml: {e}")))
}

/// Resolve flags (and their env fallbacks) over the config file over defaults.
pub fn resolve(cli: Cli) -> Result<ExporterConfig> {
    let file = match &cli.config {
        Some(path) => load_from_file(path)?,
        None => FileConfig::default(),
    };
    merge(cli, file)
}

/// Layer `cli` over `file` over the defaults, then validate.
pub fn merge(cli: Cli, file: FileConfig) -> Result<ExporterConfig> {
    let d = ExporterConfig::default();
    let cfg = ExporterConfig {
        listen_addr: cli.listen_addr.or(file.listen_addr).unwrap_or(d.listen_addr),
        timeout_secs: cli.timeout.or(file.timeout).unwrap_or(d.timeout_secs),
        debug: cli.debug || file.debug.unwrap_or(d.debug),
        browserless_endpoint: cli
            .browserless_endpoint
            .or(file.browserless_endpoint)
            .unwrap_or(d.browserless_endpoint),
        metrics_path: cli
            .metrics_endpoint
            .or(file.metrics_endpoint)
            .unwrap_or(d.metrics_path),
    };
    cfg.validate()?;
    Ok(cfg)
}
