use std::path::PathBuf;

use clap::{builder::BoolishValueParser, Parser};

/// Command-line flags. Each flag can also come from the environment variable
/// named after it; flags win over the environment, both win over `--config`.
#[derive(Debug, Default, Parser)]
#[command(name = "browserless-exporter", version, about = "Prometheus exporter for browserless")]
pub struct Cli {
    /// Listen address
    #[arg(long, env = "LISTEN_ADDR")]
    pub listen_addr: Option<String>,

    /// Timeout in seconds
    #[arg(long, env = "TIMEOUT")]
    pub timeout: Option<u64>,

    /// Log debug information
    #[arg(long, env = "DEBUG", value_parser = BoolishValueParser::new())]
    pub debug: bool,

    /// Browserless metrics endpoint
    #[arg(long, env = "BROWSERLESS_ENDPOINT")]
    pub browserless_endpoint: Option<String>,

    /// Path where prometheus metrics are going to be exposed
    #[arg(long = "metrics-endpoint", env = "METRICS_ENDPOINT")]
    pub metrics_endpoint: Option<String>,

    /// YAML config file
    #[arg(long, env = "CONFIG")]
    pub config: Option<PathBuf>,
}
