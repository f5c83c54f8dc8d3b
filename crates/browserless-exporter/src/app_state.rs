//! Shared application state for the exporter.
//!
//! Built once at startup; every scrape reads it through an `Arc`.

use std::sync::Arc;

use browserless_exporter_core::error::Result;

use crate::collector::BrowserlessTotalCollector;
use crate::config::ExporterConfig;
use crate::obs::registry::Registry;
use crate::upstream::{SnapshotSource, UpstreamFetcher};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Registry,
}

impl AppState {
    /// Build state with the HTTP fetcher pointed at the configured endpoint.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let fetcher = UpstreamFetcher::new(cfg.browserless_endpoint.clone(), cfg.timeout())?;
        Self::with_source(cfg, Arc::new(fetcher))
    }

    /// Build state around an arbitrary snapshot source.
    pub fn with_source(cfg: ExporterConfig, source: Arc<dyn SnapshotSource>) -> Result<Self> {
        let mut registry = Registry::new();
        let collector = BrowserlessTotalCollector::new(source, registry.errors());
        registry.register(Arc::new(collector))?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, registry }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }
}
