//! Browserless collector (two-phase describe/collect).
//!
//! `describe` is static and never touches the network. `collect` performs
//! exactly one upstream fetch and yields either all 11 samples or none.

use std::sync::Arc;

use async_trait::async_trait;

use browserless_exporter_core::descriptor::{self, MetricDescriptor, Sample};

use crate::obs::metrics::CounterVec;
use crate::upstream::SnapshotSource;

/// Label value under which this collector's failures are counted.
pub const COLLECTOR_LABEL: &str = "metrics-total";

/// A source of samples scraped by the registry.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Every descriptor this collector can ever emit.
    fn describe(&self) -> Vec<&'static MetricDescriptor>;
    /// Produce the current samples. Failures are absorbed, never returned.
    async fn collect(&self) -> Vec<Sample>;
}

/// Collects the totals of one browserless instance.
pub struct BrowserlessTotalCollector {
    source: Arc<dyn SnapshotSource>,
    errors: Arc<CounterVec>,
}

impl BrowserlessTotalCollector {
    /// Registers `collector="metrics-total"` on `errors` with a zero value.
    pub fn new(source: Arc<dyn SnapshotSource>, errors: Arc<CounterVec>) -> Self {
        errors.add(&[("collector", COLLECTOR_LABEL)], 0);
        Self { source, errors }
    }
}

#[async_trait]
impl Collector for BrowserlessTotalCollector {
    fn describe(&self) -> Vec<&'static MetricDescriptor> {
        descriptor::descriptors().collect()
    }

    async fn collect(&self) -> Vec<Sample> {
        match self.source.fetch().await {
            Ok(snapshot) => descriptor::samples(&snapshot),
            Err(e) => {
                self.errors.inc(&[("collector", COLLECTOR_LABEL)]);
                tracing::warn!(
                    collector = COLLECTOR_LABEL,
                    endpoint = %self.source.endpoint(),
                    kind = e.kind().as_str(),
                    error = %e,
                    "collect failed"
                );
                Vec::new()
            }
        }
    }
}
