//! Scrape-time registry: runs every collector, then renders internal counters.

use std::collections::HashSet;
use std::sync::Arc;

use browserless_exporter_core::error::{ExporterError, Result};

use crate::collector::Collector;
use crate::obs::metrics::{render_samples, CounterVec};

/// Name of the exporter's own error counter.
pub const ERRORS_TOTAL: &str = "browserless_exporter_errors_total";
const ERRORS_TOTAL_HELP: &str = "The total number of errors per collector";

pub struct Registry {
    collectors: Vec<Arc<dyn Collector>>,
    names: HashSet<&'static str>,
    errors: Arc<CounterVec>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            collectors: Vec::new(),
            names: HashSet::from([ERRORS_TOTAL]),
            errors: Arc::new(CounterVec::new(ERRORS_TOTAL, ERRORS_TOTAL_HELP)),
        }
    }

    /// Shared handle to inject into collectors.
    pub fn errors(&self) -> Arc<CounterVec> {
        Arc::clone(&self.errors)
    }

    /// Add a collector. Fails if any name it describes is already taken,
    /// either by another collector or by the internal error counter.
    pub fn register(&mut self, collector: Arc<dyn Collector>) -> Result<()> {
        let mut incoming = HashSet::new();
        for desc in collector.describe() {
            if self.names.contains(desc.name) || !incoming.insert(desc.name) {
                return Err(ExporterError::Internal(format!(
                    "duplicate metric name registered: {}",
                    desc.name
                )));
            }
        }
        self.names.extend(incoming);
        self.collectors.push(collector);
        Ok(())
    }

    /// Collect every registered collector and render the exposition body.
    pub async fn gather(&self) -> String {
        let mut out = String::new();
        for c in &self.collectors {
            let samples = c.collect().await;
            render_samples(&samples, &mut out);
        }
        self.errors.render(&mut out);
        out
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
