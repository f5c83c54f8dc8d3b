//! Observability: the metrics registry rendered on the scrape route, and
//! process logging setup.

pub mod logging;
pub mod metrics;
pub mod registry;
