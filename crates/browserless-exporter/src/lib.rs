//! browserless exporter library entry.
//!
//! Wires the upstream fetcher, the browserless collector, the metrics
//! registry, and the HTTP routes into a Prometheus exporter. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod collector;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod upstream;
