//! browserless-exporter core: the upstream snapshot schema, the static metric
//! descriptor table, and the error surface shared by the exporter crates.
//!
//! Nothing here touches the network or a runtime, so the translation contract
//! (wire JSON -> typed samples) can be tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible path
//! surfaces as `FetchError`/`ExporterError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod descriptor;
pub mod error;
pub mod snapshot;

pub use descriptor::{descriptors, samples, MetricDescriptor, MetricKind, Sample, DESCRIPTORS};
pub use error::{ExporterError, FetchError, FetchErrorKind, Result};
pub use snapshot::UpstreamSnapshot;
