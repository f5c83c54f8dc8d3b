//! Static metric surface of the exporter.
//!
//! `DESCRIPTORS` is the whole 1:1 contract between snapshot fields and
//! exposed metric names. Order here is the order samples are emitted in.

use crate::snapshot::UpstreamSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    /// Token used on the `# TYPE` exposition line.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

/// Name, help text and kind of one metric, independent of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
}

/// One value produced by a collect pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub desc: &'static MetricDescriptor,
    pub value: f64,
}

type Accessor = fn(&UpstreamSnapshot) -> f64;

const fn counter(name: &'static str, help: &'static str) -> MetricDescriptor {
    MetricDescriptor {
        name,
        help,
        kind: MetricKind::Counter,
    }
}

const fn gauge(name: &'static str, help: &'static str) -> MetricDescriptor {
    MetricDescriptor {
        name,
        help,
        kind: MetricKind::Gauge,
    }
}

/// Descriptor table paired with the field each metric is read from.
pub static DESCRIPTORS: [(MetricDescriptor, Accessor); 11] = [
    (counter("browserless_successful", "Number of successful requests"), |s| s.successful as f64),
    (counter("browserless_error", "Number of requests resulting in an error"), |s| s.error as f64),
    (counter("browserless_queued", "Number of requests that got queued"), |s| s.queued as f64),
    (
        counter("browserless_rejected", "Number of requests that got rejected"),
        |s| s.rejected as f64,
    ),
    (counter("browserless_unhealthy", "Number of unhealthy requests"), |s| s.unhealthy as f64),
    (counter("browserless_timedout", "Number of timedout requests"), |s| s.timedout as f64),
    (gauge("browserless_time_total", "TotalTime as defined by browserless"), |s| s.total_time),
    (gauge("browserless_time_mean", "MeanTime as defined by browserless"), |s| s.mean_time),
    (gauge("browserless_time_max", "MaxTime as defined by browserless"), |s| s.max_time),
    (gauge("browserless_time_min", "MinTime as defined by browserless"), |s| s.min_time),
    (
        gauge("browserless_concurrent_max", "Maximum number of concurrent sessions observed"),
        |s| s.max_concurrent as f64,
    ),
];

/// All descriptors, in emission order.
pub fn descriptors() -> impl Iterator<Item = &'static MetricDescriptor> {
    DESCRIPTORS.iter().map(|(d, _)| d)
}

/// Map a snapshot to one sample per descriptor.
pub fn samples(snapshot: &UpstreamSnapshot) -> Vec<Sample> {
    DESCRIPTORS
        .iter()
        .map(|(desc, read)| Sample {
            desc,
            value: read(snapshot),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_prefixed() {
        let names: HashSet<_> = descriptors().map(|d| d.name).collect();
        assert_eq!(names.len(), 11);
        assert!(names.iter().all(|n| n.starts_with("browserless_")));
    }

    #[test]
    fn first_six_are_counters() {
        let kinds: Vec<_> = descriptors().map(|d| d.kind).collect();
        assert!(kinds[..6].iter().all(|k| *k == MetricKind::Counter));
        assert!(kinds[6..].iter().all(|k| *k == MetricKind::Gauge));
    }

    #[test]
    fn samples_follow_descriptor_order() {
        let snap = UpstreamSnapshot {
            max_concurrent: 7,
            min_time: 1.5,
            ..Default::default()
        };
        let out = samples(&snap);
        assert_eq!(out.len(), DESCRIPTORS.len());
        assert_eq!(out[9].desc.name, "browserless_time_min");
        assert_eq!(out[9].value, 1.5);
        assert_eq!(out[10].value, 7.0);
    }
}
