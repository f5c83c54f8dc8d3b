//! Shared error types across the exporter crates.

use thiserror::Error;

/// Failure classes for a single upstream fetch (stable, used as a log field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection refused, DNS/TLS failure, timeout, truncated body.
    Network,
    /// Body was not a JSON object matching the snapshot schema.
    Decode,
}

impl FetchErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchErrorKind::Network => "network",
            FetchErrorKind::Decode => "decode",
        }
    }
}

/// Error returned by one fetch of the upstream snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("couldn't fetch metrics from {endpoint}: {reason}")]
    Network { endpoint: String, reason: String },
    #[error("couldn't decode metrics response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn network(endpoint: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        FetchError::Network {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network { .. } => FetchErrorKind::Network,
            FetchError::Decode(_) => FetchErrorKind::Decode,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Process-level errors, all fatal at startup. Fetch failures never reach
/// this type; the collector absorbs them.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("internal: {0}")]
    Internal(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_strings_are_stable() {
        let net = FetchError::network("http://x", "connection refused");
        assert_eq!(net.kind().as_str(), "network");
        assert!(net.to_string().contains("connection refused"));

        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let dec = FetchError::from(bad);
        assert_eq!(dec.kind().as_str(), "decode");
    }
}
