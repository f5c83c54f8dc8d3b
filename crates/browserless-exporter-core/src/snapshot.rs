//! Wire schema of browserless' `/metrics/total` response.

use serde::{Deserialize, Deserializer};

use crate::error::FetchError;

/// One decoded response of the upstream metrics endpoint.
///
/// Keys are matched by their exact camelCase name. Unknown keys are ignored
/// and missing or `null` keys default to zero; values are not validated
/// beyond their JSON type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpstreamSnapshot {
    #[serde(deserialize_with = "null_as_zero")]
    pub successful: i64,
    #[serde(deserialize_with = "null_as_zero")]
    pub error: i64,
    #[serde(deserialize_with = "null_as_zero")]
    pub queued: i64,
    #[serde(deserialize_with = "null_as_zero")]
    pub rejected: i64,
    #[serde(deserialize_with = "null_as_zero")]
    pub unhealthy: i64,
    #[serde(deserialize_with = "null_as_zero")]
    pub timedout: i64,
    /// Milliseconds.
    #[serde(deserialize_with = "null_as_zero")]
    pub total_time: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub mean_time: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub max_time: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub min_time: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub max_concurrent: i64,
}

/// browserless serializes NaN/Infinity aggregates of an idle instance as `null`.
fn null_as_zero<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

impl UpstreamSnapshot {
    /// Decode a full response body.
    pub fn decode(body: &[u8]) -> Result<Self, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }
}
