use crate::policy::{self, EternalPolicy, ExpirePolicy, TTIPolicy, TTLPolicy};
use crate::{Error, Result};

use std::convert::TryFrom;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Declarative description of one of the built-in policies.
///
/// ```
/// use endorphin_expiry::ExpiryConfig;
///
/// let config = ExpiryConfig::from_toml_str(r#"
///     kind = "time_to_idle"
///     tti_ms = 1500
/// "#).unwrap();
///
/// assert_eq!(config, ExpiryConfig::TimeToIdle { tti_ms: 1500 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpiryConfig {
    Eternal,
    TimeToLive { ttl_ms: u64 },
    TimeToIdle { tti_ms: u64 },
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        ExpiryConfig::Eternal
    }
}

fn millis_to_nanos(millis: u64) -> Result<i64> {
    millis
        .checked_mul(1_000_000)
        .and_then(|nanos| i64::try_from(nanos).ok())
        .ok_or(Error::DurationOverflow { millis })
}

impl ExpiryConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Builds the configured policy.
    ///
    /// Everything except the eternal policy comes back wrapped in a [`policy::BoundedPolicy`];
    /// the eternal policy is the shared instance.
    pub fn build<K, V>(&self) -> Result<Arc<dyn ExpirePolicy<K, V>>>
    where
        K: 'static,
        V: 'static,
    {
        debug!(config = ?self, "building expire policy");

        let built: Arc<dyn ExpirePolicy<K, V>> = match *self {
            ExpiryConfig::Eternal => return Ok(EternalPolicy::shared()),
            ExpiryConfig::TimeToLive { ttl_ms } => {
                Arc::new(TTLPolicy::from_nanos(millis_to_nanos(ttl_ms)?))
            }
            ExpiryConfig::TimeToIdle { tti_ms } => {
                Arc::new(TTIPolicy::from_nanos(millis_to_nanos(tti_ms)?))
            }
        };

        Ok(policy::bounded(built))
    }
}
