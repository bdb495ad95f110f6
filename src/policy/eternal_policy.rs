use crate::policy::{ExpirePolicy, ETERNAL_DURATION};

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static INSTANCE: Lazy<Arc<EternalPolicy>> = Lazy::new(|| Arc::new(EternalPolicy));

/// A policy where entries never expire. This is the default policy for caches without expiration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EternalPolicy;

impl EternalPolicy {
    /// Returns the process-wide instance.
    pub fn shared() -> Arc<Self> {
        INSTANCE.clone()
    }
}

impl<K, V> ExpirePolicy<K, V> for EternalPolicy {
    #[inline]
    fn on_create(&self, _: &K, _: &V, _: i64) -> i64 {
        ETERNAL_DURATION
    }

    #[inline]
    fn on_update(&self, _: &K, _: &V, _: i64, _: i64) -> i64 {
        ETERNAL_DURATION
    }

    #[inline]
    fn on_read(&self, _: &K, _: &V, _: i64, _: i64) -> i64 {
        ETERNAL_DURATION
    }
}
