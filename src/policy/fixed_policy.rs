use crate::policy::ExpirePolicy;

use std::convert::TryFrom;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Converts a [`Duration`] into signed nanoseconds, saturating at `i64::MAX`.
#[inline]
pub fn duration_to_nanos(duration: Duration) -> i64 {
    i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX)
}

/// Time To Live policy.
///
/// Entries expire a fixed time after they were created or last updated. Reads don't touch the
/// expiration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TTLPolicy {
    ttl_nanos: i64,
}

impl TTLPolicy {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::from_nanos(duration_to_nanos(ttl))
    }

    #[must_use]
    pub fn from_nanos(ttl_nanos: i64) -> Self {
        Self { ttl_nanos }
    }

    pub fn ttl_nanos(&self) -> i64 {
        self.ttl_nanos
    }
}

impl<K, V> ExpirePolicy<K, V> for TTLPolicy {
    #[inline]
    fn on_create(&self, _: &K, _: &V, _: i64) -> i64 {
        self.ttl_nanos
    }

    #[inline]
    fn on_update(&self, _: &K, _: &V, _: i64, _: i64) -> i64 {
        self.ttl_nanos
    }

    #[inline]
    fn on_read(&self, _: &K, _: &V, _: i64, current_duration: i64) -> i64 {
        current_duration
    }
}

/// Time To Idle policy.
///
/// Every create, update and read pushes expiration a fixed time into the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TTIPolicy {
    tti_nanos: i64,
}

impl TTIPolicy {
    #[must_use]
    pub fn new(tti: Duration) -> Self {
        Self::from_nanos(duration_to_nanos(tti))
    }

    #[must_use]
    pub fn from_nanos(tti_nanos: i64) -> Self {
        Self { tti_nanos }
    }

    pub fn tti_nanos(&self) -> i64 {
        self.tti_nanos
    }
}

impl<K, V> ExpirePolicy<K, V> for TTIPolicy {
    #[inline]
    fn on_create(&self, _: &K, _: &V, _: i64) -> i64 {
        self.tti_nanos
    }

    #[inline]
    fn on_update(&self, _: &K, _: &V, _: i64, _: i64) -> i64 {
        self.tti_nanos
    }

    #[inline]
    fn on_read(&self, _: &K, _: &V, _: i64, _: i64) -> i64 {
        self.tti_nanos
    }
}
