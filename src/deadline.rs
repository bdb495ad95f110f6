use crate::policy::{ExpirePolicy, ETERNAL_DURATION};

use std::time::Instant;

use once_cell::sync::Lazy;

/// Monotonic nanoseconds elapsed since the first time the clock was read in this process.
///
/// Never goes backwards, which makes it suitable as the `current_time` handed to policies.
pub fn now_nanos() -> i64 {
    static BASE: Lazy<Instant> = Lazy::new(Instant::now);
    crate::policy::duration_to_nanos(BASE.elapsed())
}

/// Expiration bookkeeping of a single entry.
///
/// Applies the calling protocol of a cache: `on_create` when the entry is inserted, then
/// `on_update` or `on_read` with the time remaining until the stored expiration. A policy that
/// echoes `current_duration` back therefore leaves the expiration time unchanged. A duration of
/// [`ETERNAL_DURATION`] always maps to an expiration time of `i64::MAX`, whatever the current
/// time; other expiration times saturate instead of overflowing.
///
/// The owner must serialize calls for the same entry.
///
/// [`ETERNAL_DURATION`]: crate::policy::ETERNAL_DURATION
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    duration: i64,
    expire_at: i64,
}

impl Deadline {
    fn new(now: i64, duration: i64) -> Self {
        let expire_at = if duration == ETERNAL_DURATION {
            i64::MAX
        } else {
            now.saturating_add(duration)
        };

        Self {
            duration,
            expire_at,
        }
    }

    /// Starts tracking a freshly inserted entry with the policy's `on_create` result.
    pub fn on_create<K, V, P>(policy: &P, key: &K, value: &V, now: i64) -> Self
    where
        P: ExpirePolicy<K, V> + ?Sized,
    {
        Self::new(now, policy.on_create(key, value, now))
    }

    /// Refreshes after a value replacement, handing the remaining time to `on_update`.
    pub fn on_update<K, V, P>(&mut self, policy: &P, key: &K, value: &V, now: i64)
    where
        P: ExpirePolicy<K, V> + ?Sized,
    {
        *self = Self::new(now, policy.on_update(key, value, now, self.remaining(now)));
    }

    /// Refreshes after a read, handing the remaining time to `on_read`.
    pub fn on_read<K, V, P>(&mut self, policy: &P, key: &K, value: &V, now: i64)
    where
        P: ExpirePolicy<K, V> + ?Sized,
    {
        *self = Self::new(now, policy.on_read(key, value, now, self.remaining(now)));
    }

    /// Duration returned by the last hook.
    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Time left until expiration, negative once expired.
    pub fn remaining(&self, now: i64) -> i64 {
        if self.expire_at == i64::MAX {
            ETERNAL_DURATION
        } else {
            self.expire_at.saturating_sub(now)
        }
    }

    /// Absolute time at which the entry becomes eligible for removal.
    pub fn expire_at(&self) -> i64 {
        self.expire_at
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expire_at <= now
    }
}
