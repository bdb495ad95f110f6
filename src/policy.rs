mod bounded_policy;
pub use bounded_policy::*;
mod eternal_policy;
pub use eternal_policy::*;
mod fixed_policy;
pub use fixed_policy::*;
mod fn_policy;
pub use fn_policy::*;

use crate::{Error, Result};

use std::sync::Arc;

use tracing::debug;

/// Duration handed out when an entry should never expire.
pub const ETERNAL_DURATION: i64 = i64::MAX;

/// Calculates when cache entries expire.
///
/// Every hook receives the entry and the cache's current monotonic time in nanoseconds and
/// returns the number of nanoseconds left until the entry expires. `on_update` and `on_read`
/// also get the time currently left on the entry so an implementation can keep the expiration
/// time untouched by echoing `current_duration` back.
///
/// Hooks run on the cache's access path. They are called concurrently for different entries,
/// must not block, and should return [`ETERNAL_DURATION`] to mean "never expires". A negative
/// result means the entry has already expired; wrap a policy with [`BoundedPolicy`] before
/// handing it to code that cannot cope with that.
pub trait ExpirePolicy<K, V>: Send + Sync {
    /// Called exactly once when an entry is first inserted.
    fn on_create(&self, key: &K, value: &V, current_time: i64) -> i64;

    /// Called when the value of an existing entry is replaced.
    fn on_update(&self, key: &K, value: &V, current_time: i64, current_duration: i64) -> i64;

    /// Called when an entry is read.
    fn on_read(&self, key: &K, value: &V, current_time: i64, current_duration: i64) -> i64;
}

impl<K, V, P> ExpirePolicy<K, V> for &P
where
    P: ExpirePolicy<K, V> + ?Sized,
{
    #[inline]
    fn on_create(&self, key: &K, value: &V, current_time: i64) -> i64 {
        (**self).on_create(key, value, current_time)
    }

    #[inline]
    fn on_update(&self, key: &K, value: &V, current_time: i64, current_duration: i64) -> i64 {
        (**self).on_update(key, value, current_time, current_duration)
    }

    #[inline]
    fn on_read(&self, key: &K, value: &V, current_time: i64, current_duration: i64) -> i64 {
        (**self).on_read(key, value, current_time, current_duration)
    }
}

impl<K, V, P> ExpirePolicy<K, V> for Box<P>
where
    P: ExpirePolicy<K, V> + ?Sized,
{
    #[inline]
    fn on_create(&self, key: &K, value: &V, current_time: i64) -> i64 {
        (**self).on_create(key, value, current_time)
    }

    #[inline]
    fn on_update(&self, key: &K, value: &V, current_time: i64, current_duration: i64) -> i64 {
        (**self).on_update(key, value, current_time, current_duration)
    }

    #[inline]
    fn on_read(&self, key: &K, value: &V, current_time: i64, current_duration: i64) -> i64 {
        (**self).on_read(key, value, current_time, current_duration)
    }
}

impl<K, V, P> ExpirePolicy<K, V> for Arc<P>
where
    P: ExpirePolicy<K, V> + ?Sized,
{
    #[inline]
    fn on_create(&self, key: &K, value: &V, current_time: i64) -> i64 {
        (**self).on_create(key, value, current_time)
    }

    #[inline]
    fn on_update(&self, key: &K, value: &V, current_time: i64, current_duration: i64) -> i64 {
        (**self).on_update(key, value, current_time, current_duration)
    }

    #[inline]
    fn on_read(&self, key: &K, value: &V, current_time: i64, current_duration: i64) -> i64 {
        (**self).on_read(key, value, current_time, current_duration)
    }
}

/// Returns a policy where entries never expire.
///
/// Every call hands out the same process-wide instance.
pub fn eternal<K, V>() -> Arc<dyn ExpirePolicy<K, V>> {
    debug!("using eternal policy");
    EternalPolicy::shared()
}

/// Returns a policy that never reports a negative duration to the cache.
pub fn bounded<K, V>(delegate: Arc<dyn ExpirePolicy<K, V>>) -> Arc<dyn ExpirePolicy<K, V>>
where
    K: 'static,
    V: 'static,
{
    Arc::new(BoundedPolicy::new(delegate))
}

/// Same as [`bounded`], but fails when no delegate is given.
pub fn try_bounded<K, V>(
    delegate: Option<Arc<dyn ExpirePolicy<K, V>>>,
) -> Result<Arc<dyn ExpirePolicy<K, V>>>
where
    K: 'static,
    V: 'static,
{
    match delegate {
        Some(delegate) => Ok(bounded(delegate)),
        None => {
            debug!("bounded policy requested without a delegate");
            Err(Error::MissingDelegate)
        }
    }
}
