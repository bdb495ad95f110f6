use crate::policy::ExpirePolicy;

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

/// Wraps a policy and clamps every negative duration it returns to zero.
///
/// Clamping is idempotent, so wrapping an already bounded policy changes nothing. Overflowing
/// durations are passed through untouched.
///
/// A bounded policy serializes as its delegate so the bound is not stacked up again after
/// the configuration is reloaded and rewrapped.
#[derive(Debug, Clone)]
pub struct BoundedPolicy<P> {
    delegate: P,
}

impl<P> BoundedPolicy<P> {
    /// Wraps `delegate`.
    pub fn new(delegate: P) -> Self {
        debug!(delegate = std::any::type_name::<P>(), "creating bounded policy");
        Self { delegate }
    }

    /// Policy whose results are clamped.
    pub fn delegate(&self) -> &P {
        &self.delegate
    }

    /// Unwraps the bound. This is the form that should be persisted.
    pub fn into_delegate(self) -> P {
        self.delegate
    }
}

#[inline]
fn clamp(duration: i64, hook: &'static str) -> i64 {
    if duration < 0 {
        trace!(duration, hook, "clamping negative duration");
        0
    } else {
        duration
    }
}

impl<K, V, P> ExpirePolicy<K, V> for BoundedPolicy<P>
where
    P: ExpirePolicy<K, V>,
{
    #[inline]
    fn on_create(&self, key: &K, value: &V, current_time: i64) -> i64 {
        clamp(self.delegate.on_create(key, value, current_time), "create")
    }

    #[inline]
    fn on_update(&self, key: &K, value: &V, current_time: i64, current_duration: i64) -> i64 {
        clamp(
            self.delegate
                .on_update(key, value, current_time, current_duration),
            "update",
        )
    }

    // reads go to the delegate's read hook. routing them through `on_update` would break
    // sliding expiration of the delegate.
    #[inline]
    fn on_read(&self, key: &K, value: &V, current_time: i64, current_duration: i64) -> i64 {
        clamp(
            self.delegate
                .on_read(key, value, current_time, current_duration),
            "read",
        )
    }
}

impl<P> Serialize for BoundedPolicy<P>
where
    P: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.delegate.serialize(serializer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::policy::{TTLPolicy, ETERNAL_DURATION};

    use std::time::Duration;

    use parking_lot::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Hook {
        Create,
        Update,
        Read,
    }

    // answers with fixed values per hook and records every call it sees.
    struct Recorder {
        create: i64,
        update: i64,
        read: i64,
        calls: Mutex<Vec<(Hook, u32, i64, Option<i64>)>>,
    }

    impl Recorder {
        fn new(create: i64, update: i64, read: i64) -> Self {
            Self {
                create,
                update,
                read,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl<V> ExpirePolicy<u32, V> for Recorder {
        fn on_create(&self, key: &u32, _: &V, current_time: i64) -> i64 {
            self.calls
                .lock()
                .push((Hook::Create, *key, current_time, None));
            self.create
        }

        fn on_update(&self, key: &u32, _: &V, current_time: i64, current_duration: i64) -> i64 {
            self.calls
                .lock()
                .push((Hook::Update, *key, current_time, Some(current_duration)));
            self.update
        }

        fn on_read(&self, key: &u32, _: &V, current_time: i64, current_duration: i64) -> i64 {
            self.calls
                .lock()
                .push((Hook::Read, *key, current_time, Some(current_duration)));
            self.read
        }
    }

    #[test]
    fn test_negative_create_is_clamped() {
        let policy = BoundedPolicy::new(Recorder::new(-5, 0, 0));
        assert_eq!(policy.on_create(&1u32, &"v", 10), 0);
    }

    #[test]
    fn test_positive_update_passes_through() {
        let policy = BoundedPolicy::new(Recorder::new(0, 100, 0));
        assert_eq!(policy.on_update(&1u32, &"v", 10, 50), 100);
        assert_eq!(
            *policy.delegate().calls.lock(),
            vec![(Hook::Update, 1, 10, Some(50))]
        );
    }

    #[test]
    fn test_read_uses_delegate_read_hook() {
        let policy = BoundedPolicy::new(Recorder::new(0, 30, 999));
        assert_eq!(policy.on_read(&7u32, &"v", 20, 5), 999);
        assert_eq!(
            *policy.delegate().calls.lock(),
            vec![(Hook::Read, 7, 20, Some(5))]
        );
    }

    #[test]
    fn test_max_of_zero_law() {
        for &d in &[i64::MIN, -1_000, -1, 0, 1, 1_000, ETERNAL_DURATION] {
            let policy = BoundedPolicy::new(Recorder::new(d, d, d));
            assert_eq!(policy.on_create(&1u32, &(), 0), d.max(0));
            assert_eq!(policy.on_update(&1u32, &(), 0, 1), d.max(0));
            assert_eq!(policy.on_read(&1u32, &(), 0, 1), d.max(0));
        }
    }

    #[test]
    fn test_idempotent() {
        for &d in &[i64::MIN, -3, 0, 3, ETERNAL_DURATION] {
            let once = BoundedPolicy::new(Recorder::new(d, d - d / 2, d / 3));
            let twice = BoundedPolicy::new(BoundedPolicy::new(Recorder::new(d, d - d / 2, d / 3)));

            for &now in &[0, 17, i64::MAX] {
                assert_eq!(once.on_create(&1u32, &(), now), twice.on_create(&1u32, &(), now));
                assert_eq!(
                    once.on_update(&1u32, &(), now, 4),
                    twice.on_update(&1u32, &(), now, 4)
                );
                assert_eq!(once.on_read(&1u32, &(), now, 4), twice.on_read(&1u32, &(), now, 4));
            }
        }
    }

    #[test]
    fn test_serializes_as_delegate() {
        let ttl = TTLPolicy::new(Duration::from_millis(250));
        let bounded = BoundedPolicy::new(ttl);

        assert_eq!(
            serde_json::to_value(&bounded).unwrap(),
            serde_json::to_value(&ttl).unwrap()
        );
        assert_eq!(
            serde_json::to_value(BoundedPolicy::new(bounded)).unwrap(),
            serde_json::to_value(&ttl).unwrap()
        );
    }

    #[test]
    fn test_into_delegate() {
        let ttl = TTLPolicy::new(Duration::from_secs(1));
        assert_eq!(BoundedPolicy::new(ttl).into_delegate(), ttl);
    }
}
