use crate::policy::ExpirePolicy;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refresh {
    // computed on create only.
    Creating,
    // computed on create and update.
    Writing,
    // computed on every hook.
    Accessing,
}

/// A policy backed by a closure computing the duration from the entry.
///
/// Hooks the closure isn't consulted for echo the current duration back.
///
/// # Examples
/// ```
/// use endorphin_expiry::policy::{ExpirePolicy, FnPolicy};
///
/// // entries with longer values live longer.
/// let policy = FnPolicy::writing(|_: &u32, v: &String| v.len() as i64 * 1_000);
///
/// assert_eq!(policy.on_create(&1, &"abc".to_string(), 0), 3_000);
/// assert_eq!(policy.on_read(&1, &"abc".to_string(), 0, 500), 500);
/// ```
#[derive(Clone)]
pub struct FnPolicy<F> {
    f: F,
    refresh: Refresh,
}

impl<F> FnPolicy<F> {
    /// Entries expire after the computed duration since creation.
    pub fn creating(f: F) -> Self {
        Self {
            f,
            refresh: Refresh::Creating,
        }
    }

    /// Entries expire after the computed duration since creation or the last update.
    pub fn writing(f: F) -> Self {
        Self {
            f,
            refresh: Refresh::Writing,
        }
    }

    /// Entries expire after the computed duration since they were last created, updated or read.
    pub fn accessing(f: F) -> Self {
        Self {
            f,
            refresh: Refresh::Accessing,
        }
    }
}

impl<F> fmt::Debug for FnPolicy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPolicy")
            .field("refresh", &self.refresh)
            .finish()
    }
}

impl<K, V, F> ExpirePolicy<K, V> for FnPolicy<F>
where
    F: Fn(&K, &V) -> i64 + Send + Sync,
{
    #[inline]
    fn on_create(&self, key: &K, value: &V, _: i64) -> i64 {
        (self.f)(key, value)
    }

    #[inline]
    fn on_update(&self, key: &K, value: &V, _: i64, current_duration: i64) -> i64 {
        match self.refresh {
            Refresh::Creating => current_duration,
            Refresh::Writing | Refresh::Accessing => (self.f)(key, value),
        }
    }

    #[inline]
    fn on_read(&self, key: &K, value: &V, _: i64, current_duration: i64) -> i64 {
        match self.refresh {
            Refresh::Creating | Refresh::Writing => current_duration,
            Refresh::Accessing => (self.f)(key, value),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn by_key(k: &i64, _: &()) -> i64 {
        *k * 10
    }

    #[test]
    fn test_creating() {
        let policy = FnPolicy::creating(by_key);
        assert_eq!(policy.on_create(&3, &(), 0), 30);
        assert_eq!(policy.on_update(&3, &(), 0, 7), 7);
        assert_eq!(policy.on_read(&3, &(), 0, 7), 7);
    }

    #[test]
    fn test_writing() {
        let policy = FnPolicy::writing(by_key);
        assert_eq!(policy.on_create(&3, &(), 0), 30);
        assert_eq!(policy.on_update(&4, &(), 0, 7), 40);
        assert_eq!(policy.on_read(&4, &(), 0, 7), 7);
    }

    #[test]
    fn test_accessing() {
        let policy = FnPolicy::accessing(by_key);
        assert_eq!(policy.on_create(&3, &(), 0), 30);
        assert_eq!(policy.on_update(&4, &(), 0, 7), 40);
        assert_eq!(policy.on_read(&5, &(), 0, 7), 50);
    }

    #[test]
    fn test_closure_may_go_negative() {
        let policy = FnPolicy::creating(|k: &i64, _: &()| -*k);
        assert_eq!(policy.on_create(&9, &(), 0), -9);
    }
}
