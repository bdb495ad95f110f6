//! Variable expiration policies for in-memory caches.
//!
//! A cache asks its [`ExpirePolicy`] how long every entry should live. The policy is consulted
//! when an entry is created, updated and read, so the time to live may depend on the entry
//! itself and may be extended or shortened over its lifetime.
//!
//! Provided policies.
//! - [`EternalPolicy`] : Entries never expire. Default policy.
//! - [`BoundedPolicy`] : Wraps another policy and clamps negative durations to zero.
//! - [`TTLPolicy`] : Time To Live policy.
//! - [`TTIPolicy`] : Time To Idle policy.
//! - [`FnPolicy`] : Durations computed by a closure.
//!
//! # Examples
//! ```
//! use std::sync::Arc;
//!
//! use endorphin_expiry::policy::{self, ExpirePolicy, FnPolicy};
//! use endorphin_expiry::Deadline;
//!
//! // sessions of admins live ten times longer.
//! let sessions: Arc<dyn ExpirePolicy<&str, u64>> =
//!     Arc::new(FnPolicy::writing(|user: &&str, _: &u64| {
//!         if *user == "admin" { 10_000 } else { 1_000 }
//!     }));
//! let policy = policy::bounded(sessions);
//!
//! let admin = Deadline::on_create(&*policy, &"admin", &1, 0);
//! let guest = Deadline::on_create(&*policy, &"guest", &2, 0);
//!
//! assert!(!admin.is_expired(5_000));
//! assert!(guest.is_expired(5_000));
//! ```
//!
//! [`ExpirePolicy`]: policy::ExpirePolicy
//! [`EternalPolicy`]: policy::EternalPolicy
//! [`BoundedPolicy`]: policy::BoundedPolicy
//! [`TTLPolicy`]: policy::TTLPolicy
//! [`TTIPolicy`]: policy::TTIPolicy
//! [`FnPolicy`]: policy::FnPolicy

/// Expiration policies including the contract every policy implements.
pub mod policy;

mod config;
mod deadline;
mod error;

pub use crate::config::ExpiryConfig;
pub use crate::deadline::{now_nanos, Deadline};
pub use crate::error::{Error, Result};
