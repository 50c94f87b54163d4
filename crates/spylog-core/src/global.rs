//! Process-wide configuration handle
//!
//! Applications that can pass a [`SpyLogConfig`] around should build one with
//! [`SpyLogConfig::load`] and keep it. This module serves callers that need
//! the configuration from anywhere in the process, such as spy objects
//! created by a driver manager.
//!
//! The configuration is resolved lazily on first access and cached. Readers
//! get an `Arc` snapshot, so they never see a partially built value. [`init`]
//! resolves again and replaces the cached value wholesale; the override
//! setters only take effect on the next resolution.
//!
//! # Testing
//!
//! The handle and the environment it reads are shared by every test in the
//! binary. Tests that use it must be `#[serial]` and should call [`init`]
//! after adjusting their inputs:
//!
//! ```ignore
//! #[test]
//! #[serial]
//! fn test_delegator_from_override() {
//!     spylog_core::global::set_override("log4jdbc.spylogdelegator.name", "x.Y");
//!     spylog_core::global::init();
//!     assert_eq!(spylog_core::global::spy_log_delegator_name(), "x.Y");
//!     spylog_core::global::clear_overrides();
//!     spylog_core::global::init();
//! }
//! ```

use crate::config::{ConfigOverrides, Resolver, SpyLogConfig};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::debug;

static CURRENT: RwLock<Option<Arc<SpyLogConfig>>> = RwLock::new(None);

static OVERRIDES: RwLock<ConfigOverrides> = RwLock::new(ConfigOverrides::new());

/// Serializes [`init`] so publishes happen in resolution order
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Current configuration, resolving it on first access.
///
/// Concurrent first callers block on the same initialisation and all observe
/// the same value.
pub fn current() -> Arc<SpyLogConfig> {
    if let Some(config) = CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
    {
        return Arc::clone(config);
    }

    let mut slot = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have finished while we waited for the write lock
    if let Some(config) = slot.as_ref() {
        return Arc::clone(config);
    }
    debug!("Resolving configuration on first access");
    let config = Arc::new(resolve());
    *slot = Some(Arc::clone(&config));
    config
}

/// Name of the spy log delegator. Never empty.
pub fn spy_log_delegator_name() -> String {
    current().spy_log_delegator_name.clone()
}

/// Resolve the configuration again, discarding the cached value.
///
/// Concurrent calls run one at a time, so the last call to finish publishes
/// the value it resolved and a stale resolution never replaces a newer one.
/// Readers are not blocked while resolving; they keep seeing the previous
/// value until the new one is published.
pub fn init() -> Arc<SpyLogConfig> {
    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let config = Arc::new(resolve());
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&config));
    debug!("Configuration reinitialised");
    config
}

/// Set a direct override, consulted before every other source from the next
/// resolution on.
pub fn set_override(key: &str, value: impl Into<String>) {
    OVERRIDES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set(key, value);
}

/// Remove one direct override
pub fn clear_override(key: &str) {
    OVERRIDES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(key);
}

/// Remove every direct override
pub fn clear_overrides() {
    OVERRIDES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

fn resolve() -> SpyLogConfig {
    let overrides = OVERRIDES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    Resolver::from_process().with_overrides(overrides).resolve()
}
