//! Thread-safe wrapper for sharing a geohash group between threads.
//!
//! `GeohashGroup` leaves locking to the caller. `SyncGeohashGroup` is that
//! locking: an `Arc<RwLock<GeohashGroup>>` that can be cloned into worker
//! threads.
//!
//! # Features
//!
//! Enable the `sync` feature to use this module:
//!
//! ```toml
//! [dependencies]
//! geogrid = { version = "0.1", features = ["sync"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use geogrid::SyncGeohashGroup;
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let group = SyncGeohashGroup::new();
//! let writer = group.clone();
//!
//! let handle = thread::spawn(move || writer.update_location(30.0, 120.0).unwrap());
//! assert!(handle.join().unwrap());
//!
//! assert_eq!(group.adjacent_geohashes().len(), 8);
//! # Ok(())
//! # }
//! ```

use super::{GeohashGroup, GeohashGroupListener, ListenerId};
use crate::config::GroupConfig;
use crate::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe wrapper around `GeohashGroup` using `Arc<RwLock<GeohashGroup>>`.
///
/// Reads (`center_geohash`, `has_geohash`, ...) proceed concurrently; updates
/// take the write lock, so the center and its neighbors are always observed
/// as a matching pair.
///
/// Listeners run while the write lock is held. They receive the group
/// directly and must not call back into the `SyncGeohashGroup`, which would
/// deadlock.
#[derive(Clone, Default)]
pub struct SyncGeohashGroup {
    inner: Arc<RwLock<GeohashGroup>>,
}

impl SyncGeohashGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing group.
    pub fn from_group(group: GeohashGroup) -> Self {
        Self {
            inner: Arc::new(RwLock::new(group)),
        }
    }

    pub fn with_precision(precision: usize) -> Result<Self> {
        Ok(Self::from_group(GeohashGroup::with_precision(precision)?))
    }

    pub fn from_config(config: &GroupConfig) -> Result<Self> {
        Ok(Self::from_group(GeohashGroup::from_config(config)?))
    }

    pub fn update_location(&self, lat: f64, lng: f64) -> Result<bool> {
        self.inner.write().update_location(lat, lng)
    }

    pub fn center_geohash(&self) -> Option<String> {
        self.inner.read().center_geohash().map(str::to_string)
    }

    pub fn adjacent_geohashes(&self) -> Vec<String> {
        self.inner.read().adjacent_geohashes().to_vec()
    }

    pub fn all_geohashes(&self) -> Vec<String> {
        self.inner.read().all_geohashes()
    }

    pub fn has_geohash(&self, geohash: &str) -> bool {
        self.inner.read().has_geohash(geohash)
    }

    pub fn precision(&self) -> usize {
        self.inner.read().precision()
    }

    pub fn set_precision(&self, precision: usize) -> Result<()> {
        self.inner.write().set_precision(precision)
    }

    pub fn add_listener<L>(&self, listener: L) -> ListenerId
    where
        L: GeohashGroupListener + 'static,
    {
        self.inner.write().add_listener(listener)
    }

    pub fn on_change<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(&GeohashGroup, Option<&str>, &str) + Send + Sync + 'static,
    {
        self.inner.write().on_change(callback)
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.write().remove_listener(id)
    }

    /// Run a closure with shared access to the group.
    pub fn read<R>(&self, f: impl FnOnce(&GeohashGroup) -> R) -> R {
        f(&self.inner.read())
    }
}
