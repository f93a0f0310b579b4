//! A 3x3 neighborhood of geohash cells that follows a moving point.
//!
//! [`GeohashGroup`] keeps the cell containing the last reported location
//! (the center) plus its eight neighbors. Feeding it a new location only
//! rebuilds the grid when the center cell actually changes, and every change
//! is reported synchronously to the registered listeners.
//!
//! ```text
//! 0 | 1 | 2
//! 3 | C | 4
//! 5 | 6 | 7
//! ```
//!
//! # Thread Safety
//!
//! `GeohashGroup` is not internally synchronized; `update_location` needs
//! `&mut self`. Share it across threads behind a lock, or use
//! `SyncGeohashGroup` (feature `sync`).

#[cfg(feature = "sync")]
pub mod sync;

use crate::compute::validation::validate_geohash;
use crate::config::GroupConfig;
use crate::error::{GeogridError, Result};
use crate::geohash::{self, Neighbors};
use geogrid_types::direction::Direction;
use geogrid_types::point::Coordinate;
use std::fmt;

/// Receives center-change notifications from a [`GeohashGroup`].
///
/// Listeners only observe: they get a shared reference to the group after
/// the new grid has been published. Listeners are stored inside the group,
/// so they must be `Send + Sync` for the group itself to be shareable behind
/// a lock. Any `Fn(&GeohashGroup, Option<&str>, &str)` closure is a listener.
pub trait GeohashGroupListener: Send + Sync {
    /// Called after the center moved from `old_geohash` (`None` on the first
    /// update) to `new_geohash`.
    fn on_geohash_changed(
        &self,
        group: &GeohashGroup,
        old_geohash: Option<&str>,
        new_geohash: &str,
    );
}

impl<F> GeohashGroupListener for F
where
    F: Fn(&GeohashGroup, Option<&str>, &str) + Send + Sync,
{
    fn on_geohash_changed(
        &self,
        group: &GeohashGroup,
        old_geohash: Option<&str>,
        new_geohash: &str,
    ) {
        self(group, old_geohash, new_geohash)
    }
}

/// Handle returned by listener registration, used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Center cell and its neighbors, always built together.
#[derive(Debug, Clone)]
struct Grid {
    center: String,
    neighbors: Neighbors,
}

/// Center geohash plus the eight surrounding cells at a fixed precision.
///
/// # Examples
///
/// ```rust
/// use geogrid::GeohashGroup;
///
/// let mut group = GeohashGroup::new();
/// assert!(group.update_location(30.0, 120.0)?);
///
/// // Same cell: nothing to do
/// assert!(!group.update_location(30.0, 120.0)?);
///
/// let center = group.center_geohash().unwrap().to_string();
/// assert_eq!(center.len(), 7);
/// assert_eq!(group.adjacent_geohashes().len(), 8);
/// assert!(group.has_geohash(&center));
/// # Ok::<(), geogrid::GeogridError>(())
/// ```
pub struct GeohashGroup {
    precision: usize,
    grid: Option<Grid>,
    listeners: Vec<(ListenerId, Box<dyn GeohashGroupListener>)>,
    next_listener_id: u64,
}

impl GeohashGroup {
    /// Create an empty group at the default precision (7).
    pub fn new() -> Self {
        Self {
            precision: geohash::DEFAULT_PRECISION,
            grid: None,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Create an empty group at the given precision.
    pub fn with_precision(precision: usize) -> Result<Self> {
        let mut group = Self::new();
        group.set_precision(precision)?;
        Ok(group)
    }

    /// Create an empty group from a configuration.
    pub fn from_config(config: &GroupConfig) -> Result<Self> {
        Self::with_precision(config.geohash_precision)
    }

    /// Report a new location.
    ///
    /// Returns `Ok(false)` when the location encodes to the current center,
    /// in which case nothing changes and no listener is called. Otherwise the
    /// center and all eight neighbors are replaced together, listeners are
    /// notified in registration order, and `Ok(true)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GeogridError::InvalidInput`](crate::GeogridError::InvalidInput)
    /// for coordinates outside the geographic domain; the group is left
    /// untouched.
    pub fn update_location(&mut self, lat: f64, lng: f64) -> Result<bool> {
        let center = self.to_geohash(lat, lng)?;
        if self.center_geohash() == Some(center.as_str()) {
            return Ok(false);
        }

        let grid = Grid {
            neighbors: geohash::neighbors(&center)?,
            center,
        };
        let old_center = self.grid.replace(grid).map(|old| old.center);

        log::debug!(
            "Geohash group center changed: {:?} -> {}",
            old_center,
            self.center_geohash().unwrap_or_default()
        );

        self.notify(old_center.as_deref());
        Ok(true)
    }

    /// Report a new location given as a [`Coordinate`] or `geo::Point`.
    pub fn update_coordinate(&mut self, coordinate: impl Into<Coordinate>) -> Result<bool> {
        let coordinate = coordinate.into();
        self.update_location(coordinate.lat(), coordinate.lng())
    }

    fn notify(&self, old_center: Option<&str>) {
        let Some(grid) = &self.grid else {
            return;
        };
        for (id, listener) in &self.listeners {
            log::trace!("Notifying listener {:?} of center {}", id, grid.center);
            listener.on_geohash_changed(self, old_center, &grid.center);
        }
    }

    /// The current center, or `None` before the first successful update.
    pub fn center_geohash(&self) -> Option<&str> {
        self.grid.as_ref().map(|grid| grid.center.as_str())
    }

    /// The eight neighbors in row-major order (top-left, top, top-right,
    /// left, right, bottom-left, bottom, bottom-right). Empty before the
    /// first successful update.
    pub fn adjacent_geohashes(&self) -> &[String] {
        match &self.grid {
            Some(grid) => grid.neighbors.as_slice(),
            None => &[],
        }
    }

    pub fn neighbors(&self) -> Option<&Neighbors> {
        self.grid.as_ref().map(|grid| &grid.neighbors)
    }

    /// The neighbors followed by the center (if set).
    pub fn all_geohashes(&self) -> Vec<String> {
        let mut all = self.adjacent_geohashes().to_vec();
        if let Some(center) = self.center_geohash() {
            all.push(center.to_string());
        }
        all
    }

    /// True if `geohash` is the center or one of its neighbors.
    ///
    /// Comparison is exact, so `geohash` must have the group's precision to
    /// ever match.
    pub fn has_geohash(&self, geohash: &str) -> bool {
        match &self.grid {
            Some(grid) => grid.center == geohash || grid.neighbors.contains(geohash),
            None => false,
        }
    }

    /// Geohash length used by the next `update_location`.
    #[doc(alias = "geohash_length")]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Change the geohash length used by subsequent updates.
    ///
    /// The current grid is not re-encoded: it keeps its old precision until
    /// the next `update_location`, which always rebuilds it because the new
    /// center has a different length.
    #[doc(alias = "set_geohash_length")]
    pub fn set_precision(&mut self, precision: usize) -> Result<()> {
        crate::compute::validation::validate_precision(precision)?;
        if precision != self.precision {
            log::debug!(
                "Geohash group precision changed: {} -> {}",
                self.precision,
                precision
            );
            if let Some(grid) = &self.grid {
                log::warn!(
                    "Grid around {} stays at precision {} until the next location update",
                    grid.center,
                    grid.center.len()
                );
            }
        }
        self.precision = precision;
        Ok(())
    }

    /// Encode a location at the group precision.
    pub fn to_geohash(&self, lat: f64, lng: f64) -> Result<String> {
        geohash::encode(lat, lng, self.precision)
    }

    /// Neighbor of `base` in `direction`, truncated to the group precision.
    ///
    /// The step is taken at the full precision of `base`, so for a `base`
    /// longer than the group precision the result is usually the cell that
    /// already encloses `base`.
    ///
    /// # Errors
    ///
    /// Returns [`GeogridError::MalformedHash`](crate::GeogridError::MalformedHash)
    /// for an invalid `base` and
    /// [`GeogridError::InvalidInput`](crate::GeogridError::InvalidInput) when
    /// `base` is shorter than the group precision.
    pub fn calculate_adjacent(&self, base: &str, direction: Direction) -> Result<String> {
        validate_geohash(base)?;
        if base.len() < self.precision {
            return Err(GeogridError::InvalidInput(format!(
                "Geohash '{}' is shorter than the group precision {}",
                base, self.precision
            )));
        }

        let mut next = geohash::adjacent(base, direction)?;
        next.truncate(self.precision);
        Ok(next)
    }

    /// Register a listener. Listeners are called in registration order.
    pub fn add_listener<L>(&mut self, listener: L) -> ListenerId
    where
        L: GeohashGroupListener + 'static,
    {
        self.add_boxed_listener(Box::new(listener))
    }

    /// Register a closure listener.
    ///
    /// ```rust
    /// use geogrid::GeohashGroup;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let changes = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&changes);
    ///
    /// let mut group = GeohashGroup::new();
    /// group.on_change(move |_, _, _| {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// });
    ///
    /// group.update_location(30.0, 120.0)?;
    /// group.update_location(30.0, 120.0)?;
    /// assert_eq!(changes.load(Ordering::SeqCst), 1);
    /// # Ok::<(), geogrid::GeogridError>(())
    /// ```
    pub fn on_change<F>(&mut self, callback: F) -> ListenerId
    where
        F: Fn(&GeohashGroup, Option<&str>, &str) + Send + Sync + 'static,
    {
        self.add_listener(callback)
    }

    pub(crate) fn add_boxed_listener(
        &mut self,
        listener: Box<dyn GeohashGroupListener>,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Unregister a listener. Returns false if `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for GeohashGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GeohashGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeohashGroup")
            .field("precision", &self.precision)
            .field("center", &self.center_geohash())
            .field("adjacent", &self.adjacent_geohashes())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
