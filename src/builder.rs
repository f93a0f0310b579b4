//! Group builder for configuration and listener registration up front.

use crate::config::GroupConfig;
use crate::error::{GeogridError, Result};
use crate::group::{GeohashGroup, GeohashGroupListener};

/// Builder for a [`GeohashGroup`] with a validated configuration and
/// pre-registered listeners.
///
/// ```rust
/// use geogrid::GroupBuilder;
///
/// let mut group = GroupBuilder::new()
///     .geohash_precision(6)
///     .on_change(|_, old, new| println!("{:?} -> {}", old, new))
///     .build()?;
///
/// assert_eq!(group.precision(), 6);
/// assert_eq!(group.listener_count(), 1);
/// group.update_location(30.0, 120.0)?;
/// # Ok::<(), geogrid::GeogridError>(())
/// ```
#[derive(Default)]
pub struct GroupBuilder {
    config: GroupConfig,
    listeners: Vec<Box<dyn GeohashGroupListener>>,
}

impl GroupBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group configuration.
    pub fn config(mut self, config: GroupConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the geohash precision from the configuration.
    pub fn geohash_precision(mut self, precision: usize) -> Self {
        self.config.geohash_precision = precision;
        self
    }

    pub fn listener<L>(mut self, listener: L) -> Self
    where
        L: GeohashGroupListener + 'static,
    {
        self.listeners.push(Box::new(listener));
        self
    }

    pub fn on_change<F>(self, callback: F) -> Self
    where
        F: Fn(&GeohashGroup, Option<&str>, &str) + Send + Sync + 'static,
    {
        self.listener(callback)
    }

    /// Validate the configuration and build the group.
    pub fn build(self) -> Result<GeohashGroup> {
        self.config.validate().map_err(GeogridError::InvalidConfig)?;

        let mut group = GeohashGroup::from_config(&self.config)?;
        for listener in self.listeners {
            group.add_boxed_listener(listener);
        }
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_default_build() {
        let group = GroupBuilder::new().build().unwrap();
        assert_eq!(group.precision(), 7);
        assert_eq!(group.listener_count(), 0);
    }

    #[test]
    fn test_config_and_override() {
        let config = GroupConfig::default().with_geohash_precision(9);
        let group = GroupBuilder::new().config(config.clone()).build().unwrap();
        assert_eq!(group.precision(), 9);

        let group = GroupBuilder::new()
            .config(config)
            .geohash_precision(3)
            .build()
            .unwrap();
        assert_eq!(group.precision(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = GroupBuilder::new().geohash_precision(0).build().unwrap_err();
        assert!(matches!(err, GeogridError::InvalidConfig(_)));
    }

    #[test]
    fn test_listeners_registered() {
        let hits = Arc::new(AtomicUsize::new(0));
        let a = Arc::clone(&hits);
        let b = Arc::clone(&hits);

        let mut group = GroupBuilder::new()
            .on_change(move |_, _, _| {
                a.fetch_add(1, Ordering::SeqCst);
            })
            .on_change(move |_, _, _| {
                b.fetch_add(10, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        group.update_location(30.0, 120.0).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 11);
    }
}
