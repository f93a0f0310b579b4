use geogrid::{
    Coordinate, GeohashGroup, GeohashGroupListener, GroupBuilder, GroupConfig, Point, encode,
};
use parking_lot::Mutex;
use std::sync::Arc;

type Events = Arc<Mutex<Vec<(Option<String>, String, usize)>>>;

struct Recorder {
    events: Events,
}

impl Recorder {
    fn new() -> (Self, Events) {
        let events = Events::default();
        (
            Self {
                events: Arc::clone(&events),
            },
            events,
        )
    }
}

impl GeohashGroupListener for Recorder {
    fn on_geohash_changed(&self, group: &GeohashGroup, old: Option<&str>, new: &str) {
        self.events.lock().push((
            old.map(str::to_string),
            new.to_string(),
            group.adjacent_geohashes().len(),
        ));
    }
}

#[test]
fn test_concrete_group_scenario() {
    let mut group = GeohashGroup::new();
    assert_eq!(group.precision(), 7);
    assert!(group.update_location(30.0, 120.0).unwrap());

    let center = group.center_geohash().unwrap();
    assert!(!center.is_empty());

    let adjacent = group.adjacent_geohashes();
    assert_eq!(adjacent.len(), 8);
    for (i, a) in adjacent.iter().enumerate() {
        assert_ne!(a, center);
        for b in &adjacent[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_noop_fires_no_notification() {
    let (recorder, events) = Recorder::new();
    let mut group = GeohashGroup::new();
    group.add_listener(recorder);

    assert!(group.update_location(30.0, 120.0).unwrap());
    // A few meters away, same 153m cell
    assert!(!group.update_location(30.00001, 120.00001).unwrap());

    let events = events.lock();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, None);
    assert_eq!(events[0].1, encode(30.0, 120.0, 7).unwrap());
    assert_eq!(events[0].2, 8);
}

#[test]
fn test_walk_keeps_grid_invariants() {
    let (recorder, events) = Recorder::new();
    let mut group = GroupBuilder::new()
        .geohash_precision(6)
        .listener(recorder)
        .build()
        .unwrap();

    // Walk north from Hangzhou in ~100m steps
    let mut changes = 0;
    for step in 0..200 {
        let lat = 30.0 + step as f64 * 0.001;
        if group.update_location(lat, 120.0).unwrap() {
            changes += 1;
        }
        let center = group.center_geohash().unwrap().to_string();
        assert_eq!(group.adjacent_geohashes().len(), 8);
        assert!(group.has_geohash(&center));
        assert_eq!(group.all_geohashes().len(), 9);
        assert_eq!(center, encode(lat, 120.0, 6).unwrap());
    }

    let events = events.lock();
    assert_eq!(events.len(), changes);
    assert!(changes > 1);

    // Each change reports the previous center as the old value
    for pair in events.windows(2) {
        assert_eq!(pair[1].0.as_deref(), Some(pair[0].1.as_str()));
    }
}

#[test]
fn test_moving_to_neighbor_keeps_overlap() {
    let mut group = GeohashGroup::new();
    group.update_location(30.0, 120.0).unwrap();
    let old_center = group.center_geohash().unwrap().to_string();
    let old_all = group.all_geohashes();

    let top = group.adjacent_geohashes()[1].clone();
    let (center, _, _) = geogrid::decode_center(&top).unwrap();
    assert!(group.update_coordinate(center).unwrap());

    assert_eq!(group.center_geohash(), Some(top.as_str()));
    assert!(group.has_geohash(&old_center));
    let shared = old_all.iter().filter(|h| group.has_geohash(h)).count();
    assert_eq!(shared, 6);
}

#[test]
fn test_group_from_config() {
    let config = GroupConfig::from_json(r#"{ "geohash_precision": 4 }"#).unwrap();
    let mut group = GeohashGroup::from_config(&config).unwrap();
    group
        .update_coordinate(Coordinate::new(-33.8688, 151.2093))
        .unwrap();
    assert_eq!(group.center_geohash().unwrap().len(), 4);

    // The same place as a geo point lands in the same cell
    assert!(!group.update_coordinate(Point::new(151.2093, -33.8688)).unwrap());
}
