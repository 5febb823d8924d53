use super::*;

#[test]
fn epochs_start_at_zero() {
    let cache = QueryCache::default();
    assert_eq!(cache.epoch(QueryKey::Voyages), 0);
    assert_eq!(cache.epoch(QueryKey::Vessels), 0);
    assert_eq!(cache.epoch(QueryKey::UnitTypes), 0);
}

#[test]
fn invalidate_bumps_epoch_once_per_call() {
    let mut cache = QueryCache::default();
    cache.invalidate(QueryKey::Voyages);
    assert_eq!(cache.epoch(QueryKey::Voyages), 1);
    cache.invalidate(QueryKey::Voyages);
    assert_eq!(cache.epoch(QueryKey::Voyages), 2);
}

#[test]
fn keys_are_independent() {
    let mut cache = QueryCache::default();
    cache.invalidate(QueryKey::Voyages);
    assert_eq!(cache.epoch(QueryKey::Vessels), 0);
    assert_eq!(cache.epoch(QueryKey::UnitTypes), 0);
}

#[test]
fn key_names_match_backend_resources() {
    assert_eq!(QueryKey::Voyages.as_str(), "voyages");
    assert_eq!(QueryKey::Vessels.as_str(), "vessels");
    assert_eq!(QueryKey::UnitTypes.as_str(), "unitTypes");
}
