//! Scroll-cache serialization (feature `state-persistence`).

use paneflow::{ScrollCache, ScrollMap};

#[test]
fn scroll_cache_survives_json_round_trip() {
    let mut cache = ScrollCache::new();
    let mut scrolls = ScrollMap::default();
    scrolls.insert("main".to_owned(), 340.5);
    scrolls.insert("detail".to_owned(), 0.0);
    cache.store("feed", scrolls);

    let json = serde_json::to_string(&cache).expect("serialize");
    let restored: ScrollCache = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.get("feed", "main"), Some(340.5));
    assert_eq!(restored.get("feed", "detail"), Some(0.0));
    assert_eq!(restored.len(), 1);
}

#[test]
fn empty_cache_round_trips() {
    let cache = ScrollCache::new();
    let json = serde_json::to_string(&cache).expect("serialize");
    let restored: ScrollCache = serde_json::from_str(&json).expect("deserialize");
    assert!(restored.is_empty());
}
