#![forbid(unsafe_code)]

//! Scroll memory: the ambient scroll seam and the cross-mount cache.
//!
//! Each view instance keeps a map from panel id to the panel's last vertical
//! scroll offset. Entries are written when a panel becomes inactive, read
//! when it becomes active again, and removed when a panel finishes leaving
//! backward. [`ScrollCache`] makes that map survive full view remounts: it
//! is owned by the application root (not a module-level global) and handed
//! to each view at construction and teardown, keyed by the view's id.
//!
//! # Invariants
//! 1. Cached offsets are non-negative; negative writes clamp to zero.
//! 2. `seed` never creates a cache entry; only `store` does.
//! 3. A view without an id neither reads nor writes the cache.

use ahash::AHashMap;

/// Panel id → last-known vertical scroll offset, in px.
pub type ScrollMap = AHashMap<String, f32>;

/// Accessor for the ambient scrollable viewport.
pub trait ScrollPort {
    /// Current vertical scroll offset, in px.
    fn get_scroll(&self) -> f32;
    /// Scroll the viewport to the given position.
    fn scroll_to(&mut self, x: f32, y: f32);
}

/// Process-level scroll cache, keyed by view id.
///
/// Owned by the application root with an explicit lifecycle: starts empty,
/// is seeded from on view mount, and written back on view unmount. The
/// entry for a view persists after its unmount.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCache {
    views: AHashMap<String, ScrollMap>,
}

impl ScrollCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll map to seed a freshly mounted view with.
    ///
    /// Empty when the view has no id or the cache has no entry for it.
    #[must_use]
    pub fn seed(&self, view_id: Option<&str>) -> ScrollMap {
        view_id
            .and_then(|id| self.views.get(id))
            .cloned()
            .unwrap_or_default()
    }

    /// Flush a view's scroll map back into the cache on unmount.
    pub fn store(&mut self, view_id: &str, scrolls: ScrollMap) {
        let clamped = scrolls
            .into_iter()
            .map(|(panel, y)| (panel, y.max(0.0)))
            .collect();
        self.views.insert(view_id.to_owned(), clamped);
    }

    /// Cached offset for one panel of one view, if any.
    #[must_use]
    pub fn get(&self, view_id: &str, panel: &str) -> Option<f32> {
        self.views.get(view_id).and_then(|m| m.get(panel)).copied()
    }

    /// Number of views with a cached scroll map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
