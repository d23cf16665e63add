#![forbid(unsafe_code)]

//! Platform tag and injected view configuration.
//!
//! The view is constructed with one [`ViewConfig`] resolved by the
//! composition root instead of reading ambient context: platform tag,
//! motion flags, embedding, and native completion-event capabilities all
//! arrive through it. Gesture thresholds and fallback timeouts live in
//! [`SwipeConfig`]; the defaults are field-tuned heuristics and are
//! deliberately not re-derived.

use web_time::Duration;

/// Host platform the view is rendered on.
///
/// Only `Ios` has an interactive swipe-back; `Android` and `Desktop` use the
/// shorter completion-timeout fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
    Desktop,
}

/// Injected configuration for a [`NavView`](crate::NavView).
///
/// Resolved once by the owning composition root and passed in at
/// construction.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Host platform tag.
    pub platform: Platform,
    /// Whether transition motion is enabled at all. When false, prop-driven
    /// transitions complete synchronously.
    pub transition_motion_enabled: bool,
    /// Whether the host is an embedded WebView. Swipe-back is only eligible
    /// in embedded contexts; outside them iOS edge drags yield to the
    /// browser's native gesture.
    pub is_webview: bool,
    /// Split-layout animate flag. A non-animating split column disables
    /// transition motion the same way `transition_motion_enabled` does.
    pub split_animate: bool,
    /// Whether the runtime delivers native animation-end signals.
    pub animation_end_supported: bool,
    /// Whether the runtime delivers native transition-end signals.
    pub transition_end_supported: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Android,
            transition_motion_enabled: true,
            is_webview: false,
            split_animate: true,
            animation_end_supported: true,
            transition_end_supported: true,
        }
    }
}

/// Thresholds and timeouts for the swipe-back gesture and completion
/// fallbacks.
#[derive(Debug, Clone)]
pub struct SwipeConfig {
    /// Width of the screen-edge band that can start a swipe-back or a
    /// browser takeover (default: 70px).
    pub edge_width_px: f32,
    /// Release velocity above which a partial swipe commits
    /// (default: 250px/s).
    pub commit_velocity_px_s: f32,
    /// Completion-timeout fallback on Android and Desktop (default: 300ms).
    pub timeout_fast: Duration,
    /// Completion-timeout fallback elsewhere (default: 600ms).
    pub timeout_slow: Duration,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            edge_width_px: 70.0,
            commit_velocity_px_s: 250.0,
            timeout_fast: Duration::from_millis(300),
            timeout_slow: Duration::from_millis(600),
        }
    }
}

impl SwipeConfig {
    /// Fallback timeout to use when a native completion signal is
    /// unsupported on `platform`.
    #[must_use]
    pub fn fallback_timeout(&self, platform: Platform) -> Duration {
        match platform {
            Platform::Android | Platform::Desktop => self.timeout_fast,
            Platform::Ios => self.timeout_slow,
        }
    }
}
