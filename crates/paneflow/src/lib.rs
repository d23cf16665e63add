#![forbid(unsafe_code)]

//! Paneflow: a navigation container for mobile-style UIs.
//!
//! # Role
//! [`NavView`] owns a stack of panels, animates transitions between the
//! active panel and a target panel, and supports an interactive edge-swipe
//! back gesture mirroring native mobile navigation. Rendering, layout, touch
//! normalization, and portal hosting stay outside: the view consumes them
//! through narrow traits ([`ScrollPort`], [`ViewportPort`], [`PanelNode`])
//! and exposes its decisions as queryable data
//! ([`NavView::placement`], [`NavView::swipe_style`]).
//!
//! # Primary responsibilities
//! - **Transition state machine**: which panels are mounted, which is
//!   entering/leaving, whether an animation is in flight.
//! - **Gesture tracker**: classifies horizontal drags into swipe-back,
//!   browser takeover, or nothing, and tracks shift/velocity.
//! - **Scroll memory**: per-panel scroll offsets, restored when a panel
//!   becomes active again, surviving view remounts via [`ScrollCache`].
//! - **Completion detection**: "wait until the CSS animation/transition
//!   finishes", with a timeout fallback and an instant path when motion is
//!   disabled.
//!
//! # How it fits in a host
//! The host delivers prop changes (`set_active_panel`), normalized touch
//! events (`on_move` / `on_end`), native completion signals
//! (`deliver_animation_end` / `deliver_transition_end`), and a periodic
//! `tick` for timeout fallbacks. Everything is synchronous and
//! single-threaded; there is no internal concurrency.

pub mod completion;
pub mod gesture;
pub mod observer;
pub mod platform;
pub mod registry;
pub mod scroll;
pub mod touch;
pub mod view;

pub use completion::{CompletionDetector, Fired, SignalKind};
pub use gesture::{ReleaseVerdict, SwipeBackResult, clamp_shift, evaluate_release};
pub use observer::{TransitionDetail, ViewObserver};
pub use platform::{Platform, SwipeConfig, ViewConfig};
pub use registry::{PanelNode, PanelRegistry};
pub use scroll::{ScrollCache, ScrollMap, ScrollPort};
pub use touch::{TargetKind, TouchMove};
pub use view::{
    NavView, PanelPlacement, PanelSwipeStyle, TransitionInfo, ViewCallbacks, ViewProps,
    ViewportPort,
};
