#![forbid(unsafe_code)]

//! Transition notifications.
//!
//! Cross-cutting consumers (headers, tab bars, anything that reacts to "some
//! view is transitioning") subscribe to the view directly instead of
//! listening for document-level events. The start notification carries the
//! full detail; the end notification carries nothing.
//!
//! Ordering: `transition_started` always precedes the corresponding
//! completion wait being armed; `transition_ended` always precedes the
//! owner-facing callback for that transition.

use crate::scroll::ScrollMap;

/// Payload of a transition-start notification.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDetail {
    /// Leaving panel.
    pub from: String,
    /// Entering panel.
    pub to: String,
    /// Direction flag; `None` for swipe-back starts, whose direction is
    /// decided only on release.
    pub is_back: Option<bool>,
    /// Snapshot of the view's scroll map at notification time.
    pub scrolls: ScrollMap,
}

/// Observer of a view's transition lifecycle.
pub trait ViewObserver {
    /// A prop-driven transition or a swipe-back drag has started.
    fn transition_started(&mut self, _detail: &TransitionDetail) {}

    /// A transition, settle, or cancel has finished.
    fn transition_ended(&mut self) {}
}
