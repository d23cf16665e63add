#![forbid(unsafe_code)]

//! Normalized horizontal touch input.
//!
//! The external touch primitive delivers one [`TouchMove`] per pointer move.
//! Release is signaled by calling [`NavView::on_end`](crate::NavView::on_end)
//! with the release timestamp.
//!
//! # Invariants
//! 1. `shift_x` is signed and relative to the drag start; the view clamps it
//!    before use, so callers may pass raw values.
//! 2. `start_x` and `start_t` are constant for every move of one drag.

use web_time::Instant;

/// What kind of element the drag started on.
///
/// Drags originating on editable elements (text inputs and the like) never
/// initiate swipe-back, so text-selection gestures are not hijacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Content,
    Editable,
}

/// A normalized horizontal move event.
#[derive(Debug, Clone, Copy)]
pub struct TouchMove {
    /// Kind of the element the drag originated on.
    pub target: TargetKind,
    /// Absolute x coordinate of the drag start, in px.
    pub start_x: f32,
    /// Signed horizontal shift from the drag start, in px.
    pub shift_x: f32,
    /// Timestamp of the drag start.
    pub start_t: Instant,
}

impl TouchMove {
    /// Create a move event originating on regular content.
    #[must_use]
    pub fn new(start_x: f32, shift_x: f32, start_t: Instant) -> Self {
        Self {
            target: TargetKind::Content,
            start_x,
            shift_x,
            start_t,
        }
    }

    /// Mark the event as originating on an editable element.
    #[must_use]
    pub fn editable(mut self) -> Self {
        self.target = TargetKind::Editable;
        self
    }
}
