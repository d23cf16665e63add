#![forbid(unsafe_code)]

//! Swipe-back gesture math: shift clamping and release evaluation.
//!
//! The stateful part of the gesture (eligibility, drag fields) lives on
//! [`NavView`](crate::NavView); the pure decisions live here so they can be
//! exercised in isolation.
//!
//! # Invariants
//! 1. `clamp_shift` output is within `[0, viewport_width]`.
//! 2. Release with zero shift never settles: it cancels immediately.
//! 3. Release with a full-width shift never settles: it succeeds
//!    immediately.

use web_time::Duration;

use crate::platform::SwipeConfig;

/// Outcome a settle animation resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeBackResult {
    Fail,
    Success,
}

/// Decision taken when a swipe-back drag is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseVerdict {
    /// Shift is zero: cancel without a settle animation.
    CancelNow,
    /// Shift covers the viewport: succeed without a settle animation.
    SucceedNow,
    /// Animate toward 0% or 100% and resolve on transform-transition end.
    Settle(SwipeBackResult),
}

/// Clamp a raw signed shift to the drag's reachable range.
///
/// Leftward movement clamps to 0; movement past the right viewport edge
/// clamps to the full viewport width.
#[must_use]
pub fn clamp_shift(shift_x: f32, start_x: f32, viewport_width: f32) -> f32 {
    if shift_x < 0.0 {
        0.0
    } else if shift_x > viewport_width - start_x {
        viewport_width
    } else {
        shift_x
    }
}

/// Evaluate a drag release.
///
/// Velocity is `shift / elapsed` in px/s; an instantaneous release counts as
/// infinitely fast. A partial swipe commits when it is faster than
/// [`SwipeConfig::commit_velocity_px_s`] or has crossed the viewport
/// midpoint.
#[must_use]
pub fn evaluate_release(
    shift: f32,
    start_x: f32,
    elapsed: Duration,
    viewport_width: f32,
    config: &SwipeConfig,
) -> ReleaseVerdict {
    if shift <= 0.0 {
        return ReleaseVerdict::CancelNow;
    }
    if shift >= viewport_width {
        return ReleaseVerdict::SucceedNow;
    }
    let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
    let velocity = if elapsed_ms > 0.0 {
        shift / elapsed_ms * 1000.0
    } else {
        f32::INFINITY
    };
    if velocity > config.commit_velocity_px_s || start_x + shift > viewport_width / 2.0 {
        ReleaseVerdict::Settle(SwipeBackResult::Success)
    } else {
        ReleaseVerdict::Settle(SwipeBackResult::Fail)
    }
}
