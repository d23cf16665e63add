#![forbid(unsafe_code)]

//! Completion detection: "wait until the CSS animation/transition ends".
//!
//! [`CompletionDetector`] holds at most one pending wait per
//! [`SignalKind`]. Arming a kind replaces any previous wait of that kind and
//! drops its deadline, so a stale timeout can never fire after a newer
//! transition has started. When the native signal is unsupported, the wait
//! carries a platform-dependent deadline fired by [`tick`].
//!
//! # Invariants
//! 1. At most one pending wait per kind.
//! 2. A wait has a deadline iff its native signal is unsupported.
//! 3. `tick` fires a wait at most once; firing clears it.
//! 4. An animation wait armed while motion is disabled completes
//!    synchronously ([`Armed::CompleteNow`]) and leaves nothing pending.
//!
//! # Failure Modes
//! - Native signal for a panel with no pending wait: ignored.
//! - Native signal for the wrong panel: ignored (wait stays armed).
//!
//! [`tick`]: CompletionDetector::tick

use web_time::{Duration, Instant};

use crate::platform::{SwipeConfig, ViewConfig};

/// Which native completion signal a wait is armed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// CSS animation end (prop-driven forward/back transitions).
    AnimationEnd,
    /// CSS transition end (swipe-back settle, watching `transform`).
    TransitionEnd,
}

/// Outcome of arming a wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Armed {
    /// Motion is disabled; run the completion handler synchronously.
    CompleteNow,
    /// The wait is pending; a native signal or a timeout will resolve it.
    Waiting,
}

/// A timeout-fallback firing produced by [`CompletionDetector::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired {
    pub kind: SignalKind,
    pub panel: String,
}

#[derive(Debug, Clone)]
struct PendingWait {
    panel: String,
    /// Set only when the native signal is unsupported.
    deadline: Option<Instant>,
}

/// Tracks pending completion waits for one view.
#[derive(Debug)]
pub struct CompletionDetector {
    animation_supported: bool,
    transition_supported: bool,
    fallback: Duration,
    animation: Option<PendingWait>,
    transition: Option<PendingWait>,
}

impl CompletionDetector {
    /// Create a detector for the given configuration.
    #[must_use]
    pub fn new(config: &ViewConfig, swipe: &SwipeConfig) -> Self {
        Self {
            animation_supported: config.animation_end_supported,
            transition_supported: config.transition_end_supported,
            fallback: swipe.fallback_timeout(config.platform),
            animation: None,
            transition: None,
        }
    }

    /// Arm a wait of `kind` against `panel`, replacing any previous wait of
    /// that kind.
    ///
    /// `motion_disabled` short-circuits animation waits only: swipe settles
    /// always wait for the transform transition.
    #[must_use]
    pub fn arm(
        &mut self,
        kind: SignalKind,
        panel: &str,
        now: Instant,
        motion_disabled: bool,
    ) -> Armed {
        if kind == SignalKind::AnimationEnd && motion_disabled {
            self.animation = None;
            tracing::trace!(panel, "animation wait skipped: motion disabled");
            return Armed::CompleteNow;
        }
        let supported = self.supported(kind);
        let deadline = (!supported).then(|| now + self.fallback);
        *self.slot(kind) = Some(PendingWait {
            panel: panel.to_owned(),
            deadline,
        });
        tracing::trace!(?kind, panel, timeout = !supported, "completion wait armed");
        Armed::Waiting
    }

    /// Whether a wait of `kind` is pending against `panel`.
    #[must_use]
    pub fn matches(&self, kind: SignalKind, panel: &str) -> bool {
        match kind {
            SignalKind::AnimationEnd => &self.animation,
            SignalKind::TransitionEnd => &self.transition,
        }
        .as_ref()
        .is_some_and(|w| w.panel == panel)
    }

    /// Clear the pending wait of `kind`, if any.
    pub fn clear(&mut self, kind: SignalKind) {
        *self.slot(kind) = None;
    }

    /// Fire expired timeout fallbacks. Call periodically.
    pub fn tick(&mut self, now: Instant) -> Vec<Fired> {
        let mut fired = Vec::new();
        for kind in [SignalKind::AnimationEnd, SignalKind::TransitionEnd] {
            let slot = self.slot(kind);
            let expired = slot
                .as_ref()
                .and_then(|w| w.deadline)
                .is_some_and(|d| now >= d);
            if expired && let Some(wait) = slot.take() {
                tracing::trace!(?kind, panel = %wait.panel, "completion timeout fired");
                fired.push(Fired {
                    kind,
                    panel: wait.panel,
                });
            }
        }
        fired
    }

    fn supported(&self, kind: SignalKind) -> bool {
        match kind {
            SignalKind::AnimationEnd => self.animation_supported,
            SignalKind::TransitionEnd => self.transition_supported,
        }
    }

    fn slot(&mut self, kind: SignalKind) -> &mut Option<PendingWait> {
        match kind {
            SignalKind::AnimationEnd => &mut self.animation,
            SignalKind::TransitionEnd => &mut self.transition,
        }
    }
}
