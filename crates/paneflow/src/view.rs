#![forbid(unsafe_code)]

//! [`NavView`]: the navigation container's transition state machine and
//! gesture tracker.
//!
//! # State Machine
//!
//! Exactly one of these is active at any time:
//!
//! - **Idle**: one settled active panel.
//! - **Prop-driven transition**: the owner changed the active panel;
//!   two panels are mounted, `animated` is set, and an animation-end wait is
//!   armed against whichever panel animates forward.
//! - **Swipe-back**: an edge drag previews a backward navigation; on release
//!   it either resolves immediately (zero or full-width shift) or settles,
//!   arming a transform-transition wait against the entering panel.
//! - **Browser takeover**: on iOS outside a WebView, edge drags are left to
//!   the browser's native gesture; the next prop change snaps state with no
//!   animation.
//!
//! # Invariants
//!
//! 1. `visible_panels` contains exactly the active panel when idle, and
//!    exactly the leaving/entering pair while transitioning.
//! 2. `swipe_back_shift` is clamped to `[0, viewport_width]`.
//! 3. A scroll-map entry is removed only for a panel that has just finished
//!    leaving backward.
//! 4. Transition-start notification precedes arming the completion wait;
//!    transition-end notification precedes the owner callback.
//!
//! # Failure Modes
//!
//! - An `active_panel` not present among the panels is a caller contract
//!    violation; behavior is unspecified (no defensive checks).
//! - Completion signals for panels with no pending wait are ignored.

use tracing::{debug, trace};
use web_time::Instant;

use crate::completion::{Armed, CompletionDetector, SignalKind};
use crate::gesture::{ReleaseVerdict, SwipeBackResult, clamp_shift, evaluate_release};
use crate::observer::{TransitionDetail, ViewObserver};
use crate::platform::{Platform, SwipeConfig, ViewConfig};
use crate::registry::{PanelNode, PanelRegistry};
use crate::scroll::{ScrollCache, ScrollMap, ScrollPort};
use crate::touch::{TargetKind, TouchMove};

// ---------------------------------------------------------------------------
// Animation names
// ---------------------------------------------------------------------------

/// iOS entering-panel animation for forward transitions.
pub const ANIM_IOS_NEXT_FORWARD: &str = "paneflow-animation-ios-next-forward";
/// iOS leaving-panel animation for backward transitions.
pub const ANIM_IOS_PREV_BACK: &str = "paneflow-animation-ios-prev-back";
/// Generic entering-panel animation for forward transitions.
pub const ANIM_VIEW_NEXT_FORWARD: &str = "paneflow-animation-view-next-forward";
/// Generic leaving-panel animation for backward transitions.
pub const ANIM_VIEW_PREV_BACK: &str = "paneflow-animation-view-prev-back";

/// Animation names whose end signals a finished prop-driven transition.
/// Other animations may end on the same panel mid-flight and are ignored.
pub const TRANSITION_ANIMATIONS: [&str; 4] = [
    ANIM_IOS_NEXT_FORWARD,
    ANIM_IOS_PREV_BACK,
    ANIM_VIEW_NEXT_FORWARD,
    ANIM_VIEW_PREV_BACK,
];

// ---------------------------------------------------------------------------
// Host-facing types
// ---------------------------------------------------------------------------

/// Accessor for window-level facts the view needs.
pub trait ViewportPort {
    /// Viewport width, in px.
    fn inner_width(&self) -> f32;
    /// Drop focus from the currently focused element, if any.
    fn blur_active_element(&mut self) {}
}

/// Controlled props supplied by the owner.
#[derive(Debug, Clone, Default)]
pub struct ViewProps {
    /// Ordered panel ids, as rendered by the host.
    pub panels: Vec<String>,
    /// The settled active panel id.
    pub active_panel: String,
    /// Navigation history, most recent last. Swipe-back requires depth > 1.
    pub history: Vec<String>,
    /// Scroll-cache key. Without it scroll memory does not survive remounts.
    pub id: Option<String>,
    /// Whether a popout overlay is rendered (via the host's portal).
    pub popout: bool,
    /// Whether a modal overlay is rendered (via the host's portal).
    pub modal: bool,
}

/// Payload of the owner's transition callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionInfo {
    pub is_back: bool,
    pub from: String,
    pub to: String,
}

/// Owner callbacks. Absent callbacks are simply not invoked.
#[derive(Default)]
pub struct ViewCallbacks {
    /// A transition (prop-driven or committed swipe-back) finished.
    pub on_transition: Option<Box<dyn FnMut(TransitionInfo)>>,
    /// A swipe-back committed; the owner is expected to change
    /// `active_panel` in response.
    pub on_swipe_back: Option<Box<dyn FnMut()>>,
    /// A swipe-back drag started.
    pub on_swipe_back_start: Option<Box<dyn FnMut()>>,
    /// A swipe-back was canceled (released without committing).
    pub on_swipe_back_cancel: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for ViewCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewCallbacks")
            .field("on_transition", &self.on_transition.is_some())
            .field("on_swipe_back", &self.on_swipe_back.is_some())
            .finish_non_exhaustive()
    }
}

/// Where a panel currently sits in the view, for the rendering host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPlacement {
    /// The settled active panel.
    Active,
    /// Leaving panel of a prop-driven transition.
    Prev,
    /// Entering panel of a prop-driven transition.
    Next,
    /// Leaving (dragged) panel of a swipe-back.
    SwipeBackPrev,
    /// Entering (revealed) panel of a swipe-back.
    SwipeBackNext,
    /// Not mounted.
    Hidden,
}

/// Interactive drag styling for one panel, in the host's units.
///
/// Present only while a swipe-back drag is tracking the finger; once a
/// settle result is set, styling is handed back to the CSS transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSwipeStyle {
    /// Horizontal translation in px (leaving panel follows the finger).
    pub translate_x_px: Option<f32>,
    /// Horizontal translation in percent of the panel width (entering panel
    /// slides from -50% to 0%).
    pub translate_x_pct: Option<f32>,
    /// Opacity of the leaving panel's edge shadow, fading out as the shift
    /// grows.
    pub shadow_opacity: Option<f32>,
}

// ---------------------------------------------------------------------------
// NavView
// ---------------------------------------------------------------------------

/// Navigation container holding a stack of panels.
///
/// Single-threaded and event-driven: every mutation happens synchronously
/// inside one of the input methods (`set_active_panel`, `on_move`, `on_end`,
/// `deliver_*`, `tick`).
pub struct NavView {
    props: ViewProps,
    config: ViewConfig,
    swipe_config: SwipeConfig,
    callbacks: ViewCallbacks,
    scroll_port: Box<dyn ScrollPort>,
    viewport: Box<dyn ViewportPort>,

    registry: PanelRegistry,
    observers: Vec<Box<dyn ViewObserver>>,
    detector: CompletionDetector,

    scrolls: ScrollMap,

    // Prop-driven transition state.
    animated: bool,
    visible_panels: Vec<String>,
    active_panel: Option<String>,
    is_back: Option<bool>,
    prev_panel: Option<String>,
    next_panel: Option<String>,

    // Swipe-back state.
    swiping_back: bool,
    swipeback_start_x: f32,
    swipe_back_shift: f32,
    swipe_back_prev_panel: Option<String>,
    swipe_back_next_panel: Option<String>,
    swipe_back_result: Option<SwipeBackResult>,
    start_t: Option<Instant>,

    browser_swipe: bool,
}

impl std::fmt::Debug for NavView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavView")
            .field("active_panel", &self.active_panel)
            .field("visible_panels", &self.visible_panels)
            .field("animated", &self.animated)
            .field("swiping_back", &self.swiping_back)
            .field("browser_swipe", &self.browser_swipe)
            .finish_non_exhaustive()
    }
}

impl NavView {
    /// Mount a view, seeding scroll memory from `cache` by `props.id`.
    #[must_use]
    pub fn new(
        props: ViewProps,
        config: ViewConfig,
        swipe_config: SwipeConfig,
        callbacks: ViewCallbacks,
        scroll_port: Box<dyn ScrollPort>,
        viewport: Box<dyn ViewportPort>,
        cache: &ScrollCache,
    ) -> Self {
        let scrolls = cache.seed(props.id.as_deref());
        let detector = CompletionDetector::new(&config, &swipe_config);
        let active = props.active_panel.clone();
        Self {
            props,
            config,
            swipe_config,
            callbacks,
            scroll_port,
            viewport,
            registry: PanelRegistry::new(),
            observers: Vec::new(),
            detector,
            scrolls,
            animated: false,
            visible_panels: vec![active.clone()],
            active_panel: Some(active),
            is_back: None,
            prev_panel: None,
            next_panel: None,
            swiping_back: false,
            swipeback_start_x: 0.0,
            swipe_back_shift: 0.0,
            swipe_back_prev_panel: None,
            swipe_back_next_panel: None,
            swipe_back_result: None,
            start_t: None,
            browser_swipe: false,
        }
    }

    /// Unmount, flushing the instance scroll map into `cache`.
    pub fn unmount(self, cache: &mut ScrollCache) {
        if let Some(id) = &self.props.id {
            cache.store(id, self.scrolls);
        }
    }

    /// Subscribe an observer to transition notifications.
    pub fn subscribe(&mut self, observer: Box<dyn ViewObserver>) {
        self.observers.push(observer);
    }

    /// Register the render-target handle for a mounted panel.
    pub fn register_panel(&mut self, panel: impl Into<String>, node: Box<dyn PanelNode>) {
        self.registry.register(panel, node);
    }

    /// Drop the render-target handle for an unmounted panel.
    pub fn unregister_panel(&mut self, panel: &str) {
        self.registry.unregister(panel);
    }

    // -- prop updates -------------------------------------------------------

    /// Owner changed the active panel.
    ///
    /// While idle this starts a prop-driven transition; while swiping back
    /// it commits the gesture's result; while in browser takeover it snaps
    /// to the new panel with no animation.
    pub fn set_active_panel(&mut self, id: &str, now: Instant) {
        if self.props.active_panel == id {
            return;
        }
        let from = std::mem::replace(&mut self.props.active_panel, id.to_owned());
        if self.swiping_back {
            self.finish_swipe_back(from);
        } else if self.browser_swipe {
            self.finish_browser_swipe();
        } else {
            self.begin_transition(from, now);
        }
    }

    /// Replace the ordered panel list (host children changed).
    pub fn set_panels(&mut self, panels: Vec<String>) {
        self.props.panels = panels;
    }

    /// Replace the navigation history.
    pub fn set_history(&mut self, history: Vec<String>) {
        self.props.history = history;
    }

    /// Show or hide the popout overlay. Appearing overlays blur focus.
    pub fn set_popout(&mut self, popout: bool) {
        if popout && !self.props.popout {
            self.viewport.blur_active_element();
        }
        self.props.popout = popout;
    }

    /// Show or hide the modal overlay. Appearing overlays blur focus.
    pub fn set_modal(&mut self, modal: bool) {
        if modal && !self.props.modal {
            self.viewport.blur_active_element();
        }
        self.props.modal = modal;
    }

    // -- gesture input ------------------------------------------------------

    /// Feed one normalized horizontal move event.
    pub fn on_move(&mut self, event: &TouchMove) {
        if event.target == TargetKind::Editable {
            return;
        }
        let width = self.viewport.inner_width();
        let edge = self.swipe_config.edge_width_px;

        // Outside a WebView, iOS edge drags belong to the browser chrome.
        if self.config.platform == Platform::Ios
            && !self.config.is_webview
            && (event.start_x <= edge || event.start_x >= width - edge)
            && !self.browser_swipe
        {
            debug!(start_x = event.start_x, "yielding to browser swipe");
            self.browser_swipe = true;
        }

        if self.config.platform == Platform::Ios
            && self.config.is_webview
            && self.callbacks.on_swipe_back.is_some()
        {
            // No competing gesture while a transition animates.
            if self.animated && event.start_x <= edge {
                return;
            }
            if event.start_x <= edge && !self.swiping_back && self.props.history.len() > 1 {
                self.start_swipe_back(event);
            }
            if self.swiping_back {
                self.swipe_back_shift = clamp_shift(event.shift_x, self.swipeback_start_x, width);
                trace!(shift = self.swipe_back_shift, "swipe-back shift");
            }
        }
    }

    /// The drag was released.
    pub fn on_end(&mut self, now: Instant) {
        if !self.swiping_back {
            return;
        }
        let width = self.viewport.inner_width();
        let elapsed = self
            .start_t
            .map_or(web_time::Duration::ZERO, |t| now.duration_since(t));
        let verdict = evaluate_release(
            self.swipe_back_shift,
            self.swipeback_start_x,
            elapsed,
            width,
            &self.swipe_config,
        );
        debug!(?verdict, shift = self.swipe_back_shift, "swipe-back released");
        match verdict {
            ReleaseVerdict::CancelNow => self.cancel_swipe_back(),
            ReleaseVerdict::SucceedNow => self.succeed_swipe_back(),
            ReleaseVerdict::Settle(result) => {
                self.swipe_back_result = Some(result);
                if let Some(next) = self.swipe_back_next_panel.clone() {
                    let _ = self
                        .detector
                        .arm(SignalKind::TransitionEnd, &next, now, false);
                }
            }
        }
    }

    // -- completion input ---------------------------------------------------

    /// Native animation-end signal from the host.
    ///
    /// Counts only when armed against `panel` and the name is one of
    /// [`TRANSITION_ANIMATIONS`] (or absent, for synthetic signals).
    pub fn deliver_animation_end(&mut self, panel: &str, animation_name: Option<&str>) {
        if !self.detector.matches(SignalKind::AnimationEnd, panel) {
            return;
        }
        if let Some(name) = animation_name
            && !TRANSITION_ANIMATIONS.contains(&name)
        {
            trace!(name, "unrecognized animation end ignored");
            return;
        }
        self.detector.clear(SignalKind::AnimationEnd);
        self.finish_transition();
    }

    /// Native transition-end signal from the host.
    ///
    /// Counts only when armed against `panel` and the completed property is
    /// a transform (vendor-prefixed variants match by substring).
    pub fn deliver_transition_end(&mut self, panel: &str, property: &str) {
        if !self.detector.matches(SignalKind::TransitionEnd, panel) {
            return;
        }
        if !property.contains("transform") {
            return;
        }
        self.detector.clear(SignalKind::TransitionEnd);
        self.resolve_settle();
    }

    /// Fire expired completion timeouts. Call periodically when the host
    /// reports native completion events unsupported.
    pub fn tick(&mut self, now: Instant) {
        for fired in self.detector.tick(now) {
            match fired.kind {
                SignalKind::AnimationEnd => self.finish_transition(),
                SignalKind::TransitionEnd => self.resolve_settle(),
            }
        }
    }

    // -- render queries -----------------------------------------------------

    /// Panels the host should keep mounted, in panel-list order.
    #[must_use]
    pub fn rendered_panels(&self) -> Vec<&str> {
        self.props
            .panels
            .iter()
            .map(String::as_str)
            .filter(|id| {
                self.visible_panels.iter().any(|v| v == id)
                    || self.swipe_back_prev_panel.as_deref() == Some(*id)
                    || self.swipe_back_next_panel.as_deref() == Some(*id)
            })
            .collect()
    }

    /// Where `panel` currently sits in the view.
    #[must_use]
    pub fn placement(&self, panel: &str) -> PanelPlacement {
        if self.swipe_back_prev_panel.as_deref() == Some(panel) {
            PanelPlacement::SwipeBackPrev
        } else if self.swipe_back_next_panel.as_deref() == Some(panel) {
            PanelPlacement::SwipeBackNext
        } else if self.active_panel.as_deref() == Some(panel) {
            PanelPlacement::Active
        } else if self.prev_panel.as_deref() == Some(panel) {
            PanelPlacement::Prev
        } else if self.next_panel.as_deref() == Some(panel) {
            PanelPlacement::Next
        } else {
            PanelPlacement::Hidden
        }
    }

    /// Interactive drag styling for `panel`, if it is part of an
    /// unresolved swipe-back.
    #[must_use]
    pub fn swipe_style(&self, panel: &str) -> Option<PanelSwipeStyle> {
        let is_prev = self.swipe_back_prev_panel.as_deref() == Some(panel);
        let is_next = self.swipe_back_next_panel.as_deref() == Some(panel);
        if (!is_prev && !is_next) || self.swipe_back_result.is_some() {
            return None;
        }
        let width = self.viewport.inner_width();
        if is_next {
            return Some(PanelSwipeStyle {
                translate_x_px: None,
                translate_x_pct: Some(-50.0 + self.swipe_back_shift * 100.0 / width / 2.0),
                shadow_opacity: None,
            });
        }
        Some(PanelSwipeStyle {
            translate_x_px: Some(self.swipe_back_shift),
            translate_x_pct: None,
            shadow_opacity: Some(0.3 * (width - self.swipe_back_shift) / width),
        })
    }

    /// Whether transition motion is disabled by configuration.
    #[must_use]
    pub fn motion_disabled(&self) -> bool {
        !self.config.transition_motion_enabled || !self.config.split_animate
    }

    // -- state accessors ----------------------------------------------------

    /// The settled active panel; `None` mid-transition.
    #[must_use]
    pub fn active_panel(&self) -> Option<&str> {
        self.active_panel.as_deref()
    }

    /// Panels currently mounted for the transition machinery.
    #[must_use]
    pub fn visible_panels(&self) -> &[String] {
        &self.visible_panels
    }

    /// Whether a prop-driven transition animation is in flight.
    #[must_use]
    pub fn animated(&self) -> bool {
        self.animated
    }

    /// Whether a swipe-back drag or settle is in progress.
    #[must_use]
    pub fn swiping_back(&self) -> bool {
        self.swiping_back
    }

    /// Current clamped swipe-back shift, in px.
    #[must_use]
    pub fn swipe_back_shift(&self) -> f32 {
        self.swipe_back_shift
    }

    /// Pending settle outcome, if a settle animation is in flight.
    #[must_use]
    pub fn swipe_back_result(&self) -> Option<SwipeBackResult> {
        self.swipe_back_result
    }

    /// Whether the browser's native swipe has taken over.
    #[must_use]
    pub fn browser_swipe(&self) -> bool {
        self.browser_swipe
    }

    /// The instance scroll map.
    #[must_use]
    pub fn scrolls(&self) -> &ScrollMap {
        &self.scrolls
    }

    /// Current props.
    #[must_use]
    pub fn props(&self) -> &ViewProps {
        &self.props
    }

    // -- transitions --------------------------------------------------------

    fn begin_transition(&mut self, from: String, now: Instant) {
        let to = self.props.active_panel.clone();
        // Whichever of {from, to} occurs first in the panel list wins:
        // if the target occurs first, we are navigating backward.
        let is_back = self
            .props
            .panels
            .iter()
            .find(|p| **p == from || **p == to)
            .is_some_and(|first| *first == to);

        debug!(%from, %to, is_back, "transition started");
        self.viewport.blur_active_element();
        let leaving_scroll = self.scroll_port.get_scroll().max(0.0);
        self.scrolls.insert(from.clone(), leaving_scroll);

        self.visible_panels = vec![from.clone(), to.clone()];
        self.prev_panel = Some(from.clone());
        self.next_panel = Some(to.clone());
        self.active_panel = None;
        self.animated = true;
        self.is_back = Some(is_back);

        self.notify_started(&from, &to, Some(is_back));

        // The leaving panel resumes its scroll immediately; the entering
        // panel does too on backward transitions (forward entries start at
        // the top).
        self.restore_node_scroll(&from);
        if is_back {
            self.restore_node_scroll(&to);
        }

        let animating = if is_back { from } else { to };
        let motion_disabled = self.motion_disabled();
        match self
            .detector
            .arm(SignalKind::AnimationEnd, &animating, now, motion_disabled)
        {
            Armed::CompleteNow => self.finish_transition(),
            Armed::Waiting => {}
        }
    }

    fn finish_transition(&mut self) {
        if !self.animated {
            return;
        }
        let active = self.props.active_panel.clone();
        let is_back = self.is_back.take().unwrap_or(false);
        let Some(from) = self.prev_panel.take() else {
            return;
        };
        debug!(%from, to = %active, is_back, "transition finished");

        self.notify_ended();
        self.next_panel = None;
        self.visible_panels = vec![active.clone()];
        self.active_panel = Some(active.clone());
        self.animated = false;
        if is_back {
            self.scrolls.remove(&from);
            let y = self.scrolls.get(&active).copied().unwrap_or(0.0);
            self.scroll_port.scroll_to(0.0, y);
        }
        if let Some(cb) = self.callbacks.on_transition.as_mut() {
            cb(TransitionInfo {
                is_back,
                from,
                to: active,
            });
        }
    }

    fn finish_browser_swipe(&mut self) {
        let active = self.props.active_panel.clone();
        debug!(to = %active, "browser swipe finished, snapping");
        self.browser_swipe = false;
        self.prev_panel = None;
        self.next_panel = None;
        self.animated = false;
        self.is_back = None;
        self.visible_panels = vec![active.clone()];
        self.active_panel = Some(active);
    }

    // -- swipe-back ---------------------------------------------------------

    fn start_swipe_back(&mut self, event: &TouchMove) {
        let Some(prev) = self.active_panel.clone() else {
            return;
        };
        let Some(next) = self.props.history.iter().nth_back(1).cloned() else {
            return;
        };
        debug!(from = %prev, to = %next, "swipe-back started");

        self.swiping_back = true;
        self.swipeback_start_x = event.start_x;
        self.start_t = Some(event.start_t);
        self.swipe_back_prev_panel = Some(prev.clone());
        self.swipe_back_next_panel = Some(next.clone());
        let current_scroll = self.scroll_port.get_scroll().max(0.0);
        self.scrolls.insert(prev.clone(), current_scroll);

        // Direction is unknown until release, hence no is_back in the
        // notification.
        self.notify_started(&prev, &next, None);
        if let Some(cb) = self.callbacks.on_swipe_back_start.as_mut() {
            cb();
        }
        self.restore_node_scroll(&next);
        self.restore_node_scroll(&prev);
    }

    fn resolve_settle(&mut self) {
        match self.swipe_back_result {
            Some(SwipeBackResult::Fail) => self.cancel_swipe_back(),
            Some(SwipeBackResult::Success) => self.succeed_swipe_back(),
            None => {}
        }
    }

    fn succeed_swipe_back(&mut self) {
        debug!("swipe-back committed");
        // Swipe state stays set; the owner's prop change finishes the
        // gesture in finish_swipe_back.
        if let Some(cb) = self.callbacks.on_swipe_back.as_mut() {
            cb();
        }
    }

    fn cancel_swipe_back(&mut self) {
        debug!("swipe-back canceled");
        let was_fail_settle = self.swipe_back_result == Some(SwipeBackResult::Fail);
        if let Some(cb) = self.callbacks.on_swipe_back_cancel.as_mut() {
            cb();
        }
        self.clear_swipe_back_state();
        self.notify_ended();
        // A fail-settle may have drifted the viewport; reissue the still-
        // active panel's offset.
        if was_fail_settle
            && let Some(active) = self.active_panel.clone()
        {
            let y = self.scrolls.get(&active).copied().unwrap_or(0.0);
            self.scroll_port.scroll_to(0.0, y);
        }
    }

    /// The owner changed `active_panel` while a swipe-back was in flight:
    /// the gesture is finished and the entering panel becomes the settled
    /// active panel.
    fn finish_swipe_back(&mut self, from: String) {
        let to = self.props.active_panel.clone();
        let leaving = self.swipe_back_prev_panel.take();
        debug!(%from, %to, "swipe-back transition finished");

        self.clear_swipe_back_state();
        self.active_panel = Some(to.clone());
        self.visible_panels = vec![to.clone()];
        if let Some(panel) = leaving {
            self.scrolls.remove(&panel);
        }
        self.notify_ended();
        let y = self.scrolls.get(&to).copied().unwrap_or(0.0);
        self.scroll_port.scroll_to(0.0, y);
        if let Some(cb) = self.callbacks.on_transition.as_mut() {
            cb(TransitionInfo {
                is_back: true,
                from,
                to,
            });
        }
    }

    fn clear_swipe_back_state(&mut self) {
        self.swiping_back = false;
        self.swipeback_start_x = 0.0;
        self.swipe_back_shift = 0.0;
        self.swipe_back_prev_panel = None;
        self.swipe_back_next_panel = None;
        self.swipe_back_result = None;
        self.start_t = None;
        self.detector.clear(SignalKind::TransitionEnd);
    }

    // -- plumbing -----------------------------------------------------------

    fn notify_started(&mut self, from: &str, to: &str, is_back: Option<bool>) {
        let detail = TransitionDetail {
            from: from.to_owned(),
            to: to.to_owned(),
            is_back,
            scrolls: self.scrolls.clone(),
        };
        for observer in &mut self.observers {
            observer.transition_started(&detail);
        }
    }

    fn notify_ended(&mut self) {
        for observer in &mut self.observers {
            observer.transition_ended();
        }
    }

    fn restore_node_scroll(&mut self, panel: &str) {
        let y = self.scrolls.get(panel).copied().unwrap_or(0.0);
        if let Some(node) = self.registry.get_mut(panel) {
            node.set_scroll_top(y);
        }
    }
}
