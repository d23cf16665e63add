#![forbid(unsafe_code)]

//! Headless showcase: drives a scripted navigation session against a fake
//! viewport and prints the state machine's decisions.
//!
//! Run with `RUST_LOG=debug cargo run -p paneflow-demo` for the view's own
//! transition logs on top of the narration below.

use std::cell::Cell;
use std::rc::Rc;

use tracing::info;
use web_time::{Duration, Instant};

use paneflow::view::ANIM_IOS_NEXT_FORWARD;
use paneflow::{
    NavView, Platform, ScrollCache, ScrollPort, SwipeConfig, TouchMove, ViewCallbacks, ViewConfig,
    ViewProps, ViewportPort,
};

const WIDTH: f32 = 390.0;

struct DemoScroll {
    y: f32,
}

impl ScrollPort for DemoScroll {
    fn get_scroll(&self) -> f32 {
        self.y
    }

    fn scroll_to(&mut self, _x: f32, y: f32) {
        info!(y, "viewport scrolled");
        self.y = y;
    }
}

struct DemoViewport;

impl ViewportPort for DemoViewport {
    fn inner_width(&self) -> f32 {
        WIDTH
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut cache = ScrollCache::new();
    let swiped_back = Rc::new(Cell::new(false));
    let swiped_flag = swiped_back.clone();

    let mut view = NavView::new(
        ViewProps {
            panels: vec!["feed".to_owned(), "story".to_owned()],
            active_panel: "feed".to_owned(),
            history: vec!["feed".to_owned()],
            id: Some("demo".to_owned()),
            popout: false,
            modal: false,
        },
        ViewConfig {
            platform: Platform::Ios,
            is_webview: true,
            ..ViewConfig::default()
        },
        SwipeConfig::default(),
        ViewCallbacks {
            on_transition: Some(Box::new(|t| info!(?t, "transition callback"))),
            on_swipe_back: Some(Box::new(move || swiped_flag.set(true))),
            on_swipe_back_start: Some(Box::new(|| info!("swipe-back started"))),
            on_swipe_back_cancel: Some(Box::new(|| info!("swipe-back canceled"))),
        },
        Box::new(DemoScroll { y: 480.0 }),
        Box::new(DemoViewport),
        &cache,
    );

    let t = Instant::now();

    // Forward navigation: feed → story.
    info!("navigating feed -> story");
    view.set_active_panel("story", t);
    view.set_history(vec!["feed".to_owned(), "story".to_owned()]);
    info!(panels = ?view.rendered_panels(), "mid-transition");
    view.deliver_animation_end("story", Some(ANIM_IOS_NEXT_FORWARD));
    info!(active = ?view.active_panel(), "settled");

    // A hesitant edge drag, released too slowly: the settle fails.
    info!("hesitant swipe-back");
    view.on_move(&TouchMove::new(12.0, 40.0, t));
    view.on_end(t + Duration::from_secs(1));
    view.deliver_transition_end("feed", "transform");
    info!(active = ?view.active_panel(), "still on story");

    // A committed edge drag: fast flick, settle succeeds, owner navigates.
    info!("committed swipe-back");
    let t2 = t + Duration::from_secs(2);
    view.on_move(&TouchMove::new(12.0, 150.0, t2));
    view.on_move(&TouchMove::new(12.0, 260.0, t2));
    if let Some(style) = view.swipe_style("story") {
        info!(?style, "leaving panel mid-drag");
    }
    view.on_end(t2 + Duration::from_millis(120));
    view.deliver_transition_end("feed", "transform");

    if swiped_back.get() {
        view.set_active_panel("feed", t2 + Duration::from_millis(400));
        view.set_history(vec!["feed".to_owned()]);
    }
    info!(active = ?view.active_panel(), "settled after swipe-back");

    view.unmount(&mut cache);
    info!(cached_views = cache.len(), "view unmounted, scrolls flushed");
}
