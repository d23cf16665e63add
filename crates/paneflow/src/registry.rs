#![forbid(unsafe_code)]

//! Panel node registry.
//!
//! The rendering host registers an opaque handle per mounted panel; the view
//! writes per-panel scroll restoration through it during transitions.
//! Panels without a registered node are silently skipped (headless hosts and
//! tests run fine without any).

use ahash::AHashMap;

/// Opaque render-target handle for one panel.
pub trait PanelNode {
    /// Set the panel element's own vertical scroll offset, in px.
    fn set_scroll_top(&mut self, y: f32);
}

/// Panel id → render-target handle, populated/cleared as panels
/// mount/unmount.
#[derive(Default)]
pub struct PanelRegistry {
    nodes: AHashMap<String, Box<dyn PanelNode>>,
}

impl std::fmt::Debug for PanelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelRegistry")
            .field("len", &self.nodes.len())
            .finish_non_exhaustive()
    }
}

impl PanelRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the handle for a panel.
    pub fn register(&mut self, panel: impl Into<String>, node: Box<dyn PanelNode>) {
        self.nodes.insert(panel.into(), node);
    }

    /// Remove the handle for a panel, if present.
    pub fn unregister(&mut self, panel: &str) {
        self.nodes.remove(panel);
    }

    /// Mutable access to a panel's handle.
    pub fn get_mut(&mut self, panel: &str) -> Option<&mut dyn PanelNode> {
        self.nodes.get_mut(panel).map(|n| n.as_mut() as &mut dyn PanelNode)
    }

    /// Number of registered handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no handles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
