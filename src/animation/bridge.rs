use rustc_hash::FxHashMap;

use crate::animation::transform::Transform;

/// The host scene, as seen by the playback engine.
///
/// The engine never owns scene nodes: it reads a node's live transform,
/// writes interpolated values back, and asks the timeline widget to redraw.
pub trait SceneBridge {
    /// Live transform of `node_id`, or `None` if the scene has no such node.
    fn transform(&self, node_id: &str) -> Option<Transform>;

    fn set_transform(&mut self, node_id: &str, transform: Transform);

    /// Called once per playback tick and on manual frame steps.
    fn request_timeline_redraw(&mut self) {}
}

/// Map-backed [`SceneBridge`] for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct NodeTransforms {
    nodes: FxHashMap<String, Transform>,
    redraw_requests: u64,
}

impl NodeTransforms {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node_id: impl Into<String>, transform: Transform) {
        self.nodes.insert(node_id.into(), transform);
    }

    #[must_use]
    pub fn get(&self, node_id: &str) -> Option<&Transform> {
        self.nodes.get(node_id)
    }

    pub fn get_mut(&mut self, node_id: &str) -> Option<&mut Transform> {
        self.nodes.get_mut(node_id)
    }

    /// Number of redraws requested so far.
    #[must_use]
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }
}

impl SceneBridge for NodeTransforms {
    fn transform(&self, node_id: &str) -> Option<Transform> {
        self.nodes.get(node_id).copied()
    }

    fn set_transform(&mut self, node_id: &str, transform: Transform) {
        if let Some(node) = self.nodes.get_mut(node_id) {
            *node = transform;
        } else {
            log::warn!("Write-back to missing node '{node_id}' ignored");
        }
    }

    fn request_timeline_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}
