use glam::Vec2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use super::{HitResult, NodeId, SceneGraph};
use crate::camera::rig::CameraTransform;

/// Screen-space rectangle standing in for a node's projected geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    /// Node the region belongs to.
    pub node: NodeId,
    /// Top-left corner in view coordinates.
    pub min: Vec2,
    /// Bottom-right corner in view coordinates.
    pub max: Vec2,
    /// Depth reported for hits in this region.
    pub distance: f32,
}

impl HitRegion {
    fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Scene graph that records what the controller asks of it.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    nodes: Vec<NodeId>,
    regions: Vec<HitRegion>,
    opacity: FxHashMap<NodeId, f32>,
    hidden: FxHashMap<NodeId, bool>,
    last_fade: Option<Duration>,
    camera: Option<CameraTransform>,
    camera_updates: usize,
}

impl MemoryScene {
    /// Scene containing `nodes`, all opaque and visible.
    #[must_use]
    pub fn new(nodes: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        Self {
            nodes: nodes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add a hit region.
    #[must_use]
    pub fn with_region(mut self, region: HitRegion) -> Self {
        self.regions.push(region);
        self
    }

    /// Current opacity of `node` (1 until changed).
    #[must_use]
    pub fn opacity(&self, node: &str) -> f32 {
        self.opacity.get(node).copied().unwrap_or(1.0)
    }

    /// Whether `node` is hidden.
    #[must_use]
    pub fn is_hidden(&self, node: &str) -> bool {
        self.hidden.get(node).copied().unwrap_or(false)
    }

    /// Fade duration of the latest opacity change.
    #[must_use]
    pub fn last_fade(&self) -> Option<Duration> {
        self.last_fade
    }

    /// Latest camera transform pushed by the controller.
    #[must_use]
    pub fn camera(&self) -> Option<&CameraTransform> {
        self.camera.as_ref()
    }

    /// How many camera transforms have been pushed.
    #[must_use]
    pub fn camera_updates(&self) -> usize {
        self.camera_updates
    }

    /// Node names in scene order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}

impl SceneGraph for MemoryScene {
    fn hit_test(&self, point: Vec2) -> Vec<HitResult> {
        let mut hits: Vec<HitResult> = self
            .regions
            .iter()
            .filter(|region| region.contains(point))
            .map(|region| HitResult {
                node: region.node.clone(),
                distance: region.distance,
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn set_node_opacity(
        &mut self,
        node: &str,
        opacity: f32,
        fade: Option<Duration>,
    ) {
        let _ = self.opacity.insert(node.to_owned(), opacity);
        self.last_fade = fade;
    }

    fn set_node_hidden(&mut self, node: &str, hidden: bool) {
        let _ = self.hidden.insert(node.to_owned(), hidden);
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.clone()
    }

    fn apply_camera(&mut self, transform: &CameraTransform) {
        self.camera = Some(*transform);
        self.camera_updates += 1;
    }
}
