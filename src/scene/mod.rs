//! The renderer-facing side of the controller.
//!
//! The controller never owns geometry. It talks to whatever scene graph the
//! host renders through [`SceneGraph`], and reports interaction outcomes to
//! the host UI through [`InteractionObserver`].

/// In-memory scene graph used by the replay tool and tests.
pub mod memory;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::camera::rig::CameraTransform;

pub use memory::MemoryScene;

/// Identifier of a node in the host scene graph.
pub type NodeId = String;

/// One entry of a hit-test result, nearest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitResult {
    /// Node that was hit.
    pub node: NodeId,
    /// Distance from the camera to the hit point.
    pub distance: f32,
}

/// Operations the controller needs from the host renderer.
///
/// All calls are synchronous and made from the thread that delivers
/// gestures and frame callbacks.
pub trait SceneGraph {
    /// Nodes under the viewport `point`, ordered nearest first.
    fn hit_test(&self, point: Vec2) -> Vec<HitResult>;

    /// Set a node's opacity, animated over `fade` when given.
    fn set_node_opacity(
        &mut self,
        node: &str,
        opacity: f32,
        fade: Option<Duration>,
    );

    /// Show or hide a node. Independent of opacity.
    fn set_node_hidden(&mut self, node: &str, hidden: bool);

    /// Identifiers of every named node in the scene.
    fn node_ids(&self) -> Vec<NodeId>;

    /// Push the orbit rig transform for the next frame.
    fn apply_camera(&mut self, transform: &CameraTransform);
}

/// Receives interaction outcomes from the controller.
pub trait InteractionObserver {
    /// A touch sequence started while a scene is attached. `position` is the
    /// current point-of-view position.
    fn began_moving(&mut self, position: Vec3);

    /// A debounced single tap resolved on `node`.
    fn item_selected(&mut self, node: &str);

    /// A debounced single tap resolved on empty space.
    fn item_deselected(&mut self);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl InteractionObserver for NullObserver {
    fn began_moving(&mut self, _position: Vec3) {}

    fn item_selected(&mut self, _node: &str) {}

    fn item_deselected(&mut self) {}
}

/// Observer that records every notification in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingObserver {
    /// Notifications received so far.
    pub events: Vec<ObservedEvent>,
}

/// A notification captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    /// [`InteractionObserver::began_moving`].
    BeganMoving(Vec3),
    /// [`InteractionObserver::item_selected`].
    Selected(NodeId),
    /// [`InteractionObserver::item_deselected`].
    Deselected,
}

impl InteractionObserver for RecordingObserver {
    fn began_moving(&mut self, position: Vec3) {
        self.events.push(ObservedEvent::BeganMoving(position));
    }

    fn item_selected(&mut self, node: &str) {
        self.events.push(ObservedEvent::Selected(node.to_owned()));
    }

    fn item_deselected(&mut self) {
        self.events.push(ObservedEvent::Deselected);
    }
}
