//! The orbit controller: one object the host feeds gestures, timer ticks
//! and frame callbacks into.
//!
//! It wires the [`GestureInterpreter`], the [`OrbitCamera`], the
//! [`TapDebouncer`] and the [`PoseRecorder`] to the host's scene graph,
//! observer and key-value store. Everything runs on the caller's thread;
//! time only advances through the `now` passed to each call.

use glam::Vec2;
use web_time::Instant;

use crate::camera::{
    CameraPose, CameraTransform, OrbitCamera, PointOfView, ZoomStep,
};
use crate::input::{
    GestureEvent, GestureInterpreter, Intent, PanSource, TapCount, Viewport,
};
use crate::options::Options;
use crate::persistence::{PersistedPose, PoseRecorder, PoseStore};
use crate::scene::{HitResult, InteractionObserver, SceneGraph};
use crate::selection::{apply_highlight, TapAction, TapDebouncer};

/// Outcome of feeding an event to the controller.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The event changed controller or scene state.
    Handled,
    /// The event was valid but had no effect.
    Ignored,
    /// No scene is attached; nothing happened.
    NotReady,
}

/// Gesture-driven orbit camera and tap selection for one scene.
///
/// # Usage
///
/// ```ignore
/// let mut controller =
///     OrbitController::new(options, viewport, observer, store);
/// controller.attach_scene(scene);
///
/// // gesture callbacks
/// let _ = controller.handle_gesture(event, Instant::now());
/// // timer armed at controller.next_deadline()
/// let _ = controller.tick(Instant::now());
/// // render completion
/// let _ = controller.frame_rendered(&renderer_point_of_view);
/// ```
pub struct OrbitController<S, O, K> {
    options: Options,
    camera: OrbitCamera,
    interpreter: GestureInterpreter,
    debouncer: TapDebouncer,
    recorder: PoseRecorder,
    scene: Option<S>,
    observer: O,
    store: K,
}

impl<S, O, K> OrbitController<S, O, K>
where
    S: SceneGraph,
    O: InteractionObserver,
    K: PoseStore,
{
    /// Create a controller with no scene attached.
    #[must_use]
    pub fn new(
        options: Options,
        viewport: Viewport,
        observer: O,
        store: K,
    ) -> Self {
        Self {
            camera: OrbitCamera::new(options.camera.clone()),
            interpreter: GestureInterpreter::new(viewport),
            debouncer: TapDebouncer::from_options(&options.selection),
            recorder: PoseRecorder::new(),
            scene: None,
            observer,
            store,
            options,
        }
    }

    /// Attach the scene gestures will act on and push the current camera.
    ///
    /// Replacing an attached scene tears the old one down as
    /// [`detach_scene`](Self::detach_scene) does.
    pub fn attach_scene(&mut self, mut scene: S) {
        scene.apply_camera(&self.camera_transform());
        let nodes = scene.node_ids().len();
        if self.scene.replace(scene).is_some() {
            self.debouncer.cancel_all();
            self.recorder.reset();
            log::info!("replaced attached scene ({nodes} nodes)");
        } else {
            log::info!("attached scene ({nodes} nodes)");
        }
    }

    /// Detach the scene, dropping pending tap actions and the first-frame
    /// guard. Returns the scene that was attached.
    pub fn detach_scene(&mut self) -> Option<S> {
        let scene = self.scene.take()?;
        self.debouncer.cancel_all();
        self.recorder.reset();
        log::info!("detached scene");
        Some(scene)
    }

    /// The attached scene.
    #[must_use]
    pub fn scene(&self) -> Option<&S> {
        self.scene.as_ref()
    }

    /// The attached scene, mutably.
    pub fn scene_mut(&mut self) -> Option<&mut S> {
        self.scene.as_mut()
    }

    /// The interaction observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The pose store.
    #[must_use]
    pub fn store(&self) -> &K {
        &self.store
    }

    /// The pose store, mutably (e.g. to flush it).
    pub fn store_mut(&mut self) -> &mut K {
        &mut self.store
    }

    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Options in use.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Update the viewport after a layout change.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.interpreter.set_viewport(viewport);
    }

    /// Rig transform for the current pose.
    #[must_use]
    pub fn camera_transform(&self) -> CameraTransform {
        CameraTransform::from_pose(&self.camera.pose(), &self.options.camera)
    }

    /// Point of view for the current pose and viewport.
    #[must_use]
    pub fn point_of_view(&self) -> PointOfView {
        self.camera_transform().point_of_view(
            self.options.camera.fovy,
            self.interpreter.viewport(),
        )
    }

    /// Pose to start from: the persisted one if all of it is in the store,
    /// the controller's own point of view otherwise.
    #[must_use]
    pub fn restored_pose(&self) -> PersistedPose {
        PersistedPose::read(&self.store)
            .unwrap_or_else(|| PersistedPose::from(&self.point_of_view()))
    }

    /// When [`tick`](Self::tick) next has work: the earliest pending tap
    /// action or the end of a running zoom animation.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.debouncer.next_deadline(),
            self.camera.animation_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Feed a raw gesture event.
    pub fn handle_gesture(
        &mut self,
        event: GestureEvent,
        now: Instant,
    ) -> EventStatus {
        if self.scene.is_none() {
            log::debug!("gesture {event:?} before a scene is attached");
            return EventStatus::NotReady;
        }
        let Some(intent) = self.interpreter.interpret(event) else {
            return EventStatus::Ignored;
        };

        let moved = match intent {
            Intent::BeginMoving => {
                let position = self.point_of_view().position;
                self.observer.began_moving(position);
                return EventStatus::Handled;
            }
            Intent::Rotate { delta, phase } => self.camera.rotate(delta, phase),
            Intent::Pan {
                delta,
                phase,
                source,
            } => {
                if source == PanSource::LongPress {
                    self.debouncer.cancel_all();
                }
                self.camera.pan(delta, phase)
            }
            Intent::Pinch { velocity } => self.camera.pinch(velocity),
            Intent::Tap { count, point } => {
                self.tap(count, point, now);
                return EventStatus::Handled;
            }
        };

        if moved {
            self.push_camera();
            EventStatus::Handled
        } else {
            EventStatus::Ignored
        }
    }

    /// Run due tap actions and advance the zoom animation.
    pub fn tick(&mut self, now: Instant) -> EventStatus {
        if self.scene.is_none() {
            return EventStatus::NotReady;
        }
        let actions = self.debouncer.take_due(now);
        let acted = !actions.is_empty();
        for action in actions {
            self.run(action, now);
        }

        let moved = self.camera.update(now);
        if moved {
            self.push_camera();
        }
        if acted || moved {
            EventStatus::Handled
        } else {
            EventStatus::Ignored
        }
    }

    /// A frame finished rendering with the renderer at `pov`.
    ///
    /// Syncs reserved-node visibility and, from the second frame on,
    /// persists `pov`.
    pub fn frame_rendered(&mut self, pov: &PointOfView) -> EventStatus {
        let Some(scene) = self.scene.as_mut() else {
            return EventStatus::NotReady;
        };
        for node in scene.node_ids() {
            let hidden = self.options.selection.is_hidden(&node);
            scene.set_node_hidden(&node, hidden);
        }
        if self.options.persistence.enabled {
            let _ = self
                .recorder
                .frame_rendered(&PersistedPose::from(pov), &mut self.store);
        }
        EventStatus::Handled
    }

    fn tap(&mut self, count: TapCount, point: Vec2, now: Instant) {
        match count {
            TapCount::Single => {
                let hits = self
                    .scene
                    .as_ref()
                    .map(|scene| scene.hit_test(point))
                    .unwrap_or_default();
                self.debouncer.single_tap(hits, now);
            }
            TapCount::Double => self.debouncer.double_tap(now),
            TapCount::Triple => {
                let action = self.debouncer.triple_tap();
                self.run(action, now);
            }
        }
    }

    fn run(&mut self, action: TapAction, now: Instant) {
        match action {
            TapAction::Select { hits } => self.resolve_selection(&hits),
            TapAction::ZoomIn => {
                let _ = self.camera.step_zoom(ZoomStep::In, now);
            }
            TapAction::ZoomOut => {
                let _ = self.camera.step_zoom(ZoomStep::Out, now);
            }
        }
    }

    fn resolve_selection(&mut self, hits: &[HitResult]) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let selection = &self.options.selection;
        if let Some(hit) = hits.first() {
            log::debug!("selected {} at {:.2}", hit.node, hit.distance);
            self.observer.item_selected(&hit.node);
            apply_highlight(scene, Some(hit.node.as_str()), selection);
        } else {
            log::debug!("tap on empty space, deselecting");
            self.observer.item_deselected();
            apply_highlight(scene, None, selection);
        }
    }

    fn push_camera(&mut self) {
        let transform = self.camera_transform();
        if let Some(scene) = self.scene.as_mut() {
            scene.apply_camera(&transform);
        }
    }
}
