use glam::Vec2;
use web_time::Instant;

use super::pose::CameraPose;
use super::session::GestureSession;
use crate::animation::Tween;
use crate::input::GesturePhase;
use crate::options::CameraOptions;

/// Direction of a tap zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomStep {
    /// Double tap: smaller orthographic scale.
    In,
    /// Triple tap: larger orthographic scale.
    Out,
}

/// Clamp a working pan against the zoom-scaled bounds.
///
/// Returns the clamped pan and the horizontal zoom compensation factor:
/// `1 + zoom` normally, `1` once any axis has hit its bound.
#[must_use]
pub fn clamp_pan(pan: Vec2, zoom: f32, options: &CameraOptions) -> (Vec2, f32) {
    let mut pan = pan;
    let mut zoom_ratio = 1.0 + zoom;
    let scaled = pan * zoom_ratio;

    if scaled.y >= options.pan_up {
        zoom_ratio = 1.0;
        pan.y = options.pan_up;
    }
    if scaled.y <= options.pan_down {
        zoom_ratio = 1.0;
        pan.y = options.pan_down;
    }
    if scaled.x >= options.pan_right {
        zoom_ratio = 1.0;
        pan.x = options.pan_right;
    }
    if scaled.x <= options.pan_left {
        zoom_ratio = 1.0;
        pan.x = options.pan_left;
    }
    (pan, zoom_ratio)
}

/// Orbit camera state machine: rotation, pan and zoom with clamping.
///
/// All gesture deltas arrive as viewport ratios relative to the start of the
/// gesture (see [`GestureInterpreter`](crate::input::GestureInterpreter)).
/// `Changed` updates the live pose, `Ended` updates and commits it,
/// `Cancelled` restores the last commit.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    options: CameraOptions,
    pose: CameraPose,
    session: GestureSession,
    zoom_tween: Option<Tween>,
}

impl OrbitCamera {
    /// Create a camera in its initial pose.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        let pose = CameraPose::initial(&options);
        Self {
            session: GestureSession::from_pose(&pose),
            options,
            pose,
            zoom_tween: None,
        }
    }

    /// Current (live) pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Committed gesture state.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Camera limits in use.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Zoom the camera is heading to: the animation target while a zoom
    /// step runs, the live zoom otherwise.
    #[must_use]
    pub fn zoom_target(&self) -> f32 {
        self.zoom_tween.map_or(self.pose.zoom, |tween| tween.target())
    }

    /// Whether a zoom step animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.zoom_tween.is_some()
    }

    /// When the running zoom animation settles.
    #[must_use]
    pub fn animation_deadline(&self) -> Option<Instant> {
        self.zoom_tween.map(|tween| tween.end())
    }

    /// Orbit by `delta` (yaw ratio, pitch ratio) since the drag began.
    ///
    /// Pitch is clamped, yaw wraps freely. Ending the drag commits the orbit
    /// and, if the model's visible side flipped, mirrors the horizontal pan
    /// so the picture does not jump.
    ///
    /// Returns `true` if the pose changed.
    pub fn rotate(&mut self, delta: Vec2, phase: GesturePhase) -> bool {
        if phase == GesturePhase::Cancelled {
            self.pose = self
                .pose
                .with_orbit(self.session.last_yaw, self.session.last_pitch);
            self.session.facing = self.session.committed_facing;
            return true;
        }
        if !phase.applies_delta() {
            return false;
        }

        let yaw = self.session.last_yaw + delta.x;
        let pitch = self.options.clamp_pitch(self.session.last_pitch + delta.y);
        self.pose = self.pose.with_orbit(yaw, pitch);
        self.session.facing = self.pose.facing();

        if phase == GesturePhase::Ended {
            if self.session.commit_orbit(&self.pose) {
                let pan = Vec2::new(-self.pose.pan.x, self.pose.pan.y);
                self.pose = self.pose.with_pan(pan, self.pose.offset);
                log::debug!(
                    "orbit commit flipped facing to {:?}, pan x mirrored",
                    self.session.facing
                );
            }
            log::debug!(
                "orbit committed: yaw {:.3}, pitch {:.3}",
                self.pose.yaw_ratio,
                self.pose.pitch_ratio
            );
        }
        true
    }

    /// Pan by `delta` (height-normalized ratios) since the gesture began.
    ///
    /// Bounds are tested against the zoom-scaled pan. When a bound is hit
    /// the offending axis snaps to it and horizontal zoom compensation is
    /// dropped for this update. Horizontal offset is mirrored while the back
    /// of the model faces the viewer.
    ///
    /// Returns `true` if the pose changed.
    pub fn pan(&mut self, delta: Vec2, phase: GesturePhase) -> bool {
        if phase == GesturePhase::Cancelled {
            self.pose = self
                .pose
                .with_pan(self.session.last_pan, self.session.last_offset);
            return true;
        }
        if !phase.applies_delta() {
            return false;
        }

        let zoom = self.pose.zoom;
        let (pan, zoom_ratio) =
            clamp_pan(self.session.last_pan + delta, zoom, &self.options);
        let offset = Vec2::new(
            pan.x * zoom_ratio * self.session.facing.pan_sign(),
            pan.y * (1.0 + zoom),
        );
        self.pose = self.pose.with_pan(pan, offset);

        if phase == GesturePhase::Ended {
            self.session.commit_pan(&self.pose);
            log::debug!("pan committed: {:?}", self.pose.pan);
        }
        true
    }

    /// Zoom by pinch velocity. Velocities inside the dead zone are ignored.
    ///
    /// A pinch takes over from a running zoom step animation.
    ///
    /// Returns `true` if the zoom changed.
    pub fn pinch(&mut self, velocity: f32) -> bool {
        if velocity.abs() <= self.options.pinch_dead_zone {
            return false;
        }
        self.zoom_tween = None;

        let zoom = self
            .options
            .clamp_zoom(self.pose.zoom - velocity / self.options.pinch_attenuation);
        let changed = zoom != self.pose.zoom;
        self.pose = self.pose.with_zoom(zoom);
        changed
    }

    /// Start an animated zoom step from the current zoom target.
    ///
    /// Returns the zoom the animation will settle on.
    pub fn step_zoom(&mut self, step: ZoomStep, now: Instant) -> f32 {
        let amount = match step {
            ZoomStep::In => -self.options.zoom_step,
            ZoomStep::Out => self.options.zoom_step,
        };
        let target = self.options.clamp_zoom(self.zoom_target() + amount);
        self.zoom_tween = Some(Tween::new(
            self.pose.zoom,
            target,
            now,
            self.options.zoom_animation(),
            self.options.zoom_easing,
        ));
        log::debug!("zoom step {step:?} -> {target:.2}");
        target
    }

    /// Advance the zoom animation. Returns `true` if the zoom changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(tween) = self.zoom_tween else {
            return false;
        };
        let zoom = tween.sample(now);
        if tween.is_finished(now) {
            self.zoom_tween = None;
        }
        let changed = zoom != self.pose.zoom;
        self.pose = self.pose.with_zoom(zoom);
        changed
    }

    /// Jump any running animation to its end.
    pub fn settle(&mut self) {
        if let Some(tween) = self.zoom_tween.take() {
            self.pose = self.pose.with_zoom(tween.target());
        }
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::camera::pose::Facing;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(CameraOptions::default())
    }

    #[test]
    fn test_pitch_stays_in_range_for_any_drag() {
        let mut cam = camera();
        for dy in [-1000.0_f32, -3.0, -0.7, 0.0, 0.31, 0.9, 42.0] {
            let _ = cam.rotate(Vec2::new(0.0, dy), GesturePhase::Ended);
            let pitch = cam.pose().pitch_ratio;
            assert!((-0.5..=0.5).contains(&pitch), "pitch {pitch} for {dy}");
        }
    }

    #[test]
    fn test_began_is_a_no_op() {
        let mut cam = camera();
        assert!(!cam.rotate(Vec2::new(0.3, 0.3), GesturePhase::Began));
        assert!(!cam.pan(Vec2::new(0.3, 0.3), GesturePhase::Began));
        assert_eq!(cam.pose(), CameraPose::initial(cam.options()));
    }

    #[test]
    fn test_changed_previews_without_committing() {
        let mut cam = camera();
        assert!(cam.rotate(Vec2::new(0.1, 0.1), GesturePhase::Changed));
        assert_eq!(cam.pose().yaw_ratio, 0.1);
        assert_eq!(cam.session().last_yaw, 0.0);

        // The recognizer keeps reporting from the gesture start.
        let _ = cam.rotate(Vec2::new(0.2, 0.1), GesturePhase::Changed);
        assert_eq!(cam.pose().yaw_ratio, 0.2);

        let _ = cam.rotate(Vec2::new(0.2, 0.1), GesturePhase::Ended);
        assert_eq!(cam.session().last_yaw, 0.2);
        assert!((cam.session().last_pitch - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_cancel_restores_last_commit() {
        let mut cam = camera();
        let _ = cam.rotate(Vec2::new(0.1, 0.0), GesturePhase::Ended);
        let _ = cam.rotate(Vec2::new(0.4, 0.2), GesturePhase::Changed);
        assert!(cam.rotate(Vec2::ZERO, GesturePhase::Cancelled));
        assert_eq!(cam.pose().yaw_ratio, 0.1);
        assert_eq!(cam.pose().pitch_ratio, 0.2);

        let _ = cam.pan(Vec2::new(0.1, 0.1), GesturePhase::Changed);
        assert!(cam.pan(Vec2::ZERO, GesturePhase::Cancelled));
        assert_eq!(cam.pose().pan, Vec2::ZERO);
        assert_eq!(cam.pose().offset, Vec2::ZERO);
    }

    #[test]
    fn test_pan_applies_zoom_compensation_inside_bounds() {
        let mut cam = camera();
        let _ = cam.pan(Vec2::new(0.1, 0.2), GesturePhase::Ended);
        let pose = cam.pose();
        assert_eq!(pose.pan, Vec2::new(0.1, 0.2));
        assert!((pose.offset.x - 0.18).abs() < 1e-6);
        assert!((pose.offset.y - 0.36).abs() < 1e-6);
    }

    #[test]
    fn test_pan_clamp_hits_bound_and_is_idempotent() {
        let mut cam = camera();
        let _ = cam.pan(Vec2::new(5.0, 0.0), GesturePhase::Changed);
        assert_eq!(cam.pose().pan.x, 0.8);
        // Zoom compensation is dropped while clamped.
        assert_eq!(cam.pose().offset.x, 0.8);

        let _ = cam.pan(Vec2::new(5.0, 0.0), GesturePhase::Changed);
        assert_eq!(cam.pose().pan.x, 0.8);
        let _ = cam.pan(Vec2::new(5.0, 0.0), GesturePhase::Ended);
        assert_eq!(cam.session().last_pan.x, 0.8);

        // A second gesture pushing further stays on the bound.
        let _ = cam.pan(Vec2::new(5.0, 0.0), GesturePhase::Ended);
        assert_eq!(cam.pose().pan.x, 0.8);
    }

    #[test]
    fn test_pan_clamps_each_bound() {
        let options = CameraOptions::default();
        let (pan, ratio) = clamp_pan(Vec2::new(0.0, 9.0), 0.5, &options);
        assert_eq!((pan.y, ratio), (1.0, 1.0));
        let (pan, _) = clamp_pan(Vec2::new(0.0, -9.0), 0.5, &options);
        assert_eq!(pan.y, -1.0);
        let (pan, _) = clamp_pan(Vec2::new(-9.0, 0.0), 0.5, &options);
        assert_eq!(pan.x, -0.8);
        let (pan, ratio) = clamp_pan(Vec2::new(0.1, 0.1), 0.5, &options);
        assert_eq!((pan, ratio), (Vec2::new(0.1, 0.1), 1.5));
    }

    #[test]
    fn test_back_facing_mirrors_pan_and_flip_keeps_picture_still() {
        let mut cam = camera();
        let _ = cam.pan(Vec2::new(0.1, 0.0), GesturePhase::Ended);
        let offset_before = cam.pose().offset;

        let _ = cam.rotate(Vec2::new(0.5, 0.0), GesturePhase::Ended);
        assert_eq!(cam.session().facing, Facing::Back);
        assert_eq!(cam.session().last_pan.x, -0.1);
        assert_eq!(cam.pose().pan.x, -0.1);
        assert_eq!(cam.pose().offset, offset_before);

        // Continuing to pan from the mirrored commit is continuous.
        let _ = cam.pan(Vec2::ZERO, GesturePhase::Changed);
        assert!(cam.pose().offset.abs_diff_eq(offset_before, 1e-6));

        // Dragging right while back-facing moves the pivot the other way.
        let _ = cam.pan(Vec2::new(0.05, 0.0), GesturePhase::Changed);
        assert!(cam.pose().offset.x < offset_before.x);
    }

    #[test]
    fn test_facing_toggles_at_band_boundary_only_on_commit_flip() {
        let mut cam = camera();
        let _ = cam.rotate(Vec2::new(0.25, 0.0), GesturePhase::Ended);
        assert_eq!(cam.session().facing, Facing::Front);
        let _ = cam.rotate(Vec2::new(0.02, 0.0), GesturePhase::Changed);
        assert_eq!(cam.session().facing, Facing::Back);
        // Not committed yet.
        assert_eq!(cam.session().committed_facing, Facing::Front);
    }

    #[test]
    fn test_pinch_dead_zone_and_clamp() {
        let mut cam = camera();
        assert!(!cam.pinch(0.4));
        assert!(!cam.pinch(-0.4));
        assert!(!cam.pinch(0.1));
        assert_eq!(cam.pose().zoom, 0.8);

        assert!(cam.pinch(7.0));
        assert!((cam.pose().zoom - 0.7).abs() < 1e-6);

        for _ in 0..100 {
            let _ = cam.pinch(30.0);
        }
        assert_eq!(cam.pose().zoom, 0.1);

        for _ in 0..100 {
            let _ = cam.pinch(-30.0);
        }
        assert_eq!(cam.pose().zoom, 0.8);
        // Already at the limit: no change reported.
        assert!(!cam.pinch(-30.0));
    }

    #[test]
    fn test_zoom_step_animates_and_clamps() {
        let mut cam = camera();
        let t0 = Instant::now();

        let target = cam.step_zoom(ZoomStep::In, t0);
        assert!((target - 0.7).abs() < 1e-6);
        assert!(cam.is_animating());
        assert_eq!(cam.pose().zoom, 0.8);

        assert!(cam.update(t0 + Duration::from_millis(165)));
        let mid = cam.pose().zoom;
        assert!(mid < 0.8 && mid > 0.7);

        let _ = cam.update(t0 + Duration::from_millis(400));
        assert!(!cam.is_animating());
        assert!((cam.pose().zoom - 0.7).abs() < 1e-6);

        let out = cam.step_zoom(ZoomStep::Out, t0);
        assert!((out - 0.8).abs() < 1e-6);
        let out = cam.step_zoom(ZoomStep::Out, t0);
        assert_eq!(out, 0.8);
    }

    #[test]
    fn test_zoom_steps_stack_on_target() {
        let mut cam = camera();
        let t0 = Instant::now();
        let _ = cam.step_zoom(ZoomStep::In, t0);
        let second = cam.step_zoom(ZoomStep::In, t0);
        assert!((second - 0.6).abs() < 1e-5);
        for _ in 0..10 {
            let _ = cam.step_zoom(ZoomStep::In, t0);
        }
        cam.settle();
        assert_eq!(cam.pose().zoom, 0.1);
    }

    #[test]
    fn test_pinch_interrupts_zoom_step() {
        let mut cam = camera();
        let t0 = Instant::now();
        let _ = cam.step_zoom(ZoomStep::In, t0);
        assert!(cam.pinch(7.0));
        assert!(!cam.is_animating());
        assert!(!cam.update(t0 + Duration::from_secs(1)));
    }
}
