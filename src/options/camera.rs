use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit ranges, zoom limits and pan bounds for the orbit camera.
///
/// Rotation and pan values are ratios of the viewport, zoom is the
/// orthographic scale (smaller = closer).
pub struct CameraOptions {
    /// Yaw ratio the camera starts at (1.0 = one full turn).
    #[schemars(skip)]
    pub initial_yaw: f32,
    /// Pitch ratio the camera starts at.
    #[schemars(skip)]
    pub initial_pitch: f32,
    /// Lowest pitch ratio (-0.5 = looking straight up from below).
    #[schemars(skip)]
    pub pitch_min: f32,
    /// Highest pitch ratio.
    #[schemars(skip)]
    pub pitch_max: f32,
    /// Orthographic scale the camera starts at.
    #[schemars(skip)]
    pub initial_zoom: f32,
    /// Closest allowed orthographic scale.
    #[schemars(title = "Zoom Min", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_min: f32,
    /// Farthest allowed orthographic scale.
    #[schemars(title = "Zoom Max", range(min = 0.1, max = 5.0), extend("step" = 0.05))]
    pub zoom_max: f32,
    /// Pinch velocities with magnitude at or below this are ignored.
    #[schemars(title = "Pinch Dead Zone", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub pinch_dead_zone: f32,
    /// Divisor applied to pinch velocity (1 = very fast, 100 = very slow).
    #[schemars(title = "Pinch Attenuation", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub pinch_attenuation: f32,
    /// Orthographic scale change of one double/triple tap.
    #[schemars(title = "Zoom Step", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_step: f32,
    /// Duration of a tap zoom step animation in milliseconds.
    #[schemars(skip)]
    pub zoom_animation_ms: u64,
    /// Curve used for tap zoom step animations.
    #[schemars(skip)]
    pub zoom_easing: EasingFunction,
    /// Upper pan bound (vertical, zoom-scaled).
    #[schemars(skip)]
    pub pan_up: f32,
    /// Lower pan bound (vertical, zoom-scaled).
    #[schemars(skip)]
    pub pan_down: f32,
    /// Right pan bound (horizontal, zoom-scaled).
    #[schemars(skip)]
    pub pan_right: f32,
    /// Left pan bound (horizontal, zoom-scaled).
    #[schemars(skip)]
    pub pan_left: f32,
    /// Distance of the camera from the orbit pivot.
    #[schemars(skip)]
    pub orbit_distance: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
}

impl CameraOptions {
    /// Tap zoom step animation duration.
    #[must_use]
    pub fn zoom_animation(&self) -> Duration {
        Duration::from_millis(self.zoom_animation_ms)
    }

    /// Clamp an orthographic scale into the configured zoom range.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.zoom_min, self.zoom_max)
    }

    /// Clamp a pitch ratio into the configured range.
    #[must_use]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(self.pitch_min, self.pitch_max)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            initial_yaw: 0.0,
            initial_pitch: 0.2,
            pitch_min: -0.5,
            pitch_max: 0.5,
            initial_zoom: 0.8,
            zoom_min: 0.1,
            zoom_max: 0.8,
            pinch_dead_zone: 0.4,
            pinch_attenuation: 70.0,
            zoom_step: 0.1,
            zoom_animation_ms: 330,
            zoom_easing: EasingFunction::Linear,
            pan_up: 1.0,
            pan_down: -1.0,
            pan_right: 0.8,
            pan_left: -0.8,
            orbit_distance: 15.0,
            znear: 1.0,
            zfar: 100.0,
            fovy: 60.0,
        }
    }
}
