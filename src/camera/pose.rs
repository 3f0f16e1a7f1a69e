use std::f32::consts::{PI, TAU};

use glam::{EulerRot, Quat, Vec2};

use crate::options::CameraOptions;

/// Which side of the model faces the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    /// The model's front faces the camera.
    #[default]
    Front,
    /// The camera has orbited round to the model's back. Horizontal pan is
    /// mirrored.
    Back,
}

impl Facing {
    /// Facing for a yaw ratio. Only the fractional turn matters: the front
    /// is visible while `(yaw - round(yaw)) + 0.5` lies in [0.25, 0.75].
    #[must_use]
    pub fn from_yaw_ratio(yaw_ratio: f32) -> Self {
        let turn = (yaw_ratio - yaw_ratio.round()) + 0.5;
        if (0.25..=0.75).contains(&turn) {
            Self::Front
        } else {
            Self::Back
        }
    }

    /// Sign applied to horizontal pan when pushing it to the rig.
    #[must_use]
    pub fn pan_sign(self) -> f32 {
        match self {
            Self::Front => 1.0,
            Self::Back => -1.0,
        }
    }
}

/// The complete camera state, updated as a value.
///
/// `pan` holds the viewport-ratio pan the gestures work in; `offset` is the
/// zoom-compensated, facing-mirrored translation actually applied to the
/// orbit pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Yaw in turns. Unbounded: 1.0 and 0.0 look the same.
    pub yaw_ratio: f32,
    /// Pitch in half turns, clamped to the configured range.
    pub pitch_ratio: f32,
    /// Pan in viewport-height ratios, clamped to the pan bounds.
    pub pan: Vec2,
    /// Translation applied to the orbit pivot.
    pub offset: Vec2,
    /// Orthographic scale, clamped to the zoom range.
    pub zoom: f32,
}

impl CameraPose {
    /// Pose the camera starts in.
    #[must_use]
    pub fn initial(options: &CameraOptions) -> Self {
        Self {
            yaw_ratio: options.initial_yaw,
            pitch_ratio: options.clamp_pitch(options.initial_pitch),
            pan: Vec2::ZERO,
            offset: Vec2::ZERO,
            zoom: options.clamp_zoom(options.initial_zoom),
        }
    }

    /// Orbit yaw angle in radians (about Y).
    #[must_use]
    pub fn yaw_angle(&self) -> f32 {
        -TAU * self.yaw_ratio
    }

    /// Orbit pitch angle in radians (about X).
    #[must_use]
    pub fn pitch_angle(&self) -> f32 {
        -PI * self.pitch_ratio
    }

    /// Orbit orientation: yaw about Y, then pitch about the yawed X.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw_angle(), self.pitch_angle(), 0.0)
    }

    /// Which side of the model is visible.
    #[must_use]
    pub fn facing(&self) -> Facing {
        Facing::from_yaw_ratio(self.yaw_ratio)
    }

    /// Same pose with a new orbit.
    #[must_use]
    pub fn with_orbit(self, yaw_ratio: f32, pitch_ratio: f32) -> Self {
        Self {
            yaw_ratio,
            pitch_ratio,
            ..self
        }
    }

    /// Same pose with a new pan and applied offset.
    #[must_use]
    pub fn with_pan(self, pan: Vec2, offset: Vec2) -> Self {
        Self {
            pan,
            offset,
            ..self
        }
    }

    /// Same pose with a new zoom.
    #[must_use]
    pub fn with_zoom(self, zoom: f32) -> Self {
        Self { zoom, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_band_is_inclusive() {
        assert_eq!(Facing::from_yaw_ratio(0.0), Facing::Front);
        assert_eq!(Facing::from_yaw_ratio(0.25), Facing::Front);
        assert_eq!(Facing::from_yaw_ratio(-0.25), Facing::Front);
        assert_eq!(Facing::from_yaw_ratio(0.26), Facing::Back);
        assert_eq!(Facing::from_yaw_ratio(-0.26), Facing::Back);
        assert_eq!(Facing::from_yaw_ratio(0.5), Facing::Back);
    }

    #[test]
    fn test_facing_repeats_every_turn() {
        for yaw in [0.1_f32, 0.4, 0.6, 0.9] {
            assert_eq!(
                Facing::from_yaw_ratio(yaw),
                Facing::from_yaw_ratio(yaw + 2.0)
            );
        }
    }

    #[test]
    fn test_initial_pose_uses_options() {
        let pose = CameraPose::initial(&CameraOptions::default());
        assert_eq!(pose.yaw_ratio, 0.0);
        assert_eq!(pose.pitch_ratio, 0.2);
        assert_eq!(pose.zoom, 0.8);
        assert_eq!(pose.offset, Vec2::ZERO);
    }

    #[test]
    fn test_angles_follow_ratios() {
        let pose = CameraPose::initial(&CameraOptions::default())
            .with_orbit(0.5, -0.5);
        assert!((pose.yaw_angle() + PI).abs() < 1e-6);
        assert!((pose.pitch_angle() - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_orbit_is_identity() {
        let pose = CameraPose::initial(&CameraOptions::default())
            .with_orbit(0.0, 0.0);
        assert!(pose.orientation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }
}
