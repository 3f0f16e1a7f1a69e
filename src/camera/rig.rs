use glam::{Quat, Vec2, Vec3};

use super::pose::CameraPose;
use crate::input::Viewport;
use crate::options::CameraOptions;

/// Transform pushed to the renderer each time the pose changes.
///
/// The rig is a pivot node carrying the pan offset and orbit rotation, with
/// an orthographic camera child sitting `distance` along the pivot's +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// Pivot translation (pan offset, z = 0).
    pub pivot_translation: Vec3,
    /// Pivot rotation (yaw then pitch).
    pub pivot_rotation: Quat,
    /// Camera distance from the pivot.
    pub distance: f32,
    /// Orthographic scale.
    pub ortho_scale: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl CameraTransform {
    /// Build the rig transform for `pose`.
    #[must_use]
    pub fn from_pose(pose: &CameraPose, options: &CameraOptions) -> Self {
        Self {
            pivot_translation: pose.offset.extend(0.0),
            pivot_rotation: pose.orientation(),
            distance: options.orbit_distance,
            ortho_scale: pose.zoom,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// World-space camera position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.pivot_translation + self.pivot_rotation * (Vec3::Z * self.distance)
    }

    /// Point of view for a viewport with vertical fov `fovy` (degrees).
    #[must_use]
    pub fn point_of_view(&self, fovy: f32, viewport: Viewport) -> PointOfView {
        PointOfView {
            position: self.eye(),
            rotation: self.pivot_rotation,
            fov: Vec2::new(horizontal_fov(fovy, viewport.aspect()), fovy),
        }
    }
}

/// Where the renderer's camera is after a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOfView {
    /// World-space position.
    pub position: Vec3,
    /// World-space rotation.
    pub rotation: Quat,
    /// Horizontal and vertical field of view in degrees.
    pub fov: Vec2,
}

/// Horizontal fov (degrees) matching vertical fov `fovy` at `aspect`.
#[must_use]
pub fn horizontal_fov(fovy: f32, aspect: f32) -> f32 {
    let half = (fovy.to_radians() * 0.5).tan() * aspect;
    (2.0 * half.atan()).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_pose_looks_down_negative_z_from_distance() {
        let options = CameraOptions::default();
        let pose = CameraPose::initial(&options).with_orbit(0.0, 0.0);
        let rig = CameraTransform::from_pose(&pose, &options);
        assert!(rig.eye().abs_diff_eq(Vec3::new(0.0, 0.0, 15.0), 1e-5));
        assert_eq!(rig.ortho_scale, 0.8);
    }

    #[test]
    fn test_half_turn_moves_camera_behind() {
        let options = CameraOptions::default();
        let pose = CameraPose::initial(&options).with_orbit(0.5, 0.0);
        let rig = CameraTransform::from_pose(&pose, &options);
        assert!(rig.eye().abs_diff_eq(Vec3::new(0.0, 0.0, -15.0), 1e-4));
    }

    #[test]
    fn test_pan_offset_translates_pivot() {
        let options = CameraOptions::default();
        let pose = CameraPose::initial(&options)
            .with_orbit(0.0, 0.0)
            .with_pan(Vec2::new(0.1, 0.2), Vec2::new(0.18, 0.36));
        let rig = CameraTransform::from_pose(&pose, &options);
        assert!(rig.eye().abs_diff_eq(Vec3::new(0.18, 0.36, 15.0), 1e-5));
    }

    #[test]
    fn test_square_viewport_has_equal_fovs() {
        assert!((horizontal_fov(60.0, 1.0) - 60.0).abs() < 1e-3);
        assert!(horizontal_fov(60.0, 2.0) > 60.0);
    }
}
