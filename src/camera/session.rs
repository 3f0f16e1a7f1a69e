use glam::Vec2;

use super::pose::{CameraPose, Facing};

/// Values committed at the end of the last gesture.
///
/// Gestures report translations relative to their own start, so every live
/// update is `last_* + delta`. Ending a gesture copies the working pose into
/// the session; cancelling one restores the pose from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Yaw ratio at the last orbit commit.
    pub last_yaw: f32,
    /// Pitch ratio at the last orbit commit.
    pub last_pitch: f32,
    /// Pan ratio at the last pan commit (or facing flip).
    pub last_pan: Vec2,
    /// Pivot offset at the last pan commit.
    pub last_offset: Vec2,
    /// Facing of the live pose.
    pub facing: Facing,
    /// Facing at the last orbit commit.
    pub committed_facing: Facing,
}

impl GestureSession {
    /// Session whose committed values equal `pose`.
    #[must_use]
    pub fn from_pose(pose: &CameraPose) -> Self {
        let facing = pose.facing();
        Self {
            last_yaw: pose.yaw_ratio,
            last_pitch: pose.pitch_ratio,
            last_pan: pose.pan,
            last_offset: pose.offset,
            facing,
            committed_facing: facing,
        }
    }

    /// Commit an orbit. Returns `true` when the facing flipped since the
    /// previous orbit commit, in which case the committed horizontal pan
    /// has been negated.
    pub fn commit_orbit(&mut self, pose: &CameraPose) -> bool {
        self.last_yaw = pose.yaw_ratio;
        self.last_pitch = pose.pitch_ratio;
        self.facing = pose.facing();

        let flipped = self.facing != self.committed_facing;
        if flipped {
            self.last_pan.x = -self.last_pan.x;
        }
        self.committed_facing = self.facing;
        flipped
    }

    /// Commit a pan.
    pub fn commit_pan(&mut self, pose: &CameraPose) {
        self.last_pan = pose.pan;
        self.last_offset = pose.offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;

    fn pose() -> CameraPose {
        CameraPose::initial(&CameraOptions::default())
    }

    #[test]
    fn test_commit_without_flip_keeps_pan() {
        let mut session = GestureSession::from_pose(&pose());
        session.last_pan = Vec2::new(0.3, 0.1);
        assert!(!session.commit_orbit(&pose().with_orbit(0.2, 0.0)));
        assert_eq!(session.last_pan, Vec2::new(0.3, 0.1));
        assert_eq!(session.last_yaw, 0.2);
    }

    #[test]
    fn test_flip_negates_committed_pan_x() {
        let mut session = GestureSession::from_pose(&pose());
        session.last_pan = Vec2::new(0.3, 0.1);

        assert!(session.commit_orbit(&pose().with_orbit(0.5, 0.0)));
        assert_eq!(session.facing, Facing::Back);
        assert_eq!(session.last_pan, Vec2::new(-0.3, 0.1));

        // Staying on the back side is not another flip.
        assert!(!session.commit_orbit(&pose().with_orbit(0.55, 0.0)));
        assert_eq!(session.last_pan, Vec2::new(-0.3, 0.1));

        // Coming round to the front flips back.
        assert!(session.commit_orbit(&pose().with_orbit(1.0, 0.0)));
        assert_eq!(session.last_pan, Vec2::new(0.3, 0.1));
    }
}
