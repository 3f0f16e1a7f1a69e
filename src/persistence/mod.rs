//! Point-of-view persistence.
//!
//! After every rendered frame (except the first, which still shows the
//! renderer's default camera) the point of view is written to a flat
//! key-value store as nine floats. Writes are unconditional and
//! last-write-wins.

mod file;
mod memory;

use glam::{Quat, Vec2, Vec3};

use crate::camera::PointOfView;

pub use file::TomlFileStore;
pub use memory::MemoryStore;

/// Flat float key-value store, in the spirit of platform user defaults.
pub trait PoseStore {
    /// Overwrite `key`.
    fn set(&mut self, key: &str, value: f32);

    /// Read `key`, if it was ever written.
    fn get(&self, key: &str) -> Option<f32>;
}

/// Store keys, in field order.
pub mod keys {
    /// Position x.
    pub const POSITION_X: &str = "scene_position_x";
    /// Position y.
    pub const POSITION_Y: &str = "scene_position_y";
    /// Position z.
    pub const POSITION_Z: &str = "scene_position_z";
    /// Rotation quaternion x.
    pub const ROTATION_X: &str = "scene_rotation_x";
    /// Rotation quaternion y.
    pub const ROTATION_Y: &str = "scene_rotation_y";
    /// Rotation quaternion z.
    pub const ROTATION_Z: &str = "scene_rotation_z";
    /// Rotation quaternion w.
    pub const ROTATION_W: &str = "scene_rotation_w";
    /// Horizontal field of view.
    pub const FOV_X: &str = "scene_fov_x";
    /// Vertical field of view.
    pub const FOV_Y: &str = "scene_fov_y";

    /// All nine keys.
    pub const ALL: [&str; 9] = [
        POSITION_X, POSITION_Y, POSITION_Z, ROTATION_X, ROTATION_Y,
        ROTATION_Z, ROTATION_W, FOV_X, FOV_Y,
    ];
}

/// The nine persisted fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistedPose {
    /// Camera position.
    pub position: Vec3,
    /// Camera rotation.
    pub rotation: Quat,
    /// Horizontal and vertical field of view in degrees.
    pub fov: Vec2,
}

impl PersistedPose {
    /// Fields in [`keys::ALL`] order.
    #[must_use]
    pub fn fields(&self) -> [f32; 9] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.rotation.w,
            self.fov.x,
            self.fov.y,
        ]
    }

    /// Overwrite all nine fields in `store`.
    pub fn write<K: PoseStore + ?Sized>(&self, store: &mut K) {
        for (key, value) in keys::ALL.into_iter().zip(self.fields()) {
            store.set(key, value);
        }
    }

    /// Read a pose back. `None` unless all nine fields are present.
    #[must_use]
    pub fn read<K: PoseStore + ?Sized>(store: &K) -> Option<Self> {
        let mut fields = [0.0_f32; 9];
        for (slot, key) in fields.iter_mut().zip(keys::ALL) {
            *slot = store.get(key)?;
        }
        let [px, py, pz, rx, ry, rz, rw, fx, fy] = fields;
        Some(Self {
            position: Vec3::new(px, py, pz),
            rotation: Quat::from_xyzw(rx, ry, rz, rw),
            fov: Vec2::new(fx, fy),
        })
    }
}

impl From<&PointOfView> for PersistedPose {
    fn from(pov: &PointOfView) -> Self {
        Self {
            position: pov.position,
            rotation: pov.rotation,
            fov: pov.fov,
        }
    }
}

/// Skips the first rendered frame, then writes every frame.
#[derive(Debug, Clone, Default)]
pub struct PoseRecorder {
    initialized: bool,
    writes: u64,
}

impl PoseRecorder {
    /// Recorder that has not seen a frame yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a rendered frame. Returns `true` if the pose was written.
    pub fn frame_rendered<K: PoseStore + ?Sized>(
        &mut self,
        pose: &PersistedPose,
        store: &mut K,
    ) -> bool {
        if !self.initialized {
            self.initialized = true;
            log::trace!("first frame rendered, pose not persisted");
            return false;
        }
        pose.write(store);
        self.writes += 1;
        log::trace!("persisted pose #{}: {:?}", self.writes, pose.position);
        true
    }

    /// Whether the first frame has been seen.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of frames persisted so far.
    #[must_use]
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Forget the first frame, e.g. after the scene is detached.
    pub fn reset(&mut self) {
        self.initialized = false;
    }
}
