//! Orbit camera for model viewing.
//!
//! Provides the pose value, the committed gesture session, the clamping
//! state machine that applies orbit, pan and zoom, and the rig that turns a
//! pose into renderer transforms.

/// Orbit camera state machine (rotate, pan, pinch, zoom steps).
pub mod controller;
/// Camera pose value and facing.
pub mod pose;
/// Renderer transform and point of view derived from a pose.
pub mod rig;
/// Values committed at the end of each gesture.
pub mod session;

pub use controller::{OrbitCamera, ZoomStep};
pub use pose::{CameraPose, Facing};
pub use rig::{CameraTransform, PointOfView};
pub use session::GestureSession;
