use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Platform-agnostic touch gesture events.
///
/// Hosts translate their recognizer callbacks into these and feed them to
/// [`OrbitController::handle_gesture`](crate::controller::OrbitController::handle_gesture).
/// Translations are cumulative since the gesture began, in view points;
/// locations are absolute view coordinates.
///
/// Serde uses a `kind` tag so replay scripts stay readable:
/// ```toml
/// gesture = { kind = "single_drag", phase = "changed", translation = [40.0, 0.0] }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GestureEvent {
    /// First finger touched down.
    TouchesBegan,
    /// One-finger drag: orbits the camera.
    SingleDrag {
        /// Recognizer phase.
        phase: GesturePhase,
        /// Translation since the drag began.
        translation: Vec2,
    },
    /// Two-finger drag: pans the camera.
    TwoFingerDrag {
        /// Recognizer phase.
        phase: GesturePhase,
        /// Translation since the drag began.
        translation: Vec2,
    },
    /// Press-and-hold followed by a drag: pans the camera.
    LongPress {
        /// Recognizer phase.
        phase: GesturePhase,
        /// Current press location.
        location: Vec2,
    },
    /// Pinch: zooms the camera.
    Pinch {
        /// Scale velocity reported by the recognizer (positive = spreading).
        velocity: f32,
    },
    /// One, two or three quick taps.
    Tap {
        /// How many taps the recognizer counted.
        count: TapCount,
        /// Location of the tap.
        location: Vec2,
    },
}

/// Lifecycle phase of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    /// Recognized; nothing moved yet.
    Began,
    /// Moved; apply as a live preview.
    Changed,
    /// Finished; apply and commit.
    Ended,
    /// Interrupted; drop the preview.
    Cancelled,
}

impl GesturePhase {
    /// Whether the phase carries movement that should be applied.
    #[must_use]
    pub fn applies_delta(self) -> bool {
        matches!(self, Self::Changed | Self::Ended)
    }

    /// Whether the phase finishes the gesture.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// Number of taps in a tap gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapCount {
    /// Select / deselect.
    Single,
    /// Zoom in one step.
    Double,
    /// Zoom out one step.
    Triple,
}

/// Size of the view the gestures are measured in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in view points.
    pub width: f32,
    /// Height in view points.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions can be divided by.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Width over height, or 1 for an unusable viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.is_usable() {
            self.width / self.height
        } else {
            1.0
        }
    }
}
