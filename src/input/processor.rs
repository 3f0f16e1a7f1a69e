//! Converts raw gesture events into camera and tap intents.
//!
//! The `GestureInterpreter` owns the only input state that is not part of
//! the camera: the viewport used for normalization and the origin of an
//! in-flight long press. Everything it emits is expressed as a ratio of the
//! viewport, relative to the start of the gesture.

use glam::Vec2;

use super::event::{GestureEvent, GesturePhase, TapCount, Viewport};

/// Which recognizer produced a pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanSource {
    /// Two-finger drag.
    TwoFinger,
    /// Long-press drag. Also cancels pending taps.
    LongPress,
}

/// A normalized interaction, ready for the camera or the tap debouncer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// A touch sequence started.
    BeginMoving,
    /// Orbit by a yaw/pitch ratio delta since the drag began.
    Rotate {
        /// `x` = yaw ratio (width-normalized), `y` = pitch ratio
        /// (height-normalized).
        delta: Vec2,
        /// Recognizer phase.
        phase: GesturePhase,
    },
    /// Pan by a ratio delta since the gesture began.
    Pan {
        /// Both axes are normalized by the view height.
        delta: Vec2,
        /// Recognizer phase.
        phase: GesturePhase,
        /// Recognizer that produced the pan.
        source: PanSource,
    },
    /// Pinch with the raw recognizer velocity.
    Pinch {
        /// Scale velocity.
        velocity: f32,
    },
    /// A tap to debounce.
    Tap {
        /// Tap count.
        count: TapCount,
        /// View location of the tap.
        point: Vec2,
    },
}

/// Converts [`GestureEvent`]s into [`Intent`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(intent) = interpreter.interpret(event) {
///     controller.apply(intent);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    viewport: Viewport,
    /// Location where the current long press started.
    long_press_origin: Option<Vec2>,
}

impl GestureInterpreter {
    /// Create an interpreter measuring gestures against `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            long_press_origin: None,
        }
    }

    /// Viewport used for normalization.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport after a layout change.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Whether a long press is currently being tracked.
    #[must_use]
    pub fn long_press_active(&self) -> bool {
        self.long_press_origin.is_some()
    }

    /// Process a raw gesture event.
    ///
    /// Returns `None` when movement cannot be normalized: a zero or
    /// non-finite viewport, or a non-finite translation or velocity.
    pub fn interpret(&mut self, event: GestureEvent) -> Option<Intent> {
        match event {
            GestureEvent::TouchesBegan => Some(Intent::BeginMoving),
            GestureEvent::SingleDrag { phase, translation } => {
                let delta = self.orbit_ratio(translation)?;
                Some(Intent::Rotate { delta, phase })
            }
            GestureEvent::TwoFingerDrag { phase, translation } => {
                let delta = self.pan_ratio(translation)?;
                Some(Intent::Pan {
                    delta,
                    phase,
                    source: PanSource::TwoFinger,
                })
            }
            GestureEvent::LongPress { phase, location } => {
                self.long_press(phase, location)
            }
            GestureEvent::Pinch { velocity } => {
                velocity.is_finite().then_some(Intent::Pinch { velocity })
            }
            GestureEvent::Tap { count, location } => Some(Intent::Tap {
                count,
                point: location,
            }),
        }
    }

    /// Long press: synthesize a translation from the first press location.
    fn long_press(
        &mut self,
        phase: GesturePhase,
        location: Vec2,
    ) -> Option<Intent> {
        if !location.is_finite() {
            if phase.is_terminal() {
                self.long_press_origin = None;
            }
            return None;
        }
        let origin = *self.long_press_origin.get_or_insert(location);
        if phase.is_terminal() {
            self.long_press_origin = None;
        }
        let delta = self.pan_ratio(location - origin)?;
        Some(Intent::Pan {
            delta,
            phase,
            source: PanSource::LongPress,
        })
    }

    /// Orbit ratios: x by width, y by height.
    fn orbit_ratio(&self, translation: Vec2) -> Option<Vec2> {
        self.usable_for(translation).then(|| {
            Vec2::new(
                translation.x / self.viewport.width,
                translation.y / self.viewport.height,
            )
        })
    }

    /// Pan ratios: both axes by height, so a pan of one view height moves
    /// the same distance horizontally and vertically.
    fn pan_ratio(&self, translation: Vec2) -> Option<Vec2> {
        self.usable_for(translation)
            .then(|| translation / self.viewport.height)
    }

    fn usable_for(&self, translation: Vec2) -> bool {
        self.viewport.is_usable() && translation.is_finite()
    }
}
