//! Input handling: gesture event types and the interpreter that turns raw
//! recognizer callbacks into camera and tap intents.

/// Platform-agnostic gesture events.
pub mod event;
/// Converts raw events into intents.
pub mod processor;

pub use event::{GestureEvent, GesturePhase, TapCount, Viewport};
pub use processor::{GestureInterpreter, Intent, PanSource};
