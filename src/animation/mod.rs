//! Time-sampled animation helpers.

mod tween;

pub use tween::Tween;
