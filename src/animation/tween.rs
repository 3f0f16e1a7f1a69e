use web_time::{Duration, Instant};

use crate::util::easing::EasingFunction;

/// A single scalar animated from `from` to `to` over a fixed duration.
///
/// Tweens are sampled, never stepped: the value at any instant depends only
/// on the start time, so a late or skipped tick never drifts the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl Tween {
    /// Start a tween at `start`.
    #[must_use]
    pub fn new(
        from: f32,
        to: f32,
        start: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Linear progress in [0, 1] at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased value at `now`. Returns exactly `to` once finished.
    #[must_use]
    pub fn sample(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        self.easing.interpolate(self.from, self.to, self.progress(now))
    }

    /// Whether the tween has reached its target at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Value the tween settles on.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Instant at which the tween settles.
    #[must_use]
    pub fn end(&self) -> Instant {
        self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_endpoints_and_midpoint() {
        let t0 = Instant::now();
        let tween = Tween::new(
            0.8,
            0.7,
            t0,
            Duration::from_millis(300),
            EasingFunction::Linear,
        );
        assert_eq!(tween.sample(t0), 0.8);
        let mid = tween.sample(t0 + Duration::from_millis(150));
        assert!((mid - 0.75).abs() < 1e-5);
        assert_eq!(tween.sample(t0 + Duration::from_millis(300)), 0.7);
        assert_eq!(tween.sample(t0 + Duration::from_secs(5)), 0.7);
        assert!(tween.is_finished(tween.end()));
    }

    #[test]
    fn test_zero_duration_is_immediately_finished() {
        let t0 = Instant::now();
        let tween =
            Tween::new(1.0, 2.0, t0, Duration::ZERO, EasingFunction::DEFAULT);
        assert!(tween.is_finished(t0));
        assert_eq!(tween.sample(t0), 2.0);
    }

    #[test]
    fn test_sampling_before_start_returns_origin() {
        let t0 = Instant::now();
        let tween = Tween::new(
            0.0,
            1.0,
            t0 + Duration::from_millis(100),
            Duration::from_millis(100),
            EasingFunction::Linear,
        );
        assert_eq!(tween.sample(t0), 0.0);
    }
}
