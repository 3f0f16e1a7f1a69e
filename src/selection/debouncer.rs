//! Tap coalescing with cancelable delayed actions.
//!
//! A single tap cannot act straight away because it may be the first half
//! of a double tap, and a double tap may be the first two thirds of a
//! triple. Each tap kind therefore parks its action in a slot with a
//! deadline; a higher tap count empties the lower slots before anything
//! fires. Slots are only drained by [`TapDebouncer::take_due`], which runs
//! on the same thread as the taps, so a cancelled action can never run.

use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

use crate::input::TapCount;
use crate::options::SelectionOptions;
use crate::scene::HitResult;

/// What a resolved tap does.
#[derive(Debug, Clone, PartialEq)]
pub enum TapAction {
    /// Select the nearest hit, or deselect when `hits` is empty.
    Select {
        /// Hit-test result captured when the tap arrived.
        hits: Vec<HitResult>,
    },
    /// Zoom in one step.
    ZoomIn,
    /// Zoom out one step.
    ZoomOut,
}

#[derive(Debug, Clone)]
struct Pending {
    action: TapAction,
    deadline: Instant,
}

/// Holds at most one pending action per tap count.
#[derive(Debug, Clone)]
pub struct TapDebouncer {
    single_delay: Duration,
    double_delay: Duration,
    pending: FxHashMap<TapCount, Pending>,
}

impl TapDebouncer {
    /// Create a debouncer with explicit delays.
    #[must_use]
    pub fn new(single_delay: Duration, double_delay: Duration) -> Self {
        Self {
            single_delay,
            double_delay,
            pending: FxHashMap::default(),
        }
    }

    /// Create a debouncer from selection options.
    #[must_use]
    pub fn from_options(options: &SelectionOptions) -> Self {
        Self::new(options.single_tap_delay(), options.double_tap_delay())
    }

    /// A single tap arrived. `hits` is captured now and acted on once the
    /// single-tap delay passes without a double tap.
    pub fn single_tap(&mut self, hits: Vec<HitResult>, now: Instant) {
        let deadline = now + self.single_delay;
        self.park(TapCount::Single, TapAction::Select { hits }, deadline);
    }

    /// A double tap arrived: drop the pending selection and park a zoom-in
    /// that a triple tap can still cancel.
    pub fn double_tap(&mut self, now: Instant) {
        let _ = self.cancel(TapCount::Single);
        let deadline = now + self.double_delay;
        self.park(TapCount::Double, TapAction::ZoomIn, deadline);
    }

    /// A triple tap arrived: drop everything pending. The returned zoom-out
    /// applies immediately.
    #[must_use]
    pub fn triple_tap(&mut self) -> TapAction {
        self.cancel_all();
        TapAction::ZoomOut
    }

    /// Cancel the pending action for `count`. Returns whether one existed.
    pub fn cancel(&mut self, count: TapCount) -> bool {
        let cancelled = self.pending.remove(&count).is_some();
        if cancelled {
            log::debug!("cancelled pending {count:?} tap");
        }
        cancelled
    }

    /// Cancel every pending action.
    pub fn cancel_all(&mut self) {
        let _ = self.cancel(TapCount::Single);
        let _ = self.cancel(TapCount::Double);
    }

    /// Whether an action is parked for `count`.
    #[must_use]
    pub fn is_pending(&self, count: TapCount) -> bool {
        self.pending.contains_key(&count)
    }

    /// Earliest deadline among pending actions.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    /// Remove and return every action whose deadline has passed, earliest
    /// first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TapAction> {
        let mut due: Vec<(Instant, TapCount)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(count, p)| (p.deadline, *count))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        due.into_iter()
            .filter_map(|(_, count)| self.pending.remove(&count))
            .map(|p| p.action)
            .collect()
    }

    fn park(&mut self, count: TapCount, action: TapAction, deadline: Instant) {
        if self
            .pending
            .insert(count, Pending { action, deadline })
            .is_some()
        {
            log::debug!("replaced pending {count:?} tap");
        } else {
            log::debug!("scheduled {count:?} tap");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn debouncer() -> TapDebouncer {
        TapDebouncer::from_options(&SelectionOptions::default())
    }

    fn liver() -> Vec<HitResult> {
        vec![HitResult {
            node: "Liver".to_owned(),
            distance: 14.0,
        }]
    }

    #[test]
    fn test_single_tap_fires_after_delay() {
        let mut d = debouncer();
        let t0 = Instant::now();
        d.single_tap(liver(), t0);
        assert!(d.take_due(t0 + ms(332)).is_empty());
        assert_eq!(d.next_deadline(), Some(t0 + ms(333)));
        assert_eq!(
            d.take_due(t0 + ms(333)),
            vec![TapAction::Select { hits: liver() }]
        );
        assert!(!d.is_pending(TapCount::Single));
        assert!(d.take_due(t0 + ms(1000)).is_empty());
    }

    #[test]
    fn test_double_tap_cancels_single() {
        let mut d = debouncer();
        let t0 = Instant::now();
        d.single_tap(liver(), t0);
        d.double_tap(t0 + ms(150));
        assert!(!d.is_pending(TapCount::Single));
        assert!(d.take_due(t0 + ms(349)).is_empty());
        assert_eq!(d.take_due(t0 + ms(350)), vec![TapAction::ZoomIn]);
        assert!(d.take_due(t0 + ms(2000)).is_empty());
    }

    #[test]
    fn test_triple_tap_cancels_everything() {
        let mut d = debouncer();
        let t0 = Instant::now();
        d.single_tap(liver(), t0);
        d.double_tap(t0 + ms(100));
        assert_eq!(d.triple_tap(), TapAction::ZoomOut);
        assert_eq!(d.next_deadline(), None);
        assert!(d.take_due(t0 + ms(5000)).is_empty());
    }

    #[test]
    fn test_new_single_tap_replaces_old_one() {
        let mut d = debouncer();
        let t0 = Instant::now();
        d.single_tap(liver(), t0);
        d.single_tap(Vec::new(), t0 + ms(100));
        assert!(d.take_due(t0 + ms(333)).is_empty());
        assert_eq!(
            d.take_due(t0 + ms(433)),
            vec![TapAction::Select { hits: Vec::new() }]
        );
    }

    #[test]
    fn test_due_actions_come_out_in_deadline_order() {
        let mut d = TapDebouncer::new(ms(300), ms(100));
        let t0 = Instant::now();
        // Single parked at 300, then a double at 50 (cancels the single),
        // then a fresh single at 60 (deadline 360).
        d.single_tap(liver(), t0);
        d.double_tap(t0 + ms(50));
        d.single_tap(Vec::new(), t0 + ms(60));
        let due = d.take_due(t0 + ms(400));
        assert_eq!(
            due,
            vec![TapAction::ZoomIn, TapAction::Select { hits: Vec::new() }]
        );
    }

    #[test]
    fn test_cancel_reports_whether_anything_was_pending() {
        let mut d = debouncer();
        assert!(!d.cancel(TapCount::Double));
        d.double_tap(Instant::now());
        assert!(d.cancel(TapCount::Double));
    }
}
