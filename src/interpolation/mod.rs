//! Interpolator base: time accounting shared by every concrete
//! interpolator, and the concrete position/angle/scale interpolators
//! built on top of it.

pub mod angle;
pub mod position;
pub mod scale;

use crate::property::PropertyValue;

/// `(elapsed, delay, duration)` time bookkeeping, with invariant
/// `duration >= 0`, `delay >= 0`.
///
/// `Advance` and `SetMaxDuration` are the only mutators; everything
/// else derives `t` and `finished` from the three fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeState {
    elapsed: f64,
    delay: f64,
    duration: f64,
}

impl TimeState {
    pub fn new(duration: f64, delay: f64) -> Self {
        debug_assert!(duration >= 0.0, "interpolator duration must be non-negative");
        debug_assert!(delay >= 0.0, "interpolator delay must be non-negative");
        Self {
            elapsed: 0.0,
            delay,
            duration,
        }
    }

    pub fn advance(&mut self, dt: f64) {
        debug_assert!(dt >= 0.0, "Advance requires a non-negative dt");
        self.elapsed += dt.max(0.0);
    }

    /// Never grows `duration`; used by the scheduler to cap a long
    /// animation so it finishes alongside a shorter peer.
    pub fn set_max_duration(&mut self, max: f64) {
        self.duration = self.duration.min(max);
    }

    /// Normalized progress. Returns `1.0` once finished, otherwise
    /// `max(elapsed - delay, 0) / duration` clamped to `[0, 1]`.
    pub fn t(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed > self.delay + self.duration
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Forces this interpolator to its terminal state immediately, for
    /// `Animation::interrupt`.
    pub fn force_finish(&mut self) {
        self.elapsed = self.delay + self.duration + f64::EPSILON.max(1e-9);
    }
}

/// Shared contract for every concrete interpolator.
pub trait Interpolator {
    fn advance(&mut self, dt: f64);
    fn set_max_duration(&mut self, max: f64);
    fn t(&self) -> f64;
    fn is_finished(&self) -> bool;
    fn duration(&self) -> f64;
    fn elapsed(&self) -> f64;
    fn interrupt(&mut self);
}

/// An [`Interpolator`] that also knows how to read its current value
/// as a tagged [`PropertyValue`].
pub trait ValuedInterpolator: Interpolator {
    fn value(&self) -> PropertyValue;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_monotonic_under_advance() {
        let mut t = TimeState::new(1.0, 0.0);
        let mut last = t.t();
        for _ in 0..10 {
            t.advance(0.1);
            let next = t.t();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn finish_idempotent() {
        let mut t = TimeState::new(1.0, 0.0);
        t.advance(2.0);
        assert!(t.is_finished());
        assert!((t.t() - 1.0).abs() < f64::EPSILON);
        t.advance(1.0);
        assert!(t.is_finished());
        assert!((t.t() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn set_max_duration_only_shrinks() {
        let mut t = TimeState::new(1.0, 0.0);
        t.set_max_duration(0.5);
        assert!((t.duration() - 0.5).abs() < f64::EPSILON);
        t.set_max_duration(2.0);
        assert!((t.duration() - 0.5).abs() < f64::EPSILON, "duration must not grow");
    }

    #[test]
    fn zero_duration_is_finished_immediately_after_any_advance() {
        let t = TimeState::new(0.0, 0.0);
        assert!((t.t() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn force_finish_is_terminal() {
        let mut t = TimeState::new(1.0, 0.0);
        t.force_finish();
        assert!(t.is_finished());
        assert!((t.t() - 1.0).abs() < f64::EPSILON);
    }
}
