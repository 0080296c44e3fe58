//! Position interpolator: pans between two global-coordinate points at
//! a duration derived from the on-screen (pixel) travel distance.

use crate::geometry::{lerp_point, Point2D};
use crate::property::PropertyValue;
use crate::screen::ScreenBase;

use super::{Interpolator, TimeState, ValuedInterpolator};

pub struct PositionInterpolator {
    time: TimeState,
    start: Point2D,
    end: Point2D,
}

impl PositionInterpolator {
    /// Below this pixel travel distance, the pan is imperceptible and
    /// gets a zero duration rather than a floor-length one.
    pub const MICRO_JITTER_EPSILON: f64 = 1e-5;

    /// Pans shorter than this fraction of the viewport's shorter
    /// dimension are floored to [`Self::FLOOR_DURATION`] to avoid
    /// choppy micro-animations.
    pub const FLOOR_FRACTION: f64 = 0.2;

    /// Duration floor, in seconds, for any non-trivial short pan.
    pub const FLOOR_DURATION: f64 = 0.2;

    /// Speed constant: travel time is `pxLen / (SPEED_DIVISOR *
    /// minSize)` seconds, so the pan feels equally fast regardless of
    /// viewport size.
    pub const SPEED_DIVISOR: f64 = 7.0;

    pub fn new(start: Point2D, end: Point2D, screen: &dyn ScreenBase) -> Self {
        let duration = Self::compute_duration(start, end, screen);
        Self {
            time: TimeState::new(duration, 0.0),
            start,
            end,
        }
    }

    fn compute_duration(start: Point2D, end: Point2D, screen: &dyn ScreenBase) -> f64 {
        let px_len = (screen.g_to_p(end) - screen.g_to_p(start)).length();
        if px_len < Self::MICRO_JITTER_EPSILON {
            return 0.0;
        }
        let min_size = screen.pixel_rect().min_dimension();
        if px_len < Self::FLOOR_FRACTION * min_size {
            return Self::FLOOR_DURATION;
        }
        px_len / (Self::SPEED_DIVISOR * min_size)
    }
}

impl Interpolator for PositionInterpolator {
    fn advance(&mut self, dt: f64) {
        self.time.advance(dt);
    }

    fn set_max_duration(&mut self, max: f64) {
        self.time.set_max_duration(max);
    }

    fn t(&self) -> f64 {
        self.time.t()
    }

    fn is_finished(&self) -> bool {
        self.time.is_finished()
    }

    fn duration(&self) -> f64 {
        self.time.duration()
    }

    fn elapsed(&self) -> f64 {
        self.time.elapsed()
    }

    fn interrupt(&mut self) {
        self.time.force_finish();
    }
}

impl ValuedInterpolator for PositionInterpolator {
    fn value(&self) -> PropertyValue {
        PropertyValue::Point(lerp_point(self.start, self.end, self.t()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::FixedScreen;

    #[test]
    fn pure_pan_duration_and_midpoint() {
        // S1: screen (0,0)-(1000,1000), identity GtoP, pan (0,0)->(500,0).
        let screen = FixedScreen::identity(1000.0, 1000.0);
        let mut pos = PositionInterpolator::new(Point2D::new(0.0, 0.0), Point2D::new(500.0, 0.0), &screen);
        assert!((pos.duration() - 500.0 / 7000.0).abs() < 1e-9);

        pos.advance(0.0357);
        let v = pos.value().as_point();
        assert!((v.x - 250.0).abs() < 1.0);

        pos.advance(0.04);
        assert!(pos.is_finished());
        let v = pos.value().as_point();
        assert!((v.x - 500.0).abs() < 1e-6);
    }

    #[test]
    fn small_pan_hits_duration_floor() {
        // S2: pan (0,0)->(100,0) on a 1000x1000 viewport.
        let screen = FixedScreen::identity(1000.0, 1000.0);
        let mut pos = PositionInterpolator::new(Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0), &screen);
        assert!((pos.duration() - 0.2).abs() < 1e-9);

        pos.advance(0.1);
        let v = pos.value().as_point();
        assert!((v.x - 50.0).abs() < 1e-6);
    }

    #[test]
    fn imperceptible_pan_is_zero_duration() {
        let screen = FixedScreen::identity(1000.0, 1000.0);
        let pos = PositionInterpolator::new(Point2D::new(0.0, 0.0), Point2D::new(1e-7, 0.0), &screen);
        assert!((pos.duration() - 0.0).abs() < f64::EPSILON);
        assert!(pos.is_finished());
    }

    #[test]
    fn interrupt_jumps_to_end_value() {
        let screen = FixedScreen::identity(1000.0, 1000.0);
        let mut pos = PositionInterpolator::new(Point2D::new(0.0, 0.0), Point2D::new(500.0, 0.0), &screen);
        pos.interrupt();
        assert!(pos.is_finished());
        assert_eq!(pos.value().as_point(), Point2D::new(500.0, 0.0));
    }
}
