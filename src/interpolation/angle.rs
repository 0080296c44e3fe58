//! Angle interpolator: rotates between two radian values at a fixed
//! rate of half a second per 45 degrees. Does not normalize direction;
//! callers must pre-adjust `end` to the shortest arc from `start`.

use crate::geometry::lerp_scalar;
use crate::property::PropertyValue;

use super::{Interpolator, TimeState, ValuedInterpolator};

pub struct AngleInterpolator {
    time: TimeState,
    start: f64,
    end: f64,
}

impl AngleInterpolator {
    /// Half a second per 45 degrees (`pi/4` radians).
    pub const SECONDS_PER_45_DEGREES: f64 = 0.5;

    pub fn new(start: f64, end: f64) -> Self {
        let duration = Self::SECONDS_PER_45_DEGREES * (end - start).abs() / std::f64::consts::FRAC_PI_4;
        Self {
            time: TimeState::new(duration, 0.0),
            start,
            end,
        }
    }
}

impl Interpolator for AngleInterpolator {
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

impl ValuedInterpolator for AngleInterpolator {
    fn value(&self) -> PropertyValue {
        PropertyValue::Scalar(lerp_scalar(self.start, self.end, self.t()))
    }
}
