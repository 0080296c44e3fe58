//! Scale interpolator: zooms between two dimensionless positive scale
//! factors. Duration depends only on the ratio between the two, not
//! on their absolute magnitude; the value itself is interpolated
//! linearly (not in log-space), applied in the original direction.

use crate::geometry::lerp_scalar;
use crate::property::PropertyValue;

use super::{Interpolator, TimeState, ValuedInterpolator};

pub struct ScaleInterpolator {
    time: TimeState,
    start: f64,
    end: f64,
}

impl ScaleInterpolator {
    /// A 2x resize takes 0.3s: `k = 2.0 / 0.3`.
    pub const SPEED_CONSTANT: f64 = 2.0 / 0.3;

    /// Ratios closer to 1.0 than this are treated as "no change".
    pub const RATIO_EPSILON: f64 = 1e-9;

    pub fn new(start: f64, end: f64) -> Self {
        debug_assert!(start > 0.0 && end > 0.0, "scale must be a positive dimensionless factor");
        let ratio = start.max(end) / start.min(end);
        let duration = if (ratio - 1.0).abs() < Self::RATIO_EPSILON {
            0.0
        } else {
            ratio / Self::SPEED_CONSTANT
        };
        Self {
            time: TimeState::new(duration, 0.0),
            start,
            end,
        }
    }
}

impl Interpolator for ScaleInterpolator {
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

impl ValuedInterpolator for ScaleInterpolator {
    fn value(&self) -> PropertyValue {
        PropertyValue::Scalar(lerp_scalar(self.start, self.end, self.t()))
    }
}
