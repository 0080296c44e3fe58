//! `FollowAnimation`: a composite over the map-plane combining up to
//! three interpolators (position, angle, scale) running in lock-step.

use smallvec::SmallVec;

use crate::animation::Animation;
use crate::interpolation::angle::AngleInterpolator;
use crate::interpolation::position::PositionInterpolator;
use crate::interpolation::scale::ScaleInterpolator;
use crate::interpolation::{Interpolator, ValuedInterpolator};
use crate::property::{Object, Property, PropertyValue};
use crate::screen::ScreenBase;

/// Touches only [`Object::MapPlane`], regardless of how many of its
/// three interpolators are present.
const OBJECTS: [Object; 1] = [Object::MapPlane];

/// Follow animations are interruptible (the scheduler may force them
/// to their endpoint to make room) and not mixable (a peer follow
/// animation touching the same property must queue or interrupt, never
/// coexist).
pub struct FollowAnimation {
    position: Option<PositionInterpolator>,
    angle: Option<AngleInterpolator>,
    scale: Option<ScaleInterpolator>,
    properties: SmallVec<[Property; 3]>,
    started: bool,
}

impl FollowAnimation {
    /// An empty follow animation, later filled in with `set_move`,
    /// `set_rotate`, `set_scale`.
    pub fn new() -> Self {
        Self {
            position: None,
            angle: None,
            scale: None,
            properties: SmallVec::new(),
            started: false,
        }
    }

    /// Both endpoints for all three attributes plus a converter, built
    /// in one call.
    #[allow(clippy::too_many_arguments)]
    pub fn new_full(
        position_start: crate::geometry::Point2D,
        position_end: crate::geometry::Point2D,
        angle_start: f64,
        angle_end: f64,
        scale_start: f64,
        scale_end: f64,
        screen: &dyn ScreenBase,
    ) -> Self {
        let mut animation = Self::new();
        animation.set_move(position_start, position_end, screen);
        animation.set_rotate(angle_start, angle_end);
        animation.set_scale(scale_start, scale_end);
        animation
    }

    /// Installs a position interpolator, unless `start == end`.
    pub fn set_move(&mut self, start: crate::geometry::Point2D, end: crate::geometry::Point2D, screen: &dyn ScreenBase) {
        if start == end {
            return;
        }
        self.position = Some(PositionInterpolator::new(start, end, screen));
        self.mark_property(Property::Position);
    }

    /// Installs an angle interpolator, unless `start == end`.
    pub fn set_rotate(&mut self, start: f64, end: f64) {
        if start == end {
            return;
        }
        self.angle = Some(AngleInterpolator::new(start, end));
        self.mark_property(Property::Angle);
    }

    /// Installs a scale interpolator, unless `start == end`.
    pub fn set_scale(&mut self, start: f64, end: f64) {
        if start == end {
            return;
        }
        self.scale = Some(ScaleInterpolator::new(start, end));
        self.mark_property(Property::Scale);
    }

    fn mark_property(&mut self, property: Property) {
        if !self.properties.contains(&property) {
            self.properties.push(property);
        }
    }
}

impl Default for FollowAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for FollowAnimation {
    fn objects(&self) -> &[Object] {
        &OBJECTS
    }

    fn properties(&self, object: Object) -> &[Property] {
        debug_assert!(self.has_object(object));
        &self.properties
    }

    fn property(&self, object: Object, property: Property) -> PropertyValue {
        debug_assert!(self.has_property(object, property));
        match property {
            Property::Position => match &self.position {
                Some(p) => p.value(),
                None => {
                    debug_assert!(false, "Position read on a FollowAnimation with no move installed");
                    PropertyValue::Point(crate::geometry::Point2D::ZERO)
                }
            },
            Property::Angle => match &self.angle {
                Some(a) => a.value(),
                None => {
                    debug_assert!(false, "Angle read on a FollowAnimation with no rotate installed");
                    PropertyValue::Scalar(0.0)
                }
            },
            Property::Scale => match &self.scale {
                Some(s) => s.value(),
                None => {
                    debug_assert!(false, "Scale read on a FollowAnimation with no scale installed");
                    PropertyValue::Scalar(1.0)
                }
            },
        }
    }

    fn advance(&mut self, dt: f64) {
        debug_assert!(dt >= 0.0);
        if let Some(p) = &mut self.position {
            p.advance(dt);
        }
        if let Some(a) = &mut self.angle {
            a.advance(dt);
        }
        if let Some(s) = &mut self.scale {
            s.advance(dt);
        }
    }

    fn set_max_duration(&mut self, max: f64) {
        if let Some(p) = &mut self.position {
            p.set_max_duration(max);
        }
        if let Some(a) = &mut self.angle {
            a.set_max_duration(max);
        }
        if let Some(s) = &mut self.scale {
            s.set_max_duration(max);
        }
    }

    fn duration(&self) -> f64 {
        [
            self.position.as_ref().map(|p| p.duration()),
            self.angle.as_ref().map(|a| a.duration()),
            self.scale.as_ref().map(|s| s.duration()),
        ]
        .into_iter()
        .flatten()
        .fold(0.0, f64::max)
    }

    fn is_finished(&self) -> bool {
        self.position.as_ref().map_or(true, |p| p.is_finished())
            && self.angle.as_ref().map_or(true, |a| a.is_finished())
            && self.scale.as_ref().map_or(true, |s| s.is_finished())
    }

    fn on_start(&mut self) {
        debug_assert!(!self.started, "on_start must be called exactly once");
        self.started = true;
    }

    fn on_finish(&mut self) {}

    fn could_be_interrupted(&self) -> bool {
        true
    }

    fn could_be_mixed(&self) -> bool {
        false
    }

    fn interrupt(&mut self) {
        if let Some(p) = &mut self.position {
            p.interrupt();
        }
        if let Some(a) = &mut self.angle {
            a.interrupt();
        }
        if let Some(s) = &mut self.scale {
            s.interrupt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2D;
    use crate::screen::FixedScreen;

    #[test]
    fn start_equals_end_on_all_attributes_finishes_immediately_empty() {
        let screen = FixedScreen::identity(1000.0, 1000.0);
        let follow = FollowAnimation::new_full(Point2D::new(1.0, 1.0), Point2D::new(1.0, 1.0), 0.5, 0.5, 2.0, 2.0, &screen);
        assert!(follow.is_finished());
        assert!(follow.properties(Object::MapPlane).is_empty());
    }

    #[test]
    fn partial_follow_only_advances_installed_interpolators() {
        let screen = FixedScreen::identity(1000.0, 1000.0);
        let mut follow = FollowAnimation::new();
        follow.set_move(Point2D::new(0.0, 0.0), Point2D::new(500.0, 0.0), &screen);
        assert!(follow.has_property(Object::MapPlane, Property::Position));
        assert!(!follow.has_property(Object::MapPlane, Property::Angle));

        follow.advance(1.0);
        assert!(follow.is_finished());
    }

    #[test]
    fn duration_is_max_of_contained_interpolators() {
        let screen = FixedScreen::identity(1000.0, 1000.0);
        // Position duration ~0.0714s, angle duration 1.0s (90 degrees).
        let follow = FollowAnimation::new_full(
            Point2D::new(0.0, 0.0),
            Point2D::new(500.0, 0.0),
            0.0,
            std::f64::consts::FRAC_PI_2,
            1.0,
            1.0,
            &screen,
        );
        assert!((follow.duration() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn interrupt_forces_every_installed_interpolator_to_terminal() {
        let screen = FixedScreen::identity(1000.0, 1000.0);
        let mut follow = FollowAnimation::new();
        follow.set_move(Point2D::new(0.0, 0.0), Point2D::new(500.0, 0.0), &screen);
        follow.interrupt();
        assert!(follow.is_finished());
        assert_eq!(follow.property(Object::MapPlane, Property::Position).as_point(), Point2D::new(500.0, 0.0));
    }
}
