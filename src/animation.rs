//! The polymorphic `Animation` contract: the common surface every
//! leaf and composite animation (`FollowAnimation`, `ParallelAnimation`,
//! `SequenceAnimation`) implements, and the mixability predicate the
//! scheduler uses to decide placement.

use crate::property::{Object, Property, PropertyValue};

/// A time-bounded transformation of one or more `(Object, Property)`
/// pairs.
///
/// Lifecycle: *pending* -> *running* (after [`Animation::on_start`]) ->
/// *finished* (after [`Animation::on_finish`]) -> discarded.
/// `on_start` is called exactly once, just before the first `advance`;
/// `on_finish` is called exactly once, after `is_finished` first
/// returns true, before the animation is removed from its owner.
pub trait Animation {
    /// Objects this animation touches.
    fn objects(&self) -> &[Object];

    fn has_object(&self, object: Object) -> bool {
        self.objects().contains(&object)
    }

    /// Properties this animation drives on `object`.
    ///
    /// Precondition: `has_object(object)`.
    fn properties(&self, object: Object) -> &[Property];

    fn has_property(&self, object: Object, property: Property) -> bool {
        self.has_object(object) && self.properties(object).contains(&property)
    }

    /// Current tagged value of `(object, property)`.
    ///
    /// Precondition: `has_property(object, property)`. Reflects the
    /// most recent `advance`.
    fn property(&self, object: Object, property: Property) -> PropertyValue;

    /// Advances time by `dt` seconds. `dt` must be non-negative.
    fn advance(&mut self, dt: f64);

    /// Caps this animation's remaining logical duration, cascading to
    /// any children. Never grows the duration.
    fn set_max_duration(&mut self, max: f64);

    /// Maximum remaining logical duration, including delay.
    fn duration(&self) -> f64;

    fn is_finished(&self) -> bool;

    /// Called exactly once, just before the first `advance`.
    fn on_start(&mut self);

    /// Called exactly once, once `is_finished` first returns true.
    fn on_finish(&mut self);

    /// Whether the scheduler may abort this animation to make room
    /// for an incoming one.
    fn could_be_interrupted(&self) -> bool;

    /// Whether this animation tolerates concurrent peers in the same
    /// scheduler group.
    fn could_be_mixed(&self) -> bool;

    /// Forces this animation to its terminal state immediately. Used
    /// by the scheduler before evicting an interruptible animation;
    /// must leave the animation's final property values readable.
    fn interrupt(&mut self);

    /// Two animations may coexist in the same scheduler group only if
    /// both tolerate peers and they touch disjoint properties on any
    /// object they share.
    fn could_be_mixed_with(&self, other: &dyn Animation) -> bool {
        if !self.could_be_mixed() || !other.could_be_mixed() {
            return false;
        }
        self.objects().iter().all(|&object| {
            !other.has_object(object) || properties_disjoint(self.properties(object), other.properties(object))
        })
    }

    /// Specialization of [`Animation::could_be_mixed_with`] for a
    /// single object, when the peer's `could_be_mixed` flag and its
    /// property footprint on `object` are already in hand — so a
    /// caller checking one member against the same incoming animation
    /// object-by-object, as [`crate::system::AnimationSystem::add_animation`]
    /// does, need not re-dispatch to the peer's `could_be_mixed`/`properties`
    /// through a second trait object per object checked.
    fn could_be_mixed_with_properties(&self, object: Object, other_could_be_mixed: bool, other_properties: &[Property]) -> bool {
        if !self.could_be_mixed() || !other_could_be_mixed {
            return false;
        }
        !self.has_object(object) || properties_disjoint(self.properties(object), other_properties)
    }
}

fn properties_disjoint(a: &[Property], b: &[Property]) -> bool {
    !a.iter().any(|p| b.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::SmallVec;

    struct Stub {
        objects: SmallVec<[Object; 1]>,
        properties: SmallVec<[Property; 3]>,
        mixed: bool,
    }

    impl Animation for Stub {
        fn objects(&self) -> &[Object] {
            &self.objects
        }

        fn properties(&self, _object: Object) -> &[Property] {
            &self.properties
        }

        fn property(&self, _object: Object, _property: Property) -> PropertyValue {
            PropertyValue::Scalar(0.0)
        }

        fn advance(&mut self, _dt: f64) {}
        fn set_max_duration(&mut self, _max: f64) {}
        fn duration(&self) -> f64 {
            0.0
        }
        fn is_finished(&self) -> bool {
            true
        }
        fn on_start(&mut self) {}
        fn on_finish(&mut self) {}
        fn could_be_interrupted(&self) -> bool {
            true
        }
        fn could_be_mixed(&self) -> bool {
            self.mixed
        }
        fn interrupt(&mut self) {}
    }

    fn stub(properties: &[Property], mixed: bool) -> Stub {
        Stub {
            objects: SmallVec::from_slice(&[Object::MapPlane]),
            properties: SmallVec::from_slice(properties),
            mixed,
        }
    }

    #[test]
    fn overlapping_properties_cannot_mix() {
        let a = stub(&[Property::Position], true);
        let b = stub(&[Property::Position, Property::Angle], true);
        assert!(!a.could_be_mixed_with(&b));
        assert!(!b.could_be_mixed_with(&a));
    }

    #[test]
    fn disjoint_properties_can_mix() {
        let a = stub(&[Property::Position], true);
        let b = stub(&[Property::Angle], true);
        assert!(a.could_be_mixed_with(&b));
        assert!(b.could_be_mixed_with(&a));
    }

    #[test]
    fn mix_flag_false_on_either_side_blocks_mixing() {
        let a = stub(&[Property::Angle], false);
        let b = stub(&[Property::Scale], true);
        assert!(!a.could_be_mixed_with(&b));
        assert!(!b.could_be_mixed_with(&a));
    }
}
