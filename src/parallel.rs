//! `ParallelAnimation`: N child animations advanced together, exposing
//! the union of their objects and properties.
//!
//! Mixability checks happen before a top-level animation is inserted
//! into a scheduler group, not inside `ParallelAnimation` itself —
//! children added here are assumed compatible by construction.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::animation::Animation;
use crate::property::{Object, Property, PropertyValue};

pub struct ParallelAnimation {
    children: Vec<Box<dyn Animation>>,
    objects: SmallVec<[Object; 2]>,
    properties: HashMap<Object, SmallVec<[Property; 3]>>,
    started: bool,
}

impl ParallelAnimation {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            objects: SmallVec::new(),
            properties: HashMap::new(),
            started: false,
        }
    }

    /// Unions `child`'s objects/properties into this animation's own
    /// footprint, then appends it to the child collection. If this
    /// parallel group is already running, the new child receives
    /// `on_start` immediately, preserving the "called exactly once,
    /// before the first advance" contract for late joiners.
    pub fn add_animation(&mut self, mut child: Box<dyn Animation>) {
        for &object in child.objects() {
            if !self.objects.contains(&object) {
                self.objects.push(object);
            }
            let entry = self.properties.entry(object).or_default();
            for &property in child.properties(object) {
                if !entry.contains(&property) {
                    entry.push(property);
                }
            }
        }
        if self.started {
            child.on_start();
        }
        self.children.push(child);
    }

    fn recompute_footprint(&mut self) {
        self.objects.clear();
        self.properties.clear();
        for child in &self.children {
            for &object in child.objects() {
                if !self.objects.contains(&object) {
                    self.objects.push(object);
                }
                let entry = self.properties.entry(object).or_default();
                for &property in child.properties(object) {
                    if !entry.contains(&property) {
                        entry.push(property);
                    }
                }
            }
        }
    }
}

impl Default for ParallelAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for ParallelAnimation {
    fn objects(&self) -> &[Object] {
        &self.objects
    }

    fn properties(&self, object: Object) -> &[Property] {
        debug_assert!(self.has_object(object), "properties queried for an object this ParallelAnimation does not touch");
        self.properties.get(&object).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn property(&self, object: Object, property: Property) -> PropertyValue {
        for child in &self.children {
            if child.has_property(object, property) {
                return child.property(object, property);
            }
        }
        debug_assert!(false, "property read on a ParallelAnimation with no covering child");
        PropertyValue::Scalar(0.0)
    }

    fn advance(&mut self, dt: f64) {
        debug_assert!(dt >= 0.0, "Advance requires a non-negative dt");
        for child in &mut self.children {
            child.advance(dt);
        }
        let mut any_finished = false;
        let mut i = 0;
        while i < self.children.len() {
            if self.children[i].is_finished() {
                let mut finished = self.children.remove(i);
                finished.on_finish();
                any_finished = true;
            } else {
                i += 1;
            }
        }
        if any_finished {
            self.recompute_footprint();
        }
    }

    fn set_max_duration(&mut self, max: f64) {
        for child in &mut self.children {
            child.set_max_duration(max);
        }
    }

    fn duration(&self) -> f64 {
        self.children.iter().map(|c| c.duration()).fold(0.0, f64::max)
    }

    fn is_finished(&self) -> bool {
        self.children.is_empty()
    }

    fn on_start(&mut self) {
        for child in &mut self.children {
            child.on_start();
        }
        self.started = true;
    }

    fn on_finish(&mut self) {}

    fn could_be_interrupted(&self) -> bool {
        self.children.iter().all(|c| c.could_be_interrupted())
    }

    fn could_be_mixed(&self) -> bool {
        self.children.iter().all(|c| c.could_be_mixed())
    }

    fn interrupt(&mut self) {
        for child in &mut self.children {
            child.interrupt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::follow::FollowAnimation;
    use crate::geometry::Point2D;
    use crate::property::Property;
    use crate::screen::FixedScreen;

    #[test]
    fn union_of_children_objects_and_properties() {
        let screen = FixedScreen::identity(1000.0, 1000.0);
        let mut position_only = FollowAnimation::new();
        position_only.set_move(Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0), &screen);
        let mut angle_only = FollowAnimation::new();
        angle_only.set_rotate(0.0, 1.0);

        let mut parallel = ParallelAnimation::new();
        parallel.add_animation(Box::new(position_only));
        parallel.add_animation(Box::new(angle_only));

        assert!(parallel.has_property(Object::MapPlane, Property::Position));
        assert!(parallel.has_property(Object::MapPlane, Property::Angle));
    }

    #[test]
    fn finishes_when_all_children_finish_and_shrinks_footprint() {
        let screen = FixedScreen::identity(1000.0, 1000.0);
        let mut rotate_anim = FollowAnimation::new();
        rotate_anim.set_rotate(0.0, std::f64::consts::FRAC_PI_4); // 0.5s
        let mut pan_anim = FollowAnimation::new();
        pan_anim.set_move(Point2D::new(0.0, 0.0), Point2D::new(500.0, 0.0), &screen); // ~0.07s, finishes first

        let mut parallel = ParallelAnimation::new();
        parallel.add_animation(Box::new(rotate_anim));
        parallel.add_animation(Box::new(pan_anim));
        parallel.on_start();

        parallel.advance(0.1);
        assert!(!parallel.is_finished());
        assert!(!parallel.has_property(Object::MapPlane, Property::Position), "the faster position leg should have finished and dropped out");

        parallel.advance(1.0);
        assert!(parallel.is_finished());
    }
}
