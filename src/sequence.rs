//! `SequenceAnimation`: a queue of child animations run one at a time,
//! each to completion.
//!
//! Unlike `ParallelAnimation`, `add_animation` does **not** union
//! object/property sets — the sequence's exposed footprint is always
//! that of its current front. That footprint changes the moment the
//! front finishes and the next element becomes front; a scheduler that
//! placed this sequence based on its first stage's footprint will only
//! see a later stage's conflicts once that stage reaches the front.
//! This crate does not re-arbitrate placement at stage transitions —
//! see the type-level docs below.

use std::collections::VecDeque;

use crate::animation::Animation;
use crate::property::{Object, Property, PropertyValue};

/// A queue of animations run one at a time.
///
/// Mixability at insertion time is evaluated by the scheduler against
/// whatever is the front *right now*; if a later stage would conflict
/// with a peer running alongside this sequence, that conflict only
/// becomes observable once the stage reaches the front (both stages
/// would then drive the same property — a caller-visible anomaly, not
/// one this type silently corrects).
pub struct SequenceAnimation {
    queue: VecDeque<Box<dyn Animation>>,
    front_started: bool,
}

impl SequenceAnimation {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            front_started: false,
        }
    }

    pub fn add_animation(&mut self, child: Box<dyn Animation>) {
        self.queue.push_back(child);
    }

    fn start_front_if_needed(&mut self) {
        if self.front_started {
            return;
        }
        if let Some(front) = self.queue.front_mut() {
            front.on_start();
            self.front_started = true;
        }
    }
}

impl Default for SequenceAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for SequenceAnimation {
    fn objects(&self) -> &[Object] {
        match self.queue.front() {
            Some(front) => front.objects(),
            None => {
                debug_assert!(false, "objects queried on an empty SequenceAnimation");
                &[]
            }
        }
    }

    fn properties(&self, object: Object) -> &[Property] {
        match self.queue.front() {
            Some(front) => front.properties(object),
            None => {
                debug_assert!(false, "properties queried on an empty SequenceAnimation");
                &[]
            }
        }
    }

    fn property(&self, object: Object, property: Property) -> PropertyValue {
        match self.queue.front() {
            Some(front) => front.property(object, property),
            None => {
                debug_assert!(false, "property queried on an empty SequenceAnimation");
                PropertyValue::Scalar(0.0)
            }
        }
    }

    fn advance(&mut self, dt: f64) {
        debug_assert!(dt >= 0.0, "Advance requires a non-negative dt");
        self.start_front_if_needed();
        let Some(front) = self.queue.front_mut() else {
            return;
        };
        front.advance(dt);
        if front.is_finished() {
            let mut finished = self.queue.pop_front().expect("front observed Some above");
            finished.on_finish();
            self.front_started = false;
        }
    }

    fn set_max_duration(&mut self, max: f64) {
        if let Some(front) = self.queue.front_mut() {
            front.set_max_duration(max);
        }
    }

    fn duration(&self) -> f64 {
        self.queue.front().map_or(0.0, |front| front.duration())
    }

    fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    fn on_start(&mut self) {
        self.start_front_if_needed();
    }

    fn on_finish(&mut self) {}

    fn could_be_interrupted(&self) -> bool {
        self.queue.front().map_or(true, |front| front.could_be_interrupted())
    }

    fn could_be_mixed(&self) -> bool {
        self.queue.front().map_or(true, |front| front.could_be_mixed())
    }

    fn interrupt(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.interrupt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::follow::FollowAnimation;
    use crate::geometry::Point2D;
    use crate::screen::FixedScreen;

    #[test]
    fn runs_one_stage_at_a_time() {
        let screen = FixedScreen::identity(1000.0, 1000.0);
        let mut first = FollowAnimation::new();
        first.set_move(Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0), &screen); // 0.2s floor
        let mut second = FollowAnimation::new();
        second.set_move(Point2D::new(100.0, 0.0), Point2D::new(200.0, 0.0), &screen); // 0.2s floor

        let mut sequence = SequenceAnimation::new();
        sequence.add_animation(Box::new(first));
        sequence.add_animation(Box::new(second));
        sequence.on_start();

        sequence.advance(0.1);
        assert!(!sequence.is_finished());
        let x = sequence.property(Object::MapPlane, Property::Position).as_point().x;
        assert!((x - 50.0).abs() < 1e-6, "first stage should be driving, not second");

        // Reaches the first stage's duration exactly; `finished` is a
        // strict `>`, so it has not yet popped.
        sequence.advance(0.1);
        assert!(!sequence.is_finished());

        // Pushes the first stage past its duration: it pops this tick,
        // but the new front is not started or advanced until the next
        // `advance` call, so the exposed value is the new front's
        // untouched start point.
        sequence.advance(0.1);
        assert!(!sequence.is_finished(), "second stage still queued");
        let x = sequence.property(Object::MapPlane, Property::Position).as_point().x;
        assert!((x - 100.0).abs() < 1e-6, "new front hasn't been started or advanced yet");

        sequence.advance(0.1);
        let x = sequence.property(Object::MapPlane, Property::Position).as_point().x;
        assert!((x - 150.0).abs() < 1e-6, "second stage is now driving from its own start");

        sequence.advance(0.1);
        assert!(!sequence.is_finished());
        sequence.advance(0.1);
        assert!(sequence.is_finished());
    }

    #[test]
    fn empty_sequence_is_finished() {
        let sequence = SequenceAnimation::new();
        assert!(sequence.is_finished());
    }
}
