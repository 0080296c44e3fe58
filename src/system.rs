//! `AnimationSystem`: the process-wide scheduler. Holds a chain of
//! concurrently-running groups (only the head group advances each
//! frame) and a one-shot property cache that bridges the frame between
//! an animation finishing (or being interrupted) and the caller
//! committing its own state.

use std::collections::{HashMap, VecDeque};

use crate::animation::Animation;
use crate::geometry::AnyRect;
use crate::property::{Object, Property, PropertyValue};
use crate::screen::ScreenBase;

/// A set of mutually mixable animations advancing together. Only the
/// chain's head group is ever advanced; successors wait.
struct Group {
    members: Vec<Box<dyn Animation>>,
    /// Whether `on_start` has been called on every current member.
    /// Set once at group creation/placement and re-checked whenever
    /// this group becomes the new head, per the spec's open question
    /// about starting a successor group.
    started: bool,
}

impl Group {
    fn new(animation: Box<dyn Animation>, started: bool) -> Self {
        Self {
            members: vec![animation],
            started,
        }
    }

    fn ensure_started(&mut self) {
        if self.started {
            return;
        }
        for member in &mut self.members {
            member.on_start();
        }
        self.started = true;
    }
}

/// Process-wide animation scheduler. Construct one instance per
/// application (or one per test, for isolation); there is no global
/// singleton in this crate — a host application owns exactly one and
/// wraps it in whatever global-access pattern suits it (e.g. a
/// `once_cell`-backed static), in keeping with spec.md's note that unit
/// tests must be able to construct independent instances.
#[derive(Default)]
pub struct AnimationSystem {
    chain: VecDeque<Group>,
    property_cache: HashMap<(Object, Property), PropertyValue>,
}

impl AnimationSystem {
    pub fn new() -> Self {
        Self {
            chain: VecDeque::new(),
            property_cache: HashMap::new(),
        }
    }

    /// Places `animation` according to the mix/interrupt/queue policy:
    /// walk the chain in order; the first group every member of which
    /// either mixes with `animation` or (when `force` is set) can be
    /// interrupted and evicted accepts it. If no group accepts it, a
    /// new singleton group is appended to the chain tail.
    ///
    /// `on_start` is invoked immediately only when `animation` lands in
    /// the chain's head group (index 0) — the only group ever advanced.
    /// A placement into a later, still-queued group defers `on_start`
    /// until that group actually becomes the head (see
    /// [`Group::ensure_started`]), so "started" tracks "about to be
    /// advanced" rather than "accepted somewhere in the chain". This is
    /// the resolution to the open question in spec.md §9 about starting
    /// a successor group.
    pub fn add_animation(&mut self, mut animation: Box<dyn Animation>, force: bool) {
        // Computed once for the whole placement walk: every member in
        // every group is checked against this same incoming animation,
        // so its `could_be_mixed` flag and per-object properties are
        // looked up once each instead of once per member compared
        // against it.
        let incoming_mixed = animation.could_be_mixed();
        for (index, group) in self.chain.iter_mut().enumerate() {
            let mut can_mix = true;
            let mut i = 0;
            while i < group.members.len() {
                let member = group.members[i].as_ref();
                let mixes = member.objects().iter().all(|&object| {
                    !animation.has_object(object)
                        || member.could_be_mixed_with_properties(object, incoming_mixed, animation.properties(object))
                });
                if mixes {
                    i += 1;
                    continue;
                }
                if force && group.members[i].could_be_interrupted() {
                    let mut evicted = group.members.remove(i);
                    evicted.interrupt();
                    snapshot_into(&mut self.property_cache, evicted.as_ref());
                    evicted.on_finish();
                    log::debug!("interrupted an in-flight animation to make room for an incoming one");
                } else {
                    can_mix = false;
                    break;
                }
            }
            if can_mix {
                if index == 0 {
                    animation.on_start();
                }
                log::debug!("mixed incoming animation into an existing group");
                group.members.push(animation);
                return;
            }
        }

        let becomes_head = self.chain.is_empty();
        if becomes_head {
            animation.on_start();
        }
        log::debug!("queued incoming animation behind the active chain");
        self.chain.push_back(Group::new(animation, becomes_head));
    }

    /// Advances the active (head) group by `dt` seconds. Successor
    /// groups do not advance. Members that finish this tick fire
    /// `on_finish`, have their terminal values snapshotted into the
    /// property cache, and are removed; if the head group becomes
    /// empty it is dropped and the new head (if any) is lazily started
    /// on its first subsequent advance.
    pub fn advance(&mut self, dt: f64) {
        debug_assert!(dt >= 0.0, "Advance requires a non-negative dt");
        let Some(head) = self.chain.front_mut() else {
            return;
        };
        head.ensure_started();

        let mut i = 0;
        while i < head.members.len() {
            head.members[i].advance(dt);
            if head.members[i].is_finished() {
                let mut finished = head.members.remove(i);
                finished.on_finish();
                snapshot_into(&mut self.property_cache, finished.as_ref());
            } else {
                i += 1;
            }
        }

        if head.members.is_empty() {
            self.chain.pop_front();
            log::trace!("dropped an emptied animation group from the chain head");
        }
    }

    /// Resolution order: the active group (first member, by insertion
    /// order, that covers `(object, property)`), then the one-shot
    /// cache (consumed on this read), then `current` as the live
    /// fallback.
    pub fn get_property(&mut self, object: Object, property: Property, current: PropertyValue) -> PropertyValue {
        if let Some(head) = self.chain.front() {
            for member in &head.members {
                if member.has_property(object, property) {
                    return member.property(object, property);
                }
            }
        }
        if let Some(value) = self.property_cache.remove(&(object, property)) {
            return value;
        }
        current
    }

    /// Convenience composition: reads scale, angle, and position (each
    /// falling back to the live screen state) and assembles the
    /// oriented viewport rectangle the renderer should draw.
    pub fn get_rect(&mut self, current_screen: &dyn ScreenBase) -> AnyRect {
        let scale = self
            .get_property(Object::MapPlane, Property::Scale, PropertyValue::Scalar(current_screen.scale()))
            .as_scalar();
        let angle = self
            .get_property(Object::MapPlane, Property::Angle, PropertyValue::Scalar(current_screen.angle()))
            .as_scalar();
        let position = self
            .get_property(Object::MapPlane, Property::Position, PropertyValue::Point(current_screen.global_zero()))
            .as_point();

        let rect = current_screen.pixel_rect();
        AnyRect::centered(position, angle, rect.width, rect.height, scale)
    }

    /// True iff any member of the active group touches `object`, or a
    /// still-unconsumed cache entry names it.
    pub fn animation_exists(&self, object: Object) -> bool {
        if let Some(head) = self.chain.front() {
            if head.members.iter().any(|m| m.has_object(object)) {
                return true;
            }
        }
        self.property_cache.keys().any(|(o, _)| *o == object)
    }
}

fn snapshot_into(cache: &mut HashMap<(Object, Property), PropertyValue>, animation: &dyn Animation) {
    for &object in animation.objects() {
        for &property in animation.properties(object) {
            cache.insert((object, property), animation.property(object, property));
        }
    }
}
