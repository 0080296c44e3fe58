//! mapplane-motion — animation system for a 2D map view.
//!
//! Schedules, composes, and advances time-based transitions of
//! map-plane state (geographic position, rotation angle, and zoom
//! scale) so that user-initiated changes (follow-me, zoom, rotate,
//! fly-to) read as smooth continuous motion instead of discrete jumps,
//! while arbitrating between animations requested at the same time.
//!
//! # What this crate does not do
//! - No physical simulation (no inertia/spring dynamics).
//! - No per-frame rate limiting — the caller supplies elapsed seconds.
//! - No reversing of an in-progress animation.
//! - No persistence across process restarts.
//! - No rendering, input handling, tile fetching, or projection math;
//!   [`ScreenBase`] is the one seam into that world, described only by
//!   the small contract this crate actually calls.
//!
//! # Example
//! ```
//! use mapplane_motion::prelude::*;
//!
//! # struct MyScreen;
//! # impl ScreenBase for MyScreen {
//! #     fn pixel_rect(&self) -> Rect2D { Rect2D::new(0.0, 0.0, 1000.0, 1000.0) }
//! #     fn g_to_p(&self, p: Point2D) -> Point2D { p }
//! #     fn scale(&self) -> f64 { 1.0 }
//! #     fn angle(&self) -> f64 { 0.0 }
//! #     fn global_zero(&self) -> Point2D { Point2D::ZERO }
//! # }
//! let screen = MyScreen;
//! let mut system = AnimationSystem::new();
//!
//! let mut pan = FollowAnimation::new();
//! pan.set_move(Point2D::new(0.0, 0.0), Point2D::new(500.0, 0.0), &screen);
//! system.add_animation(Box::new(pan), false);
//!
//! system.advance(1.0 / 60.0);
//! let rect = system.get_rect(&screen);
//! let _ = rect;
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]
#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use instant::Duration;

pub mod animation;
pub mod follow;
pub mod geometry;
pub mod interpolation;
pub mod parallel;
pub mod property;
pub mod screen;
pub mod sequence;
pub mod system;

pub mod prelude {
    pub use crate::animation::Animation;
    pub use crate::follow::FollowAnimation;
    pub use crate::geometry::{AnyRect, Point2D, Rect2D};
    pub use crate::parallel::ParallelAnimation;
    pub use crate::property::{Object, Property, PropertyValue};
    pub use crate::screen::ScreenBase;
    pub use crate::sequence::SequenceAnimation;
    pub use crate::system::AnimationSystem;
    pub use crate::Duration;
}
