//! The `ScreenBase` viewport converter: the core's sole geometric
//! collaborator. The core never performs a projection itself — it asks
//! a `ScreenBase` implementation for pixel-space conversions and the
//! current pixel rectangle, per the collaborator contract in the spec.

use crate::geometry::{Point2D, Rect2D};

/// Read-only viewport conversion surface the animation core depends on.
///
/// A full application implements this over its actual map projection;
/// the core only ever calls these four methods and never mutates
/// through them.
pub trait ScreenBase {
    /// Current pixel-space rectangle of the viewport.
    fn pixel_rect(&self) -> Rect2D;

    /// Converts a point in global map coordinates to pixel coordinates.
    fn g_to_p(&self, point: Point2D) -> Point2D;

    /// Current zoom scale of the live (non-animated) screen state.
    fn scale(&self) -> f64;

    /// Current rotation angle, in radians, of the live screen state.
    fn angle(&self) -> f64;

    /// Global-coordinate origin of the current viewport, used as the
    /// position fallback when no animation and no cache entry cover it.
    fn global_zero(&self) -> Point2D;
}

/// A fixed, non-projecting `ScreenBase` used by this crate's own tests
/// to exercise the literal scenarios from the spec (identity `GtoP`,
/// a square or rectangular pixel viewport).
#[cfg(test)]
pub(crate) struct FixedScreen {
    pub rect: Rect2D,
    pub scale: f64,
    pub angle: f64,
    pub global_zero: Point2D,
}

#[cfg(test)]
impl FixedScreen {
    pub fn identity(width: f64, height: f64) -> Self {
        Self {
            rect: Rect2D::new(0.0, 0.0, width, height),
            scale: 1.0,
            angle: 0.0,
            global_zero: Point2D::ZERO,
        }
    }
}

#[cfg(test)]
impl ScreenBase for FixedScreen {
    fn pixel_rect(&self) -> Rect2D {
        self.rect
    }

    fn g_to_p(&self, point: Point2D) -> Point2D {
        point
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn angle(&self) -> f64 {
        self.angle
    }

    fn global_zero(&self) -> Point2D {
        self.global_zero
    }
}
