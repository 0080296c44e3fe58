//! Object/property identifiers and the tagged property-value union.
//!
//! The data model is polymorphic over the object identifier set so
//! that future entities (markers, overlays) could join `MapPlane`
//! without changing the scheduler; today `MapPlane` is the only
//! variant in use.

use crate::geometry::Point2D;

/// Identifier of an animated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    /// The 2D map viewport: position, rotation, and zoom scale.
    MapPlane,
}

/// Identifier of an attribute on an [`Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// 2D point in global map coordinates.
    Position,
    /// Rotation, in radians.
    Angle,
    /// Zoom scale, dimensionless and positive.
    Scale,
}

/// Tagged union of the value kinds a [`Property`] can carry.
///
/// Reading a property requires a fallback of the matching variant;
/// unwrapping the wrong variant is a programming error (see the
/// crate's error-handling policy), asserted in debug builds and
/// resolved to a neutral value in release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Point(Point2D),
    Scalar(f64),
}

impl PropertyValue {
    pub fn as_point(&self) -> Point2D {
        match self {
            PropertyValue::Point(p) => *p,
            PropertyValue::Scalar(_) => {
                debug_assert!(false, "read PropertyValue::Point on a Scalar value");
                Point2D::ZERO
            }
        }
    }

    pub fn as_scalar(&self) -> f64 {
        match self {
            PropertyValue::Scalar(s) => *s,
            PropertyValue::Point(_) => {
                debug_assert!(false, "read PropertyValue::Scalar on a Point value");
                0.0
            }
        }
    }
}
