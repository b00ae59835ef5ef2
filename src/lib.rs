//! Affine geometry primitives in 2D and 3D.
//!
//! Lines, planes, segments, axis-aligned boxes and circles are immutable
//! values validated at construction. Their intersection and distance
//! queries are closed-form and share the single tolerance [`math::EPS`].

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, Result};
pub use geometry::{
    Box2, Circle3, Intersection, Line, Line2, Line3, Plane, Plane3, Segment, Segment2, Segment3,
};
