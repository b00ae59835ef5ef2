mod box2;
mod circle;
mod line;
mod plane;
mod segment;

pub use box2::Box2;
pub use circle::Circle3;
pub use line::{Line, Line2, Line3};
pub use plane::{Plane, Plane3};
pub use segment::{Segment, Segment2, Segment3};

/// Outcome of clipping one primitive against another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection<T> {
    /// The primitives meet in `T`.
    Hit(T),
    /// The primitives do not meet, or touch only in a single point.
    Miss,
    /// The configuration has no unique answer.
    Degenerate,
}

impl<T> Intersection<T> {
    /// Returns whether the primitives meet.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// Returns the intersection, if any.
    #[must_use]
    pub fn hit(self) -> Option<T> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Miss | Self::Degenerate => None,
        }
    }
}
