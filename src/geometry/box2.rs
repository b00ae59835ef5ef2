use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::math::{Point2, EPS};

use super::{Intersection, Line2, Segment2};

/// An axis-aligned rectangle, given by its bottom left corner, width and
/// height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box2 {
    point: Point2,
    width: f64,
    height: f64,
}

impl Box2 {
    /// Creates a new box.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidInput`] if the width or height is
    /// smaller than [`EPS`] or not finite.
    pub fn new(point: Point2, width: f64, height: f64) -> Result<Self> {
        let valid = |size: f64| size.is_finite() && size >= EPS;
        if !valid(width) || !valid(height) {
            return Err(GeometryError::InvalidInput(
                "box must have positive size".into(),
            ));
        }
        Ok(Self {
            point,
            width,
            height,
        })
    }

    /// Returns the bottom left corner the box was built from.
    #[must_use]
    pub fn point(&self) -> &Point2 {
        &self.point
    }

    /// Returns the width of the box.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height of the box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Corner with minimal x and minimal y.
    #[must_use]
    pub fn bottom_left(&self) -> Point2 {
        self.point
    }

    /// Corner with maximal x and minimal y.
    #[must_use]
    pub fn bottom_right(&self) -> Point2 {
        Point2::new(self.max_x(), self.point.y)
    }

    /// Corner with minimal x and maximal y.
    #[must_use]
    pub fn top_left(&self) -> Point2 {
        Point2::new(self.point.x, self.max_y())
    }

    /// Corner with maximal x and maximal y.
    #[must_use]
    pub fn top_right(&self) -> Point2 {
        Point2::new(self.max_x(), self.max_y())
    }

    fn max_x(&self) -> f64 {
        self.point.x + self.width
    }

    fn max_y(&self) -> f64 {
        self.point.y + self.height
    }

    /// Clips `line` to this box.
    ///
    /// Returns [`Intersection::Miss`] when the line passes outside the box or
    /// only touches it in a single point, and [`Intersection::Degenerate`] when
    /// a clipping edge cannot be solved for because the line is parallel to it
    /// within [`EPS`]. Points on the boundary count as inside.
    #[must_use]
    pub fn intersect(&self, line: &Line2) -> Intersection<Segment2> {
        let dir = line.dir();
        let clipped = if dir.y.abs() > dir.x.abs() {
            self.clip_steep(line)
        } else {
            self.clip_shallow(line)
        };
        match clipped {
            Ok(Some(segment)) => Intersection::Hit(segment),
            Ok(None) => Intersection::Miss,
            Err(err) => {
                debug!(%err, "box clipping has no unique answer");
                Intersection::Degenerate
            }
        }
    }

    /// Clips a line that is closer to vertical, solving for x on the bottom and
    /// top edges.
    fn clip_steep(&self, line: &Line2) -> Result<Option<Segment2>> {
        let (min_x, max_x) = (self.point.x, self.max_x());
        let (min_y, max_y) = (self.point.y, self.max_y());

        let x_at_bottom = line.x_for_y(min_y);
        let x_at_top = line.x_for_y(max_y);
        let bottom = classify(x_at_bottom, min_x, max_x);
        let top = classify(x_at_top, min_x, max_x);
        trace!(x_at_bottom, x_at_top, bottom, top, "clipping steep line");

        let (start, end) = match (bottom * top, bottom, top) {
            (1, _, _) => return Ok(None),
            (-1, _, _) => (
                line.point_where_coord(0, min_x)?,
                line.point_where_coord(0, max_x)?,
            ),
            (_, -1, _) => (
                line.point_where_coord(0, min_x)?,
                Point2::new(x_at_top, max_y),
            ),
            (_, 1, _) => (
                line.point_where_coord(0, max_x)?,
                Point2::new(x_at_top, max_y),
            ),
            (_, _, -1) => (
                Point2::new(x_at_bottom, min_y),
                line.point_where_coord(0, min_x)?,
            ),
            (_, _, 1) => (
                Point2::new(x_at_bottom, min_y),
                line.point_where_coord(0, max_x)?,
            ),
            _ => (Point2::new(x_at_bottom, min_y), Point2::new(x_at_top, max_y)),
        };
        Ok(span(start, end))
    }

    /// Clips a line that is closer to horizontal, solving for y on the left and
    /// right edges.
    fn clip_shallow(&self, line: &Line2) -> Result<Option<Segment2>> {
        let (min_x, max_x) = (self.point.x, self.max_x());
        let (min_y, max_y) = (self.point.y, self.max_y());

        let y_at_left = line.y_for_x(min_x);
        let y_at_right = line.y_for_x(max_x);
        let left = classify(y_at_left, min_y, max_y);
        let right = classify(y_at_right, min_y, max_y);
        trace!(y_at_left, y_at_right, left, right, "clipping shallow line");

        let (start, end) = match (left * right, left, right) {
            (1, _, _) => return Ok(None),
            (-1, _, _) => (
                line.point_where_coord(1, min_y)?,
                line.point_where_coord(1, max_y)?,
            ),
            (_, -1, _) => (
                Point2::new(max_x, y_at_right),
                line.point_where_coord(1, min_y)?,
            ),
            (_, 1, _) => (
                Point2::new(max_x, y_at_right),
                line.point_where_coord(1, max_y)?,
            ),
            (_, _, -1) => (
                Point2::new(min_x, y_at_left),
                line.point_where_coord(1, min_y)?,
            ),
            (_, _, 1) => (
                Point2::new(min_x, y_at_left),
                line.point_where_coord(1, max_y)?,
            ),
            _ => (Point2::new(min_x, y_at_left), Point2::new(max_x, y_at_right)),
        };
        Ok(span(start, end))
    }
}

/// Position of `value` relative to `[min, max]`: `-1` below, `0` inside
/// (bounds included), `1` above.
fn classify(value: f64, min: f64, max: f64) -> i8 {
    if value > max {
        1
    } else if value < min {
        -1
    } else {
        0
    }
}

/// Segment between the two clip points, or `None` when they coincide and the
/// line only touches the box.
fn span(start: Point2, end: Point2) -> Option<Segment2> {
    let segment = Segment2::new(start, end).ok();
    if segment.is_none() {
        debug!(?start, "line touches box in a single point");
    }
    segment
}
