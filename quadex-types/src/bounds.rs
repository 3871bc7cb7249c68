use crate::quadrant::Quadrant;
use geo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An immutable axis-aligned rectangle in projected 2D space.
///
/// This is a wrapper around `geo::Rect`. Construction normalizes the corners,
/// so `min_x <= max_x` and `min_y <= max_y` always hold for finite input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl Bounds {
    /// Create new bounds from minimum and maximum coordinates.
    ///
    /// Swapped corners are normalized rather than rejected.
    ///
    /// # Arguments
    ///
    /// * `min_x` - Minimum x coordinate
    /// * `min_y` - Minimum y coordinate
    /// * `max_x` - Maximum x coordinate
    /// * `max_y` - Maximum y coordinate
    ///
    /// # Examples
    ///
    /// ```
    /// use quadex_types::bounds::Bounds;
    ///
    /// let bounds = Bounds::new(0.0, 0.0, 10.0, 5.0);
    /// assert_eq!(bounds.width(), 10.0);
    ///
    /// let swapped = Bounds::new(10.0, 5.0, 0.0, 0.0);
    /// assert_eq!(swapped, bounds);
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_x, y: min_y },
                geo::coord! { x: max_x, y: max_y },
            ),
        }
    }

    /// Create bounds from a `geo::Rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// Get the minimum x coordinate.
    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    /// Get the minimum y coordinate.
    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    /// Get the maximum x coordinate.
    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    /// Get the maximum y coordinate.
    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    /// Get the extent along the x axis.
    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }

    /// Get the extent along the y axis.
    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }

    /// True when every coordinate is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.min_x().is_finite()
            && self.min_y().is_finite()
            && self.max_x().is_finite()
            && self.max_y().is_finite()
    }

    /// Arithmetic mean of the minimum and maximum on each axis.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.min_x() + self.max_x()) / 2.0,
            (self.min_y() + self.max_y()) / 2.0,
        )
    }

    /// The sub-rectangle for one quadrant, built from the midpoint and two of
    /// these bounds' corners.
    ///
    /// The four quadrants partition these bounds exactly: neighbours share
    /// their split-line edges and nothing else.
    pub fn quadrant(&self, quadrant: Quadrant) -> Bounds {
        let mid = self.midpoint();
        let (min_x, max_x) = if quadrant.is_left() {
            (self.min_x(), mid.x())
        } else {
            (mid.x(), self.max_x())
        };
        let (min_y, max_y) = if quadrant.is_top() {
            (self.min_y(), mid.y())
        } else {
            (mid.y(), self.max_y())
        };
        Bounds::new(min_x, min_y, max_x, max_y)
    }

    /// All four quadrants in [`Quadrant::ALL`] order.
    pub fn quadrants(&self) -> [Bounds; 4] {
        Quadrant::ALL.map(|quadrant| self.quadrant(quadrant))
    }

    /// The quadrant a point is routed to when these bounds are split.
    ///
    /// A point goes left when `x < mid.x` and top when `y < mid.y`. Points on
    /// a split line therefore land in the max-side quadrant, and the chosen
    /// quadrant always contains any point these bounds contain.
    pub fn quadrant_of(&self, point: &Point) -> Quadrant {
        let mid = self.midpoint();
        Quadrant::from_halves(point.x() < mid.x(), point.y() < mid.y())
    }

    /// Check if a point is contained within these bounds, edges included.
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x() >= self.min_x()
            && point.x() <= self.max_x()
            && point.y() >= self.min_y()
            && point.y() <= self.max_y()
    }

    /// Check if `other` lies entirely inside these bounds, edges included.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Check if these bounds intersect with another. Touching edges count.
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.max_x() < other.min_x()
            || self.min_x() > other.max_x()
            || self.max_y() < other.min_y()
            || self.min_y() > other.max_y())
    }
}

impl Default for Bounds {
    /// The normalized map-projection square `[-1, 1] x [-1, 1]`.
    fn default() -> Self {
        Bounds::new(-1.0, -1.0, 1.0, 1.0)
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl From<Bounds> for Rect {
    fn from(bounds: Bounds) -> Self {
        bounds.rect
    }
}
