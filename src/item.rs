//! The capability an index stores: anything that can report its own point.

use crate::Point;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

/// A value with a location in the index's projected coordinate space.
///
/// The point must stay the same while the item is stored; the tree does not
/// re-index on mutation. `PartialEq` decides which stored item `remove`
/// targets, so two items sharing a point are only the same item if they
/// compare equal.
pub trait Item: PartialEq {
    fn point(&self) -> Point;
}

impl Item for Point {
    fn point(&self) -> Point {
        *self
    }
}

impl<T: Item + ?Sized> Item for &T {
    fn point(&self) -> Point {
        (**self).point()
    }
}

impl<T: Item + ?Sized> Item for Box<T> {
    fn point(&self) -> Point {
        (**self).point()
    }
}

impl<T: Item + ?Sized> Item for Rc<T> {
    fn point(&self) -> Point {
        (**self).point()
    }
}

impl<T: Item + ?Sized> Item for Arc<T> {
    fn point(&self) -> Point {
        (**self).point()
    }
}

/// A caller value pinned to a point.
///
/// # Examples
///
/// ```rust
/// use quadex::{Item, Located, Point};
///
/// let cafe = Located::new(Point::new(0.25, -0.5), "cafe");
/// assert_eq!(cafe.point(), Point::new(0.25, -0.5));
/// assert_eq!(cafe.value, "cafe");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Located<V> {
    pub point: Point,
    pub value: V,
}

impl<V> Located<V> {
    pub fn new(point: Point, value: V) -> Self {
        Self { point, value }
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: PartialEq> Item for Located<V> {
    fn point(&self) -> Point {
        self.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_its_own_item() {
        let p = Point::new(0.1, 0.2);
        assert_eq!(p.point(), p);
    }

    #[test]
    fn test_smart_pointers_delegate() {
        let located = Located::new(Point::new(1.0, 2.0), 7u32);
        assert_eq!(Box::new(located.clone()).point(), Point::new(1.0, 2.0));
        assert_eq!(Rc::new(located.clone()).point(), Point::new(1.0, 2.0));
        assert_eq!(Arc::new(located.clone()).point(), Point::new(1.0, 2.0));
        assert_eq!((&located).point(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_same_point_different_items() {
        let a = Located::new(Point::new(0.0, 0.0), "a");
        let b = Located::new(Point::new(0.0, 0.0), "b");
        assert_eq!(a.point(), b.point());
        assert_ne!(a, b);
    }
}
