//! The public point quad-tree index.

use crate::config::Config;
use crate::error::{QuadexError, Result};
use crate::item::Item;
use crate::node::{Iter, Node};
use crate::{Bounds, Point, TreeStats};
use std::fmt;

/// A point quad-tree over a fixed rectangular universe.
///
/// Items are accepted when their point lies inside the universe bounds
/// (edges included). Dense regions split into four quadrants once a leaf
/// holds `max_elements_per_node` items, down to `max_depth`; leaves at the
/// depth cap accept any number of items. Subtrees are never merged back
/// after removals.
///
/// # Thread Safety
///
/// `QuadTree` is not internally synchronized. Mutation takes `&mut self`;
/// share across threads with `SyncQuadTree` (feature `sync`) or your own lock.
///
/// # Examples
///
/// ```rust
/// use quadex::{Bounds, Located, Point, QuadTree};
///
/// let mut tree = QuadTree::new(Bounds::default());
/// assert!(tree.add(Located::new(Point::new(0.5, 0.5), "a")));
/// assert!(tree.add(Located::new(Point::new(-0.5, 0.5), "b")));
/// assert!(!tree.add(Located::new(Point::new(2.0, 0.0), "outside")));
///
/// let hits = tree.search(&Bounds::new(0.0, 0.0, 1.0, 1.0));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].value, "a");
/// assert_eq!(tree.len(), 2);
/// ```
pub struct QuadTree<T> {
    root: Node<T>,
    bounds: Bounds,
    count: usize,
    config: Config,
}

impl<T: Item> QuadTree<T> {
    /// Create an empty index over `bounds` with the default configuration.
    ///
    /// Swapped corners are normalized by [`Bounds::new`]. Non-finite bounds
    /// (NaN or infinite) are not rejected here; such an index contains no
    /// point and every `add` returns `false`. Use [`QuadTree::with_config`] to reject them.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            root: Node::new(bounds, 0),
            bounds,
            count: 0,
            config: Config::default(),
        }
    }

    /// Create an empty index over `bounds` with a custom configuration.
    pub fn with_config(bounds: Bounds, config: Config) -> Result<Self> {
        config.validate().map_err(QuadexError::InvalidConfig)?;
        if !bounds.is_finite() {
            return Err(QuadexError::InvalidBounds {
                min_x: bounds.min_x(),
                min_y: bounds.min_y(),
                max_x: bounds.max_x(),
                max_y: bounds.max_y(),
            });
        }

        Ok(Self {
            root: Node::new(bounds, 0),
            bounds,
            count: 0,
            config,
        })
    }

    /// Add an item at its own point.
    ///
    /// Returns `false` without changing the index when the point lies
    /// outside the universe bounds.
    pub fn add(&mut self, item: T) -> bool {
        let point = item.point();
        if !self.accepts(&point) {
            log::trace!(
                "Rejecting item at ({}, {}): outside index bounds",
                point.x(),
                point.y()
            );
            return false;
        }

        let inserted = self.root.insert(point, item, &self.config);
        if inserted {
            self.count += 1;
        }
        inserted
    }

    /// Remove a stored item equal to `item` at the same point.
    ///
    /// Returns `false` when the point lies outside the universe bounds or no
    /// matching item is stored. Only one matching item is removed per call.
    pub fn remove(&mut self, item: &T) -> bool {
        let point = item.point();
        if !self.accepts(&point) {
            log::trace!(
                "Ignoring removal at ({}, {}): outside index bounds",
                point.x(),
                point.y()
            );
            return false;
        }

        let removed = self.root.remove(&point, item);
        if removed {
            self.count -= 1;
        }
        removed
    }

    /// Check whether an item equal to `item` is stored at its point.
    pub fn contains(&self, item: &T) -> bool {
        let point = item.point();
        self.accepts(&point) && self.root.contains(&point, item)
    }

    /// Points outside the universe are never stored. A non-finite universe
    /// has no usable midpoint to split on, so it stores nothing at all.
    fn accepts(&self, point: &Point) -> bool {
        self.bounds.is_finite() && self.bounds.contains_point(point)
    }

    /// Every stored item whose point lies within `query`, edges included.
    ///
    /// The result order is stable for a given tree state.
    pub fn search(&self, query: &Bounds) -> Vec<&T> {
        let mut results = Vec::new();
        self.search_with(query, |item| results.push(item));
        results
    }

    /// Call `visit` for every stored item whose point lies within `query`,
    /// in the same order as [`QuadTree::search`], without collecting.
    pub fn search_with<'a, F>(&'a self, query: &Bounds, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        if !self.bounds.intersects(query) {
            return;
        }
        self.root.visit_within(query, &mut visit);
    }

    /// Number of stored items whose point lies within `query`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadex::{Bounds, Point, QuadTree};
    ///
    /// let mut tree = QuadTree::new(Bounds::default());
    /// for i in 0..10 {
    ///     tree.add(Point::new(i as f64 / 10.0, 0.5));
    /// }
    /// assert_eq!(tree.count_within(&Bounds::new(0.0, 0.0, 0.45, 1.0)), 5);
    /// ```
    pub fn count_within(&self, query: &Bounds) -> usize {
        let mut count = 0;
        self.search_with(query, |_| count += 1);
        count
    }

    /// Reset to an empty index over the same bounds.
    pub fn clear(&mut self) {
        self.root.clear();
        self.count = 0;
    }
}

impl<T> QuadTree<T> {
    /// Number of successfully added, not yet removed items since the last clear.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Alias for [`QuadTree::len`].
    pub fn count(&self) -> usize {
        self.count
    }

    /// True when no items are stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The universe bounds this index covers.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The capacity and depth limits this index splits by.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Iterate over every stored item in search order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.root.iter()
    }

    /// Walk the tree and report its shape.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::new();
        self.root.collect_stats(&mut stats, &self.config);
        stats
    }
}

impl<T: Item> Default for QuadTree<T> {
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}

impl<T: Item> Extend<T> for QuadTree<T> {
    /// Add every item, skipping those outside the universe bounds.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds)
            .field("count", &self.count)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Located, Point};

    fn located(x: f64, y: f64, id: u32) -> Located<u32> {
        Located::new(Point::new(x, y), id)
    }

    #[test]
    fn test_add_and_count() {
        let mut tree = QuadTree::default();
        assert!(tree.is_empty());
        assert!(tree.add(located(0.5, 0.5, 1)));
        assert!(tree.add(located(0.5, 0.5, 2)));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.count(), 2);
    }

    #[test]
    fn test_add_outside_bounds() {
        let mut tree = QuadTree::new(Bounds::new(-0.2, -0.2, 0.2, 0.2));
        assert!(!tree.add(located(0.5, 0.5, 1)));
        assert_eq!(tree.len(), 0);
        assert!(tree.search(tree.bounds()).is_empty());
    }

    #[test]
    fn test_add_rejects_nan_point() {
        let mut tree = QuadTree::default();
        assert!(!tree.add(located(f64::NAN, 0.0, 1)));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_infinite_bounds_store_nothing() {
        let mut tree = QuadTree::new(Bounds::new(
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::INFINITY,
        ));
        let item = located(0.5, 0.5, 1);
        assert!(!tree.add(item.clone()));
        assert!(!tree.contains(&item));
        assert!(!tree.remove(&item));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut tree = QuadTree::default();
        let item = located(-0.3, 0.7, 9);
        tree.add(item.clone());

        assert!(!tree.remove(&located(-0.3, 0.7, 10)));
        assert!(!tree.remove(&located(5.0, 5.0, 9)));
        assert_eq!(tree.len(), 1);

        assert!(tree.remove(&item));
        assert!(!tree.remove(&item));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_contains() {
        let mut tree = QuadTree::default();
        let item = located(0.1, 0.1, 3);
        assert!(!tree.contains(&item));
        tree.add(item.clone());
        assert!(tree.contains(&item));
        assert!(!tree.contains(&located(0.1, 0.1, 4)));
        assert!(!tree.contains(&located(3.0, 0.1, 3)));
    }

    #[test]
    fn test_search_outside_universe_is_empty() {
        let mut tree = QuadTree::default();
        tree.add(located(1.0, 1.0, 1));
        assert!(tree.search(&Bounds::new(2.0, 2.0, 3.0, 3.0)).is_empty());
        assert_eq!(tree.search(&Bounds::new(1.0, 1.0, 3.0, 3.0)).len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut tree = QuadTree::default();
        for i in 0..200 {
            tree.add(located(i as f64 / 200.0, 0.25, i));
        }
        assert!(tree.stats().internal_count > 0);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().count(), 0);
        assert_eq!(tree.stats().node_count, 1);
        assert!(tree.add(located(0.0, 0.0, 1)));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_with_config_validation() {
        let bad = Config {
            max_elements_per_node: 0,
            ..Config::default()
        };
        let result = QuadTree::<Point>::with_config(Bounds::default(), bad);
        assert!(matches!(result, Err(QuadexError::InvalidConfig(_))));

        let result = QuadTree::<Point>::with_config(
            Bounds::new(0.0, 0.0, f64::NAN, 1.0),
            Config::default(),
        );
        assert!(matches!(result, Err(QuadexError::InvalidBounds { .. })));
    }

    #[test]
    fn test_custom_capacity_splits_early() {
        let config = Config::default().with_max_elements_per_node(2);
        let mut tree = QuadTree::with_config(Bounds::default(), config).unwrap();
        tree.add(Point::new(-0.5, -0.5));
        tree.add(Point::new(0.5, -0.5));
        assert_eq!(tree.stats().internal_count, 0);
        tree.add(Point::new(0.5, 0.5));
        assert_eq!(tree.stats().internal_count, 1);
        assert_eq!(tree.stats().leaf_count, 4);
    }

    #[test]
    fn test_extend_skips_out_of_bounds() {
        let mut tree = QuadTree::default();
        tree.extend([
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(-1.0, 1.0),
        ]);
        assert_eq!(tree.len(), 2);
        assert_eq!((&tree).into_iter().count(), 2);
    }

    #[test]
    fn test_debug_output() {
        let tree: QuadTree<Point> = QuadTree::default();
        let debug = format!("{:?}", tree);
        assert!(debug.contains("QuadTree"));
        assert!(debug.contains("count: 0"));
    }
}
