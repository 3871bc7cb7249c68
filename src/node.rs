//! Recursive quad-tree node.
//!
//! A node covers a rectangular region at a fixed depth and is either a leaf
//! holding `(point, item)` pairs or an internal node owning exactly four
//! children, one per quadrant. Leaves split once they are full; internal
//! nodes never merge back.

use crate::config::Config;
use crate::{Bounds, Point, TreeStats};

pub(crate) struct Node<T> {
    bounds: Bounds,
    depth: usize,
    kind: NodeKind<T>,
}

enum NodeKind<T> {
    Leaf(Vec<(Point, T)>),
    /// Children in `Quadrant::ALL` order.
    Internal(Box<[Node<T>; 4]>),
}

impl<T> Node<T> {
    pub(crate) fn new(bounds: Bounds, depth: usize) -> Self {
        Self {
            bounds,
            depth,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    /// Store an item. The caller guarantees `point` lies within this node's bounds.
    pub(crate) fn insert(&mut self, point: Point, item: T, config: &Config) -> bool {
        match &mut self.kind {
            NodeKind::Internal(children) => {
                let quadrant = self.bounds.quadrant_of(&point);
                children[quadrant.index()].insert(point, item, config)
            }
            NodeKind::Leaf(items) => {
                if items.len() < config.max_elements_per_node || self.depth >= config.max_depth {
                    items.push((point, item));
                    return true;
                }
                self.split();
                self.insert(point, item, config)
            }
        }
    }

    /// Turn a full leaf into an internal node, moving every held item into
    /// the child its point routes to. Relative order is kept within a child.
    fn split(&mut self) {
        let NodeKind::Leaf(items) = &mut self.kind else {
            return;
        };
        let items = std::mem::take(items);
        let depth = self.depth + 1;

        log::debug!(
            "Splitting node at depth {} ({} items) over [{}, {}, {}, {}]",
            self.depth,
            items.len(),
            self.bounds.min_x(),
            self.bounds.min_y(),
            self.bounds.max_x(),
            self.bounds.max_y()
        );

        let mut children = Box::new(
            self.bounds
                .quadrants()
                .map(|bounds| Node::new(bounds, depth)),
        );
        for (point, item) in items {
            let quadrant = self.bounds.quadrant_of(&point);
            if let NodeKind::Leaf(child_items) = &mut children[quadrant.index()].kind {
                child_items.push((point, item));
            }
        }
        self.kind = NodeKind::Internal(children);
    }

    /// Drop all children and items, leaving an empty leaf.
    pub(crate) fn clear(&mut self) {
        self.kind = NodeKind::Leaf(Vec::new());
    }

    /// Visit every item whose point lies within `query`, edges included.
    ///
    /// Subtrees whose bounds miss the query are skipped without looking at
    /// their items; subtrees fully inside the query are emitted without
    /// per-item tests.
    pub(crate) fn visit_within<'a, F>(&'a self, query: &Bounds, visit: &mut F)
    where
        F: FnMut(&'a T),
    {
        if !self.bounds.intersects(query) {
            return;
        }
        if query.contains_bounds(&self.bounds) {
            self.visit_all(visit);
            return;
        }
        match &self.kind {
            NodeKind::Leaf(items) => {
                for (point, item) in items {
                    if query.contains_point(point) {
                        visit(item);
                    }
                }
            }
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.visit_within(query, visit);
                }
            }
        }
    }

    fn visit_all<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a T),
    {
        match &self.kind {
            NodeKind::Leaf(items) => items.iter().for_each(|(_, item)| visit(item)),
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.visit_all(visit);
                }
            }
        }
    }

    pub(crate) fn collect_stats(&self, stats: &mut TreeStats, config: &Config) {
        match &self.kind {
            NodeKind::Leaf(items) => {
                stats.record_leaf(self.depth, items.len(), config.max_elements_per_node)
            }
            NodeKind::Internal(children) => {
                stats.record_internal(self.depth);
                for child in children.iter() {
                    child.collect_stats(stats, config);
                }
            }
        }
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![self],
            current: Default::default(),
        }
    }
}

impl<T: PartialEq> Node<T> {
    /// Remove the first stored pair with exactly this point and an equal item.
    ///
    /// Routing follows the same quadrant rule as insertion, so items on split
    /// lines are found where they were put.
    pub(crate) fn remove(&mut self, point: &Point, item: &T) -> bool {
        match &mut self.kind {
            NodeKind::Internal(children) => {
                let quadrant = self.bounds.quadrant_of(point);
                children[quadrant.index()].remove(point, item)
            }
            NodeKind::Leaf(items) => {
                match items.iter().position(|(p, it)| p == point && it == item) {
                    Some(index) => {
                        items.remove(index);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    pub(crate) fn contains(&self, point: &Point, item: &T) -> bool {
        match &self.kind {
            NodeKind::Internal(children) => {
                let quadrant = self.bounds.quadrant_of(point);
                children[quadrant.index()].contains(point, item)
            }
            NodeKind::Leaf(items) => items.iter().any(|(p, it)| p == point && it == item),
        }
    }
}

/// Depth-first iterator over every stored item, children in quadrant order.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: std::slice::Iter<'a, (Point, T)>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((_, item)) = self.current.next() {
                return Some(item);
            }
            let node = self.stack.pop()?;
            match &node.kind {
                NodeKind::Leaf(items) => self.current = items.iter(),
                NodeKind::Internal(children) => self.stack.extend(children.iter().rev()),
            }
        }
    }
}
