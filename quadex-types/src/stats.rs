use serde::{Deserialize, Serialize};

/// Shape report for a quad-tree, gathered by walking every node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of items stored
    pub item_count: usize,
    /// Total number of nodes, root included
    pub node_count: usize,
    /// Nodes that hold items directly
    pub leaf_count: usize,
    /// Nodes that were split into four children
    pub internal_count: usize,
    /// Depth of the deepest node (root is 0)
    pub max_depth: usize,
    /// Largest number of items held by a single leaf
    pub max_leaf_items: usize,
    /// Leaves at the depth cap holding more than the per-node capacity
    pub overflowing_leaves: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_leaf(&mut self, depth: usize, items: usize, capacity: usize) {
        self.node_count += 1;
        self.leaf_count += 1;
        self.item_count += items;
        self.max_depth = self.max_depth.max(depth);
        self.max_leaf_items = self.max_leaf_items.max(items);
        if items > capacity {
            self.overflowing_leaves += 1;
        }
    }

    pub fn record_internal(&mut self, depth: usize) {
        self.node_count += 1;
        self.internal_count += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Average number of items per leaf, `0.0` for a tree with no leaves.
    pub fn avg_leaf_items(&self) -> f64 {
        if self.leaf_count == 0 {
            0.0
        } else {
            self.item_count as f64 / self.leaf_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_stats() {
        let mut stats = TreeStats::new();
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.avg_leaf_items(), 0.0);

        stats.record_internal(0);
        stats.record_leaf(1, 4, 64);
        stats.record_leaf(1, 0, 64);
        stats.record_leaf(3, 70, 64);

        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.leaf_count, 3);
        assert_eq!(stats.internal_count, 1);
        assert_eq!(stats.item_count, 74);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.max_leaf_items, 70);
        assert_eq!(stats.overflowing_leaves, 1);
    }
}
