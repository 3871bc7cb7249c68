//! Quad-tree builder for flexible configuration
//!
//! This module provides a builder pattern for creating indexes with custom
//! universe bounds and node limits, validating everything up front.

use crate::config::Config;
use crate::error::Result;
use crate::item::Item;
use crate::tree::QuadTree;
use crate::Bounds;

/// Builder for quad-tree bounds and settings.
///
/// # Examples
///
/// ```rust
/// use quadex::{Bounds, Point, QuadTreeBuilder};
///
/// let tree = QuadTreeBuilder::new()
///     .bounds(Bounds::new(0.0, 0.0, 256.0, 256.0))
///     .max_elements_per_node(16)
///     .build::<Point>()?;
/// assert_eq!(tree.config().max_elements_per_node, 16);
/// assert_eq!(tree.config().max_depth, 30);
/// # Ok::<(), quadex::QuadexError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuadTreeBuilder {
    bounds: Bounds,
    config: Config,
}

impl QuadTreeBuilder {
    /// Create a new builder over `[-1, 1] x [-1, 1]` with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the universe bounds.
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a JSON document.
    pub fn config_json(mut self, json: &str) -> Result<Self> {
        self.config = Config::from_json(json)?;
        Ok(self)
    }

    pub fn max_elements_per_node(mut self, max_elements: usize) -> Self {
        self.config.max_elements_per_node = max_elements;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Build the index. Fails on an invalid configuration or non-finite bounds.
    pub fn build<T: Item>(self) -> Result<QuadTree<T>> {
        QuadTree::with_config(self.bounds, self.config)
    }
}
