//! Thread-safe wrapper for concurrent index access.
//!
//! This module provides `SyncQuadTree`, a wrapper around `QuadTree` that uses
//! `Arc<RwLock<QuadTree>>` internally. Searches run concurrently; `add`,
//! `remove` and `clear` take the lock exclusively.
//!
//! # Features
//!
//! Enable the `sync` feature to use this module:
//!
//! ```toml
//! [dependencies]
//! quadex = { version = "0.1", features = ["sync"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use quadex::{Bounds, Point, SyncQuadTree};
//! use std::thread;
//!
//! let tree = SyncQuadTree::new(Bounds::default());
//!
//! let writer = tree.clone();
//! let handle = thread::spawn(move || {
//!     writer.add(Point::new(0.25, 0.25));
//! });
//!
//! tree.add(Point::new(-0.25, -0.25));
//! handle.join().unwrap();
//!
//! assert_eq!(tree.len(), 2);
//! ```

use crate::config::Config;
use crate::error::Result;
use crate::item::Item;
use crate::tree::QuadTree;
use crate::{Bounds, TreeStats};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Thread-safe handle to a `QuadTree` using `Arc<RwLock<QuadTree>>`.
///
/// Cloning is cheap and shares the same index.
pub struct SyncQuadTree<T> {
    inner: Arc<RwLock<QuadTree<T>>>,
}

impl<T> Clone for SyncQuadTree<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Item> SyncQuadTree<T> {
    /// Creates an empty shared index over `bounds` with the default configuration.
    pub fn new(bounds: Bounds) -> Self {
        Self::from_tree(QuadTree::new(bounds))
    }

    /// Creates an empty shared index with a custom configuration.
    pub fn with_config(bounds: Bounds, config: Config) -> Result<Self> {
        Ok(Self::from_tree(QuadTree::with_config(bounds, config)?))
    }

    /// Wraps an existing index.
    pub fn from_tree(tree: QuadTree<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    pub fn add(&self, item: T) -> bool {
        self.inner.write().add(item)
    }

    pub fn remove(&self, item: &T) -> bool {
        self.inner.write().remove(item)
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn contains(&self, item: &T) -> bool {
        self.inner.read().contains(item)
    }

    /// Visits matching items while holding the read lock.
    pub fn search_with<F>(&self, query: &Bounds, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.inner.read().search_with(query, |item| visit(item));
    }

    pub fn count_within(&self, query: &Bounds) -> usize {
        self.inner.read().count_within(query)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> TreeStats {
        self.inner.read().stats()
    }

    /// Acquires a read guard for running several queries against one state.
    pub fn read(&self) -> RwLockReadGuard<'_, QuadTree<T>> {
        self.inner.read()
    }

    /// Acquires a write guard for batching several mutations.
    pub fn write(&self) -> RwLockWriteGuard<'_, QuadTree<T>> {
        self.inner.write()
    }
}

impl<T: Item + Clone> SyncQuadTree<T> {
    /// Clones out every stored item whose point lies within `query`.
    pub fn search(&self, query: &Bounds) -> Vec<T> {
        let guard = self.inner.read();
        guard.search(query).into_iter().cloned().collect()
    }
}
