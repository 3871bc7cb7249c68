//! Point quad-tree spatial index over a fixed rectangular universe.
//!
//! ## Features
//! - **Bounded nodes**: leaves split into four quadrants once they hold
//!   `max_elements_per_node` items (64 by default), down to `max_depth` (30)
//! - **Deterministic routing**: points on a split line always land in the
//!   max-side quadrant, so insertion and removal agree
//! - **Pruned range search**: subtrees outside the query are never visited
//! - **Caller-defined items**: anything implementing [`Item`] (a point plus `PartialEq`)
//! - **Thread-safe wrapper**: `SyncQuadTree` behind the `sync` feature
//!
//! Coordinates are already projected 2D values; the index performs no
//! coordinate conversion and does not rebalance after removals.
//!
//! ```rust
//! use quadex::{Bounds, Located, Point, QuadTree};
//!
//! let mut tree = QuadTree::new(Bounds::default());
//! tree.add(Located::new(Point::new(0.5, 0.5), 1));
//! tree.add(Located::new(Point::new(-0.5, 0.5), 2));
//! tree.add(Located::new(Point::new(-0.5, -0.5), 3));
//! tree.add(Located::new(Point::new(-0.5, -0.5), 4));
//! assert_eq!(tree.len(), 4);
//!
//! assert_eq!(tree.search(&Bounds::new(-1.0, -1.0, 1.0, 0.0)).len(), 2);
//! assert!(tree.remove(&Located::new(Point::new(-0.5, -0.5), 4)));
//! assert_eq!(tree.len(), 3);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod item;
mod node;
#[cfg(feature = "sync")]
pub mod sync;
pub mod tree;

pub use builder::QuadTreeBuilder;
pub use config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ELEMENTS_PER_NODE};
pub use error::{QuadexError, Result};
pub use item::{Item, Located};
pub use node::Iter;
pub use tree::QuadTree;

#[cfg(feature = "sync")]
pub use sync::SyncQuadTree;

pub use geo::{Point, Rect};
pub use quadex_types::bounds::Bounds;
pub use quadex_types::quadrant::Quadrant;
pub use quadex_types::stats::TreeStats;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Bounds, Config, Item, Located, Point, QuadTree, QuadTreeBuilder};

    pub use crate::{QuadexError, Result};

    #[cfg(feature = "sync")]
    pub use crate::SyncQuadTree;
}
