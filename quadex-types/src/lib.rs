//! # quadex-types
//!
//! Core geometric types for the quadex point quad-tree.
//!
//! - **Bounds**: `Bounds`, an immutable axis-aligned rectangle with midpoint,
//!   quadrant, intersection and containment helpers
//! - **Quadrants**: `Quadrant`, the four sub-rectangles a node splits into
//! - **Statistics**: `TreeStats`, a shape report for a built tree
//!
//! Points are `geo::Point<f64>`. Bounds wrap a `geo::Rect` and are
//! serializable with Serde.
//!
//! ## Examples
//!
//! ```rust
//! use quadex_types::bounds::Bounds;
//! use quadex_types::quadrant::Quadrant;
//! use geo::Point;
//!
//! let universe = Bounds::default();
//! assert_eq!(universe.midpoint(), Point::new(0.0, 0.0));
//!
//! let top_left = universe.quadrant(Quadrant::TopLeft);
//! assert!(top_left.contains_point(&Point::new(-0.5, -0.5)));
//! assert_eq!(universe.quadrant_of(&Point::new(0.0, 0.0)), Quadrant::BottomRight);
//! ```

pub mod bounds;
pub mod quadrant;
pub mod stats;

pub use geo::Point;
