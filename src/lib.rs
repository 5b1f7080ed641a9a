//! Greedy rectangle-cloud placement.
//!
//! Rectangles are added one at a time to a growing, overlap-free collection
//! that keeps its bounding shape close to a target aspect ratio. Pure
//! geometry — no I/O, no pixel operations, `no_std` compatible (with `alloc`).
//!
//! # Modules
//!
//! - [`rect`] — Axis-aligned rectangle primitive and its algebra
//! - [`geom`] — Distance, recentering, and the rubberband placement rule
//! - [`bound`] — Open-ended extents for free regions
//! - [`spot`] — Directional free-space search
//! - [`cloud`] — The cloud orchestrator and its caches
//!
//! # Example
//!
//! ```
//! use rectcloud::{Rectangle, RectangleCloud};
//!
//! let mut cloud = RectangleCloud::default();
//! cloud.add(Rectangle::new(0.0, 0.0, 10.0, 10.0).unwrap()).unwrap();
//! cloud.add(Rectangle::new(0.0, 0.0, 5.0, 10.0).unwrap()).unwrap();
//!
//! let members = cloud.get_rectangles();
//! assert_eq!(members[0], Rectangle::new(0.0, 0.0, 10.0, 10.0).unwrap());
//! assert_eq!(members[1], Rectangle::new(10.0, 0.0, 5.0, 10.0).unwrap());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bound;
pub mod cloud;
pub mod geom;
mod rate;
pub mod rect;
pub mod spot;

// Re-exports: core types from the cloud and its building blocks
pub use bound::{Bound, Region, Span};
pub use cloud::{CloudError, PlacementDiagnostic, RectangleCloud};
pub use geom::{center, distance, new_ratio, rubberband};
pub use rect::{GeometryError, Rectangle};
pub use spot::{Direction, DirectionTrace, Seed};
