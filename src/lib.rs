//! Bucket quadtree and point quadtree over 2-D points, plus the generators,
//! CSV writers and timing harness used to compare them.

pub mod bench;
pub mod config;
pub mod distribution;
pub mod error;
pub mod export;
pub mod geometry;
pub mod index;
pub mod point_quadtree;
pub mod quadtree;

pub use config::Config;
pub use geometry::{Point, Quadrant, Rect};
pub use index::{NodeView, SpatialIndex};
pub use point_quadtree::PointQuadtree;
pub use quadtree::QuadTree;
