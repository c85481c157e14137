//! Operations shared by both tree variants.

use crate::error::TreeError;
use crate::geometry::{Point, Rect};

/// Read-only view of one tree node, handed out by [`SpatialIndex::walk`].
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    pub bounds: Rect,
    pub points: &'a [Point],
    /// Root is depth 0.
    pub depth: usize,
}

pub trait SpatialIndex {
    fn boundary(&self) -> Rect;

    /// Returns false if the point was rejected (outside the boundary, or no
    /// child region could take it).
    fn insert(&mut self, point: Point) -> bool;

    /// Appends every stored point inside `range` to `found`.
    fn query_into<'a>(&'a self, range: &Rect, found: &mut Vec<&'a Point>);

    /// Removes the point with the same identity. Returns false if absent.
    fn remove(&mut self, point: &Point) -> bool;

    /// Depth-first, pre-order visit of every node.
    fn walk(&self, visit: &mut dyn FnMut(NodeView<'_>));

    fn query(&self, range: &Rect) -> Vec<&Point> {
        let mut found = Vec::new();
        self.query_into(range, &mut found);
        found
    }

    fn len(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |node| count += node.points.len());
        count
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    fn depth(&self) -> usize {
        let mut depth = 0;
        self.walk(&mut |node| depth = depth.max(node.depth));
        depth
    }
}

pub(crate) fn check_boundary(bounds: &Rect) -> Result<(), TreeError> {
    if bounds.is_valid() {
        Ok(())
    } else {
        Err(TreeError::InvalidBoundary {
            half_width: bounds.half_width(),
            half_height: bounds.half_height(),
        })
    }
}
