use crate::error::TreeError;
use crate::geometry::{Point, Quadrant, Rect};
use crate::index::{check_boundary, NodeView, SpatialIndex};

#[derive(Debug, Clone)]
pub struct QuadTreeNode {
    pub(crate) bounds: Rect,
    pub(crate) capacity: usize,
    points: Vec<Point>,
    // Indexed by `Quadrant::index`: NE, NW, SE, SW.
    children: Option<Box<[QuadTreeNode; 4]>>,
}

impl QuadTreeNode {
    fn new(bounds: Rect, capacity: usize) -> Self {
        QuadTreeNode {
            bounds,
            capacity,
            points: Vec::with_capacity(capacity),
            children: None,
        }
    }

    fn subdivide(bounds: Rect, capacity: usize) -> Box<[QuadTreeNode; 4]> {
        Box::new(Quadrant::ALL.map(|quadrant| QuadTreeNode::new(bounds.child(quadrant), capacity)))
    }

    fn insert(&mut self, point: Point) -> bool {
        if !self.bounds.contains_point(&point) {
            return false;
        }

        if self.points.len() < self.capacity {
            self.points.push(point);
            return true;
        }

        // Points already held here stay here; only the overflow descends.
        let (bounds, capacity) = (self.bounds, self.capacity);
        let children = self
            .children
            .get_or_insert_with(|| Self::subdivide(bounds, capacity));

        children.iter_mut().any(|child| child.insert(point))
    }

    fn query_into<'a>(&'a self, range: &Rect, found: &mut Vec<&'a Point>) {
        if !self.bounds.intersects(range) {
            return;
        }

        for point in &self.points {
            if range.contains_point(point) {
                found.push(point);
            }
        }

        if let Some(ref children) = self.children {
            for child in children.iter() {
                child.query_into(range, found);
            }
        }
    }

    fn remove(&mut self, point: &Point) -> bool {
        if !self.bounds.contains_point(point) {
            return false;
        }

        if let Some(index) = self.points.iter().position(|stored| stored.is(point)) {
            self.points.remove(index);
            return true;
        }

        match self.children {
            Some(ref mut children) => children.iter_mut().any(|child| child.remove(point)),
            None => false,
        }
    }

    fn walk(&self, depth: usize, visit: &mut dyn FnMut(NodeView<'_>)) {
        visit(NodeView {
            bounds: self.bounds,
            points: &self.points,
            depth,
        });

        if let Some(ref children) = self.children {
            for child in children.iter() {
                child.walk(depth + 1, visit);
            }
        }
    }
}

/// Bucket quadtree: every node holds up to `capacity` points and splits into
/// four fixed quadrants on the first overflow. Nodes never merge back.
#[derive(Debug, Clone)]
pub struct QuadTree {
    pub(crate) root: QuadTreeNode,
}

impl QuadTree {
    pub fn new(bounds: Rect, capacity: usize) -> Result<Self, TreeError> {
        if capacity == 0 {
            return Err(TreeError::ZeroCapacity);
        }
        check_boundary(&bounds)?;

        Ok(QuadTree {
            root: QuadTreeNode::new(bounds, capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.root.capacity
    }
}

impl SpatialIndex for QuadTree {
    fn boundary(&self) -> Rect {
        self.root.bounds
    }

    fn insert(&mut self, point: Point) -> bool {
        self.root.insert(point)
    }

    fn query_into<'a>(&'a self, range: &Rect, found: &mut Vec<&'a Point>) {
        self.root.query_into(range, found);
    }

    fn remove(&mut self, point: &Point) -> bool {
        self.root.remove(point)
    }

    fn walk(&self, visit: &mut dyn FnMut(NodeView<'_>)) {
        self.root.walk(0, visit);
    }
}
