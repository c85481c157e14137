use crate::error::TreeError;
use crate::geometry::{Point, Quadrant, Rect};
use crate::index::{check_boundary, NodeView, SpatialIndex};

/// Child visiting order for query, remove and walk.
const VISIT_ORDER: [Quadrant; 4] = [
    Quadrant::NorthWest,
    Quadrant::NorthEast,
    Quadrant::SouthWest,
    Quadrant::SouthEast,
];

#[derive(Debug, Clone)]
pub struct PointQuadNode {
    bounds: Rect,
    point: Option<Point>,
    // Indexed by `Quadrant::index`, each created on first use.
    children: [Option<Box<PointQuadNode>>; 4],
}

impl PointQuadNode {
    fn new(bounds: Rect) -> Self {
        PointQuadNode {
            bounds,
            point: None,
            children: [None, None, None, None],
        }
    }

    fn child(&self, quadrant: Quadrant) -> Option<&PointQuadNode> {
        self.children[quadrant.index()].as_deref()
    }

    fn query_into<'a>(&'a self, range: &Rect, found: &mut Vec<&'a Point>) {
        if !self.bounds.intersects(range) {
            return;
        }

        if let Some(ref point) = self.point {
            if range.contains_point(point) {
                found.push(point);
            }
        }

        for quadrant in VISIT_ORDER {
            if let Some(child) = self.child(quadrant) {
                child.query_into(range, found);
            }
        }
    }

    fn remove(&mut self, point: &Point) -> bool {
        if !self.bounds.contains_point(point) {
            return false;
        }

        if self.point.is_some_and(|stored| stored.is(point)) {
            // Children stay put; the slot is free for the next arrival.
            self.point = None;
            return true;
        }

        VISIT_ORDER.iter().any(|quadrant| {
            self.children[quadrant.index()]
                .as_deref_mut()
                .is_some_and(|child| child.remove(point))
        })
    }

    fn walk(&self, depth: usize, visit: &mut dyn FnMut(NodeView<'_>)) {
        visit(NodeView {
            bounds: self.bounds,
            points: self.point.as_slice(),
            depth,
        });

        for quadrant in VISIT_ORDER {
            if let Some(child) = self.child(quadrant) {
                child.walk(depth + 1, visit);
            }
        }
    }
}

/// Point quadtree: one point per node. The first point a node receives
/// becomes its pivot and routes every later arrival into one of the four
/// fixed quadrants of the node's boundary.
#[derive(Debug, Clone)]
pub struct PointQuadtree {
    root: PointQuadNode,
}

impl PointQuadtree {
    pub fn new(bounds: Rect) -> Result<Self, TreeError> {
        check_boundary(&bounds)?;

        Ok(PointQuadtree {
            root: PointQuadNode::new(bounds),
        })
    }
}

impl SpatialIndex for PointQuadtree {
    fn boundary(&self) -> Rect {
        self.root.bounds
    }

    fn insert(&mut self, point: Point) -> bool {
        let mut node = &mut self.root;
        loop {
            if !node.bounds.contains_point(&point) {
                return false;
            }

            let pivot = match node.point {
                Some(pivot) => pivot,
                None => {
                    node.point = Some(point);
                    return true;
                }
            };

            // The routed child is created even when its fixed quadrant cannot
            // hold the point; the containment check above then rejects it.
            let quadrant = Quadrant::route(&point, &pivot);
            let bounds = node.bounds;
            let child = node.children[quadrant.index()]
                .get_or_insert_with(|| Box::new(PointQuadNode::new(bounds.child(quadrant))));
            node = &mut **child;
        }
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
