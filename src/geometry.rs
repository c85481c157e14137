use uuid::Uuid;

/// A located point with a stable identity.
///
/// Two points minted separately never compare as the same point, even when
/// their coordinates are equal. Removal from either tree goes by `id`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    id: Uuid,
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub(crate) fn is(&self, other: &Point) -> bool {
        self.id == other.id
    }
}

/// Axis-aligned box stored as centre plus half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    half_width: f64,
    half_height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, half_width: f64, half_height: f64) -> Self {
        Rect {
            x,
            y,
            half_width,
            half_height,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    pub fn left(&self) -> f64 {
        self.x - self.half_width
    }

    pub fn right(&self) -> f64 {
        self.x + self.half_width
    }

    pub fn bottom(&self) -> f64 {
        self.y - self.half_height
    }

    pub fn top(&self) -> f64 {
        self.y + self.half_height
    }

    /// Half extents are non-negative (and not NaN).
    pub fn is_valid(&self) -> bool {
        self.half_width >= 0.0 && self.half_height >= 0.0
    }

    /// Closed on every side: a point on an edge is inside.
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Touching edges count as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.bottom() > self.top()
            || other.top() < self.bottom())
    }

    /// Geometry of one of the four equal quadrants of this box.
    ///
    /// North is +y for both trees. Bucket quadtrees laid out with north at -y
    /// (screen coordinates) see their NE/SE and NW/SW children swapped.
    pub fn child(&self, quadrant: Quadrant) -> Rect {
        let half_width = self.half_width / 2.0;
        let half_height = self.half_height / 2.0;
        let (dx, dy) = match quadrant {
            Quadrant::NorthEast => (half_width, half_height),
            Quadrant::NorthWest => (-half_width, half_height),
            Quadrant::SouthEast => (half_width, -half_height),
            Quadrant::SouthWest => (-half_width, -half_height),
        };
        Rect::new(self.x + dx, self.y + dy, half_width, half_height)
    }
}

/// North is increasing y, east is increasing x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    pub fn index(self) -> usize {
        match self {
            Quadrant::NorthEast => 0,
            Quadrant::NorthWest => 1,
            Quadrant::SouthEast => 2,
            Quadrant::SouthWest => 3,
        }
    }

    /// Quadrant of `point` relative to `pivot`. Strict `<` on both axes, so
    /// ties land east and north.
    pub fn route(point: &Point, pivot: &Point) -> Self {
        match (point.x < pivot.x, point.y < pivot.y) {
            (true, true) => Quadrant::SouthWest,
            (true, false) => Quadrant::NorthWest,
            (false, true) => Quadrant::SouthEast,
            (false, false) => Quadrant::NorthEast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_closed() {
        let rect = Rect::new(0.0, 0.0, 10.0, 5.0);

        assert!(rect.contains_point(&Point::new(0.0, 0.0)));
        assert!(rect.contains_point(&Point::new(10.0, 5.0)));
        assert!(rect.contains_point(&Point::new(-10.0, -5.0)));
        assert!(rect.contains_point(&Point::new(10.0, 0.0)));
        assert!(!rect.contains_point(&Point::new(10.001, 0.0)));
        assert!(!rect.contains_point(&Point::new(0.0, -5.001)));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let overlapping = Rect::new(15.0, 15.0, 10.0, 10.0);
        let touching = Rect::new(20.0, 0.0, 10.0, 10.0);
        let apart = Rect::new(30.0, 30.0, 5.0, 5.0);
        let inside = Rect::new(1.0, 1.0, 1.0, 1.0);

        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
        assert!(a.intersects(&touching));
        assert!(a.intersects(&inside));
        assert!(inside.intersects(&a));
        assert!(!a.intersects(&apart));
        assert!(!apart.intersects(&a));
    }

    #[test]
    fn test_child_geometry() {
        let root = Rect::new(0.0, 0.0, 200.0, 200.0);

        assert_eq!(
            root.child(Quadrant::NorthEast),
            Rect::new(100.0, 100.0, 100.0, 100.0)
        );
        assert_eq!(
            root.child(Quadrant::NorthWest),
            Rect::new(-100.0, 100.0, 100.0, 100.0)
        );
        assert_eq!(
            root.child(Quadrant::SouthEast),
            Rect::new(100.0, -100.0, 100.0, 100.0)
        );
        assert_eq!(
            root.child(Quadrant::SouthWest),
            Rect::new(-100.0, -100.0, 100.0, 100.0)
        );
    }

    #[test]
    fn test_children_cover_parent() {
        let root = Rect::new(3.0, -7.0, 40.0, 20.0);
        let samples = [
            Point::new(3.0, -7.0),
            Point::new(43.0, 13.0),
            Point::new(-37.0, -27.0),
            Point::new(3.0, 13.0),
            Point::new(-10.0, 5.0),
        ];

        for sample in samples {
            assert!(root.contains_point(&sample));
            assert!(Quadrant::ALL
                .iter()
                .any(|q| root.child(*q).contains_point(&sample)));
        }
    }

    #[test]
    fn test_route_ties_go_north_east() {
        let pivot = Point::new(0.0, 0.0);

        assert_eq!(
            Quadrant::route(&Point::new(0.0, 0.0), &pivot),
            Quadrant::NorthEast
        );
        assert_eq!(
            Quadrant::route(&Point::new(-1.0, 0.0), &pivot),
            Quadrant::NorthWest
        );
        assert_eq!(
            Quadrant::route(&Point::new(0.0, -1.0), &pivot),
            Quadrant::SouthEast
        );
        assert_eq!(
            Quadrant::route(&Point::new(-1.0, -1.0), &pivot),
            Quadrant::SouthWest
        );
    }

    #[test]
    fn test_identity_is_not_coordinates() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(1.0, 1.0);
        let a_again = a;

        assert!(!a.is(&b));
        assert!(a.is(&a_again));
        assert_ne!(a, b);
    }

    #[test]
    fn test_validity() {
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, -1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 1.0, f64::NAN).is_valid());
    }
}
