//! Geometric primitives: points, orientation and on-segment tests.

/// A two-dimensional point with integer coordinates.
///
/// Points are sorted by `x` and then by `y`, for the convenience of our
/// sweep (which consumes points from the largest `x` down).
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.x, self.y).cmp(&(other.x, other.y))
    }
}

impl PartialOrd for Point {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl Point {
    /// Create a new point.
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Which way do three points turn?
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// `p3` is a right turn from `p1 -> p2`.
    Clockwise,
    /// The three points lie on a common line.
    Collinear,
    /// `p3` is a left turn from `p1 -> p2`.
    CounterClockwise,
}

/// The signed cross product `(p2 - p1) x (p3 - p1)`.
///
/// Positive means `p3` lies to the left of the directed line `p1 -> p2`,
/// negative to the right, zero exactly on it. The result is computed in
/// `i128` so it is exact over the full `i64` coordinate range.
pub(crate) fn cross(p1: Point, p2: Point, p3: Point) -> i128 {
    let ux = p2.x as i128 - p1.x as i128;
    let uy = p2.y as i128 - p1.y as i128;
    let vx = p3.x as i128 - p1.x as i128;
    let vy = p3.y as i128 - p1.y as i128;
    ux * vy - uy * vx
}

/// The turn direction of the triple `(p1, p2, p3)`.
pub fn orientation(p1: Point, p2: Point, p3: Point) -> Orientation {
    match cross(p1, p2, p3).cmp(&0) {
        std::cmp::Ordering::Less => Orientation::Clockwise,
        std::cmp::Ordering::Equal => Orientation::Collinear,
        std::cmp::Ordering::Greater => Orientation::CounterClockwise,
    }
}

/// The squared Euclidean distance between `a` and `b`.
///
/// Only ever used for ordering and tie-breaks, never as an angle or a
/// length, so staying in integers keeps every comparison exact.
pub fn squared_distance(a: Point, b: Point) -> i128 {
    let dx = a.x as i128 - b.x as i128;
    let dy = a.y as i128 - b.y as i128;
    dx * dx + dy * dy
}

/// Does `p` lie on the segment `a -- b`, endpoints included?
pub fn on_segment(p: Point, a: Point, b: Point) -> bool {
    cross(a, b, p) == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// Do the segments `a1 -- a2` and `b1 -- b2` cross at a point interior to
/// both?
///
/// Touching (an endpoint of one segment lying on the other) is not a
/// crossing: it shows up as a zero cross product, which fails the strict
/// sign test.
pub(crate) fn properly_cross(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);
    ((d1 > 0 && d2 < 0) || (d1 < 0 && d2 > 0)) && ((d3 > 0 && d4 < 0) || (d3 < 0 && d4 > 0))
}
