use crate::geom::Point;

/// An index into the point arena.
///
/// Ids are assigned once, after sorting the input by `(x, y)`: the
/// leftmost point gets id 1 and the rightmost gets id `n`. They stay fixed
/// for the lifetime of the arena, so an id doubles as the point's rank in
/// the left-to-right order. (As with any index-as-identity scheme, don't
/// mix ids from different [`Points`] arenas.)
#[derive(
    Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PointId(pub usize);

impl std::fmt::Debug for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p_{}", self.0)
    }
}

/// An arena of input points, sorted by `(x, y)` and indexed by [`PointId`].
///
/// Duplicate coordinates are allowed and simply receive distinct ids; the
/// sort is stable, so equal points keep their input order.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Points {
    points: Vec<Point>,
}

impl Points {
    /// Build the arena: collect, sort by `(x, y)`, assign ids `1..=n`.
    pub fn sorted<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Self {
        let mut points: Vec<Point> = points.into_iter().map(|p| p.into()).collect();
        points.sort();
        Points { points }
    }

    /// The number of points in this arena.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is the arena empty?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over all ids, in increasing order.
    pub fn ids(&self) -> impl Iterator<Item = PointId> {
        (1..=self.points.len()).map(PointId)
    }

    /// Iterate over ids and points, in increasing id order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (PointId(i + 1), p))
    }
}

impl std::ops::Index<PointId> for Points {
    type Output = Point;

    fn index(&self, index: PointId) -> &Self::Output {
        &self.points[index.0 - 1]
    }
}
