//! The collinear-retaining convex hull.
//!
//! This is a Graham-style scan with two deliberate twists. Points that are
//! collinear around the anchor are sorted *farther first*, and the scan
//! pops only on a strict right turn, keeping exact-collinear triples. The
//! effect is that the result is not the minimal vertex set: points lying
//! in the middle of a boundary edge stay in the sequence, and the
//! downstream visibility test depends on seeing them there.

use crate::edges::Edge;
use crate::geom::{cross, squared_distance};
use crate::points::{PointId, Points};

/// An ordered cyclic sequence of point ids tracing the convex boundary of
/// an active subset.
///
/// Rebuilt from scratch every sweep step; never updated in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Hull {
    points: Vec<PointId>,
}

fn pairs<T>(xs: &[T]) -> impl Iterator<Item = (&T, &T)> {
    xs.windows(2).map(|pair| (&pair[0], &pair[1]))
}

impl Hull {
    /// Compute the hull of `active`, a subset of the arena's ids.
    ///
    /// With three or fewer points the input *is* the boundary and is
    /// returned in its given order. Otherwise the bottom-most (then
    /// left-most) point anchors a counter-clockwise angular sort, and the
    /// scan keeps everything that never forces a strict right turn.
    pub fn compute(points: &Points, active: &[PointId]) -> Hull {
        if active.len() <= 3 {
            return Hull {
                points: active.to_vec(),
            };
        }

        let mut order = active.to_vec();
        let anchor_at = (0..order.len())
            .min_by_key(|&i| {
                let p = points[order[i]];
                (p.y, p.x)
            })
            .unwrap();
        order.swap(0, anchor_at);
        let anchor = points[order[0]];

        // Ties (same ray from the anchor) put the farther point first;
        // combined with the non-strict scan below this is what keeps
        // mid-edge collinear points in the output.
        order[1..].sort_by(|&j, &k| {
            match cross(anchor, points[j], points[k]).cmp(&0) {
                std::cmp::Ordering::Greater => std::cmp::Ordering::Less,
                std::cmp::Ordering::Less => std::cmp::Ordering::Greater,
                std::cmp::Ordering::Equal => {
                    squared_distance(anchor, points[k]).cmp(&squared_distance(anchor, points[j]))
                }
            }
        });

        let mut stack: Vec<PointId> = Vec::with_capacity(order.len());
        stack.push(order[0]);
        stack.push(order[1]);
        for &p in &order[2..] {
            // Pop on a strict right turn only; exact collinearity stays.
            while stack.len() >= 2 {
                let p1 = points[stack[stack.len() - 2]];
                let p2 = points[stack[stack.len() - 1]];
                if cross(p1, p2, points[p]) < 0 {
                    stack.pop();
                } else {
                    break;
                }
            }
            stack.push(p);
        }

        Hull { points: stack }
    }

    /// The number of boundary points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is the hull empty?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The boundary ids, in cyclic order.
    pub fn as_slice(&self) -> &[PointId] {
        &self.points
    }

    /// Iterate over the boundary ids.
    pub fn iter(&self) -> impl Iterator<Item = PointId> + '_ {
        self.points.iter().copied()
    }

    /// Is `p` on the boundary?
    pub fn contains(&self, p: PointId) -> bool {
        self.points.contains(&p)
    }

    /// The boundary edges: consecutive ids, taken cyclically.
    ///
    /// A hull of fewer than two points has no edges. (A hull of exactly
    /// two yields the same edge in both orientations; deduplication is the
    /// consumer's business.)
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let wrap = if self.points.len() >= 2 {
            self.points.last().zip(self.points.first())
        } else {
            None
        };
        pairs(&self.points)
            .chain(wrap)
            .map(|(&a, &b)| Edge::new(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arena(pts: &[(i64, i64)]) -> Points {
        Points::sorted(pts.iter().copied())
    }

    fn all_ids(points: &Points) -> Vec<PointId> {
        points.ids().collect()
    }

    #[test]
    fn three_or_fewer_pass_through_in_order() {
        let points = arena(&[(0, 0), (5, 0), (2, 4)]);
        let active = vec![PointId(3), PointId(1), PointId(2)];
        let hull = Hull::compute(&points, &active);
        assert_eq!(hull.as_slice(), &active[..]);
    }

    #[test]
    fn square_with_midpoints() {
        // Corners of a square plus the midpoint of every side. The
        // midpoints of the right, top and left sides are kept; the bottom
        // one sits on the anchor's first ray and gets popped when the scan
        // turns the corner.
        let points = arena(&[
            (0, 0),
            (2, 0),
            (2, 2),
            (0, 2),
            (1, 0),
            (2, 1),
            (1, 2),
            (0, 1),
        ]);
        // Sorted ids: 1=(0,0) 2=(0,1) 3=(0,2) 4=(1,0) 5=(1,2) 6=(2,0)
        // 7=(2,1) 8=(2,2).
        let hull = Hull::compute(&points, &all_ids(&points));
        let ids: Vec<usize> = hull.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![1, 6, 7, 8, 5, 3, 2]);
    }

    #[test]
    fn collinear_run_is_retained() {
        let points = arena(&[(0, 0), (4, 0), (4, 1), (4, 2), (4, 3), (0, 3)]);
        // ids: 1=(0,0) 2=(0,3) 3=(4,0) 4=(4,1) 5=(4,2) 6=(4,3)
        let hull = Hull::compute(&points, &all_ids(&points));
        let ids: Vec<usize> = hull.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![1, 3, 4, 5, 6, 2]);
    }

    #[test]
    fn edges_are_cyclic() {
        let points = arena(&[(0, 0), (5, 0), (2, 4)]);
        let hull = Hull::compute(&points, &all_ids(&points));
        let edges: Vec<(usize, usize)> = hull
            .edges()
            .map(|e| {
                let (a, b) = e.endpoints();
                (a.0, b.0)
            })
            .collect();
        assert_eq!(edges, vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn no_edges_below_two_points() {
        let points = arena(&[(0, 0)]);
        let hull = Hull::compute(&points, &all_ids(&points));
        assert_eq!(hull.edges().count(), 0);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let points = arena(&[(1, 4), (2, 2), (3, 3), (3, 4), (4, 2), (5, 4), (6, 2)]);
        let active = all_ids(&points);
        let first = Hull::compute(&points, &active);
        let second = Hull::compute(&points, &active);
        assert_eq!(first, second);
    }

    fn any_collinear_triple(pts: &[(i64, i64)]) -> bool {
        for i in 0..pts.len() {
            for j in (i + 1)..pts.len() {
                for k in (j + 1)..pts.len() {
                    let (a, b, c) = (pts[i].into(), pts[j].into(), pts[k].into());
                    if cross(a, b, c) == 0 {
                        return true;
                    }
                }
            }
        }
        false
    }

    proptest! {
        // In general position the quirks are dormant and this is a plain
        // convex hull: every active point lies on or left of every
        // directed boundary edge.
        #[test]
        fn contains_every_point(pts in proptest::collection::hash_set((-50i64..50, -50i64..50), 4..9)) {
            let pts: Vec<(i64, i64)> = pts.into_iter().collect();
            if any_collinear_triple(&pts) {
                return Ok(());
            }
            let points = Points::sorted(pts.iter().copied());
            let hull = Hull::compute(&points, &all_ids(&points));
            for id in points.ids() {
                for edge in hull.edges() {
                    let (a, b) = edge.endpoints();
                    prop_assert!(cross(points[a], points[b], points[id]) >= 0);
                }
            }
        }

        #[test]
        fn hull_is_a_subset_of_the_input(pts in proptest::collection::vec((-20i64..20, -20i64..20), 1..12)) {
            let points = Points::sorted(pts.iter().copied());
            let active = all_ids(&points);
            let hull = Hull::compute(&points, &active);
            prop_assert!(hull.len() >= 1);
            for id in hull.iter() {
                prop_assert!(active.contains(&id));
            }
        }
    }
}
