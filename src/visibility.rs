//! The line-of-sight test between a candidate point and a boundary point.

use crate::edges::EdgeSet;
use crate::geom::{on_segment, properly_cross, squared_distance};
use crate::hull::Hull;
use crate::points::{PointId, Points};

/// Is the segment `pi -- pk` unobstructed?
///
/// `pk` is expected to lie on `hull`; `pi` is the point being introduced.
/// The segment is visible when all three of the following hold:
///
/// 1. it does not properly cross any hull edge (edges incident to `pk`
///    are exempt: touching the boundary at the shared endpoint is fine);
/// 2. it does not properly cross any previously accepted edge (edges
///    incident to either endpoint are exempt for the same reason);
/// 3. no other hull point sits on the segment strictly closer to `pi`
///    than `pk` is.
pub fn visible(points: &Points, pi: PointId, pk: PointId, hull: &Hull, edges: &EdgeSet) -> bool {
    let from = points[pi];
    let to = points[pk];

    for edge in hull.edges() {
        if edge.touches(pk) {
            continue;
        }
        let (b1, b2) = edge.endpoints();
        if properly_cross(from, to, points[b1], points[b2]) {
            return false;
        }
    }

    for edge in edges.iter() {
        if edge.touches(pi) || edge.touches(pk) {
            continue;
        }
        let (b1, b2) = edge.endpoints();
        if properly_cross(from, to, points[b1], points[b2]) {
            return false;
        }
    }

    let reach = squared_distance(from, to);
    for pm in hull.iter() {
        if pm == pi || pm == pk {
            continue;
        }
        let m = points[pm];
        if on_segment(m, from, to) && squared_distance(from, m) < reach {
            return false;
        }
    }

    true
}
