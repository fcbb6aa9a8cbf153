//! Axis-aligned rectangle queries over point sets.
//!
//! Two related questions about placing rectangles among points:
//!
//! - [`best_placement`]: where should a `width x height` rectangle be
//!   centered to cover as many points as possible? Candidate centers are
//!   discretized from the points' own half-extent offsets, so the search
//!   is exhaustive over the cells that matter.
//! - [`max_weight_region`]: given weighted rectangles, which region of the
//!   plane collects the most overlapping weight? A left-to-right sweep
//!   over entry/exit events, with a lazy max segment tree over the
//!   discretized `y` intervals.

use crate::geom::Point;
use crate::segment_tree::MaxSegTree;

/// A candidate rectangle position and how many points it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Placement {
    /// The chosen center.
    pub center: Point,
    /// Number of points inside the rectangle centered there (inclusive
    /// boundaries).
    pub covered: usize,
}

fn covers(center: Point, p: Point, half_w: i64, half_h: i64) -> bool {
    p.x >= center.x - half_w
        && p.x <= center.x + half_w
        && p.y >= center.y - half_h
        && p.y <= center.y + half_h
}

/// Exhaustively find a best center for a `width x height` rectangle.
///
/// Candidate coordinates are every point coordinate shifted by plus or
/// minus the half extent; the cells of that grid are scanned bottom-to-top
/// then left-to-right, trying each cell's midpoint and its lower-left
/// corner. The first strict maximum wins, which makes the answer
/// deterministic.
///
/// Returns `None` for an empty point set.
pub fn best_placement(points: &[Point], width: i64, height: i64) -> Option<Placement> {
    if points.is_empty() {
        return None;
    }
    let half_w = width / 2;
    let half_h = height / 2;

    let mut xs: Vec<i64> = points
        .iter()
        .flat_map(|p| [p.x - half_w, p.x + half_w])
        .collect();
    let mut ys: Vec<i64> = points
        .iter()
        .flat_map(|p| [p.y - half_h, p.y + half_h])
        .collect();
    xs.sort();
    xs.dedup();
    ys.sort();
    ys.dedup();

    let mut best: Option<Placement> = None;
    for j in 0..ys.len().saturating_sub(1) {
        for i in 0..xs.len().saturating_sub(1) {
            let cell_mid = Point::new((xs[i] + xs[i + 1]) / 2, (ys[j] + ys[j + 1]) / 2);
            let cell_corner = Point::new(xs[i], ys[j]);
            for center in [cell_mid, cell_corner] {
                let covered = points
                    .iter()
                    .filter(|&&p| covers(center, p, half_w, half_h))
                    .count();
                if best.map_or(true, |b| covered > b.covered) {
                    best = Some(Placement { center, covered });
                }
            }
        }
    }

    // A degenerate grid (all candidates equal) still has the one center.
    if best.is_none() {
        let center = Point::new(xs[0], ys[0]);
        let covered = points
            .iter()
            .filter(|&&p| covers(center, p, half_w, half_h))
            .count();
        best = Some(Placement { center, covered });
    }
    best
}

/// An axis-aligned rectangle with a weight attached.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WeightedRect {
    /// Left edge.
    pub x0: i64,
    /// Bottom edge.
    pub y0: i64,
    /// Right edge; must be `>= x0`.
    pub x1: i64,
    /// Top edge; must be `>= y0`.
    pub y1: i64,
    /// The weight this rectangle contributes to every region it covers.
    pub weight: f64,
}

/// A maximal-weight overlap region found by [`max_weight_region`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Region {
    /// Left bound of the region.
    pub x0: i64,
    /// Right bound of the region.
    pub x1: i64,
    /// Bottom bound of the region.
    pub y0: i64,
    /// Top bound of the region.
    pub y1: i64,
    /// Total weight of the rectangles covering the region.
    pub weight: f64,
}

impl Region {
    /// The midpoint of the region.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x0 + self.x1) as f64 / 2.0,
            (self.y0 + self.y1) as f64 / 2.0,
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct Event {
    x: i64,
    /// +1 entry, -1 exit. Entries sort before exits at the same `x`.
    kind: i32,
    y_lo: usize,
    y_hi: usize,
    weight: f64,
}

/// Find a region of the plane where the overlapping rectangles' total
/// weight is maximal.
///
/// Rectangles with an empty `y` extent contribute nothing; if no
/// rectangle has area, there is no region and the result is `None`.
pub fn max_weight_region(rects: &[WeightedRect]) -> Option<Region> {
    let mut ys: Vec<i64> = rects.iter().flat_map(|r| [r.y0, r.y1]).collect();
    ys.sort();
    ys.dedup();
    if ys.len() < 2 {
        return None;
    }

    let mut events = Vec::with_capacity(rects.len() * 2);
    for r in rects {
        let y_lo = ys.binary_search(&r.y0).unwrap();
        let y_hi = ys.binary_search(&r.y1).unwrap();
        // The tree is over the gaps between consecutive y values, so a
        // rectangle spanning ys[a]..ys[b] covers leaves a..=b-1.
        if y_lo < y_hi {
            events.push(Event {
                x: r.x0,
                kind: 1,
                y_lo,
                y_hi: y_hi - 1,
                weight: r.weight,
            });
            events.push(Event {
                x: r.x1,
                kind: -1,
                y_lo,
                y_hi: y_hi - 1,
                weight: r.weight,
            });
        }
    }
    if events.is_empty() {
        return None;
    }
    events.sort_by_key(|e| (e.x, -e.kind));

    let mut tree = MaxSegTree::new(ys.len() - 1);
    let mut best: Option<Region> = None;
    for i in 0..events.len() {
        let e = events[i];
        tree.add(e.y_lo, e.y_hi, e.kind as f64 * e.weight);

        let next_x = events.get(i + 1).map(|n| n.x);
        if next_x == Some(e.x) {
            continue;
        }
        let (weight, leaf) = tree.peak();
        if best.map_or(true, |b| weight > b.weight) {
            best = Some(Region {
                x0: e.x,
                x1: next_x.unwrap_or(e.x),
                y0: ys[leaf],
                y1: ys[leaf + 1],
                weight,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn placement_on_the_five_point_cloud() {
        let points = [p(2, 2), p(2, 4), p(6, 4), p(6, 6), p(4, 6)];
        let placement = best_placement(&points, 2, 2).unwrap();
        assert_eq!(placement.center, p(5, 5));
        assert_eq!(placement.covered, 3);
    }

    #[test]
    fn placement_single_point() {
        let placement = best_placement(&[p(0, 0)], 2, 2).unwrap();
        assert_eq!(placement.center, p(0, 0));
        assert_eq!(placement.covered, 1);
    }

    #[test]
    fn placement_empty() {
        assert_eq!(best_placement(&[], 2, 2), None);
    }

    fn rect(x0: i64, y0: i64, x1: i64, y1: i64, weight: f64) -> WeightedRect {
        WeightedRect {
            x0,
            y0,
            x1,
            y1,
            weight,
        }
    }

    #[test]
    fn triple_overlap_wins() {
        // The first three rectangles share the region [18, 20] x [15, 18].
        let rects = [
            rect(10, 10, 20, 20, 5.0),
            rect(15, 15, 25, 25, 10.0),
            rect(18, 12, 22, 18, 3.0),
            rect(40, 40, 50, 50, 8.0),
        ];
        let region = max_weight_region(&rects).unwrap();
        assert_eq!(region.weight, 18.0);
        assert_eq!((region.x0, region.x1), (18, 20));
        assert_eq!((region.y0, region.y1), (15, 18));
        assert_eq!(region.center(), (19.0, 16.5));
    }

    #[test]
    fn single_rectangle_is_its_own_region() {
        let region = max_weight_region(&[rect(0, 0, 10, 10, 3.5)]).unwrap();
        assert_eq!(region.weight, 3.5);
        assert_eq!((region.x0, region.x1), (0, 10));
        assert_eq!((region.y0, region.y1), (0, 10));
    }

    #[test]
    fn disjoint_rectangles_pick_the_heavier() {
        let rects = [rect(0, 0, 1, 1, 2.0), rect(10, 10, 11, 11, 5.0)];
        let region = max_weight_region(&rects).unwrap();
        assert_eq!(region.weight, 5.0);
        assert_eq!((region.x0, region.x1), (10, 11));
    }

    #[test]
    fn degenerate_rectangles_have_no_region() {
        assert!(max_weight_region(&[]).is_none());
        assert!(max_weight_region(&[rect(0, 0, 10, 0, 1.0)]).is_none());
    }
}
