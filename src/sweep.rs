//! The right-to-left incremental sweep.
//!
//! [`Sweeper`] seeds itself with the three right-most points, then feeds
//! in the remaining points one at a time in decreasing id order. Each step
//! tests the incoming point for line of sight against every point of the
//! *current* boundary, records the visible pairs, and only then rebuilds
//! the boundary with the new point included.

use crate::edges::{Edge, EdgeSet};
use crate::hull::Hull;
use crate::points::{PointId, Points};
use crate::visibility::visible;

/// Incremental construction state for a visibility graph.
///
/// Drive it with [`advance`](Sweeper::advance) to watch the construction
/// step by step, or [`run`](Sweeper::run) to go straight to the finished
/// [`VisibilityGraph`].
#[derive(Clone, Debug)]
pub struct Sweeper {
    points: Points,
    active: Vec<PointId>,
    hull: Hull,
    edges: EdgeSet,
    /// Id of the next point to feed in; 0 once the sweep is done.
    next: usize,
}

impl Sweeper {
    /// Seed the sweep with the up-to-three highest ids of `points`.
    ///
    /// The seed points' boundary edges are the first entries of the edge
    /// set. For fewer than three points that boundary already *is* the
    /// whole answer (a single edge for two points, nothing for one or
    /// zero) and the sweep has no steps left.
    pub fn new(points: Points) -> Self {
        let n = points.len();
        let seed = n.min(3);
        let active: Vec<PointId> = ((n - seed + 1)..=n).rev().map(PointId).collect();
        let hull = Hull::compute(&points, &active);
        let mut edges = EdgeSet::default();
        for e in hull.edges() {
            edges.insert(e);
        }
        Sweeper {
            points,
            active,
            hull,
            edges,
            next: n - seed,
        }
    }

    /// Feed in the next point; returns its id, or `None` when done.
    pub fn advance(&mut self) -> Option<PointId> {
        if self.next == 0 {
            return None;
        }
        let pi = PointId(self.next);
        self.next -= 1;

        // Visibility is judged against the boundary as it stood before
        // this step; the new point joins it only afterwards.
        for pk in self.hull.iter() {
            if visible(&self.points, pi, pk, &self.hull, &self.edges) {
                self.edges.insert(Edge::new(pi, pk));
            }
        }

        self.active.push(pi);
        self.hull = Hull::compute(&self.points, &self.active);
        self.check_invariants();
        Some(pi)
    }

    /// Run the sweep to completion.
    pub fn run(mut self) -> VisibilityGraph {
        while self.advance().is_some() {}
        VisibilityGraph {
            points: self.points,
            edges: self.edges,
        }
    }

    /// Is there anything left to feed in?
    pub fn is_done(&self) -> bool {
        self.next == 0
    }

    /// The point arena.
    pub fn points(&self) -> &Points {
        &self.points
    }

    /// The points incorporated so far, in incorporation order.
    pub fn active(&self) -> &[PointId] {
        &self.active
    }

    /// The current boundary.
    pub fn hull(&self) -> &Hull {
        &self.hull
    }

    /// The edges accepted so far.
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    #[cfg(feature = "slow-asserts")]
    fn check_invariants(&self) {
        for id in self.hull.iter() {
            assert!(self.active.contains(&id));
        }
        let hull2 = Hull::compute(&self.points, &self.active);
        assert_eq!(&hull2, &self.hull);
    }

    #[cfg(not(feature = "slow-asserts"))]
    fn check_invariants(&self) {}
}

/// The finished product: the sorted point arena and the final edge set.
#[derive(Clone, Debug, serde::Serialize)]
pub struct VisibilityGraph {
    points: Points,
    edges: EdgeSet,
}

impl VisibilityGraph {
    /// The point arena the edge ids refer into.
    pub fn points(&self) -> &Points {
        &self.points
    }

    /// The visibility edges.
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Consume the graph, keeping only the edge set.
    pub fn into_edges(self) -> EdgeSet {
        self.edges
    }

    /// Enumerate connected subsets of exactly `size` points, where every
    /// member is reachable from the subset's lowest id within `hops`.
    pub fn clusters(&self, size: usize, hops: usize) -> Vec<crate::cluster::Cluster> {
        let adj = crate::cluster::Adjacency::new(self.points.len(), &self.edges);
        crate::cluster::clusters(&adj, size, hops)
    }

    /// Render the graph as an SVG document, for eyeballing test cases.
    #[cfg(feature = "debug-svg")]
    pub fn dump_svg(&self) -> svg::Document {
        use svg::node::element::{Circle, Line, Text};

        let xs = || self.points.iter().map(|(_, p)| p.x);
        let ys = || self.points.iter().map(|(_, p)| p.y);
        let min_x = xs().min().unwrap_or(0);
        let max_x = xs().max().unwrap_or(0);
        let min_y = ys().min().unwrap_or(0);
        let max_y = ys().max().unwrap_or(0);

        let mut doc = svg::Document::new().set(
            "viewBox",
            format!(
                "{} {} {} {}",
                min_x - 1,
                min_y - 1,
                max_x - min_x + 2,
                max_y - min_y + 2
            ),
        );
        for edge in self.edges.iter() {
            let (a, b) = edge.endpoints();
            let (pa, pb) = (self.points[a], self.points[b]);
            doc = doc.add(
                Line::new()
                    .set("x1", pa.x.to_string())
                    .set("y1", pa.y.to_string())
                    .set("x2", pb.x.to_string())
                    .set("y2", pb.y.to_string())
                    .set("stroke", "black")
                    .set("stroke-width", "0.05"),
            );
        }
        for (id, p) in self.points.iter() {
            doc = doc
                .add(
                    Circle::new()
                        .set("cx", p.x.to_string())
                        .set("cy", p.y.to_string())
                        .set("r", "0.1")
                        .set("fill", "red"),
                )
                .add(
                    Text::new(format!("{}", id.0))
                        .set("x", (p.x as f64 + 0.15).to_string())
                        .set("y", (p.y as f64 - 0.15).to_string())
                        .set("font-size", "0.3"),
                );
        }
        doc
    }
}
