//! End-to-end use of the public API, the way a consumer would chain the
//! pieces: build the graph, then hand the edge set to the downstream
//! consumers.

use sightline::cluster::{clusters, Adjacency};
use sightline::cover::best_placement;
use sightline::{visibility_graph, Point, PointId};

#[test]
fn graph_feeds_the_downstream_consumers() {
    let graph = visibility_graph([
        (1, 4),
        (2, 2),
        (3, 3),
        (3, 4),
        (4, 2),
        (5, 4),
        (6, 2),
        (6, 3),
        (6, 5),
        (7, 1),
    ]);
    assert_eq!(graph.edges().len(), 23);

    let adj = Adjacency::new(graph.points().len(), graph.edges());
    let pairs = clusters(&adj, 2, 1);
    assert_eq!(pairs.len(), 23);
    for pair in &pairs {
        assert_eq!(pair.len(), 2);
    }

    let triangles = clusters(&adj, 3, 1);
    assert_eq!(triangles.len(), 15);
    assert!(triangles
        .iter()
        .any(|t| t.iter().map(|p| p.0).collect::<Vec<_>>() == vec![8, 9, 10]));

    // Any triangle's members must be mutual neighbors at one hop.
    for t in &triangles {
        let ids: Vec<PointId> = t.iter().copied().collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                assert!(adj.neighbors(a).contains(&b));
            }
        }
    }

    // The densest spot for a 3x3 window in this cloud holds four points.
    let cloud: Vec<Point> = graph.points().iter().map(|(_, &p)| p).collect();
    let placement = best_placement(&cloud, 3, 3).unwrap();
    assert!(placement.covered >= 4);
}
