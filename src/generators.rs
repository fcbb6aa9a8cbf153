//! Utilities for generating examples, benchmarks, and test cases.

/// An `n` by `n` grid of lattice points.
pub fn grid(n: usize) -> Vec<(i64, i64)> {
    let mut ret = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            ret.push((i as i64, j as i64));
        }
    }
    ret
}

/// `n` points rounded onto a circle of the given radius.
///
/// Rounding can produce duplicate coordinates for large `n`; the sweep is
/// expected to cope, so no effort is made to avoid them.
pub fn ring(n: usize, radius: i64) -> Vec<(i64, i64)> {
    (0..n)
        .map(|i| {
            let t = std::f64::consts::TAU * i as f64 / n as f64;
            (
                (radius as f64 * t.cos()).round() as i64,
                (radius as f64 * t.sin()).round() as i64,
            )
        })
        .collect()
}

/// Collinear-heavy input: `per_ray` points marching out along each of up
/// to eight lattice directions from the origin.
///
/// Every ray is a maximal run of collinear points, which stresses the
/// farther-first tie-break in the hull sort.
pub fn spokes(rays: usize, per_ray: usize) -> Vec<(i64, i64)> {
    const DIRS: [(i64, i64); 8] = [
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];
    let mut ret = vec![(0, 0)];
    for &(dx, dy) in DIRS.iter().take(rays) {
        for k in 1..=per_ray as i64 {
            ret.push((dx * k, dy * k));
        }
    }
    ret
}
