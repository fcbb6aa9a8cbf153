//! Utilities for fuzz and/or property testing using `arbitrary`.

use arbitrary::Unstructured;

use crate::geom::Point;

/// Generate a coordinate in `lo..=hi`.
pub fn coord_in_range(lo: i64, hi: i64, u: &mut Unstructured<'_>) -> arbitrary::Result<i64> {
    u.int_in_range(lo..=hi)
}

/// Generate a point with small coordinates.
///
/// The range is kept tight on purpose: collinear triples and duplicate
/// coordinates are where the interesting behavior lives, and a wide range
/// would almost never produce them.
pub fn point(u: &mut Unstructured<'_>) -> arbitrary::Result<Point> {
    Ok(Point::new(
        coord_in_range(-16, 16, u)?,
        coord_in_range(-16, 16, u)?,
    ))
}

/// Generate a small cloud of points, duplicates and all.
pub fn point_cloud(u: &mut Unstructured<'_>) -> arbitrary::Result<Vec<Point>> {
    let len = u.int_in_range(0..=20)?;
    (0..len).map(|_| point(u)).collect()
}
