//! Vertex placement for regular polygons and stars.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geom::Point;

/// The starting angle that makes the first vertex point straight up.
pub const UP: f64 = -FRAC_PI_2;

/// The default ratio between a star's inner and outer radius.
pub const STAR_INNER_RATIO: f64 = 0.4;

/// The `n` vertices of a regular polygon around `center`.
///
/// Vertex `i` lies at distance `radius` in the direction
/// `offset + 2πi/n`. With `offset` set to [`UP`] the first vertex points up.
pub fn regular_polygon(center: Point, radius: f64, n: usize, offset: f64) -> Vec<Point> {
    (0..n)
        .map(|i| center.polar(radius, offset + TAU * i as f64 / n as f64))
        .collect()
}

/// The `2n` vertices of a star with `n` points around `center`.
///
/// Even vertices lie on the outer radius, odd ones on
/// `inner_ratio · outer`. Vertex `i` lies in the direction `-π/2 + iπ/n`,
/// so the first point faces up.
pub fn star(center: Point, outer: f64, inner_ratio: f64, n: usize) -> Vec<Point> {
    let inner = outer * inner_ratio;
    (0..2 * n)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            center.polar(r, UP + PI * i as f64 / n as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const EPS: f64 = 1e-9;

    /// Normalize an angle difference into `(-π, π]`.
    fn wrap(angle: f64) -> f64 {
        let a = angle.rem_euclid(TAU);
        if a > PI { a - TAU } else { a }
    }

    #[test]
    fn test_regular_polygon_vertices_are_equidistant_and_evenly_spaced() {
        let center = Point::new(120.0, 80.0);
        for n in 3..=12 {
            for radius in [1.0, 37.5, 80.0] {
                let vertices = regular_polygon(center, radius, n, UP);
                assert_eq!(vertices.len(), n);
                for (i, &v) in vertices.iter().enumerate() {
                    assert!((center.distance(v) - radius).abs() < EPS);
                    let next = vertices[(i + 1) % n];
                    let step = wrap(center.angle_to(next) - center.angle_to(v));
                    assert!((step - TAU / n as f64).abs() < EPS, "n = {n}, i = {i}");
                }
            }
        }
    }

    #[test]
    fn test_regular_polygon_starts_pointing_up() {
        let v = regular_polygon(Point::zero(), 10.0, 5, UP);
        assert!(v[0].x.abs() < EPS);
        assert!((v[0].y + 10.0).abs() < EPS);
    }

    #[test]
    fn test_star_alternates_radii() {
        let center = Point::new(50.0, 50.0);
        for n in 3..=9 {
            let vertices = star(center, 30.0, STAR_INNER_RATIO, n);
            assert_eq!(vertices.len(), 2 * n);
            for (i, &v) in vertices.iter().enumerate() {
                let expected = if i % 2 == 0 { 30.0 } else { 12.0 };
                assert!((center.distance(v) - expected).abs() < EPS);
                let angle = center.angle_to(v);
                assert!(wrap(angle - (UP + PI * i as f64 / n as f64)).abs() < EPS);
            }
        }
    }
}
