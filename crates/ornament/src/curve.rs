//! Curves built from lines and cubic Bézier segments.

use kurbo::ParamCurveExtrema;

use crate::geom::{Point, Size};

/// How far the control points of a cubic Bézier quarter circle lie from
/// its end points, relative to the radius.
// https://stackoverflow.com/a/2007782
const KAPPA: f64 = 0.551784;

/// The maximum distance in pixels between a circular arc and its cubic
/// approximation.
const ARC_TOLERANCE: f64 = 0.01;

/// A curve consisting of movements, lines, and Bézier segments.
///
/// A single curve may hold multiple contours, each starting with a
/// [`Move`](CurveItem::Move).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Curve(pub Vec<CurveItem>);

/// An item in a curve.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveItem {
    Move(Point),
    Line(Point),
    Cubic(Point, Point, Point),
    Close,
}

impl Curve {
    /// Creates an empty curve.
    pub const fn new() -> Self {
        Self(vec![])
    }

    /// Creates a curve that describes a rectangle.
    pub fn rect(origin: Point, size: Size) -> Self {
        let mut curve = Self::new();
        curve.push_rect(origin, size);
        curve
    }

    /// Creates a curve that describes an axis-aligned ellipse.
    pub fn ellipse(center: Point, rx: f64, ry: f64) -> Self {
        let mut curve = Self::new();
        curve.push_ellipse(center, rx, ry);
        curve
    }

    /// Creates a curve that describes a circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::ellipse(center, radius, radius)
    }

    /// Creates a closed polygon through the given vertices.
    pub fn polygon(vertices: &[Point]) -> Self {
        let mut curve = Self::new();
        curve.push_polygon(vertices);
        curve
    }

    /// Creates an open straight segment.
    pub fn segment(from: Point, to: Point) -> Self {
        let mut curve = Self::new();
        curve.move_(from);
        curve.line(to);
        curve
    }

    /// Creates an open circular arc around `center`, starting at angle
    /// `start` and sweeping by `sweep` radians (positive is clockwise on
    /// screen).
    pub fn arc(center: Point, radius: f64, start: f64, sweep: f64) -> Self {
        let mut curve = Self::new();
        curve.move_(center.polar(radius, start));
        curve.arc_to(center, radius, start, sweep);
        curve
    }

    /// Push a [`Move`](CurveItem::Move) item.
    pub fn move_(&mut self, p: Point) {
        self.0.push(CurveItem::Move(p));
    }

    /// Push a [`Line`](CurveItem::Line) item.
    pub fn line(&mut self, p: Point) {
        self.0.push(CurveItem::Line(p));
    }

    /// Push a [`Cubic`](CurveItem::Cubic) item.
    pub fn cubic(&mut self, p1: Point, p2: Point, p3: Point) {
        self.0.push(CurveItem::Cubic(p1, p2, p3));
    }

    /// Push a [`Close`](CurveItem::Close) item.
    pub fn close(&mut self) {
        self.0.push(CurveItem::Close);
    }

    /// Append a closed rectangular contour, clockwise from the top-left
    /// corner.
    pub fn push_rect(&mut self, origin: Point, size: Size) {
        let Point { x, y } = origin;
        self.move_(origin);
        self.line(Point::new(x + size.w, y));
        self.line(Point::new(x + size.w, y + size.h));
        self.line(Point::new(x, y + size.h));
        self.close();
    }

    /// Append a closed rectangular contour whose four corners are rounded
    /// with the same radius.
    ///
    /// The radius is clamped to half of the shorter side.
    pub fn push_rounded_rect(&mut self, origin: Point, size: Size, radius: f64) {
        let r = radius.clamp(0.0, size.min_side().max(0.0) / 2.0);
        if r == 0.0 {
            self.push_rect(origin, size);
            return;
        }

        let (x0, y0) = (origin.x, origin.y);
        let (x1, y1) = (x0 + size.w, y0 + size.h);
        let m = r * (1.0 - KAPPA);
        let p = Point::new;

        self.move_(p(x0 + r, y0));
        self.line(p(x1 - r, y0));
        self.cubic(p(x1 - m, y0), p(x1, y0 + m), p(x1, y0 + r));
        self.line(p(x1, y1 - r));
        self.cubic(p(x1, y1 - m), p(x1 - m, y1), p(x1 - r, y1));
        self.line(p(x0 + r, y1));
        self.cubic(p(x0 + m, y1), p(x0, y1 - m), p(x0, y1 - r));
        self.line(p(x0, y0 + r));
        self.cubic(p(x0, y0 + m), p(x0 + m, y0), p(x0 + r, y0));
        self.close();
    }

    /// Append a closed elliptical contour made of four cubic segments,
    /// clockwise on screen starting at the leftmost point.
    pub fn push_ellipse(&mut self, center: Point, rx: f64, ry: f64) {
        let mx = KAPPA * rx;
        let my = KAPPA * ry;
        let point = |x, y| Point::new(center.x + x, center.y + y);

        self.move_(point(-rx, 0.0));
        self.cubic(point(-rx, -my), point(-mx, -ry), point(0.0, -ry));
        self.cubic(point(mx, -ry), point(rx, -my), point(rx, 0.0));
        self.cubic(point(rx, my), point(mx, ry), point(0.0, ry));
        self.cubic(point(-mx, ry), point(-rx, my), point(-rx, 0.0));
        self.close();
    }

    /// Append a closed polygonal contour. Does nothing for an empty slice.
    pub fn push_polygon(&mut self, vertices: &[Point]) {
        let Some((first, rest)) = vertices.split_first() else { return };
        self.move_(*first);
        for &vertex in rest {
            self.line(vertex);
        }
        self.close();
    }

    /// Append a circular arc, assuming the current point lies on the circle
    /// at angle `start`.
    ///
    /// The arc is approximated by cubic segments, at least one per quarter
    /// turn.
    pub fn arc_to(&mut self, center: Point, radius: f64, start: f64, sweep: f64) {
        if sweep == 0.0 || !sweep.is_finite() {
            return;
        }

        let arc = kurbo::Arc {
            center: to_kurbo(center),
            radii: kurbo::Vec2::new(radius, radius),
            start_angle: start,
            sweep_angle: sweep,
            x_rotation: 0.0,
        };

        for el in arc.append_iter(ARC_TOLERANCE) {
            if let kurbo::PathEl::CurveTo(p1, p2, p3) = el {
                self.cubic(from_kurbo(p1), from_kurbo(p2), from_kurbo(p3));
            }
        }
    }

    /// Check if the curve is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every contour of the curve ends with a
    /// [`Close`](CurveItem::Close).
    pub fn is_closed(&self) -> bool {
        let mut open = false;
        for item in &self.0 {
            match item {
                CurveItem::Move(_) if open => return false,
                CurveItem::Close => open = false,
                _ => open = true,
            }
        }
        !open && !self.is_empty()
    }

    /// The number of contours in this curve.
    pub fn contours(&self) -> usize {
        self.0.iter().filter(|item| matches!(item, CurveItem::Move(_))).count()
    }

    /// The end points of all items, in order. Control points of cubic
    /// segments are skipped.
    pub fn vertices(&self) -> Vec<Point> {
        self.0
            .iter()
            .filter_map(|item| match *item {
                CurveItem::Move(p) | CurveItem::Line(p) => Some(p),
                CurveItem::Cubic(_, _, p) => Some(p),
                CurveItem::Close => None,
            })
            .collect()
    }

    /// The tight bounding box of the curve as its minimum and maximum
    /// corners. Cubic segments contribute their extrema, not their control
    /// points.
    ///
    /// Returns `None` for an empty curve.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut bbox: Option<kurbo::Rect> = None;
        let mut start = kurbo::Point::ZERO;
        let mut cursor = kurbo::Point::ZERO;

        for item in &self.0 {
            let piece = match *item {
                CurveItem::Move(to) => {
                    start = to_kurbo(to);
                    cursor = start;
                    kurbo::Rect::from_points(cursor, cursor)
                }
                CurveItem::Line(to) => {
                    let to = to_kurbo(to);
                    let piece = kurbo::Rect::from_points(cursor, to);
                    cursor = to;
                    piece
                }
                CurveItem::Cubic(c0, c1, end) => {
                    let end = to_kurbo(end);
                    let cubic =
                        kurbo::CubicBez::new(cursor, to_kurbo(c0), to_kurbo(c1), end);
                    cursor = end;
                    cubic.bounding_box()
                }
                CurveItem::Close => {
                    cursor = start;
                    continue;
                }
            };
            bbox = Some(bbox.map_or(piece, |bbox| bbox.union(piece)));
        }

        bbox.map(|bbox| (Point::new(bbox.x0, bbox.y0), Point::new(bbox.x1, bbox.y1)))
    }
}

fn to_kurbo(p: Point) -> kurbo::Point {
    kurbo::Point::new(p.x, p.y)
}

fn from_kurbo(p: kurbo::Point) -> Point {
    Point::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[track_caller]
    fn assert_close(a: Point, b: Point) {
        assert!(a.distance(b) < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_rect_is_one_closed_contour() {
        let curve = Curve::rect(Point::new(1.0, 2.0), Size::new(10.0, 5.0));
        assert!(curve.is_closed());
        assert_eq!(curve.contours(), 1);
        assert_eq!(
            curve.vertices(),
            vec![
                Point::new(1.0, 2.0),
                Point::new(11.0, 2.0),
                Point::new(11.0, 7.0),
                Point::new(1.0, 7.0),
            ]
        );
    }

    #[test]
    fn test_ellipse_passes_through_extremes() {
        let c = Point::new(50.0, 40.0);
        let curve = Curve::ellipse(c, 20.0, 12.0);
        assert!(curve.is_closed());
        assert_eq!(
            curve.vertices(),
            vec![
                Point::new(30.0, 40.0),
                Point::new(50.0, 28.0),
                Point::new(70.0, 40.0),
                Point::new(50.0, 52.0),
                Point::new(30.0, 40.0),
            ]
        );
    }

    #[test]
    fn test_quarter_arc_runs_clockwise_from_top_to_right() {
        let c = Point::new(100.0, 100.0);
        let curve = Curve::arc(c, 80.0, -PI / 2.0, PI / 2.0);
        assert!(!curve.is_closed());
        let vertices = curve.vertices();
        assert!(vertices.len() >= 2);
        assert_close(vertices[0], Point::new(100.0, 20.0));
        assert_close(*vertices.last().unwrap(), Point::new(180.0, 100.0));
        for &v in &vertices {
            assert!((c.distance(v) - 80.0).abs() < 1e-9, "{v:?}");
        }

        let (min, max) = curve.bounds().unwrap();
        assert!(min.distance(Point::new(100.0, 20.0)) < 1e-6, "{min:?}");
        assert!(max.distance(Point::new(180.0, 100.0)) < 1e-6, "{max:?}");
    }

    #[test]
    fn test_full_arc_has_a_piece_per_quarter() {
        let curve = Curve::arc(Point::zero(), 1.0, 0.0, 2.0 * PI);
        let cubics =
            curve.0.iter().filter(|item| matches!(item, CurveItem::Cubic(..))).count();
        assert!(cubics >= 4);
        assert_close(*curve.vertices().last().unwrap(), Point::new(1.0, 0.0));
    }

    #[test]
    fn test_zero_sweep_adds_nothing() {
        let curve = Curve::arc(Point::zero(), 10.0, 0.0, 0.0);
        assert_eq!(curve.0, vec![CurveItem::Move(Point::new(10.0, 0.0))]);
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let mut curve = Curve::new();
        curve.push_rounded_rect(Point::zero(), Size::new(100.0, 60.0), 9.0);
        assert!(curve.is_closed());
        let (min, max) = curve.bounds().unwrap();
        assert_close(min, Point::zero());
        assert_close(max, Point::new(100.0, 60.0));
    }

    #[test]
    fn test_two_contours() {
        let mut curve = Curve::circle(Point::zero(), 10.0);
        curve.push_ellipse(Point::zero(), 5.0, 5.0);
        assert_eq!(curve.contours(), 2);
        assert!(curve.is_closed());
    }

    #[test]
    fn test_bounds_skip_control_points() {
        // The control points reach y = -10, the curve itself only -7.5.
        let mut curve = Curve::new();
        curve.move_(Point::zero());
        curve.cubic(Point::new(0.0, -10.0), Point::new(10.0, -10.0), Point::new(10.0, 0.0));
        let (min, max) = curve.bounds().unwrap();
        assert_close(min, Point::new(0.0, -7.5));
        assert_close(max, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_bounds_of_empty_curve() {
        assert_eq!(Curve::new().bounds(), None);
    }
}
