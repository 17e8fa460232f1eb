//! Basic geometric shapes.

use std::f64::consts::PI;
use std::str::FromStr;

use crate::canvas::FillRule;
use crate::curve::Curve;
use crate::diag::{bail, StrResult, UnknownKind};
use crate::geom::{Point, Size};
use crate::polygon::{regular_polygon, star, STAR_INNER_RATIO, UP};

/// A kind of basic shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    Ellipse,
    Rectangle,
    Square,
    RoundedRect,
    Triangle,
    Polygon,
    Star,
    Diamond,
    Ring,
    Cross,
    ArrowRight,
    ArrowUp,
    Heart,
    Hexagon,
    Octagon,
    Crescent,
}

impl ShapeKind {
    /// All kinds, in the order they are listed to users.
    pub const ALL: [Self; 17] = [
        Self::Circle,
        Self::Ellipse,
        Self::Rectangle,
        Self::Square,
        Self::RoundedRect,
        Self::Triangle,
        Self::Polygon,
        Self::Star,
        Self::Diamond,
        Self::Ring,
        Self::Cross,
        Self::ArrowRight,
        Self::ArrowUp,
        Self::Heart,
        Self::Hexagon,
        Self::Octagon,
        Self::Crescent,
    ];

    /// The canonical names of all kinds.
    pub const NAMES: &'static [&'static str] = &[
        "circle",
        "ellipse",
        "rectangle",
        "square",
        "rounded-rect",
        "triangle",
        "polygon",
        "star",
        "diamond",
        "ring",
        "cross",
        "arrow-right",
        "arrow-up",
        "heart",
        "hexagon",
        "octagon",
        "crescent",
    ];

    /// The canonical name of this kind.
    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// The rule with which the outline must be filled.
    ///
    /// Rings and crescents are two overlapping contours whose overlap is cut
    /// out. The arms of a cross overlap as well, but are joined.
    pub fn fill_rule(self) -> FillRule {
        match self {
            Self::Ring | Self::Crescent => FillRule::EvenOdd,
            _ => FillRule::NonZero,
        }
    }
}

impl FromStr for ShapeKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "circle" => Self::Circle,
            "ellipse" => Self::Ellipse,
            "rectangle" | "rect" => Self::Rectangle,
            "square" => Self::Square,
            "rounded-rect" | "roundrect" | "rounded-rectangle" => Self::RoundedRect,
            "triangle" => Self::Triangle,
            "polygon" => Self::Polygon,
            "star" => Self::Star,
            "diamond" | "rhombus" => Self::Diamond,
            "ring" | "donut" => Self::Ring,
            "cross" | "plus" => Self::Cross,
            "arrow-right" | "arrow" => Self::ArrowRight,
            "arrow-up" => Self::ArrowUp,
            "heart" => Self::Heart,
            "hexagon" => Self::Hexagon,
            "octagon" => Self::Octagon,
            "crescent" | "moon" => Self::Crescent,
            _ => {
                return Err(UnknownKind {
                    family: "shape",
                    given: s.into(),
                    valid: Self::NAMES,
                });
            }
        })
    }
}

/// Everything needed to lay out one basic shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeRequest {
    /// What to draw.
    pub kind: ShapeKind,
    /// The center of the shape.
    pub center: Point,
    /// The radius of the shape's circumscribed circle.
    pub radius: f64,
    /// The element size, which rectangles take their width from.
    pub size: f64,
    /// The number of sides of a polygon or points of a star.
    pub sides: u32,
}

/// The geometry of a laid out shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// The shape's contours.
    pub curve: Curve,
    /// How the contours must be filled.
    pub fill_rule: FillRule,
}

impl ShapeRequest {
    /// Lay out the shape.
    pub fn outline(&self) -> StrResult<Outline> {
        let Self { kind, center: c, radius: r, size, sides } = *self;
        let p = |dx: f64, dy: f64| Point::new(c.x + dx, c.y + dy);

        let curve = match kind {
            ShapeKind::Circle => Curve::circle(c, r),
            ShapeKind::Ellipse => Curve::ellipse(c, r, r * 0.6),
            ShapeKind::Rectangle => {
                let size = Size::new(size, size * 0.6);
                Curve::rect(p(-size.w / 2.0, -size.h / 2.0), size)
            }
            ShapeKind::Square => Curve::rect(p(-r, -r), Size::new(2.0 * r, 2.0 * r)),
            ShapeKind::RoundedRect => {
                let size = Size::new(size, size * 0.6);
                let mut curve = Curve::new();
                curve.push_rounded_rect(
                    p(-size.w / 2.0, -size.h / 2.0),
                    size,
                    size.min_side() * 0.15,
                );
                curve
            }
            ShapeKind::Triangle => Curve::polygon(&regular_polygon(c, r, 3, UP)),
            ShapeKind::Polygon => {
                let n = at_least_three(kind, sides)?;
                Curve::polygon(&regular_polygon(c, r, n, UP))
            }
            ShapeKind::Star => {
                let n = at_least_three(kind, sides)?;
                Curve::polygon(&star(c, r, STAR_INNER_RATIO, n))
            }
            ShapeKind::Diamond => {
                Curve::polygon(&[p(0.0, -r), p(r * 0.7, 0.0), p(0.0, r), p(-r * 0.7, 0.0)])
            }
            ShapeKind::Ring => {
                let mut curve = Curve::circle(c, r);
                curve.push_ellipse(c, r * 0.5, r * 0.5);
                curve
            }
            ShapeKind::Cross => {
                let arm = r * 0.35;
                let mut curve = Curve::rect(p(-arm, -r), Size::new(arm * 2.0, r * 2.0));
                curve.push_rect(p(-r, -arm), Size::new(r * 2.0, arm * 2.0));
                curve
            }
            ShapeKind::ArrowRight => {
                let shaft = r * 0.2;
                let neck = r * 0.4;
                Curve::polygon(&[
                    p(-r, -shaft),
                    p(neck, -shaft),
                    p(neck, -r * 0.5),
                    p(r, 0.0),
                    p(neck, r * 0.5),
                    p(neck, shaft),
                    p(-r, shaft),
                ])
            }
            ShapeKind::ArrowUp => {
                let shaft = r * 0.2;
                let neck = -r * 0.4;
                Curve::polygon(&[
                    p(0.0, -r),
                    p(r * 0.5, neck),
                    p(shaft, neck),
                    p(shaft, r),
                    p(-shaft, r),
                    p(-shaft, neck),
                    p(-r * 0.5, neck),
                ])
            }
            ShapeKind::Heart => heart(c, r / 50.0),
            ShapeKind::Hexagon => Curve::polygon(&regular_polygon(c, r, 6, UP)),
            ShapeKind::Octagon => {
                Curve::polygon(&regular_polygon(c, r, 8, UP + PI / 8.0))
            }
            ShapeKind::Crescent => {
                let mut curve = Curve::circle(c, r);
                curve.push_ellipse(p(r * 0.4, 0.0), r * 0.8, r * 0.9);
                curve
            }
        };

        Ok(Outline { curve, fill_rule: kind.fill_rule() })
    }
}

/// Reject side counts that do not make a closed figure.
fn at_least_three(kind: ShapeKind, sides: u32) -> StrResult<usize> {
    if sides < 3 {
        bail!("a {} needs at least 3 sides, got {}", kind.name(), sides);
    }
    Ok(sides as usize)
}

/// A heart drawn from four cubic segments on a 100-unit template, scaled by
/// `s` and starting at the bottom tip.
fn heart(c: Point, s: f64) -> Curve {
    let p = |x: f64, y: f64| Point::new(c.x + x * s, c.y + y * s);
    let mut curve = Curve::new();
    curve.move_(p(0.0, 40.0));
    curve.cubic(p(-10.0, 30.0), p(-50.0, 10.0), p(-50.0, -15.0));
    curve.cubic(p(-50.0, -40.0), p(-25.0, -50.0), p(0.0, -25.0));
    curve.cubic(p(25.0, -50.0), p(50.0, -40.0), p(50.0, -15.0));
    curve.cubic(p(50.0, 10.0), p(10.0, 30.0), p(0.0, 40.0));
    curve.close();
    curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveItem;

    const EPS: f64 = 1e-9;

    fn request(kind: ShapeKind) -> ShapeRequest {
        ShapeRequest {
            kind,
            center: Point::new(120.0, 120.0),
            radius: 80.0,
            size: 200.0,
            sides: 5,
        }
    }

    fn outline(kind: ShapeKind) -> Outline {
        request(kind).outline().unwrap()
    }

    #[track_caller]
    fn assert_points(actual: &[Point], expected: &[Point]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?}");
        for (a, b) in actual.iter().zip(expected) {
            assert!(a.distance(*b) < EPS, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_aliases() {
        #[track_caller]
        fn test(token: &str, kind: ShapeKind) {
            assert_eq!(token.parse::<ShapeKind>(), Ok(kind));
        }

        test("rect", ShapeKind::Rectangle);
        test("roundrect", ShapeKind::RoundedRect);
        test("rounded-rectangle", ShapeKind::RoundedRect);
        test("rhombus", ShapeKind::Diamond);
        test("donut", ShapeKind::Ring);
        test("plus", ShapeKind::Cross);
        test("arrow", ShapeKind::ArrowRight);
        test("moon", ShapeKind::Crescent);
    }

    #[test]
    fn test_unknown_kind_lists_all_valid_kinds() {
        let err = "nonexistent-kind".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err.given, "nonexistent-kind");
        assert_eq!(err.valid.len(), ShapeKind::ALL.len());
        assert!(err.available().contains("crescent"));
    }

    #[test]
    fn test_every_kind_is_closed() {
        for kind in ShapeKind::ALL {
            assert!(outline(kind).curve.is_closed(), "{kind:?}");
        }
    }

    #[test]
    fn test_polygon_and_star_vertex_counts() {
        for sides in 3..10 {
            let req = ShapeRequest { sides, ..request(ShapeKind::Polygon) };
            assert_eq!(req.outline().unwrap().curve.vertices().len(), sides as usize);

            let req = ShapeRequest { sides, ..request(ShapeKind::Star) };
            assert_eq!(req.outline().unwrap().curve.vertices().len(), 2 * sides as usize);
        }
    }

    #[test]
    fn test_polygon_rejects_fewer_than_three_sides() {
        let req = ShapeRequest { sides: 2, ..request(ShapeKind::Polygon) };
        assert_eq!(req.outline(), Err("a polygon needs at least 3 sides, got 2".into()));
        let req = ShapeRequest { sides: 0, ..request(ShapeKind::Star) };
        assert!(req.outline().is_err());

        // Other kinds ignore the side count.
        let req = ShapeRequest { sides: 0, ..request(ShapeKind::Hexagon) };
        assert_eq!(req.outline().unwrap().curve.vertices().len(), 6);
    }

    #[test]
    fn test_octagon_is_rotated_by_an_eighth_of_pi() {
        let req = request(ShapeKind::Octagon);
        let vertices = outline(ShapeKind::Octagon).curve.vertices();
        assert_eq!(vertices.len(), 8);
        let angle = req.center.angle_to(vertices[0]);
        assert!((angle - (-PI / 2.0 + PI / 8.0)).abs() < EPS);
        assert!((req.center.distance(vertices[0]) - req.radius).abs() < EPS);
    }

    #[test]
    fn test_diamond_vertices() {
        assert_eq!(
            outline(ShapeKind::Diamond).curve.vertices(),
            vec![
                Point::new(120.0, 40.0),
                Point::new(176.0, 120.0),
                Point::new(120.0, 200.0),
                Point::new(64.0, 120.0),
            ]
        );
    }

    #[test]
    fn test_ellipse_is_flattened_to_sixty_percent() {
        assert_points(
            &outline(ShapeKind::Ellipse).curve.vertices(),
            &[
                Point::new(40.0, 120.0),
                Point::new(120.0, 72.0),
                Point::new(200.0, 120.0),
                Point::new(120.0, 168.0),
                Point::new(40.0, 120.0),
            ],
        );
    }

    #[test]
    fn test_cross_arms_are_seventy_percent_wide() {
        let vertices = outline(ShapeKind::Cross).curve.vertices();
        assert_points(
            &vertices[..4],
            &[
                Point::new(92.0, 40.0),
                Point::new(148.0, 40.0),
                Point::new(148.0, 200.0),
                Point::new(92.0, 200.0),
            ],
        );
        assert_points(
            &vertices[4..],
            &[
                Point::new(40.0, 92.0),
                Point::new(200.0, 92.0),
                Point::new(200.0, 148.0),
                Point::new(40.0, 148.0),
            ],
        );
    }

    #[test]
    fn test_rounded_rect_corner_radius() {
        // The rectangle is 200 by 120, so the corners are rounded by 18.
        let curve = outline(ShapeKind::RoundedRect).curve;
        assert_eq!(curve.contours(), 1);
        assert_points(
            &curve.vertices()[..3],
            &[Point::new(38.0, 60.0), Point::new(202.0, 60.0), Point::new(220.0, 78.0)],
        );
    }

    #[test]
    fn test_crescent_cuts_with_an_offset_ellipse() {
        let vertices = outline(ShapeKind::Crescent).curve.vertices();
        assert_points(
            &vertices[5..],
            &[
                Point::new(88.0, 120.0),
                Point::new(152.0, 48.0),
                Point::new(216.0, 120.0),
                Point::new(152.0, 192.0),
                Point::new(88.0, 120.0),
            ],
        );
    }

    #[test]
    fn test_arrows_have_seven_points() {
        let right = outline(ShapeKind::ArrowRight).curve.vertices();
        assert_eq!(right.len(), 7);
        assert_eq!(right[3], Point::new(200.0, 120.0));
        assert_eq!(right[0], Point::new(40.0, 104.0));

        let up = outline(ShapeKind::ArrowUp).curve.vertices();
        assert_eq!(up.len(), 7);
        assert_eq!(up[0], Point::new(120.0, 40.0));
        assert_eq!(up[3], Point::new(136.0, 200.0));
    }

    #[test]
    fn test_heart_is_four_cubics() {
        let curve = outline(ShapeKind::Heart).curve;
        let cubics =
            curve.0.iter().filter(|item| matches!(item, CurveItem::Cubic(..))).count();
        assert_eq!(cubics, 4);
        assert_eq!(curve.0[0], CurveItem::Move(Point::new(120.0, 184.0)));
    }

    #[test]
    fn test_heart_bounds_follow_the_curve() {
        // The lobes peak below their control points.
        let (min, max) = outline(ShapeKind::Heart).curve.bounds().unwrap();
        assert!((min.x - 40.0).abs() < EPS && (max.x - 200.0).abs() < EPS);
        assert!((min.y - 56.830220593).abs() < 1e-6, "{min:?}");
        assert!((max.y - 184.0).abs() < EPS);
    }

    #[test]
    fn test_rectangles_are_centered() {
        let (min, max) = outline(ShapeKind::Rectangle).curve.bounds().unwrap();
        assert_eq!(min, Point::new(20.0, 60.0));
        assert_eq!(max, Point::new(220.0, 180.0));

        let (min, max) = outline(ShapeKind::RoundedRect).curve.bounds().unwrap();
        assert!(min.distance(Point::new(20.0, 60.0)) < EPS);
        assert!(max.distance(Point::new(220.0, 180.0)) < EPS);
    }

    #[test]
    fn test_overlapping_kinds_have_two_contours() {
        for kind in [ShapeKind::Ring, ShapeKind::Crescent, ShapeKind::Cross] {
            assert_eq!(outline(kind).curve.contours(), 2, "{kind:?}");
        }
        assert_eq!(outline(ShapeKind::Ring).fill_rule, FillRule::EvenOdd);
        assert_eq!(outline(ShapeKind::Crescent).fill_rule, FillRule::EvenOdd);
        assert_eq!(outline(ShapeKind::Cross).fill_rule, FillRule::NonZero);
    }

    #[test]
    fn test_layout_is_deterministic() {
        for kind in ShapeKind::ALL {
            assert_eq!(request(kind).outline(), request(kind).outline());
        }
    }
}
