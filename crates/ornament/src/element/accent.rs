use std::f64::consts::FRAC_PI_2;

use crate::canvas::{Canvas, FixedStroke, LineCap, LineJoin};
use crate::curve::Curve;
use crate::geom::Point;
use crate::params::Params;
use crate::polygon::UP;

use super::whole;

/// Margin around the arc accent.
const ARC_PADDING: f64 = 20.0;

/// An L-shaped corner accent in the top-left corner, with two thinner
/// accent lines running alongside its arms.
pub fn corner_accent(params: &Params) -> Canvas {
    let size = params.size();
    let stroke = params.stroke;
    let pad = whole(stroke * 2.0) as f64;
    let side = whole(size + 2.0 * pad);
    let (width, height) = params.dimensions(side, side);

    let paint = params.paint(
        Some((Point::splat(pad), Point::splat(size))),
        Some((Point::splat(pad), size)),
    );
    let main = FixedStroke::new(paint, stroke)
        .with_cap(LineCap::Round)
        .with_join(LineJoin::Round);
    let accent = main.clone().with_thickness(stroke * 0.5);

    let mut canvas = Canvas::new(width, height);
    let corner = Point::splat(pad);
    let arm = size * 0.7;
    canvas.stroke(Curve::segment(corner, Point::new(pad, pad + arm)), main.clone());
    canvas.stroke(Curve::segment(corner, Point::new(pad + arm, pad)), main);

    let inset = pad + stroke * 1.5;
    let start = pad + size * 0.15;
    let end = start + size * 0.2;
    canvas.stroke(
        Curve::segment(Point::new(inset, start), Point::new(inset, end)),
        accent.clone(),
    );
    canvas.stroke(Curve::segment(Point::new(start, inset), Point::new(end, inset)), accent);

    canvas
}

/// A quarter circle arc from the top of a circle to its right side,
/// optionally doubled by a thinner inner arc (style `double`).
pub fn arc_accent(params: &Params) -> Canvas {
    let size = params.size();
    let side = whole(size + 2.0 * ARC_PADDING);
    let (width, height) = params.dimensions(side, side);

    let mut canvas = Canvas::new(width, height);
    let center = canvas.center();
    let radius = size / 2.0 - ARC_PADDING;
    let far = Point::new(width as f64 - ARC_PADDING, height as f64 - ARC_PADDING);

    let paint = params.paint(
        Some((Point::splat(ARC_PADDING), far)),
        Some((center, radius)),
    );
    let stroke = FixedStroke::new(paint, params.stroke);

    canvas.stroke(Curve::arc(center, radius, UP, FRAC_PI_2), stroke.clone());

    if params.style.as_deref() == Some("double") {
        let inner = stroke.with_thickness(params.stroke * 0.6);
        canvas.stroke(Curve::arc(center, radius * 0.7, UP, FRAC_PI_2), inner);
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{GradientKind, Paint};
    use crate::Color;

    #[test]
    fn test_corner_accent_layout() {
        let canvas = corner_accent(&Params::default());
        // Padding is twice the stroke.
        assert_eq!((canvas.width, canvas.height), (216, 216));
        assert_eq!(canvas.shapes.len(), 4);

        let vertical = canvas.shapes[0].geometry.vertices();
        assert_eq!(vertical, vec![Point::new(8.0, 8.0), Point::new(8.0, 148.0)]);
        let accent = &canvas.shapes[2];
        assert_eq!(accent.stroke.as_ref().unwrap().thickness, 2.0);
        assert_eq!(accent.stroke.as_ref().unwrap().cap, LineCap::Round);
        assert_eq!(
            accent.geometry.vertices(),
            vec![Point::new(14.0, 38.0), Point::new(14.0, 78.0)]
        );
    }

    #[test]
    fn test_corner_accent_saturates_huge_strokes() {
        let params = Params { stroke: 1.5e9, ..Params::default() };
        let canvas = corner_accent(&params);
        assert_eq!((canvas.width, canvas.height), (u32::MAX, u32::MAX));
        assert_eq!(canvas.shapes.len(), 4);
    }

    #[test]
    fn test_corner_accent_radial_gradient() {
        let params = Params {
            color2: Some(Color::WHITE),
            gradient: Some(GradientKind::Radial),
            ..Params::default()
        };
        let canvas = corner_accent(&params);
        let paint = &canvas.shapes[0].stroke.as_ref().unwrap().paint;
        assert_eq!(
            *paint,
            Paint::radial_fade(Point::splat(8.0), 200.0, Color::GOLD, Color::WHITE)
        );
    }

    #[test]
    fn test_arc_accent_styles() {
        let single = arc_accent(&Params::default());
        assert_eq!((single.width, single.height), (240, 240));
        assert_eq!(single.shapes.len(), 1);

        let vertices = single.shapes[0].geometry.vertices();
        let first = vertices[0];
        let last = *vertices.last().unwrap();
        assert!(first.distance(Point::new(120.0, 40.0)) < 1e-9);
        assert!(last.distance(Point::new(200.0, 120.0)) < 1e-9);

        let params = Params { style: Some("double".into()), ..Params::default() };
        let double = arc_accent(&params);
        assert_eq!(double.shapes.len(), 2);
        let inner = double.shapes[1].stroke.as_ref().unwrap();
        assert!((inner.thickness - 2.4).abs() < 1e-9);
        let start = double.shapes[1].geometry.vertices()[0];
        assert!(start.distance(Point::new(120.0, 64.0)) < 1e-9);
    }
}
