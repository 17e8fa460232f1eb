use ornament::{Curve, CurveItem, FillRule, FixedStroke, LineCap, LineJoin, Shape};
use tiny_skia as sk;

use crate::paint;

/// Render a geometrical shape into the pixmap.
///
/// Returns `None` if the shape's curve does not form a drawable path.
pub fn render_shape(pixmap: &mut sk::Pixmap, shape: &Shape) -> Option<()> {
    let ts = sk::Transform::identity();
    let path = convert_curve(&shape.geometry)?;

    if let Some(fill) = &shape.fill {
        let paint = paint::to_sk_paint(fill);
        let rule = match shape.fill_rule {
            FillRule::NonZero => sk::FillRule::Winding,
            FillRule::EvenOdd => sk::FillRule::EvenOdd,
        };
        pixmap.fill_path(&path, &paint, rule, ts, None);
    }

    if let Some(FixedStroke { paint, thickness, cap, join }) = &shape.stroke {
        let width = *thickness as f32;

        // Don't draw zero-width strokes.
        if width > 0.0 {
            let paint = paint::to_sk_paint(paint);
            let stroke = sk::Stroke {
                width,
                line_cap: to_sk_line_cap(*cap),
                line_join: to_sk_line_join(*join),
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, ts, None);
        }
    }

    Some(())
}

/// Convert a curve into a tiny-skia path.
pub fn convert_curve(curve: &Curve) -> Option<sk::Path> {
    let mut builder = sk::PathBuilder::new();
    for item in &curve.0 {
        match *item {
            CurveItem::Move(p) => builder.move_to(p.x as f32, p.y as f32),
            CurveItem::Line(p) => builder.line_to(p.x as f32, p.y as f32),
            CurveItem::Cubic(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            CurveItem::Close => builder.close(),
        }
    }
    builder.finish()
}

pub fn to_sk_line_cap(cap: LineCap) -> sk::LineCap {
    match cap {
        LineCap::Butt => sk::LineCap::Butt,
        LineCap::Round => sk::LineCap::Round,
        LineCap::Square => sk::LineCap::Square,
    }
}

pub fn to_sk_line_join(join: LineJoin) -> sk::LineJoin {
    match join {
        LineJoin::Miter => sk::LineJoin::Miter,
        LineJoin::Round => sk::LineJoin::Round,
        LineJoin::Bevel => sk::LineJoin::Bevel,
    }
}

#[cfg(test)]
mod tests {
    use ornament::Point;

    use super::*;

    #[test]
    fn test_convert_curve_keeps_contours() {
        let mut curve = Curve::circle(Point::new(50.0, 50.0), 20.0);
        curve.push_ellipse(Point::new(50.0, 50.0), 10.0, 10.0);
        let path = convert_curve(&curve).unwrap();
        let bounds = path.bounds();
        assert_eq!((bounds.left(), bounds.top()), (30.0, 30.0));
        assert_eq!((bounds.right(), bounds.bottom()), (70.0, 70.0));
    }

    #[test]
    fn test_empty_curve_is_skipped() {
        let mut pixmap = sk::Pixmap::new(4, 4).unwrap();
        let shape = Shape::stroked(
            Curve::new(),
            FixedStroke::new(ornament::Color::BLACK.into(), 1.0),
        );
        assert!(render_shape(&mut pixmap, &shape).is_none());
    }
}
