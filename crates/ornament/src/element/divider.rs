use crate::canvas::{Canvas, FillRule, FixedStroke, LineCap};
use crate::curve::Curve;
use crate::geom::Point;
use crate::params::Params;

/// Horizontal margin at both ends of the line.
const PADDING: f64 = 20.0;

/// A horizontal line through the vertical center of the canvas. With the
/// `dotted` style, both ends get a round dot.
pub fn line_divider(params: &Params) -> Canvas {
    let (width, height) = params.dimensions(400, 50);
    let y = height as f64 / 2.0;
    let start = Point::new(PADDING, y);
    let end = Point::new(width as f64 - PADDING, y);

    let paint = params.paint(Some((start, end)), None);
    let stroke = FixedStroke::new(paint, params.stroke).with_cap(LineCap::Round);

    let mut canvas = Canvas::new(width, height);
    canvas.stroke(Curve::segment(start, end), stroke);

    if params.style.as_deref() == Some("dotted") {
        let radius = params.stroke * 1.5;
        for at in [start, end] {
            canvas.fill(Curve::circle(at, radius), params.solid(), FillRule::NonZero);
        }
    }

    canvas
}
