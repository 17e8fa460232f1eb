use crate::canvas::{Canvas, FixedStroke};
use crate::diag::GenerateError;
use crate::geom::Point;
use crate::params::Params;
use crate::shape::{ShapeKind, ShapeRequest};

use super::whole;

/// Margin around the shape.
const PADDING: f64 = 20.0;

/// A single basic shape centered on the canvas. The kind is taken from the
/// style and defaults to a circle.
pub fn shape(params: &Params) -> Result<Canvas, GenerateError> {
    let kind: ShapeKind = params.style_or("circle").parse()?;

    let size = params.size();
    let side = whole(size + 2.0 * PADDING);
    let (width, height) = params.dimensions(side, side);

    let mut canvas = Canvas::new(width, height);
    canvas.background = params.background;

    let center = canvas.center();
    let far = Point::new(width as f64 - PADDING, height as f64 - PADDING);
    let paint = params.paint(Some((Point::splat(PADDING), far)), Some((center, size / 2.0)));

    let request = ShapeRequest {
        kind,
        center,
        radius: size / 2.0 - PADDING,
        size,
        sides: params.sides,
    };
    let outline = request.outline()?;

    if params.fill {
        canvas.fill(outline.curve, paint, outline.fill_rule);
    } else {
        canvas.stroke(outline.curve, FixedStroke::new(paint, params.stroke));
    }

    Ok(canvas)
}
