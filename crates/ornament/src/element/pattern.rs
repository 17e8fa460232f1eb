use std::str::FromStr;

use crate::canvas::{Canvas, FillRule, FixedStroke};
use crate::curve::Curve;
use crate::diag::{GenerateError, UnknownKind};
use crate::geom::Point;
use crate::params::Params;

/// The mark repeated in every cell of a pattern.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PatternKind {
    /// A filled dot.
    Dots,
    /// A stroked plus sign.
    Crosses,
    /// A stroked diamond.
    Diamonds,
}

impl PatternKind {
    /// The canonical names of all kinds.
    pub const NAMES: &'static [&'static str] = &["dots", "crosses", "diamonds"];
}

impl FromStr for PatternKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dots" => Ok(Self::Dots),
            "crosses" => Ok(Self::Crosses),
            "diamonds" => Ok(Self::Diamonds),
            _ => Err(UnknownKind { family: "pattern", given: s.into(), valid: Self::NAMES }),
        }
    }
}

/// A grid of square cells, each holding one mark at its center.
///
/// The cell size is taken from the size, 50 pixels when the size is zero.
/// Cells start at the origin and run column by column; cells along the
/// right and bottom edges may be clipped.
pub fn pattern(params: &Params) -> Result<Canvas, GenerateError> {
    let kind: PatternKind = params.style_or("dots").parse()?;
    let (width, height) = params.dimensions(400, 400);
    let cell = if params.size == 0 { 50 } else { params.size };
    let half = cell as f64 / 2.0;

    let paint = params.solid();
    let stroke = FixedStroke::new(paint.clone(), params.stroke);

    let mut canvas = Canvas::new(width, height);
    for x in (0..width).step_by(cell as usize) {
        for y in (0..height).step_by(cell as usize) {
            let c = Point::new(x as f64 + half, y as f64 + half);
            match kind {
                PatternKind::Dots => {
                    let dot = Curve::circle(c, params.stroke * 2.0);
                    canvas.fill(dot, paint.clone(), FillRule::NonZero);
                }
                PatternKind::Crosses => {
                    let d = cell as f64 * 0.3;
                    let horizontal = Curve::segment(
                        Point::new(c.x - d, c.y),
                        Point::new(c.x + d, c.y),
                    );
                    let vertical = Curve::segment(
                        Point::new(c.x, c.y - d),
                        Point::new(c.x, c.y + d),
                    );
                    canvas.stroke(horizontal, stroke.clone());
                    canvas.stroke(vertical, stroke.clone());
                }
                PatternKind::Diamonds => {
                    let d = cell as f64 * 0.25;
                    let diamond = Curve::polygon(&[
                        Point::new(c.x, c.y - d),
                        Point::new(c.x + d, c.y),
                        Point::new(c.x, c.y + d),
                        Point::new(c.x - d, c.y),
                    ]);
                    canvas.stroke(diamond, stroke.clone());
                }
            }
        }
    }

    Ok(canvas)
}
