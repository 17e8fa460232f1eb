use crate::color::Color;
use crate::geom::Point;

/// How a shape is filled or stroked.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// A solid color.
    Solid(Color),
    /// A gradient along the line from `start` to `end`.
    Linear { start: Point, end: Point, stops: [GradientStop; 2] },
    /// A gradient radiating from `center` up to `radius`.
    Radial { center: Point, radius: f64, stops: [GradientStop; 2] },
}

impl Paint {
    /// A linear gradient that fades from `from` to a transparent `to`.
    pub fn linear_fade(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self::Linear { start, end, stops: GradientStop::fade(from, to) }
    }

    /// A radial gradient that fades from `from` to a transparent `to`.
    pub fn radial_fade(center: Point, radius: f64, from: Color, to: Color) -> Self {
        Self::Radial { center, radius, stops: GradientStop::fade(from, to) }
    }

    /// The color of the first stop, or the solid color.
    pub fn base_color(&self) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => stops[0].color,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// A color at a position along a gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    /// Where the color is reached, from 0 (start) to 1 (end).
    pub offset: f32,
    /// The color at this stop.
    pub color: Color,
}

impl GradientStop {
    /// Create a new stop.
    pub fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }

    /// The two stops of a fade: `from` as given at the start and a fully
    /// transparent `to` at the end.
    pub fn fade(from: Color, to: Color) -> [Self; 2] {
        [Self::new(0.0, from), Self::new(1.0, to.transparent())]
    }
}

/// Which kind of gradient to paint with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientKind {
    Linear,
    Radial,
}
