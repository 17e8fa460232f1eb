//! The decorative elements that can be generated.
//!
//! Each element turns a set of [`Params`] into a [`Canvas`]. Generation is a
//! pure function of the parameters: generating the same element twice yields
//! identical geometry.

mod accent;
mod basic;
mod border;
mod divider;
mod mandala;
mod pattern;

pub use self::accent::{arc_accent, corner_accent};
pub use self::basic::shape;
pub use self::border::frame_border;
pub use self::divider::line_divider;
pub use self::mandala::{mandala, Layer, Link, MandalaLayout};
pub use self::pattern::{pattern, PatternKind};

use std::fmt::{self, Display, Formatter};

use crate::canvas::Canvas;
use crate::diag::GenerateError;
use crate::params::Params;

/// A kind of decorative element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Element {
    /// An L-shaped corner accent.
    CornerAccent,
    /// A horizontal line divider.
    LineDivider,
    /// A quarter circle arc.
    ArcAccent,
    /// Four L-shaped corners framing the canvas.
    FrameBorder,
    /// A grid of repeated marks.
    Pattern,
    /// Layered polygons, a ring of circles and connecting lines.
    Mandala,
    /// A single basic shape.
    Shape,
}

impl Element {
    /// The element's name as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::CornerAccent => "corner-accent",
            Self::LineDivider => "line-divider",
            Self::ArcAccent => "arc-accent",
            Self::FrameBorder => "frame-border",
            Self::Pattern => "pattern",
            Self::Mandala => "mandala",
            Self::Shape => "shape",
        }
    }

    /// Generate the element.
    pub fn generate(self, params: &Params) -> Result<Canvas, GenerateError> {
        let canvas = match self {
            Self::CornerAccent => corner_accent(params),
            Self::LineDivider => line_divider(params),
            Self::ArcAccent => arc_accent(params),
            Self::FrameBorder => frame_border(params),
            Self::Pattern => pattern(params)?,
            Self::Mandala => mandala(params),
            Self::Shape => shape(params)?,
        };

        tracing::debug!(
            element = self.name(),
            width = canvas.width,
            height = canvas.height,
            shapes = canvas.shapes.len(),
            "generated element",
        );

        Ok(canvas)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Truncate a pixel amount to whole pixels.
fn whole(px: f64) -> u32 {
    px.max(0.0) as u32
}
