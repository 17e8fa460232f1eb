//! The drawing surface handed to a renderer.

use crate::color::Color;
use crate::curve::Curve;
use crate::geom::Point;
use crate::paint::Paint;

/// A fixed-size drawing surface with an ordered list of shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// The width in pixels.
    pub width: u32,
    /// The height in pixels.
    pub height: u32,
    /// The color the surface is filled with before any shape is drawn.
    /// Without one, the surface starts out fully transparent.
    pub background: Option<Color>,
    /// The shapes, painted in order.
    pub shapes: Vec<Shape>,
}

impl Canvas {
    /// Create an empty, transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: None, shapes: vec![] }
    }

    /// The center of the canvas.
    pub fn center(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Add a shape on top of all previous ones.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Add a stroked curve.
    pub fn stroke(&mut self, geometry: Curve, stroke: FixedStroke) {
        self.push(Shape::stroked(geometry, stroke));
    }

    /// Add a filled curve.
    pub fn fill(&mut self, geometry: Curve, paint: Paint, rule: FillRule) {
        self.push(Shape::filled(geometry, paint, rule));
    }
}

/// A geometrical shape with optional fill and stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// The shape's geometry.
    pub geometry: Curve,
    /// The shape's background fill.
    pub fill: Option<Paint>,
    /// The rule that determines which parts of the geometry are inside.
    pub fill_rule: FillRule,
    /// The shape's border stroke.
    pub stroke: Option<FixedStroke>,
}

impl Shape {
    /// A shape that is only stroked.
    pub fn stroked(geometry: Curve, stroke: FixedStroke) -> Self {
        Self { geometry, fill: None, fill_rule: FillRule::default(), stroke: Some(stroke) }
    }

    /// A shape that is only filled.
    pub fn filled(geometry: Curve, paint: Paint, fill_rule: FillRule) -> Self {
        Self { geometry, fill: Some(paint), fill_rule, stroke: None }
    }
}

/// A fill rule for curve drawing.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FillRule {
    /// Specifies that "inside" is computed by a non-zero sum of signed edge
    /// crossings.
    #[default]
    NonZero,
    /// Specifies that "inside" is computed by an odd number of edge
    /// crossings.
    EvenOdd,
}

/// A stroke with all properties resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStroke {
    /// The stroke's paint.
    pub paint: Paint,
    /// The stroke's thickness.
    pub thickness: f64,
    /// The stroke's line cap.
    pub cap: LineCap,
    /// The stroke's line join.
    pub join: LineJoin,
}

impl FixedStroke {
    /// A butt-capped, miter-joined stroke.
    pub fn new(paint: Paint, thickness: f64) -> Self {
        Self { paint, thickness, cap: LineCap::Butt, join: LineJoin::Miter }
    }

    /// Set the line cap.
    pub fn with_cap(self, cap: LineCap) -> Self {
        Self { cap, ..self }
    }

    /// Set the line join.
    pub fn with_join(self, join: LineJoin) -> Self {
        Self { join, ..self }
    }

    /// The same stroke with a different thickness.
    pub fn with_thickness(self, thickness: f64) -> Self {
        Self { thickness, ..self }
    }
}

/// The line cap of a stroke.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// The line join of a stroke.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}
