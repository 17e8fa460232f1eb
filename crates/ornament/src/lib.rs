//! Procedural generation of decorative geometry.
//!
//! # Steps
//! - **Parameters:** All knobs an element understands are collected in
//!   [`Params`]. They are checked once by [`Params::validate`].
//! - **Generation:** An [`Element`] turns the parameters into a [`Canvas`]:
//!   a fixed-size surface with an ordered list of filled or stroked curves.
//!   This step is pure and deterministic.
//! - **Rendering:** The canvas is rasterized by a separate renderer into
//!   pixels. This crate does not know about pixels or image formats.

pub mod canvas;
pub mod color;
pub mod curve;
pub mod diag;
pub mod element;
pub mod geom;
pub mod paint;
pub mod params;
pub mod polygon;
pub mod shape;

pub use self::canvas::{Canvas, FillRule, FixedStroke, LineCap, LineJoin, Shape};
pub use self::color::Color;
pub use self::curve::{Curve, CurveItem};
pub use self::element::Element;
pub use self::geom::{Point, Size};
pub use self::paint::{GradientKind, GradientStop, Paint};
pub use self::params::Params;
pub use self::shape::ShapeKind;
