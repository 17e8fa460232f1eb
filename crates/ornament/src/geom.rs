//! Points and sizes in canvas space.
//!
//! Canvas space is measured in pixels with the origin in the top-left corner
//! and the y axis pointing down.

use std::fmt::{self, Debug, Formatter};
use std::ops::Sub;

/// A point in 2D.
#[derive(Default, Copy, Clone, PartialEq)]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// The origin point.
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Create a new point from x and y coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create an instance with two equal components.
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value }
    }

    /// The point at `distance` from this one in the direction of `angle`
    /// (in radians, measured clockwise from the positive x axis on screen).
    pub fn polar(self, distance: f64, angle: f64) -> Self {
        Self::new(self.x + distance * angle.cos(), self.y + distance * angle.sin())
    }

    /// The distance between this point and another one.
    pub fn distance(self, other: Self) -> f64 {
        (other - self).hypot()
    }

    /// The angle of the vector from this point to another one.
    pub fn angle_to(self, other: Self) -> f64 {
        let d = other - self;
        d.y.atan2(d.x)
    }

    /// The distance between this point and the origin.
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Point({:?}, {:?})", self.x, self.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }
}

/// A size in 2D.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    /// The horizontal extent.
    pub w: f64,
    /// The vertical extent.
    pub h: f64,
}

impl Size {
    /// Create a new size from width and height.
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// The smaller of the two extents.
    pub fn min_side(self) -> f64 {
        self.w.min(self.h)
    }
}
