use std::f64::consts::PI;

use crate::canvas::{Canvas, FixedStroke};
use crate::curve::Curve;
use crate::geom::Point;
use crate::params::Params;
use crate::polygon::{regular_polygon, UP};

use super::whole;

/// Margin around the mandala.
const PADDING: f64 = 40.0;

/// The ring size used when zero circles are requested.
const DEFAULT_RINGS: usize = 8;

/// The layer count used when zero layers are requested.
const DEFAULT_LAYERS: usize = 3;

/// The geometry of a mandala, independent of how it is painted.
#[derive(Debug, Clone, PartialEq)]
pub struct MandalaLayout {
    /// The center of all layers.
    pub center: Point,
    /// The radius of the outer circle.
    pub radius: f64,
    /// The rotated polygons, outermost first.
    pub layers: Vec<Layer>,
    /// The centers of the circles arranged in a ring.
    pub ring: Vec<Point>,
    /// The radius of each circle in the ring.
    pub ring_radius: f64,
    /// The lines connecting the ring circles, in draw order.
    pub links: Vec<Link>,
    /// The vertices of the central triangle.
    pub triangle: Vec<Point>,
    /// The radius of the small circle at the center.
    pub core_radius: f64,
}

/// One polygon layer of a mandala.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// The number of sides, 4 or 8.
    pub sides: usize,
    /// The rotation of the first vertex, in radians.
    pub rotation: f64,
    /// The polygon's vertices.
    pub vertices: Vec<Point>,
}

/// A straight line starting at a ring circle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Link {
    /// From a ring circle to its next neighbor.
    Ring { from: usize, to: usize },
    /// From the center to a ring circle.
    Spoke(usize),
    /// From a ring circle to the one across from it.
    Chord { from: usize, to: usize },
}

impl MandalaLayout {
    /// Lay out a mandala with `rings` circles and `layers` polygons.
    ///
    /// Chords across the ring are only added with at least six circles.
    pub fn new(center: Point, radius: f64, rings: usize, layers: usize) -> Self {
        let layers = (0..layers)
            .map(|i| {
                let sides = if i % 2 == 0 { 4 } else { 8 };
                let rotation = PI / (layers as f64 * 2.0) * i as f64;
                let r = radius * (0.95 - i as f64 * 0.15);
                Layer { sides, rotation, vertices: regular_polygon(center, r, sides, rotation) }
            })
            .collect();

        let ring = regular_polygon(center, radius * 0.55, rings, UP);

        let mut links = Vec::with_capacity(rings * 3);
        for i in 0..rings {
            links.push(Link::Ring { from: i, to: (i + 1) % rings });
            links.push(Link::Spoke(i));
            if rings >= 6 {
                links.push(Link::Chord { from: i, to: (i + rings / 2) % rings });
            }
        }

        Self {
            center,
            radius,
            layers,
            ring,
            ring_radius: radius * 0.18,
            links,
            triangle: regular_polygon(center, radius * 0.25, 3, UP),
            core_radius: radius * 0.08,
        }
    }

    /// The end points of a link.
    pub fn endpoints(&self, link: Link) -> (Point, Point) {
        match link {
            Link::Ring { from, to } | Link::Chord { from, to } => {
                (self.ring[from], self.ring[to])
            }
            Link::Spoke(i) => (self.center, self.ring[i]),
        }
    }

    /// Stroke the layout onto a canvas.
    ///
    /// Everything uses the given stroke, except for the outer circle, which
    /// is drawn at 70% of its thickness.
    pub fn draw(&self, canvas: &mut Canvas, stroke: &FixedStroke) {
        for layer in &self.layers {
            canvas.stroke(Curve::polygon(&layer.vertices), stroke.clone());
        }

        for &at in &self.ring {
            canvas.stroke(Curve::circle(at, self.ring_radius), stroke.clone());
        }

        for &link in &self.links {
            let (from, to) = self.endpoints(link);
            canvas.stroke(Curve::segment(from, to), stroke.clone());
        }

        canvas.stroke(Curve::polygon(&self.triangle), stroke.clone());
        canvas.stroke(Curve::circle(self.center, self.core_radius), stroke.clone());

        let outer = stroke.clone().with_thickness(stroke.thickness * 0.7);
        canvas.stroke(Curve::circle(self.center, self.radius), outer);
    }
}

/// Concentric rotated polygons, a ring of circles tied together by lines,
/// a central triangle and two circles bounding it all.
pub fn mandala(params: &Params) -> Canvas {
    let size = params.size();
    let side = whole(size + 2.0 * PADDING);
    let (width, height) = params.dimensions(side, side);

    let mut canvas = Canvas::new(width, height);
    canvas.background = params.background;

    let rings = if params.rings == 0 { DEFAULT_RINGS } else { params.rings as usize };
    let layers = if params.layers == 0 { DEFAULT_LAYERS } else { params.layers as usize };
    let layout = MandalaLayout::new(canvas.center(), size / 2.0 - PADDING, rings, layers);
    tracing::trace!(?layout, "laid out mandala");

    layout.draw(&mut canvas, &FixedStroke::new(params.solid(), params.stroke));
    canvas
}
