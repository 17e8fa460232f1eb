use crate::canvas::{Canvas, FixedStroke, LineCap, LineJoin};
use crate::curve::Curve;
use crate::geom::Point;
use crate::params::Params;

use super::whole;

/// Four L-shaped corners inset from the canvas edges.
///
/// The arm length is taken from the size, 40 pixels when the size is zero.
pub fn frame_border(params: &Params) -> Canvas {
    let (width, height) = params.dimensions(400, 300);
    let pad = whole(params.stroke * 2.0) as f64;
    let arm = params.size_or(40);

    let stroke = FixedStroke::new(params.solid(), params.stroke)
        .with_cap(LineCap::Square)
        .with_join(LineJoin::Miter);

    let (w, h) = (width as f64, height as f64);
    let p = Point::new;
    let segments = [
        // Top-left.
        (p(pad, pad + arm), p(pad, pad)),
        (p(pad, pad), p(pad + arm, pad)),
        // Top-right.
        (p(w - pad - arm, pad), p(w - pad, pad)),
        (p(w - pad, pad), p(w - pad, pad + arm)),
        // Bottom-right.
        (p(w - pad, h - pad - arm), p(w - pad, h - pad)),
        (p(w - pad, h - pad), p(w - pad - arm, h - pad)),
        // Bottom-left.
        (p(pad + arm, h - pad), p(pad, h - pad)),
        (p(pad, h - pad), p(pad, h - pad - arm)),
    ];

    let mut canvas = Canvas::new(width, height);
    for (from, to) in segments {
        canvas.stroke(Curve::segment(from, to), stroke.clone());
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_touch_the_inset_rectangle() {
        let params = Params { size: 0, ..Params::default() };
        let canvas = frame_border(&params);
        assert_eq!((canvas.width, canvas.height), (400, 300));
        assert_eq!(canvas.shapes.len(), 8);

        let corners: Vec<Point> = canvas
            .shapes
            .iter()
            .skip(1)
            .step_by(2)
            .map(|shape| shape.geometry.vertices()[0])
            .collect();
        assert_eq!(
            corners,
            vec![
                Point::new(8.0, 8.0),
                Point::new(392.0, 8.0),
                Point::new(392.0, 292.0),
                Point::new(8.0, 292.0),
            ]
        );

        let first = canvas.shapes[0].geometry.vertices();
        assert_eq!(first[0], Point::new(8.0, 48.0));
        let stroke = canvas.shapes[0].stroke.as_ref().unwrap();
        assert_eq!(stroke.cap, LineCap::Square);
    }

    #[test]
    fn test_arm_length_follows_size() {
        let canvas = frame_border(&Params { size: 100, ..Params::default() });
        let first = canvas.shapes[0].geometry.vertices();
        assert_eq!(first[0], Point::new(8.0, 108.0));
    }
}
