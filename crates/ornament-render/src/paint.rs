use ornament::{Color, GradientStop, Paint, Point};
use tiny_skia as sk;

/// Convert a paint into a tiny-skia paint.
///
/// Gradients that tiny-skia cannot represent, like a radial gradient with a
/// zero radius, are painted with the color of their first stop.
pub fn to_sk_paint(paint: &Paint) -> sk::Paint<'static> {
    let shader = match *paint {
        Paint::Solid(_) => None,
        Paint::Linear { start, end, stops } => sk::LinearGradient::new(
            to_sk_point(start),
            to_sk_point(end),
            to_sk_stops(stops),
            sk::SpreadMode::Pad,
            sk::Transform::identity(),
        ),
        Paint::Radial { center, radius, stops } => sk::RadialGradient::new(
            to_sk_point(center),
            to_sk_point(center),
            radius as f32,
            to_sk_stops(stops),
            sk::SpreadMode::Pad,
            sk::Transform::identity(),
        ),
    };

    let shader = shader.unwrap_or_else(|| {
        if !matches!(paint, Paint::Solid(_)) {
            tracing::debug!(?paint, "degenerate gradient, painting solid instead");
        }
        sk::Shader::SolidColor(to_sk_color(paint.base_color()))
    });

    sk::Paint { shader, anti_alias: true, ..Default::default() }
}

pub fn to_sk_color(color: Color) -> sk::Color {
    sk::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn to_sk_point(p: Point) -> sk::Point {
    sk::Point::from_xy(p.x as f32, p.y as f32)
}

fn to_sk_stops(stops: [GradientStop; 2]) -> Vec<sk::GradientStop> {
    stops
        .iter()
        .map(|stop| sk::GradientStop::new(stop.offset, to_sk_color(stop.color)))
        .collect()
}
