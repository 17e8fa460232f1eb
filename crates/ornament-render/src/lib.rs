//! Rendering of ornament canvases into raster images.

mod paint;
mod shape;

use ornament::diag::{bail, eco_format, StrResult};
use ornament::Canvas;
use tiny_skia as sk;

pub use self::paint::{to_sk_color, to_sk_paint};
pub use self::shape::{convert_curve, render_shape, to_sk_line_cap, to_sk_line_join};

/// Render a canvas into a raster image.
///
/// One canvas pixel maps to one image pixel. The image starts out filled with
/// the canvas background, or fully transparent without one, and the shapes
/// are painted in order on top of it.
pub fn render(canvas: &Canvas) -> StrResult<sk::Pixmap> {
    let Some(mut pixmap) = sk::Pixmap::new(canvas.width, canvas.height) else {
        bail!("cannot render a canvas of {}x{} pixels", canvas.width, canvas.height);
    };

    if let Some(background) = canvas.background {
        pixmap.fill(to_sk_color(background));
    }

    for (i, shape) in canvas.shapes.iter().enumerate() {
        if render_shape(&mut pixmap, shape).is_none() {
            tracing::warn!(index = i, "skipped a shape with degenerate geometry");
        }
    }

    Ok(pixmap)
}

/// Render a canvas and encode it as a PNG image.
pub fn render_png(canvas: &Canvas) -> StrResult<Vec<u8>> {
    render(canvas)?
        .encode_png()
        .map_err(|err| eco_format!("failed to encode PNG ({err})"))
}
