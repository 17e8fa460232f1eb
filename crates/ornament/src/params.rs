use ecow::EcoString;

use crate::color::Color;
use crate::diag::{bail, HintedStrResult};
use crate::geom::Point;
use crate::paint::{GradientKind, Paint};

/// All parameters an element is generated from.
///
/// Every field has a concrete default (see [`Params::default`]). Build the
/// structure once and pass it through [`Params::validate`] before use.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    /// The primary color.
    pub color: Color,
    /// The secondary color, which gradients fade into.
    pub color2: Option<Color>,
    /// The element size in pixels. Its meaning depends on the element.
    pub size: u32,
    /// Overrides the element's default canvas width.
    pub width: Option<u32>,
    /// Overrides the element's default canvas height.
    pub height: Option<u32>,
    /// The stroke width in pixels.
    pub stroke: f64,
    /// Paint with a gradient instead of a solid color. Only takes effect
    /// when [`color2`](Self::color2) is set.
    pub gradient: Option<GradientKind>,
    /// The opacity of the primary color, in `[0, 1]`.
    pub opacity: f64,
    /// The style variant, e.g. the shape kind.
    pub style: Option<EcoString>,
    /// The background color.
    pub background: Option<Color>,
    /// The number of circles in a mandala's ring.
    pub rings: u32,
    /// The number of polygon layers in a mandala.
    pub layers: u32,
    /// Fill shapes instead of stroking them.
    pub fill: bool,
    /// The number of sides of a polygon or points of a star.
    pub sides: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            color: Color::GOLD,
            color2: None,
            size: 200,
            width: None,
            height: None,
            stroke: 4.0,
            gradient: None,
            opacity: 1.0,
            style: None,
            background: None,
            rings: 8,
            layers: 3,
            fill: false,
            sides: 5,
        }
    }
}

impl Params {
    /// Check the parameters that no element can work with.
    pub fn validate(self) -> HintedStrResult<Self> {
        if !self.stroke.is_finite() || self.stroke <= 0.0 {
            bail!(
                "stroke width must be positive, got {}", self.stroke;
                hint: "pass a value like `--stroke 4`"
            );
        }

        if !(0.0..=1.0).contains(&self.opacity) {
            bail!(
                "opacity must be between 0 and 1, got {}", self.opacity;
                hint: "0 is fully transparent, 1 is fully opaque"
            );
        }

        if self.gradient.is_some() && self.color2.is_none() {
            tracing::warn!("a gradient needs a secondary color, painting solid instead");
        }

        Ok(self)
    }

    /// The size as a floating point number.
    pub fn size(&self) -> f64 {
        self.size as f64
    }

    /// The size, or `fallback` when it is zero.
    pub fn size_or(&self, fallback: u32) -> f64 {
        if self.size == 0 { fallback as f64 } else { self.size as f64 }
    }

    /// The canvas dimensions, falling back to the given defaults.
    pub fn dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        (self.width.unwrap_or(width), self.height.unwrap_or(height))
    }

    /// The primary color at the configured opacity.
    pub fn primary(&self) -> Color {
        self.color.with_opacity(self.opacity)
    }

    /// The primary color as a solid paint.
    pub fn solid(&self) -> Paint {
        Paint::Solid(self.primary())
    }

    /// The paint to draw with.
    ///
    /// A gradient is only produced when one was requested, a secondary color
    /// exists, and the element supports that kind of gradient (it provides
    /// the matching geometry). Otherwise the paint is solid.
    pub fn paint(
        &self,
        linear: Option<(Point, Point)>,
        radial: Option<(Point, f64)>,
    ) -> Paint {
        let Some(to) = self.color2 else { return self.solid() };
        match (self.gradient, linear, radial) {
            (Some(GradientKind::Linear), Some((start, end)), _) => {
                Paint::linear_fade(start, end, self.primary(), to)
            }
            (Some(GradientKind::Radial), _, Some((center, radius))) => {
                Paint::radial_fade(center, radius, self.primary(), to)
            }
            _ => self.solid(),
        }
    }

    /// The style variant, or `default` when none was given.
    pub fn style_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.style.as_deref().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let params = Params::default().validate().unwrap();
        assert_eq!(params.size, 200);
        assert_eq!(params.stroke, 4.0);
        assert_eq!(params.color.to_hex(), "#d4a84b");
    }

    #[test]
    fn test_validate_rejects_bad_stroke_and_opacity() {
        let err = Params { stroke: 0.0, ..Params::default() }.validate().unwrap_err();
        assert!(err.message().starts_with("stroke width must be positive"));

        let err = Params { opacity: 1.5, ..Params::default() }.validate().unwrap_err();
        assert!(err.message().starts_with("opacity must be between 0 and 1"));
        assert_eq!(err.hints().len(), 1);
    }

    #[test]
    fn test_paint_requires_secondary_color() {
        let a = Point::zero();
        let b = Point::new(10.0, 10.0);
        let params = Params { gradient: Some(GradientKind::Linear), ..Params::default() };
        assert_eq!(params.paint(Some((a, b)), None), params.solid());

        let params = Params { color2: Some(Color::WHITE), ..params };
        assert!(matches!(params.paint(Some((a, b)), None), Paint::Linear { .. }));
        assert_eq!(params.paint(None, Some((a, 5.0))), params.solid());
    }

    #[test]
    fn test_gradient_fades_out() {
        let params = Params {
            color2: Some(Color::WHITE),
            gradient: Some(GradientKind::Radial),
            opacity: 0.5,
            ..Params::default()
        };
        let Paint::Radial { stops, radius, .. } = params.paint(None, Some((Point::zero(), 7.0)))
        else {
            panic!("expected a radial gradient");
        };
        assert_eq!(radius, 7.0);
        assert_eq!(stops[0].color, Color::GOLD.with_opacity(0.5));
        assert_eq!(stops[1].color, Color::WHITE.transparent());
        assert_eq!(stops[1].offset, 1.0);
    }
}
