use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use ecow::{eco_format, EcoString};

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00, 0xFF);
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF, 0xFF);
    /// The default accent color, a muted gold.
    pub const GOLD: Self = Self::new(0xD4, 0xA8, 0x4B, 0xFF);

    /// Construct a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Replace the alpha channel with the given opacity in `[0, 1]`.
    ///
    /// Values outside of that range are clamped.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { a: round_u8(opacity.clamp(0.0, 1.0) * 255.0), ..self }
    }

    /// The same color with a fully transparent alpha channel.
    pub fn transparent(self) -> Self {
        Self { a: 0, ..self }
    }

    /// Converts this color to a RGB Hex Code.
    pub fn to_hex(self) -> EcoString {
        if self.a != 255 {
            eco_format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        } else {
            eco_format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }
}

impl FromStr for Color {
    type Err = &'static str;

    /// Constructs a new color from hex strings like the following:
    /// - `#aef` (shorthand, with leading hashtag),
    /// - `7a03c2` (without alpha),
    /// - `abcdefff` (with alpha).
    ///
    /// The hashtag is optional and both lower and upper case are fine.
    fn from_str(hex_str: &str) -> Result<Self, Self::Err> {
        let hex_str = hex_str.strip_prefix('#').unwrap_or(hex_str);
        if hex_str.chars().any(|c| !c.is_ascii_hexdigit()) {
            return Err("color string contains non-hexadecimal letters");
        }

        let len = hex_str.len();
        let long = len == 6 || len == 8;
        let short = len == 3 || len == 4;
        let alpha = len == 4 || len == 8;
        if !long && !short {
            return Err("color string has wrong length");
        }

        let mut values: [u8; 4] = [u8::MAX; 4];
        for elem in if alpha { 0..4 } else { 0..3 } {
            let item_len = if long { 2 } else { 1 };
            let pos = elem * item_len;

            let item = &hex_str[pos..(pos + item_len)];
            values[elem] = u8::from_str_radix(item, 16)
                .map_err(|_| "color string contains non-hexadecimal letters")?;

            if short {
                // Duplicate number for shorthand notation, i.e. `a` -> `aa`
                values[elem] += values[elem] * 16;
            }
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

impl Debug for Color {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        } else {
            write!(f, "rgb(\"{}\")", self.to_hex())
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Convert to the closest u8.
fn round_u8(value: f64) -> u8 {
    value.round() as u8
}
