//! CSS color parsing for the gradient options.
//!
//! The tag cloud accepts `start_color` and `end_color` options but never
//! writes a color into its output. Parsing exists so that an invalid color
//! turns the color flag off, the same way the options have always been
//! validated.
//!
//! ## Examples
//!
//! ```
//! use tagcloud::Color;
//!
//! let red = Color::parse("#f00").unwrap();
//! assert_eq!(red, Color::rgb(255, 0, 0));
//!
//! let blue = Color::parse("hsl(240, 100%, 50%)").unwrap();
//! assert_eq!(blue.to_string(), "#0000ff");
//!
//! assert!(Color::parse("not-a-color").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Hsl, Srgb};

use crate::error::ColorError;

/// An sRGB color with 8-bit channels and a floating-point alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha (0.0-1.0)
    pub a: f64,
}

impl Color {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with an explicit alpha, clamped to 0.0-1.0.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Parses a CSS color: hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`),
    /// `rgb()`/`rgba()`, `hsl()`/`hsla()`, or a named color.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let value = trimmed.to_ascii_lowercase();
        if value.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(trimmed.to_string()));
        }

        if let Some((name, args)) = split_function(&value) {
            let parsed = match name {
                "rgb" | "rgba" => parse_rgb_args(args),
                "hsl" | "hsla" => parse_hsl_args(args),
                _ => None,
            };
            return parsed.ok_or_else(|| ColorError::InvalidFunction(trimmed.to_string()));
        }

        if value == "transparent" {
            return Ok(Self::rgba(0, 0, 0, 0.0));
        }

        palette::named::from_str(&value)
            .map(Self::from)
            .ok_or_else(|| ColorError::UnknownName(trimmed.to_string()))
    }
}

impl From<Srgb<u8>> for Color {
    fn from(color: Srgb<u8>) -> Self {
        Self::rgb(color.red, color.green, color.blue)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Hex digits after the `#`. palette reads the color part; a trailing alpha
/// digit or pair is read here.
fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let (rgb, alpha) = match hex.len() {
        3 | 6 => (hex, None),
        4 | 8 => {
            let (rgb, alpha) = hex.split_at(hex.len() / 4 * 3);
            (rgb, Some(alpha))
        }
        _ => return None,
    };

    let color = Srgb::<u8>::from_str(rgb).ok()?;
    let alpha = match alpha {
        None => 1.0,
        Some(digits) => {
            let byte = u8::from_str_radix(digits, 16).ok()?;
            let byte = if digits.len() == 1 { byte * 17 } else { byte };
            f64::from(byte) / 255.0
        }
    };

    Some(Color::rgba(color.red, color.green, color.blue, alpha))
}

/// Splits `name(args)` into its parts.
fn split_function(value: &str) -> Option<(&str, &str)> {
    let open = value.find('(')?;
    let args = value[open + 1..].strip_suffix(')')?;
    Some((value[..open].trim(), args))
}

/// Splits function arguments in either the comma or the space/slash syntax.
fn split_args(args: &str) -> Option<Vec<&str>> {
    let parts: Vec<&str> = if args.contains(',') {
        args.split(',').map(str::trim).collect()
    } else {
        args.split(|c: char| c.is_whitespace() || c == '/')
            .filter(|s| !s.is_empty())
            .collect()
    };
    (3..=4).contains(&parts.len()).then_some(parts)
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_percent(value: &str) -> Option<f64> {
    parse_number(value.strip_suffix('%')?).map(|n| n / 100.0)
}

fn parse_alpha(value: Option<&str>) -> Option<f64> {
    match value {
        None => Some(1.0),
        Some(v) => parse_percent(v).or_else(|| parse_number(v)),
    }
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts = split_args(args)?;
    let channel = |value: &str| {
        let n = match parse_percent(value) {
            Some(fraction) => fraction * 255.0,
            None => parse_number(value)?,
        };
        Some(n.round().clamp(0.0, 255.0) as u8)
    };

    Some(Color::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        parse_alpha(parts.get(3).copied())?,
    ))
}

fn parse_hsl_args(args: &str) -> Option<Color> {
    let parts = split_args(args)?;

    let hue = parse_number(parts[0].strip_suffix("deg").unwrap_or(parts[0]))?;
    let saturation = parse_percent(parts[1])?.clamp(0.0, 1.0);
    let lightness = parse_percent(parts[2])?.clamp(0.0, 1.0);
    let alpha = parse_alpha(parts.get(3).copied())?;

    let hsl: Hsl = Hsl::new(hue as f32, saturation as f32, lightness as f32);
    let rgb = Srgb::<f32>::from_color(hsl).into_format::<u8>();
    Some(Color::rgba(rgb.red, rgb.green, rgb.blue, alpha))
}
