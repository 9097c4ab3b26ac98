use crate::core::constants::*;
use crate::core::smoothing::approach;
use std::fmt;
use thiserror::Error;

/// Hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    #[inline]
    pub const fn from_array(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub const DEFAULT: Hsl = Hsl::from_array(DEFAULT_HSL);

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Hsla {
        Hsla {
            hue: self.hue,
            saturation: self.saturation,
            lightness: self.lightness,
            alpha,
        }
    }

    /// One smoothing tick per channel. Hue is interpolated linearly, not
    /// around the color wheel, so every channel moves monotonically.
    pub fn approach(self, target: Hsl, factor: f32) -> Hsl {
        Hsl {
            hue: approach(self.hue, target.hue, factor, STYLE_SNAP_EPSILON),
            saturation: approach(self.saturation, target.saturation, factor, STYLE_SNAP_EPSILON),
            lightness: approach(self.lightness, target.lightness, factor, STYLE_SNAP_EPSILON),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.hue.is_finite()
            && (0.0..360.0).contains(&self.hue)
            && (0.0..=100.0).contains(&self.saturation)
            && (0.0..=100.0).contains(&self.lightness)
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Draw color: HSL plus opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// CSS `hsla()` notation, accepted by Canvas 2D fill and stroke styles.
impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            self.hue,
            self.saturation,
            self.lightness,
            self.alpha.clamp(0.0, 1.0)
        )
    }
}

/// 8-bit RGB channels plus alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl::new((h * 60.0) % 360.0, s * 100.0, l * 100.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("unsupported color syntax: {0}")]
    Unsupported(String),
    #[error("expected 3 or 4 color components, got {0}")]
    ComponentCount(usize),
    #[error("invalid color component: {0}")]
    Component(String),
}

/// Parse a computed CSS color.
///
/// Accepts `rgb()` / `rgba()` in comma or space syntax (with an optional
/// `/ alpha`), `#rgb`, `#rrggbb` and `transparent`.
pub fn parse_css_color(input: &str) -> Result<Rgba, ColorParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }
    let lower = s.to_ascii_lowercase();
    if lower == "transparent" {
        return Ok(Rgba::TRANSPARENT);
    }
    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex);
    }
    let body = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorParseError::Unsupported(s.to_string()))?;

    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorParseError::ComponentCount(parts.len()));
    }
    let r = parse_channel(parts[0])?;
    let g = parse_channel(parts[1])?;
    let b = parse_channel(parts[2])?;
    let a = match parts.get(3) {
        Some(p) => parse_alpha(p)?,
        None => 1.0,
    };
    Ok(Rgba { r, g, b, a })
}

fn parse_channel(part: &str) -> Result<u8, ColorParseError> {
    let value = if let Some(pct) = part.strip_suffix('%') {
        pct.parse::<f32>()
            .map(|p| p * 2.55)
            .map_err(|_| ColorParseError::Component(part.to_string()))?
    } else {
        part.parse::<f32>()
            .map_err(|_| ColorParseError::Component(part.to_string()))?
    };
    if !value.is_finite() {
        return Err(ColorParseError::Component(part.to_string()));
    }
    Ok(value.round().clamp(0.0, 255.0) as u8)
}

fn parse_alpha(part: &str) -> Result<f32, ColorParseError> {
    let value = if let Some(pct) = part.strip_suffix('%') {
        pct.parse::<f32>().map(|p| p / 100.0)
    } else {
        part.parse::<f32>()
    }
    .map_err(|_| ColorParseError::Component(part.to_string()))?;
    if !value.is_finite() {
        return Err(ColorParseError::Component(part.to_string()));
    }
    Ok(value.clamp(0.0, 1.0))
}

fn parse_hex(hex: &str) -> Result<Rgba, ColorParseError> {
    let nibble = |c: u8| -> Result<u8, ColorParseError> {
        (c as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| ColorParseError::Component(hex.to_string()))
    };
    let b = hex.as_bytes();
    match b.len() {
        3 => Ok(Rgba::rgb(
            nibble(b[0])? * 17,
            nibble(b[1])? * 17,
            nibble(b[2])? * 17,
        )),
        6 => Ok(Rgba::rgb(
            nibble(b[0])? * 16 + nibble(b[1])?,
            nibble(b[2])? * 16 + nibble(b[3])?,
            nibble(b[4])? * 16 + nibble(b[5])?,
        )),
        _ => Err(ColorParseError::Unsupported(format!("#{}", hex))),
    }
}

/// Pick a cursor color that stays visible over `background`.
///
/// Dark, dim and light backgrounds map to fixed contrast colors; midtones
/// get the sampled hue rotated half way around the wheel. A missing or fully
/// transparent background falls back to the default color.
pub fn contrast_for_background(background: Option<Rgba>) -> Hsl {
    let Some(bg) = background.filter(|c| !c.is_transparent()) else {
        return Hsl::DEFAULT;
    };
    let hsl = bg.to_hsl();
    if hsl.lightness < DARK_BG_MAX_LIGHTNESS {
        Hsl::from_array(DARK_BG_HSL)
    } else if hsl.lightness < DIM_BG_MAX_LIGHTNESS {
        Hsl::from_array(DIM_BG_HSL)
    } else if hsl.lightness > LIGHT_BG_MIN_LIGHTNESS {
        Hsl::from_array(LIGHT_BG_HSL)
    } else {
        Hsl::new(
            (hsl.hue + MIDTONE_HUE_ROTATION) % 360.0,
            MIDTONE_SATURATION,
            MIDTONE_LIGHTNESS,
        )
    }
}

/// Turn a computed `background-color` into a sample for
/// [`contrast_for_background`]. Transparent values stay transparent so the
/// resolver falls back to the default color; unparseable values give `None`.
pub fn sampled_background(value: &str) -> Option<Rgba> {
    match parse_css_color(value) {
        Ok(rgba) => Some(rgba),
        Err(e) => {
            log::debug!("[cursor] skipping background {:?}: {}", value, e);
            None
        }
    }
}

/// [`contrast_for_background`] over a raw CSS string; parse failures fall
/// back to the default color.
pub fn contrast_for_css(background: Option<&str>) -> Hsl {
    contrast_for_background(background.and_then(sampled_background))
}
