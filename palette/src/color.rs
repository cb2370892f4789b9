//! RGB color model, argument parsing, and brightness adjustment.
//!
//! Channel values live in `u8`, so the 0..=255 range is type-level. All
//! scaling truncates toward zero rather than rounding to nearest; the CSS
//! golden output in the scale tests depends on it.

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;

/// Error returned when a color argument cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ParseColorError {
    /// The input is neither an `R,G,B` triple nor a single channel value in
    /// decimal or `0x` hex within 0..=255.
    #[error("invalid color format: {0:?}")]
    InvalidFormat(String),
}

/// An RGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `1 + intensity`, clamping into the byte range.
    #[must_use]
    pub fn adjust(self, intensity: f64) -> Self {
        Self {
            r: adjust_channel(self.r, intensity),
            g: adjust_channel(self.g, intensity),
            b: adjust_channel(self.b, intensity),
        }
    }

    /// Darken every channel by `reduction`, a fraction in `0.0..=1.0`.
    ///
    /// A reduction of `0.33` keeps 67% of each channel. The scaled value is
    /// truncated, never rounded, and unlike [`adjust`](Self::adjust) this
    /// path has no clamp step.
    #[must_use]
    pub fn darken(self, reduction: f64) -> Self {
        let keep = 1.0 - reduction;
        Self {
            r: (f64::from(self.r) * keep) as u8,
            g: (f64::from(self.g) * keep) as u8,
            b: (f64::from(self.b) * keep) as u8,
        }
    }

    /// Channel-wise midpoint of two colors, halving rounded down.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            r: self.r.midpoint(other.r),
            g: self.g.midpoint(other.g),
            b: self.b.midpoint(other.b),
        }
    }
}

/// Renders the space-separated CSS form, e.g. `rgb(176 238 176)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({} {} {})", self.r, self.g, self.b)
    }
}

/// A parsed color argument: either one channel or a full RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorValue {
    /// A single channel value.
    Channel(u8),
    /// A full three-channel color.
    Rgb(Rgb),
}

impl ColorValue {
    /// Apply the brightness adjustment, preserving the input shape.
    #[must_use]
    pub fn adjust(self, intensity: f64) -> Self {
        match self {
            Self::Channel(value) => Self::Channel(adjust_channel(value, intensity)),
            Self::Rgb(rgb) => Self::Rgb(rgb.adjust(intensity)),
        }
    }
}

/// Accepts `R,G,B` with optional whitespace around each channel, a decimal
/// channel value, or a `0x`/`0X` prefixed hex channel value.
impl FromStr for ColorValue {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            let channels: Result<Vec<u8>, _> =
                s.split(',').map(|token| token.trim().parse()).collect();
            return match channels.as_deref() {
                Ok([r, g, b]) => Ok(Self::Rgb(Rgb::new(*r, *g, *b))),
                _ => Err(ParseColorError::InvalidFormat(s.to_owned())),
            };
        }

        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
            Some(hex) => u8::from_str_radix(hex, 16),
            None => trimmed.parse(),
        };
        parsed
            .map(Self::Channel)
            .map_err(|_| ParseColorError::InvalidFormat(s.to_owned()))
    }
}

/// Scale a channel by `1 + intensity` and clamp into the byte range.
///
/// The scaled value is truncated toward zero, so an intensity of `0.019`
/// takes `100` to `101`, not `102`. Large factors saturate at 255 and
/// factors at or below `-1.0` saturate at 0.
#[must_use]
pub fn adjust_channel(value: u8, intensity: f64) -> u8 {
    ((f64::from(value) * (1.0 + intensity)) as i64).clamp(0, 255) as u8
}

/// Format a channel as decimal with a two-digit uppercase hex suffix,
/// e.g. `120 (0x78)`.
#[must_use]
pub fn format_channel(value: u8) -> String {
    format!("{value} (0x{value:02X})")
}
