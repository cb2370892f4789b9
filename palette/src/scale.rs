//! Validated key-color scales with linear interpolation between keys.
//!
//! A scale maps integer positions to colors. A few positions carry fixed key
//! colors; every other position in the range gets its color by interpolating
//! between the nearest key below and the nearest key above. Each generated
//! entry also carries a border color derived by darkening the background.

use std::collections::BTreeMap;
use std::ops::{Bound, RangeInclusive};

use crate::color::Rgb;

#[cfg(test)]
#[path = "scale_test.rs"]
mod tests;

/// Fraction removed from each channel when deriving border colors.
pub const DEFAULT_BORDER_REDUCTION: f64 = 0.33;

/// Error returned when a scale configuration cannot cover its range.
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    /// Fewer than two key colors were supplied.
    #[error("scale needs at least two key colors, got {found}")]
    TooFewKeys { found: usize },
    /// An unkeyed position has no key color below it to interpolate from.
    #[error("position {position} has no key color below it")]
    MissingLowerBound { position: u8 },
    /// An unkeyed position has no key color above it to interpolate toward.
    #[error("position {position} has no key color above it")]
    MissingUpperBound { position: u8 },
}

/// A validated mapping of scale positions to key colors.
///
/// Construction checks that every unkeyed position in the range is bracketed
/// by keys, so interpolation during [`generate`](Self::generate) can never
/// run off either end of the key set.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
    keys: BTreeMap<u8, Rgb>,
    range: RangeInclusive<u8>,
    border_reduction: f64,
}

impl ScaleConfig {
    /// Build a scale over `range` from the given key colors.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::TooFewKeys`] for fewer than two keys, and
    /// [`ScaleError::MissingLowerBound`] or [`ScaleError::MissingUpperBound`]
    /// when an unkeyed position in `range` is not bracketed by keys.
    pub fn new(keys: BTreeMap<u8, Rgb>, range: RangeInclusive<u8>) -> Result<Self, ScaleError> {
        if keys.len() < 2 {
            return Err(ScaleError::TooFewKeys { found: keys.len() });
        }
        for position in range.clone() {
            if !keys.contains_key(&position) {
                bounding_keys(&keys, position)?;
            }
        }
        Ok(Self {
            keys,
            range,
            border_reduction: DEFAULT_BORDER_REDUCTION,
        })
    }

    /// The soft severity palette, green at 1 through dark red at 9.
    ///
    /// The orange key at 5 is derived as the channel-wise midpoint of the
    /// yellow and red keys before validation.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the key set covers the full range.
    pub fn soft() -> Result<Self, ScaleError> {
        let green = Rgb::new(176, 238, 176);
        let yellow = Rgb::new(255, 255, 120);
        let red = Rgb::new(248, 152, 150);
        let dark_red = Rgb::new(124, 76, 75);

        let mut keys = BTreeMap::new();
        keys.insert(1, green);
        keys.insert(3, yellow);
        keys.insert(5, yellow.midpoint(red));
        keys.insert(7, red);
        keys.insert(9, dark_red);
        Self::new(keys, 1..=9)
    }

    /// The bright legacy palette, green at 1 through red at 7.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the key set covers the full range.
    pub fn classic() -> Result<Self, ScaleError> {
        let mut keys = BTreeMap::new();
        keys.insert(1, Rgb::new(0, 255, 0));
        keys.insert(3, Rgb::new(255, 255, 0));
        keys.insert(5, Rgb::new(255, 165, 0));
        keys.insert(7, Rgb::new(255, 0, 0));
        Self::new(keys, 1..=7)
    }

    /// Replace the default border reduction used by [`generate`](Self::generate).
    #[must_use]
    pub fn with_border_reduction(mut self, reduction: f64) -> Self {
        self.border_reduction = reduction;
        self
    }

    /// Produce one entry per position in the range, ascending.
    ///
    /// Key positions use their color directly; unkeyed positions interpolate
    /// between the nearest bracketing keys. Every entry's border color is the
    /// background darkened by the configured reduction.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::MissingLowerBound`] or
    /// [`ScaleError::MissingUpperBound`] if an unkeyed position is not
    /// bracketed; configurations built through [`new`](Self::new) have
    /// already ruled this out.
    pub fn generate(&self) -> Result<Vec<ScaleEntry>, ScaleError> {
        let mut entries = Vec::new();
        for position in self.range.clone() {
            let background = match self.keys.get(&position) {
                Some(&color) => color,
                None => {
                    let ((lower_pos, lower), (upper_pos, upper)) =
                        bounding_keys(&self.keys, position)?;
                    interpolate(lower, upper, lower_pos, upper_pos, position)
                }
            };
            entries.push(ScaleEntry {
                position,
                background,
                border: background.darken(self.border_reduction),
            });
        }
        Ok(entries)
    }
}

/// One generated scale position with its background and border colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleEntry {
    /// Position on the scale.
    pub position: u8,
    /// Background color, keyed or interpolated.
    pub background: Rgb,
    /// Background darkened by the configured reduction.
    pub border: Rgb,
}

impl ScaleEntry {
    /// Render the CSS rule for this entry under `class`, e.g.
    /// `.airport.i5 { background-color: rgb(251 203 135); border-color: rgb(168 136 90); }`.
    #[must_use]
    pub fn css_rule(self, class: &str) -> String {
        format!(
            ".{class}.i{} {{ background-color: {}; border-color: {}; }}",
            self.position, self.background, self.border
        )
    }
}

/// Linearly interpolate between two colors at integer scale positions.
///
/// Channel deltas are taken exactly in integers, the position ratio divides
/// in `f64`, and the result truncates toward zero. Callers must pass distinct
/// `start_pos` and `end_pos` bracketing `pos`.
#[must_use]
pub fn interpolate(start: Rgb, end: Rgb, start_pos: u8, end_pos: u8, pos: u8) -> Rgb {
    Rgb {
        r: interpolate_channel(start.r, end.r, start_pos, end_pos, pos),
        g: interpolate_channel(start.g, end.g, start_pos, end_pos, pos),
        b: interpolate_channel(start.b, end.b, start_pos, end_pos, pos),
    }
}

fn interpolate_channel(start: u8, end: u8, start_pos: u8, end_pos: u8, pos: u8) -> u8 {
    let weighted = (i32::from(end) - i32::from(start)) * (i32::from(pos) - i32::from(start_pos));
    let span = i32::from(end_pos) - i32::from(start_pos);
    (f64::from(start) + f64::from(weighted) / f64::from(span)) as u8
}

fn bounding_keys(
    keys: &BTreeMap<u8, Rgb>,
    position: u8,
) -> Result<((u8, Rgb), (u8, Rgb)), ScaleError> {
    let lower = keys
        .range(..position)
        .next_back()
        .map(|(&pos, &color)| (pos, color))
        .ok_or(ScaleError::MissingLowerBound { position })?;
    let upper = keys
        .range((Bound::Excluded(position), Bound::Unbounded))
        .next()
        .map(|(&pos, &color)| (pos, color))
        .ok_or(ScaleError::MissingUpperBound { position })?;
    Ok((lower, upper))
}
