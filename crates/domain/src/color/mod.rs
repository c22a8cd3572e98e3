//! Colors — 8-bit RGB values, hex conversion and the named palette.
//!
//! Hex strings are accepted with or without the leading `#`
//! (`FF5500` and `#ff5500` are the same color) and are always rendered
//! back in lowercase `#rrggbb` form.

pub mod palette;
mod spec;

pub use spec::ColorSpec;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// A single LED color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a `#rrggbb` (or bare `rrggbb`) string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] unless exactly six hex digits
    /// remain after stripping leading `#` characters.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let digits = value.trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(value.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidHex(value.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lowercase `#rrggbb` representation.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Whether every channel is zero.
    #[must_use]
    pub fn is_off(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    /// Scale every channel by `factor`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::DimFactorOutOfRange`] unless `0 <= factor <= 1`.
    pub fn dim(&self, factor: f64) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&factor) {
            return Err(ColorError::DimFactorOutOfRange(factor));
        }
        Ok(self.dim_clamped(factor))
    }

    /// Like [`dim`](Self::dim) but clamps `factor` into `[0, 1]`.
    #[must_use]
    pub fn dim_clamped(&self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self::new(
            scale(self.red, factor),
            scale(self.green, factor),
            scale(self.blue, factor),
        )
    }

    /// Linear blend between `start` and `end`; `factor = 0` is `start`.
    #[must_use]
    pub fn interpolate(start: Self, end: Self, factor: f64) -> Self {
        Self::new(
            lerp(start.red, end.red, factor),
            lerp(start.green, end.green, factor),
            lerp(start.blue, end.blue, factor),
        )
    }

    /// A uniformly random color.
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(channel: u8, factor: f64) -> u8 {
    (f64::from(channel) * factor) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(start: u8, end: u8, factor: f64) -> u8 {
    let start = f64::from(start);
    (start + (f64::from(end) - start) * factor) as u8
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
