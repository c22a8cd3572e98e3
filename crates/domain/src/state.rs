//! Light state — what the service reports about the strip.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::strip::LedStrip;
use crate::time::Timestamp;

/// Snapshot of the strip as seen from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    /// Whether any LED is lit.
    pub power: bool,
    /// The shared color when the strip is uniform.
    pub color: Option<Rgb>,
    /// `color` in `#rrggbb` form.
    pub hex: Option<String>,
    /// Name of the running animation, if any.
    pub animation: Option<String>,
    pub num_leds: usize,
    pub last_changed: Timestamp,
}

impl LightState {
    #[must_use]
    pub fn from_strip(
        strip: &LedStrip,
        animation: Option<&str>,
        last_changed: Timestamp,
    ) -> Self {
        let color = strip.uniform_color();
        Self {
            power: strip.power_status(),
            color,
            hex: color.map(|c| c.to_hex()),
            animation: animation.map(str::to_string),
            num_leds: strip.len(),
            last_changed,
        }
    }
}
