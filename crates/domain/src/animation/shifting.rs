//! Shifting RGB — repeating red/green/blue blocks rotating along the strip.

use std::time::Duration;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{Animation, Step, hold};
use crate::color::{Rgb, palette};
use crate::error::ValidationError;

/// Parameters for the `shifting_rgb` animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftingRgb {
    /// LEDs per color block.
    pub group_size: usize,
    pub delay_ms: u64,
}

impl Default for ShiftingRgb {
    fn default() -> Self {
        Self {
            group_size: 4,
            delay_ms: 100,
        }
    }
}

impl ShiftingRgb {
    pub(super) fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        if self.group_size == 0 {
            return Err(ValidationError::ZeroGroupSize);
        }
        let colors = [palette::RED, palette::GREEN, palette::BLUE];
        let frame = (0..num_leds)
            .map(|i| colors[(i % (3 * self.group_size)) / self.group_size])
            .collect();
        Ok(Box::new(Rotating {
            frame,
            hold: hold(self.delay_ms)?,
        }))
    }
}

/// Shows its frame, then rotates it one LED to the right.
struct Rotating {
    frame: Vec<Rgb>,
    hold: Duration,
}

impl Animation for Rotating {
    fn next_step(&mut self, _rng: &mut dyn RngCore) -> Option<Step> {
        let step = Step::new(self.frame.clone(), self.hold);
        self.frame.rotate_right(1);
        Some(step)
    }
}
