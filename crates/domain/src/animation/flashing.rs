//! Flashing — random colors alternating with darkness for a fixed time.

use std::time::Duration;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{Animation, Step, hold};
use crate::color::{Rgb, palette};
use crate::error::ValidationError;

/// Parameters for the `flashing` animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flashing {
    pub delay_ms: u64,
    pub duration_ms: u64,
}

impl Default for Flashing {
    fn default() -> Self {
        Self {
            delay_ms: 300,
            duration_ms: 15_000,
        }
    }
}

impl Flashing {
    pub(super) fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        Ok(Box::new(self.frames(num_leds)?))
    }

    pub(super) fn frames(&self, num_leds: usize) -> Result<FlashingFrames, ValidationError> {
        if self.duration_ms == 0 {
            return Err(ValidationError::InvalidDuration);
        }
        Ok(FlashingFrames {
            num_leds,
            hold: hold(self.delay_ms)?,
            duration: Duration::from_millis(self.duration_ms),
            elapsed: Duration::ZERO,
            lit: false,
        })
    }
}

pub(super) struct FlashingFrames {
    num_leds: usize,
    hold: Duration,
    duration: Duration,
    elapsed: Duration,
    lit: bool,
}

impl Animation for FlashingFrames {
    fn next_step(&mut self, rng: &mut dyn RngCore) -> Option<Step> {
        let color = if self.lit {
            palette::OFF
        } else {
            // a new flash only starts while time remains
            if self.elapsed >= self.duration {
                return None;
            }
            Rgb::random(rng)
        };
        self.lit = !self.lit;
        self.elapsed += self.hold;
        Some(Step::new(vec![color; self.num_leds], self.hold))
    }
}
