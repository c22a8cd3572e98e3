//! Gradient shift — a two-color gradient rotating along the strip.

use std::time::Duration;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{Animation, Step, hold};
use crate::color::{ColorSpec, Rgb, palette};
use crate::error::ValidationError;

/// Parameters for the `gradient_shift` animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientShift {
    pub start: ColorSpec,
    pub end: ColorSpec,
    pub delay_ms: u64,
}

impl Default for GradientShift {
    fn default() -> Self {
        Self {
            start: palette::RED.into(),
            end: palette::BLUE.into(),
            delay_ms: 50,
        }
    }
}

impl GradientShift {
    pub(super) fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        if num_leds < 2 {
            return Err(ValidationError::GradientTooShort);
        }
        #[allow(clippy::cast_precision_loss)]
        let last = (num_leds - 1) as f64;
        let frame = (0..num_leds)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let factor = i as f64 / last;
                Rgb::interpolate(self.start.rgb(), self.end.rgb(), factor)
            })
            .collect();
        Ok(Box::new(Shifting {
            frame,
            hold: hold(self.delay_ms)?,
        }))
    }
}

struct Shifting {
    frame: Vec<Rgb>,
    hold: Duration,
}

impl Animation for Shifting {
    fn next_step(&mut self, _rng: &mut dyn RngCore) -> Option<Step> {
        let step = Step::new(self.frame.clone(), self.hold);
        self.frame.rotate_right(1);
        Some(step)
    }
}
