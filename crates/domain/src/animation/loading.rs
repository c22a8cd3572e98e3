//! Loading bar — LEDs light up one after another, then the strip resets.

use std::time::Duration;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{Animation, Step, hold};
use crate::color::{ColorSpec, Rgb, palette};
use crate::error::ValidationError;

/// Parameters for the `loading` animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Loading {
    pub color: ColorSpec,
    pub delay_ms: u64,
}

impl Default for Loading {
    fn default() -> Self {
        Self {
            color: palette::WARM_LIGHT.into(),
            delay_ms: 100,
        }
    }
}

impl Loading {
    pub(super) fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        Ok(Box::new(LoadingBar {
            color: self.color.rgb(),
            frame: vec![palette::OFF; num_leds],
            cursor: 0,
            hold: hold(self.delay_ms)?,
        }))
    }
}

struct LoadingBar {
    color: Rgb,
    frame: Vec<Rgb>,
    cursor: usize,
    hold: Duration,
}

impl Animation for LoadingBar {
    fn next_step(&mut self, _rng: &mut dyn RngCore) -> Option<Step> {
        if let Some(led) = self.frame.get_mut(self.cursor) {
            *led = self.color;
            self.cursor += 1;
        } else {
            self.frame.fill(palette::OFF);
            self.cursor = 0;
        }
        Some(Step::new(self.frame.clone(), self.hold))
    }
}
