//! Breathing — the whole strip fades in and out.

use std::time::Duration;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{Animation, Step, hold, ramp_up};
use crate::color::{ColorSpec, Rgb, palette};
use crate::error::ValidationError;

/// Parameters for the `breathing` animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breathing {
    pub color: ColorSpec,
    /// Brightness levels per half-breath.
    pub steps: u32,
    pub delay_ms: u64,
}

impl Default for Breathing {
    fn default() -> Self {
        Self {
            color: palette::WARM_LIGHT.into(),
            steps: 20,
            delay_ms: 50,
        }
    }
}

impl Breathing {
    pub(super) fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        if self.steps == 0 {
            return Err(ValidationError::ZeroSteps);
        }
        let color = self.color.rgb();
        let inhale: Vec<f64> = ramp_up(self.steps).collect();
        let levels = inhale
            .iter()
            .chain(inhale.iter().rev())
            .map(|&level| color.dim_clamped(level))
            .collect();
        Ok(Box::new(Cycle {
            levels,
            position: 0,
            num_leds,
            hold: hold(self.delay_ms)?,
        }))
    }
}

/// Loops over a list of uniform strip colors.
struct Cycle {
    levels: Vec<Rgb>,
    position: usize,
    num_leds: usize,
    hold: Duration,
}

impl Animation for Cycle {
    fn next_step(&mut self, _rng: &mut dyn RngCore) -> Option<Step> {
        let color = self.levels[self.position];
        self.position = (self.position + 1) % self.levels.len();
        Some(Step::new(vec![color; self.num_leds], self.hold))
    }
}
