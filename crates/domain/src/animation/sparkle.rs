//! Sparkle — random LEDs twinkle over a dim base color.

use std::time::Duration;

use rand::RngCore;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use super::{Animation, Step, hold, ramp_up};
use crate::color::{ColorSpec, Rgb, palette};
use crate::error::ValidationError;

/// Parameters for the `sparkle` animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sparkle {
    pub base: ColorSpec,
    pub sparkle: ColorSpec,
    /// How many LEDs twinkle per cycle.
    pub count: usize,
    /// Brightness levels on the way up.
    pub steps: u32,
    pub delay_ms: u64,
}

impl Default for Sparkle {
    fn default() -> Self {
        Self {
            // blue at 30%
            base: Rgb::new(0, 0, 76).into(),
            sparkle: palette::WHITE.into(),
            count: 50,
            steps: 5,
            delay_ms: 100,
        }
    }
}

impl Sparkle {
    pub(super) fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        if self.steps == 0 {
            return Err(ValidationError::ZeroSteps);
        }
        if self.count > num_leds {
            return Err(ValidationError::SparkleCountExceedsStrip {
                count: self.count,
                num_leds,
            });
        }
        let base = self.base.rgb();
        let sparkle = self.sparkle.rgb();
        // up to full brightness, then back down without repeating the peak
        let up: Vec<f64> = ramp_up(self.steps).collect();
        let levels = up
            .iter()
            .chain(up.iter().rev().skip(1))
            .map(|&level| sparkle.dim_clamped(level))
            .collect();
        Ok(Box::new(Twinkle {
            base,
            levels,
            count: self.count,
            frame: vec![base; num_leds],
            picked: Vec::new(),
            position: 0,
            hold: hold(self.delay_ms)?,
        }))
    }
}

struct Twinkle {
    base: Rgb,
    levels: Vec<Rgb>,
    count: usize,
    frame: Vec<Rgb>,
    picked: Vec<usize>,
    position: usize,
    hold: Duration,
}

impl Animation for Twinkle {
    fn next_step(&mut self, rng: &mut dyn RngCore) -> Option<Step> {
        if self.position == 0 {
            self.frame.fill(self.base);
            self.picked = index::sample(rng, self.frame.len(), self.count).into_vec();
        }
        let color = self.levels[self.position];
        for &led in &self.picked {
            self.frame[led] = color;
        }
        self.position = (self.position + 1) % self.levels.len();
        Some(Step::new(self.frame.clone(), self.hold))
    }
}
