//! Firework — a random burst expanding outward from a random LED.

use std::time::Duration;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::{Animation, Step, hold};
use crate::color::{Rgb, palette};
use crate::error::ValidationError;

/// Parameters for the `firework` animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Firework {
    pub delay_ms: u64,
}

impl Default for Firework {
    fn default() -> Self {
        Self { delay_ms: 50 }
    }
}

impl Firework {
    pub(super) fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        Ok(Box::new(Fireworks {
            frame: vec![palette::OFF; num_leds],
            burst: None,
            hold: hold(self.delay_ms)?,
        }))
    }
}

struct Burst {
    center: usize,
    color: Rgb,
    radius: usize,
    max_radius: usize,
    lit: Vec<usize>,
}

struct Fireworks {
    frame: Vec<Rgb>,
    burst: Option<Burst>,
    hold: Duration,
}

impl Fireworks {
    fn ignite(&self, rng: &mut dyn RngCore) -> Burst {
        let len = self.frame.len();
        let center = rng.random_range(0..len);
        Burst {
            center,
            color: Rgb::random(rng),
            radius: 0,
            max_radius: center.max(len - 1 - center),
            lit: Vec::new(),
        }
    }
}

impl Animation for Fireworks {
    fn next_step(&mut self, rng: &mut dyn RngCore) -> Option<Step> {
        let mut burst = match self.burst.take() {
            Some(burst) => burst,
            None => self.ignite(rng),
        };
        let len = self.frame.len();

        for index in burst.lit.drain(..) {
            self.frame[index] = palette::OFF;
        }

        if burst.radius > burst.max_radius {
            // explosion over, the strip stays dark for one step
            return Some(Step::new(self.frame.clone(), self.hold));
        }

        if let Some(left) = burst.center.checked_sub(burst.radius) {
            burst.lit.push(left);
        }
        let right = burst.center + burst.radius;
        if burst.radius > 0 && right < len {
            burst.lit.push(right);
        }
        for &index in &burst.lit {
            self.frame[index] = burst.color;
        }
        burst.radius += 1;

        let step = Step::new(self.frame.clone(), self.hold);
        self.burst = Some(burst);
        Some(step)
    }
}
