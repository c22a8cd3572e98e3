//! Moving colors — a color list walking along the strip.
//!
//! [`MovingColors`] repeats the list LED by LED; [`MovingBlocks`] stretches
//! each color into a block covering an equal share of the strip.

use std::time::Duration;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{Animation, Step, hold};
use crate::color::{ColorSpec, Rgb, palette};
use crate::error::ValidationError;

fn default_colors() -> Vec<ColorSpec> {
    vec![
        palette::RED.into(),
        palette::GREEN.into(),
        palette::BLUE.into(),
    ]
}

fn resolve(colors: &[ColorSpec]) -> Result<Vec<Rgb>, ValidationError> {
    if colors.is_empty() {
        return Err(ValidationError::EmptyColorList);
    }
    Ok(colors.iter().map(|c| c.rgb()).collect())
}

/// Parameters for the `moving_colors` animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingColors {
    pub colors: Vec<ColorSpec>,
    pub delay_ms: u64,
}

impl Default for MovingColors {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            delay_ms: 200,
        }
    }
}

impl MovingColors {
    pub(super) fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        Ok(Box::new(Repeating {
            colors: resolve(&self.colors)?,
            num_leds,
            hold: hold(self.delay_ms)?,
        }))
    }
}

struct Repeating {
    colors: Vec<Rgb>,
    num_leds: usize,
    hold: Duration,
}

impl Animation for Repeating {
    fn next_step(&mut self, _rng: &mut dyn RngCore) -> Option<Step> {
        let frame = (0..self.num_leds)
            .map(|i| self.colors[i % self.colors.len()])
            .collect();
        self.colors.rotate_right(1);
        Some(Step::new(frame, self.hold))
    }
}

/// Parameters for the `moving_blocks` animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingBlocks {
    pub colors: Vec<ColorSpec>,
    pub delay_ms: u64,
}

impl Default for MovingBlocks {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            delay_ms: 200,
        }
    }
}

impl MovingBlocks {
    pub(super) fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        let colors = resolve(&self.colors)?;
        Ok(Box::new(Blocks {
            frame: blocks(&colors, num_leds),
            hold: hold(self.delay_ms)?,
        }))
    }
}

/// Equal blocks per color; the remainder takes colors from the head of
/// the list, one LED each.
fn blocks(colors: &[Rgb], num_leds: usize) -> Vec<Rgb> {
    let base = num_leds / colors.len();
    let remainder = num_leds % colors.len();
    let mut frame = Vec::with_capacity(num_leds);
    for color in colors {
        frame.extend(std::iter::repeat_n(*color, base));
    }
    frame.extend_from_slice(&colors[..remainder]);
    frame
}

struct Blocks {
    frame: Vec<Rgb>,
    hold: Duration,
}

impl Animation for Blocks {
    fn next_step(&mut self, _rng: &mut dyn RngCore) -> Option<Step> {
        let step = Step::new(self.frame.clone(), self.hold);
        self.frame.rotate_left(1);
        Some(step)
    }
}
