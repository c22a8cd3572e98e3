//! Animations — frame sources that drive the whole strip over time.
//!
//! An [`Animation`] only produces frames; it never sleeps and never touches
//! hardware. Each [`Step`] means "show this frame, then wait `hold`". The
//! application layer owns the clock and the driver.
//!
//! Animations are requested through [`AnimationRequest`], which carries the
//! user-facing parameters (with defaults for everything) and validates them
//! against the strip length before anything starts.

mod breathing;
mod firework;
mod flashing;
mod gradient;
mod loading;
mod moving;
mod pomodoro;
mod shifting;
mod sparkle;

pub use breathing::Breathing;
pub use firework::Firework;
pub use flashing::Flashing;
pub use gradient::GradientShift;
pub use loading::Loading;
pub use moving::{MovingBlocks, MovingColors};
pub use pomodoro::Pomodoro;
pub use shifting::ShiftingRgb;
pub use sparkle::Sparkle;

use std::time::Duration;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ValidationError;

/// One frame of an animation and how long it stays on the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub frame: Vec<Rgb>,
    pub hold: Duration,
}

impl Step {
    #[must_use]
    pub fn new(frame: Vec<Rgb>, hold: Duration) -> Self {
        Self { frame, hold }
    }
}

/// A running animation.
pub trait Animation: Send {
    /// Produce the next frame, or `None` once a finite animation is done.
    fn next_step(&mut self, rng: &mut dyn RngCore) -> Option<Step>;
}

/// A request to start one of the built-in animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum AnimationRequest {
    ShiftingRgb(ShiftingRgb),
    Flashing(Flashing),
    Loading(Loading),
    Pomodoro(Pomodoro),
    Firework(Firework),
    Breathing(Breathing),
    Sparkle(Sparkle),
    GradientShift(GradientShift),
    MovingColors(MovingColors),
    MovingBlocks(MovingBlocks),
}

impl AnimationRequest {
    /// Wire name of the animation (`"breathing"`, …).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShiftingRgb(_) => "shifting_rgb",
            Self::Flashing(_) => "flashing",
            Self::Loading(_) => "loading",
            Self::Pomodoro(_) => "pomodoro",
            Self::Firework(_) => "firework",
            Self::Breathing(_) => "breathing",
            Self::Sparkle(_) => "sparkle",
            Self::GradientShift(_) => "gradient_shift",
            Self::MovingColors(_) => "moving_colors",
            Self::MovingBlocks(_) => "moving_blocks",
        }
    }

    /// Validate the parameters against a strip of `num_leds` and create
    /// the frame source.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first invalid parameter.
    pub fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        if num_leds == 0 {
            return Err(ValidationError::EmptyStrip);
        }
        match self {
            Self::ShiftingRgb(params) => params.start(num_leds),
            Self::Flashing(params) => params.start(num_leds),
            Self::Loading(params) => params.start(num_leds),
            Self::Pomodoro(params) => params.start(num_leds),
            Self::Firework(params) => params.start(num_leds),
            Self::Breathing(params) => params.start(num_leds),
            Self::Sparkle(params) => params.start(num_leds),
            Self::GradientShift(params) => params.start(num_leds),
            Self::MovingColors(params) => params.start(num_leds),
            Self::MovingBlocks(params) => params.start(num_leds),
        }
    }
}

fn hold(delay_ms: u64) -> Result<Duration, ValidationError> {
    if delay_ms == 0 {
        return Err(ValidationError::ZeroDelay);
    }
    Ok(Duration::from_millis(delay_ms))
}

/// Brightness ramp `1/steps, 2/steps, …, 1`.
fn ramp_up(steps: u32) -> impl Iterator<Item = f64> {
    (1..=steps).map(move |i| f64::from(i) / f64::from(steps))
}
