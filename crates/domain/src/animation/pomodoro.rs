//! Pomodoro timer — the strip starts full and one LED dims per time slice.
//!
//! Once every LED is dimmed the timer announces the end with a
//! [`Flashing`](super::Flashing) sequence.

use std::time::Duration;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::flashing::FlashingFrames;
use super::{Animation, Flashing, Step};
use crate::color::{ColorSpec, Rgb, palette};
use crate::error::ValidationError;

/// Dimmed LEDs keep this fraction of the timer color.
const DIMMED: f64 = 0.2;

/// Parameters for the `pomodoro` animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pomodoro {
    /// Length of the work session.
    pub minutes: f64,
    pub color: ColorSpec,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self {
            minutes: 25.0,
            color: palette::BLUE.into(),
        }
    }
}

impl Pomodoro {
    pub(super) fn start(&self, num_leds: usize) -> Result<Box<dyn Animation>, ValidationError> {
        if !(self.minutes.is_finite() && self.minutes > 0.0) {
            return Err(ValidationError::InvalidDuration);
        }
        #[allow(clippy::cast_precision_loss)]
        let pace = Duration::try_from_secs_f64(self.minutes * 60.0 / num_leds as f64)
            .map_err(|_| ValidationError::InvalidDuration)?;
        let color = self.color.rgb();
        Ok(Box::new(PomodoroTimer {
            frame: vec![color; num_leds],
            dimmed: color.dim_clamped(DIMMED),
            pace,
            stage: Stage::Start,
            finale: Flashing::default().frames(num_leds)?,
        }))
    }
}

enum Stage {
    Start,
    /// Number of LEDs still at full color.
    Dimming(usize),
    Finale,
}

struct PomodoroTimer {
    frame: Vec<Rgb>,
    dimmed: Rgb,
    pace: Duration,
    stage: Stage,
    finale: FlashingFrames,
}

impl Animation for PomodoroTimer {
    fn next_step(&mut self, rng: &mut dyn RngCore) -> Option<Step> {
        match self.stage {
            Stage::Start => {
                self.stage = Stage::Dimming(self.frame.len());
                Some(Step::new(self.frame.clone(), self.pace))
            }
            Stage::Dimming(remaining) if remaining > 0 => {
                let index = remaining - 1;
                self.frame[index] = self.dimmed;
                self.stage = Stage::Dimming(index);
                let hold = if index == 0 { Duration::ZERO } else { self.pace };
                Some(Step::new(self.frame.clone(), hold))
            }
            Stage::Dimming(_) | Stage::Finale => {
                self.stage = Stage::Finale;
                self.finale.next_step(rng)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::test_support::take;
    use crate::color::palette::BLUE;

    fn quick() -> Pomodoro {
        // half a minute over 3 LEDs is a 10 second pace
        Pomodoro {
            minutes: 0.5,
            color: BLUE.into(),
        }
    }

    #[test]
    fn should_start_with_full_strip() {
        let mut animation = quick().start(3).unwrap();
        let steps = take(animation.as_mut(), 1);
        assert_eq!(steps[0].frame, vec![BLUE; 3]);
        assert_eq!(steps[0].hold, Duration::from_secs(10));
    }

    #[test]
    fn should_dim_from_the_end() {
        let dimmed = BLUE.dim(DIMMED).unwrap();
        let mut animation = quick().start(3).unwrap();
        let steps = take(animation.as_mut(), 4);
        assert_eq!(steps[1].frame, vec![BLUE, BLUE, dimmed]);
        assert_eq!(steps[2].frame, vec![BLUE, dimmed, dimmed]);
        assert_eq!(steps[3].frame, vec![dimmed, dimmed, dimmed]);
        assert_eq!(steps[3].hold, Duration::ZERO);
    }

    #[test]
    fn should_flash_when_finished() {
        let mut animation = quick().start(3).unwrap();
        let steps = take(animation.as_mut(), 6);
        assert_eq!(steps.len(), 6);
        assert!(steps[5].frame.iter().all(Rgb::is_off));
        assert_eq!(steps[5].hold, Duration::from_millis(300));
    }

    #[test]
    fn should_end_after_the_flashing_sequence() {
        let mut animation = quick().start(1).unwrap();
        // start, one dim, then 15s of 300ms flashes (50 steps)
        let steps = take(animation.as_mut(), 1_000);
        assert_eq!(steps.len(), 52);
    }

    #[test]
    fn should_reject_non_positive_minutes() {
        let params = Pomodoro {
            minutes: 0.0,
            ..Pomodoro::default()
        };
        assert_eq!(
            params.start(10).err(),
            Some(ValidationError::InvalidDuration)
        );
    }
}
