//! Strip — the in-memory frame buffer mirroring what the LEDs show.

use crate::color::{Rgb, palette};
use crate::error::{StripError, ValidationError};

/// Per-LED colors of an addressable strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedStrip {
    leds: Vec<Rgb>,
}

impl LedStrip {
    /// Create a strip with every LED off.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyStrip`] when `num_leds` is zero.
    pub fn new(num_leds: usize) -> Result<Self, ValidationError> {
        if num_leds == 0 {
            return Err(ValidationError::EmptyStrip);
        }
        Ok(Self {
            leds: vec![palette::OFF; num_leds],
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    /// Always false; a strip holds at least one LED.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    #[must_use]
    pub fn leds(&self) -> &[Rgb] {
        &self.leds
    }

    /// Set a single LED.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::IndexOutOfRange`] when `index >= len()`.
    pub fn set_led(&mut self, index: usize, color: Rgb) -> Result<(), StripError> {
        let len = self.leds.len();
        let led = self
            .leds
            .get_mut(index)
            .ok_or(StripError::IndexOutOfRange { index, len })?;
        *led = color;
        Ok(())
    }

    pub fn fill(&mut self, color: Rgb) {
        self.leds.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(palette::OFF);
    }

    /// Replace the whole buffer with `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::FrameLength`] when the frame size differs.
    pub fn load(&mut self, frame: &[Rgb]) -> Result<(), StripError> {
        if frame.len() != self.leds.len() {
            return Err(StripError::FrameLength {
                expected: self.leds.len(),
                actual: frame.len(),
            });
        }
        self.leds.copy_from_slice(frame);
        Ok(())
    }

    /// Whether any LED is lit.
    #[must_use]
    pub fn power_status(&self) -> bool {
        self.leds.iter().any(|led| !led.is_off())
    }

    /// The shared color when every LED shows the same one.
    #[must_use]
    pub fn uniform_color(&self) -> Option<Rgb> {
        let first = *self.leds.first()?;
        self.leds.iter().all(|led| *led == first).then_some(first)
    }
}
