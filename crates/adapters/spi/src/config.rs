//! SPI driver configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration for the SPI strip driver.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpiConfig {
    /// spidev character device.
    pub device: PathBuf,
    /// LED data rate in kHz (800 for WS2812B).
    pub frequency_khz: u32,
}

impl SpiConfig {
    /// SPI clock in Hz: one SPI byte per LED bit.
    #[must_use]
    pub fn clock_hz(&self) -> u32 {
        self.frequency_khz.saturating_mul(8_000)
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from("/dev/spidev0.0"),
            frequency_khz: 800,
        }
    }
}
