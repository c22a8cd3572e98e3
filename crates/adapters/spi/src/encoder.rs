//! WS2812 frame encoding.

use ledstrip_domain::color::Rgb;

const ONE: u8 = 0b1111_1000;
const ZERO: u8 = 0b1100_0000;

/// Minimum low time that latches a frame, in microseconds.
const LATCH_MICROS: u32 = 300;

/// Turns frames into the SPI byte stream a WS2812 strip understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ws2812Encoder {
    reset_bytes: usize,
}

impl Ws2812Encoder {
    /// Encoder for LEDs clocked at `frequency_khz` (one SPI byte per bit).
    #[must_use]
    pub fn new(frequency_khz: u32) -> Self {
        // one byte lasts one LED bit period: 1000 / frequency_khz µs
        let reset_bytes = LATCH_MICROS.saturating_mul(frequency_khz).div_ceil(1_000);
        Self {
            reset_bytes: reset_bytes as usize,
        }
    }

    /// Number of trailing zero bytes appended to every frame.
    #[must_use]
    pub fn reset_bytes(&self) -> usize {
        self.reset_bytes
    }

    /// Encode `frame`, LED by LED in green-red-blue order, most significant
    /// bit first.
    #[must_use]
    pub fn encode(&self, frame: &[Rgb]) -> Vec<u8> {
        let mut out = Vec::with_capacity(frame.len() * 24 + self.reset_bytes);
        for led in frame {
            for channel in [led.green, led.red, led.blue] {
                for bit in (0..8).rev() {
                    out.push(if channel & (1 << bit) == 0 { ZERO } else { ONE });
                }
            }
        }
        out.resize(out.len() + self.reset_bytes, 0);
        out
    }
}
