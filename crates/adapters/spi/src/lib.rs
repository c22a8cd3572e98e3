//! # ledstrip-adapter-spi
//!
//! Drives a WS2812 ("NeoPixel") strip wired to a Linux SPI bus, e.g. the
//! MOSI pin of a Raspberry Pi 5 exposed as `/dev/spidev0.0`.
//!
//! ## How the timing works
//!
//! WS2812 LEDs read a single-wire signal where every data bit lasts 1.25 µs
//! (800 kHz) and the bit value is encoded in the length of the high pulse.
//! The SPI clock is set to eight times the LED bit rate so that one SPI byte
//! spans exactly one LED bit; `0b1111_1000` produces a long high pulse (1),
//! `0b1100_0000` a short one (0). A run of zero bytes after the frame latches
//! the colors.
//!
//! ## Dependency rule
//!
//! Depends on `ledstrip-app` (port traits) and `ledstrip-domain` only.

mod config;
mod driver;
mod encoder;
mod error;

pub use config::SpiConfig;
pub use driver::SpiStrip;
pub use encoder::Ws2812Encoder;
pub use error::SpiError;
