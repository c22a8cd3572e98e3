//! spidev-backed [`StripDriver`].

use std::future::Future;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use spidev::{SpiModeFlags, Spidev, SpidevOptions};

use ledstrip_app::ports::StripDriver;
use ledstrip_domain::color::Rgb;
use ledstrip_domain::error::LedStripError;

use crate::config::SpiConfig;
use crate::encoder::Ws2812Encoder;
use crate::error::SpiError;

/// A WS2812 strip on a spidev bus.
pub struct SpiStrip {
    device: Arc<Mutex<Spidev>>,
    encoder: Ws2812Encoder,
}

impl SpiStrip {
    /// Open and configure the SPI device.
    ///
    /// # Errors
    ///
    /// Returns [`SpiError::Open`] if the device node is missing or not
    /// accessible, [`SpiError::Configure`] if the bus rejects the settings.
    pub fn open(config: &SpiConfig) -> Result<Self, SpiError> {
        let mut device = Spidev::open(&config.device).map_err(|source| SpiError::Open {
            path: config.device.clone(),
            source,
        })?;
        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(config.clock_hz())
            .mode(SpiModeFlags::SPI_MODE_0)
            .build();
        device.configure(&options).map_err(SpiError::Configure)?;
        tracing::info!(
            device = %config.device.display(),
            clock_hz = config.clock_hz(),
            "SPI strip ready"
        );

        Ok(Self {
            device: Arc::new(Mutex::new(device)),
            encoder: Ws2812Encoder::new(config.frequency_khz),
        })
    }
}

impl StripDriver for SpiStrip {
    fn name(&self) -> &'static str {
        "spi"
    }

    fn write(&self, frame: &[Rgb]) -> impl Future<Output = Result<(), LedStripError>> + Send {
        let bytes = self.encoder.encode(frame);
        let device = Arc::clone(&self.device);
        async move {
            tokio::task::spawn_blocking(move || {
                let mut device = device.lock().unwrap_or_else(PoisonError::into_inner);
                device.write_all(&bytes)
            })
            .await
            .map_err(SpiError::Join)?
            .map_err(SpiError::Write)?;
            Ok(())
        }
    }
}
