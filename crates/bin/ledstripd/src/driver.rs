//! Driver selected at startup.

use ledstrip_adapter_spi::SpiStrip;
use ledstrip_adapter_virtual::VirtualStrip;
use ledstrip_app::ports::StripDriver;
use ledstrip_domain::color::Rgb;
use ledstrip_domain::error::LedStripError;

use crate::config::{DriverKind, StripConfig};

/// One of the available strip drivers.
pub enum AnyDriver {
    Virtual(VirtualStrip),
    Spi(SpiStrip),
}

impl AnyDriver {
    /// Build the driver named in `config`.
    pub fn from_config(config: &StripConfig) -> anyhow::Result<Self> {
        Ok(match config.driver {
            DriverKind::Virtual => Self::Virtual(VirtualStrip::new()),
            DriverKind::Spi => Self::Spi(SpiStrip::open(&config.spi())?),
        })
    }
}

impl StripDriver for AnyDriver {
    fn name(&self) -> &'static str {
        match self {
            Self::Virtual(driver) => driver.name(),
            Self::Spi(driver) => driver.name(),
        }
    }

    async fn write(&self, frame: &[Rgb]) -> Result<(), LedStripError> {
        match self {
            Self::Virtual(driver) => driver.write(frame).await,
            Self::Spi(driver) => driver.write(frame).await,
        }
    }
}
