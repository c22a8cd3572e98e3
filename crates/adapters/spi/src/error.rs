//! SPI adapter error types.

use std::path::PathBuf;

use ledstrip_domain::error::LedStripError;

/// Errors specific to the SPI adapter.
#[derive(Debug, thiserror::Error)]
pub enum SpiError {
    /// The spidev device could not be opened.
    #[error("failed to open SPI device {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Setting clock, mode or word size was refused by the kernel.
    #[error("failed to configure SPI device")]
    Configure(#[source] std::io::Error),

    /// Writing the encoded frame failed.
    #[error("failed to write frame to SPI device")]
    Write(#[source] std::io::Error),

    /// The blocking write task panicked or was cancelled.
    #[error("SPI write task failed")]
    Join(#[source] tokio::task::JoinError),
}

impl From<SpiError> for LedStripError {
    fn from(err: SpiError) -> Self {
        LedStripError::Driver(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_device_in_open_error() {
        let err = SpiError::Open {
            path: PathBuf::from("/dev/spidev9.9"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "failed to open SPI device /dev/spidev9.9");
    }

    #[test]
    fn should_convert_into_driver_error() {
        let err: LedStripError =
            SpiError::Write(std::io::Error::from(std::io::ErrorKind::BrokenPipe)).into();
        assert!(matches!(err, LedStripError::Driver(_)));
    }
}
