//! Strip driver port — the boundary to the physical (or simulated) LEDs.

use std::future::Future;

use ledstrip_domain::color::Rgb;
use ledstrip_domain::error::LedStripError;

/// Pushes frames to an addressable LED strip.
///
/// Implementations live in adapter crates (`ledstrip-adapter-spi`,
/// `ledstrip-adapter-virtual`). A frame always covers the whole strip, first LED
/// first.
pub trait StripDriver: Send + Sync {
    /// Short name used in logs (e.g. `"spi"`).
    fn name(&self) -> &'static str;

    /// Display `frame` on the strip.
    ///
    /// # Errors
    ///
    /// Returns [`LedStripError::Driver`] when the hardware write fails.
    fn write(&self, frame: &[Rgb]) -> impl Future<Output = Result<(), LedStripError>> + Send;
}
