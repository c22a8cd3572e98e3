//! Virtual strip — remembers what it was asked to display.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ledstrip_app::ports::StripDriver;
use ledstrip_domain::color::Rgb;
use ledstrip_domain::error::LedStripError;

#[derive(Debug, Default)]
struct Frames {
    last: Vec<Rgb>,
    written: u64,
}

/// In-memory stand-in for a physical strip.
///
/// Clones share the same frame memory, so a test can keep one handle while
/// the service owns another.
#[derive(Debug, Clone, Default)]
pub struct VirtualStrip {
    frames: Arc<Mutex<Frames>>,
}

impl VirtualStrip {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written frame (empty before the first write).
    #[must_use]
    pub fn last_frame(&self) -> Vec<Rgb> {
        self.lock().last.clone()
    }

    /// How many frames have been written so far.
    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.lock().written
    }

    fn lock(&self) -> MutexGuard<'_, Frames> {
        self.frames.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StripDriver for VirtualStrip {
    fn name(&self) -> &'static str {
        "virtual"
    }

    fn write(&self, frame: &[Rgb]) -> impl Future<Output = Result<(), LedStripError>> + Send {
        let mut frames = self.lock();
        frames.last.clear();
        frames.last.extend_from_slice(frame);
        frames.written += 1;
        tracing::trace!(
            leds = frame.len(),
            first = %frame.first().copied().unwrap_or_default(),
            written = frames.written,
            "virtual frame"
        );
        async { Ok(()) }
    }
}
