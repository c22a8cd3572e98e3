//! Animation runner — plays an [`Animation`] on the shared strip.
//!
//! The runner is the only place where animation time passes: it asks the
//! frame source for the next [`Step`](ledstrip_domain::animation::Step),
//! loads it into the strip, pushes it through the driver and sleeps for the
//! step's hold time. It is spawned as a tokio task and stopped by aborting
//! that task.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use ledstrip_domain::animation::Animation;
use ledstrip_domain::error::LedStripError;
use ledstrip_domain::strip::LedStrip;
use ledstrip_domain::time::{Timestamp, now};

use crate::ports::StripDriver;

/// Strip buffer shared between the service and a running animation.
#[derive(Debug)]
pub struct SharedStrip {
    pub strip: LedStrip,
    pub last_changed: Timestamp,
}

impl SharedStrip {
    #[must_use]
    pub fn new(strip: LedStrip) -> Self {
        Self {
            strip,
            last_changed: now(),
        }
    }
}

/// A spawned animation task.
pub struct RunningAnimation {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl RunningAnimation {
    /// Spawn `animation` on the current tokio runtime.
    pub fn spawn<D>(
        name: &'static str,
        animation: Box<dyn Animation>,
        shared: Arc<Mutex<SharedStrip>>,
        driver: Arc<D>,
    ) -> Self
    where
        D: StripDriver + 'static,
    {
        let handle = tokio::spawn(async move {
            match play(animation, &shared, driver.as_ref()).await {
                Ok(()) => tracing::info!(animation = name, "animation finished"),
                Err(err) => {
                    tracing::error!(animation = name, error = %err, "animation aborted");
                }
            }
        });
        Self { name, handle }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the task is still producing frames.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Abort the task and wait until it is gone, so no frame from it can
    /// land after this returns.
    pub async fn stop(self) {
        self.handle.abort();
        // the join error is the expected cancellation
        let _ = self.handle.await;
        tracing::debug!(animation = self.name, "animation stopped");
    }
}

async fn play<D: StripDriver>(
    mut animation: Box<dyn Animation>,
    shared: &Mutex<SharedStrip>,
    driver: &D,
) -> Result<(), LedStripError> {
    let mut rng = StdRng::from_os_rng();
    loop {
        let Some(step) = animation.next_step(&mut rng) else {
            return Ok(());
        };
        {
            let mut guard = shared.lock().await;
            guard.strip.load(&step.frame)?;
            driver.write(guard.strip.leds()).await?;
            guard.last_changed = now();
        }
        tokio::time::sleep(step.hold).await;
    }
}
