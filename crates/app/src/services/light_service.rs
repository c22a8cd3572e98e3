//! Light service — use-cases for controlling the strip.

use std::sync::Arc;

use tokio::sync::Mutex;

use ledstrip_domain::animation::AnimationRequest;
use ledstrip_domain::color::{Rgb, palette};
use ledstrip_domain::error::LedStripError;
use ledstrip_domain::state::LightState;
use ledstrip_domain::strip::LedStrip;
use ledstrip_domain::time::now;

use crate::animation_runner::{RunningAnimation, SharedStrip};
use crate::ports::StripDriver;

/// Color shown by [`LightService::turn_on`].
pub const ON_COLOR: Rgb = palette::RED;

/// Application service owning the strip buffer and its driver.
///
/// Plain commands (on, off, color) stop any running animation first so the
/// requested color sticks.
pub struct LightService<D> {
    driver: Arc<D>,
    shared: Arc<Mutex<SharedStrip>>,
    num_leds: usize,
    /// Locked before `shared` whenever both are needed.
    animation: Mutex<Option<RunningAnimation>>,
}

impl<D: StripDriver + 'static> LightService<D> {
    /// Create a new service for `strip`, pushing frames through `driver`.
    pub fn new(strip: LedStrip, driver: D) -> Self {
        Self {
            driver: Arc::new(driver),
            num_leds: strip.len(),
            shared: Arc::new(Mutex::new(SharedStrip::new(strip))),
            animation: Mutex::new(None),
        }
    }

    /// Number of LEDs on the strip.
    #[must_use]
    pub fn num_leds(&self) -> usize {
        self.num_leds
    }

    /// Fill the strip with [`ON_COLOR`].
    ///
    /// # Errors
    ///
    /// Returns [`LedStripError::Driver`] if the frame cannot be pushed.
    pub async fn turn_on(&self) -> Result<LightState, LedStripError> {
        self.show(ON_COLOR).await
    }

    /// Turn every LED off.
    ///
    /// # Errors
    ///
    /// Returns [`LedStripError::Driver`] if the frame cannot be pushed.
    pub async fn turn_off(&self) -> Result<LightState, LedStripError> {
        self.show(palette::OFF).await
    }

    /// Fill the strip with a `#rrggbb` color.
    ///
    /// # Errors
    ///
    /// Returns [`LedStripError::Color`] when `hex` is not a valid color
    /// (the strip is left untouched), or [`LedStripError::Driver`] if the
    /// frame cannot be pushed.
    pub async fn set_color(&self, hex: &str) -> Result<LightState, LedStripError> {
        let color = Rgb::from_hex(hex)?;
        self.show(color).await
    }

    /// Report what the strip currently shows.
    pub async fn state(&self) -> LightState {
        let slot = self.animation.lock().await;
        let animation = slot
            .as_ref()
            .filter(|running| running.is_running())
            .map(RunningAnimation::name);
        let guard = self.shared.lock().await;
        LightState::from_strip(&guard.strip, animation, guard.last_changed)
    }

    /// Start an animation, replacing the running one.
    ///
    /// # Errors
    ///
    /// Returns [`LedStripError::Validation`] if the parameters do not fit
    /// the strip; the previous animation keeps running in that case.
    pub async fn start_animation(
        &self,
        request: &AnimationRequest,
    ) -> Result<&'static str, LedStripError> {
        let animation = request.start(self.num_leds)?;

        // held until the new task is stored
        let mut slot = self.animation.lock().await;
        stop_running(&mut slot).await;

        let name = request.name();
        *slot = Some(RunningAnimation::spawn(
            name,
            animation,
            Arc::clone(&self.shared),
            Arc::clone(&self.driver),
        ));
        tracing::info!(animation = name, driver = self.driver.name(), "animation started");
        Ok(name)
    }

    /// Stop the running animation, if any. Returns whether one was running.
    pub async fn stop_animation(&self) -> bool {
        let mut slot = self.animation.lock().await;
        stop_running(&mut slot).await
    }

    async fn show(&self, color: Rgb) -> Result<LightState, LedStripError> {
        let mut slot = self.animation.lock().await;
        stop_running(&mut slot).await;

        let mut guard = self.shared.lock().await;
        guard.strip.fill(color);
        self.driver.write(guard.strip.leds()).await?;
        guard.last_changed = now();
        tracing::debug!(color = %color, driver = self.driver.name(), "strip updated");
        Ok(LightState::from_strip(&guard.strip, None, guard.last_changed))
    }
}

async fn stop_running(slot: &mut Option<RunningAnimation>) -> bool {
    match slot.take() {
        Some(running) => {
            let was_running = running.is_running();
            running.stop().await;
            was_running
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledstrip_domain::animation::{Breathing, Flashing, Sparkle};
    use ledstrip_domain::error::{ColorError, ValidationError};
    use std::future::Future;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingDriver {
        frames: std::sync::Mutex<Vec<Vec<Rgb>>>,
    }

    impl StripDriver for Arc<RecordingDriver> {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn write(&self, frame: &[Rgb]) -> impl Future<Output = Result<(), LedStripError>> + Send {
            self.frames.lock().unwrap().push(frame.to_vec());
            async { Ok(()) }
        }
    }

    impl RecordingDriver {
        fn count(&self) -> usize {
            self.frames.lock().unwrap().len()
        }

        fn last(&self) -> Vec<Rgb> {
            self.frames.lock().unwrap().last().cloned().unwrap()
        }
    }

    struct FailingDriver;

    impl StripDriver for FailingDriver {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn write(&self, _frame: &[Rgb]) -> Result<(), LedStripError> {
            Err(LedStripError::Driver(Box::new(std::io::Error::other(
                "spi bus unavailable",
            ))))
        }
    }

    fn make_service(num_leds: usize) -> (LightService<Arc<RecordingDriver>>, Arc<RecordingDriver>) {
        let driver = Arc::new(RecordingDriver::default());
        let svc = LightService::new(LedStrip::new(num_leds).unwrap(), Arc::clone(&driver));
        (svc, driver)
    }

    #[tokio::test]
    async fn should_start_dark() {
        let (svc, driver) = make_service(3);
        let state = svc.state().await;
        assert!(!state.power);
        assert_eq!(state.animation, None);
        assert_eq!(driver.count(), 0);
    }

    #[tokio::test]
    async fn should_fill_red_when_turned_on() {
        let (svc, driver) = make_service(3);
        let state = svc.turn_on().await.unwrap();
        assert!(state.power);
        assert_eq!(state.hex.as_deref(), Some("#ff0000"));
        assert_eq!(driver.last(), vec![ON_COLOR; 3]);
    }

    #[tokio::test]
    async fn should_clear_when_turned_off() {
        let (svc, driver) = make_service(2);
        svc.turn_on().await.unwrap();
        let state = svc.turn_off().await.unwrap();
        assert!(!state.power);
        assert_eq!(driver.last(), vec![palette::OFF; 2]);
        assert_eq!(driver.count(), 2);
    }

    #[tokio::test]
    async fn should_set_color_from_hex() {
        let (svc, driver) = make_service(2);
        let state = svc.set_color("FF5500").await.unwrap();
        assert_eq!(state.hex.as_deref(), Some("#ff5500"));
        assert_eq!(driver.last(), vec![Rgb::new(255, 85, 0); 2]);
    }

    #[tokio::test]
    async fn should_reject_invalid_color_without_touching_strip() {
        let (svc, driver) = make_service(2);
        let result = svc.set_color("not-a-color").await;
        assert!(matches!(
            result,
            Err(LedStripError::Color(ColorError::InvalidHex(_)))
        ));
        assert_eq!(driver.count(), 0);
    }

    #[tokio::test]
    async fn should_propagate_driver_failure() {
        let svc = LightService::new(LedStrip::new(2).unwrap(), FailingDriver);
        let result = svc.turn_on().await;
        assert!(matches!(result, Err(LedStripError::Driver(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn should_play_animation_frames() {
        let (svc, driver) = make_service(4);
        let name = svc
            .start_animation(&AnimationRequest::Breathing(Breathing::default()))
            .await
            .unwrap();
        assert_eq!(name, "breathing");

        tokio::time::sleep(Duration::from_millis(175)).await;
        assert!(driver.count() >= 3);
        assert_eq!(svc.state().await.animation.as_deref(), Some("breathing"));
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_animation_when_color_is_set() {
        let (svc, driver) = make_service(4);
        svc.start_animation(&AnimationRequest::Breathing(Breathing::default()))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        svc.set_color("#00ff00").await.unwrap();
        let frames = driver.count();
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(driver.count(), frames);
        assert_eq!(driver.last(), vec![palette::GREEN; 4]);
        assert_eq!(svc.state().await.animation, None);
    }

    #[tokio::test(start_paused = true)]
    async fn should_report_whether_an_animation_was_stopped() {
        let (svc, _driver) = make_service(4);
        assert!(!svc.stop_animation().await);

        svc.start_animation(&AnimationRequest::Breathing(Breathing::default()))
            .await
            .unwrap();
        assert!(svc.stop_animation().await);
        assert!(!svc.stop_animation().await);
    }

    #[tokio::test(start_paused = true)]
    async fn should_clear_animation_name_when_finite_animation_ends() {
        let (svc, _driver) = make_service(2);
        let flashing = Flashing {
            delay_ms: 10,
            duration_ms: 40,
        };
        svc.start_animation(&AnimationRequest::Flashing(flashing))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(svc.state().await.animation, None);
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_every_animation_after_concurrent_starts() {
        let (svc, driver) = make_service(4);
        let request = AnimationRequest::Breathing(Breathing::default());
        svc.start_animation(&request).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let (first, second) = tokio::join!(
            svc.start_animation(&request),
            svc.start_animation(&request)
        );
        first.unwrap();
        second.unwrap();
        svc.turn_off().await.unwrap();

        let frames = driver.count();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(driver.count(), frames);
        assert_eq!(driver.last(), vec![palette::OFF; 4]);
        assert_eq!(svc.state().await.animation, None);
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_color_set_while_animation_is_starting() {
        let (svc, driver) = make_service(4);
        let request = AnimationRequest::Breathing(Breathing::default());
        svc.start_animation(&request).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let (started, colored) =
            tokio::join!(svc.start_animation(&request), svc.set_color("#00ff00"));
        started.unwrap();
        colored.unwrap();

        let frames = driver.count();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(driver.count(), frames);
        assert_eq!(driver.last(), vec![palette::GREEN; 4]);
        assert_eq!(svc.state().await.animation, None);
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_animation_started_concurrently_with_stop() {
        let (svc, driver) = make_service(4);
        let request = AnimationRequest::Breathing(Breathing::default());
        svc.start_animation(&request).await.unwrap();

        let (started, _) = tokio::join!(svc.start_animation(&request), svc.stop_animation());
        started.unwrap();

        let frames = driver.count();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(driver.count(), frames);
        assert_eq!(svc.state().await.animation, None);
    }

    #[tokio::test]
    async fn should_reject_invalid_animation_parameters() {
        let (svc, _driver) = make_service(4);
        let result = svc
            .start_animation(&AnimationRequest::Sparkle(Sparkle::default()))
            .await;
        assert!(matches!(
            result,
            Err(LedStripError::Validation(
                ValidationError::SparkleCountExceedsStrip { .. }
            ))
        ));
    }
}
