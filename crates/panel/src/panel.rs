//! The control panel.

use std::future::Future;
use std::sync::Arc;

use serde_json::{Value, json};
use tokio::task::JoinHandle;

use crate::control::{Button, ControlSurface, REQUIRED_CONTROLS, ids};
use crate::error::PanelError;
use crate::transport::Transport;

const ON_PATH: &str = "/on";
const OFF_PATH: &str = "/off";
const COLOR_PATH: &str = "/color";

/// Handle to a request spawned by a click.
///
/// Resolves to the decoded response for the on button and `None` for every
/// other control, whose responses are not read.
pub type RequestTask = JoinHandle<Result<Option<Value>, PanelError>>;

#[derive(Debug, Clone, Copy)]
struct InputHandle(&'static str);

/// Control panel bound to a surface and a transport.
pub struct ControlPanel<S, T> {
    surface: Arc<S>,
    transport: Arc<T>,
    color: InputHandle,
}

impl<S, T> ControlPanel<S, T>
where
    S: ControlSurface + 'static,
    T: Transport + 'static,
{
    /// Bind the panel to every control of `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::MissingControl`] for the first required control
    /// the surface does not have; nothing is bound in that case.
    pub fn attach(surface: Arc<S>, transport: Arc<T>) -> Result<Self, PanelError> {
        if let Some(missing) = REQUIRED_CONTROLS
            .iter()
            .find(|id| !surface.has_control(id))
        {
            return Err(PanelError::MissingControl((*missing).to_string()));
        }
        tracing::debug!(controls = REQUIRED_CONTROLS.len(), "panel attached");

        Ok(Self {
            surface,
            transport,
            color: InputHandle(ids::COLOR_INPUT),
        })
    }

    /// Click `button`: spawn its request and return immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn click(&self, button: Button) -> RequestTask {
        tracing::debug!(control = %button, "click");
        let transport = Arc::clone(&self.transport);
        match button {
            Button::On => spawn(button, turn_on(transport)),
            Button::Off => spawn(button, turn_off(transport)),
            Button::Send => {
                let color = self.surface.read_value(self.color.0).unwrap_or_default();
                spawn(button, send_color(transport, color))
            }
            Button::Preset(preset) => {
                spawn(button, send_color(transport, preset.color().to_string()))
            }
        }
    }
}

fn spawn<F>(button: Button, request: F) -> RequestTask
where
    F: Future<Output = Result<Option<Value>, PanelError>> + Send + 'static,
{
    tokio::spawn(async move {
        let result = request.await;
        if let Err(err) = &result {
            tracing::error!(control = %button, error = %err, "request failed");
        }
        result
    })
}

async fn turn_on<T: Transport>(transport: Arc<T>) -> Result<Option<Value>, PanelError> {
    let reply = transport.post(ON_PATH, None).await?;
    let response: Value = serde_json::from_slice(&reply.body)?;
    tracing::info!(%response, "turned on");
    Ok(Some(response))
}

async fn turn_off<T: Transport>(transport: Arc<T>) -> Result<Option<Value>, PanelError> {
    transport.post(OFF_PATH, None).await?;
    Ok(None)
}

async fn send_color<T: Transport>(
    transport: Arc<T>,
    color: String,
) -> Result<Option<Value>, PanelError> {
    tracing::info!(%color, "sending color");
    transport
        .post(COLOR_PATH, Some(json!({ "color": color })))
        .await?;
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Reply;
    use ledstrip_domain::preset::Preset;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeSurface {
        missing: Vec<&'static str>,
        values: Mutex<HashMap<String, String>>,
    }

    impl FakeSurface {
        fn without(id: &'static str) -> Self {
            Self {
                missing: vec![id],
                ..Self::default()
            }
        }

        fn type_into(&self, id: &str, value: &str) {
            self.values
                .lock()
                .unwrap()
                .insert(id.to_string(), value.to_string());
        }
    }

    impl ControlSurface for FakeSurface {
        fn has_control(&self, id: &str) -> bool {
            !self.missing.contains(&id)
        }

        fn read_value(&self, id: &str) -> Option<String> {
            self.values.lock().unwrap().get(id).cloned()
        }
    }

    #[derive(Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<(String, Option<Value>)>>,
        reply_body: Vec<u8>,
        unreachable: bool,
    }

    impl RecordingTransport {
        fn replying(body: &[u8]) -> Self {
            Self {
                reply_body: body.to_vec(),
                ..Self::default()
            }
        }

        fn requests(&self) -> Vec<(String, Option<Value>)> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for RecordingTransport {
        fn post(
            &self,
            path: &str,
            body: Option<Value>,
        ) -> impl Future<Output = Result<Reply, PanelError>> + Send {
            self.requests
                .lock()
                .unwrap()
                .push((path.to_string(), body));
            let result = if self.unreachable {
                Err(PanelError::Transport(Box::new(std::io::Error::from(
                    std::io::ErrorKind::ConnectionRefused,
                ))))
            } else {
                Ok(Reply {
                    status: 200,
                    body: self.reply_body.clone(),
                })
            };
            async { result }
        }
    }

    fn attach(
        surface: FakeSurface,
        transport: RecordingTransport,
    ) -> (
        ControlPanel<FakeSurface, RecordingTransport>,
        Arc<FakeSurface>,
        Arc<RecordingTransport>,
    ) {
        let surface = Arc::new(surface);
        let transport = Arc::new(transport);
        let panel = ControlPanel::attach(Arc::clone(&surface), Arc::clone(&transport)).unwrap();
        (panel, surface, transport)
    }

    #[tokio::test]
    async fn should_post_on_and_return_decoded_response() {
        let (panel, _surface, transport) = attach(
            FakeSurface::default(),
            RecordingTransport::replying(br#"{"status":"on"}"#),
        );

        let response = panel.click(Button::On).await.unwrap().unwrap();

        assert_eq!(response, Some(json!({"status": "on"})));
        assert_eq!(transport.requests(), vec![("/on".to_string(), None)]);
    }

    #[tokio::test]
    async fn should_post_off_without_reading_response() {
        let (panel, _surface, transport) = attach(
            FakeSurface::default(),
            RecordingTransport::replying(b"<html>not json</html>"),
        );

        let response = panel.click(Button::Off).await.unwrap().unwrap();

        assert_eq!(response, None);
        assert_eq!(transport.requests(), vec![("/off".to_string(), None)]);
    }

    #[tokio::test]
    async fn should_send_input_value_as_color() {
        let (panel, surface, transport) =
            attach(FakeSurface::default(), RecordingTransport::default());
        surface.type_into(ids::COLOR_INPUT, "#abcdef");

        panel.click(Button::Send).await.unwrap().unwrap();

        assert_eq!(
            transport.requests(),
            vec![("/color".to_string(), Some(json!({"color": "#abcdef"})))]
        );
    }

    #[tokio::test]
    async fn should_read_input_at_click_time() {
        let (panel, surface, transport) =
            attach(FakeSurface::default(), RecordingTransport::default());

        surface.type_into(ids::COLOR_INPUT, "#111111");
        let first = panel.click(Button::Send);
        surface.type_into(ids::COLOR_INPUT, "#222222");
        let second = panel.click(Button::Send);
        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        let bodies: Vec<_> = transport
            .requests()
            .into_iter()
            .filter_map(|(_, body)| body)
            .collect();
        assert_eq!(bodies.len(), 2);
        assert!(bodies.contains(&json!({"color": "#111111"})));
        assert!(bodies.contains(&json!({"color": "#222222"})));
    }

    #[tokio::test]
    async fn should_send_input_without_validation() {
        let (panel, surface, transport) =
            attach(FakeSurface::default(), RecordingTransport::default());
        surface.type_into(ids::COLOR_INPUT, "definitely not a color");

        panel.click(Button::Send).await.unwrap().unwrap();

        assert_eq!(
            transport.requests()[0].1,
            Some(json!({"color": "definitely not a color"}))
        );
    }

    #[tokio::test]
    async fn should_send_empty_color_when_input_is_blank() {
        let (panel, _surface, transport) =
            attach(FakeSurface::default(), RecordingTransport::default());

        panel.click(Button::Send).await.unwrap().unwrap();

        assert_eq!(transport.requests()[0].1, Some(json!({"color": ""})));
    }

    #[tokio::test]
    async fn should_send_preset_literal_regardless_of_input() {
        let (panel, surface, transport) =
            attach(FakeSurface::default(), RecordingTransport::default());
        surface.type_into(ids::COLOR_INPUT, "#123456");

        panel
            .click(Button::Preset(Preset::Three))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            transport.requests(),
            vec![("/color".to_string(), Some(json!({"color": "#ff0000"})))]
        );
    }

    #[tokio::test]
    async fn should_send_every_preset_literal() {
        let (panel, _surface, transport) =
            attach(FakeSurface::default(), RecordingTransport::default());

        for preset in Preset::ALL {
            panel.click(Button::Preset(preset)).await.unwrap().unwrap();
        }

        let colors: Vec<_> = transport
            .requests()
            .into_iter()
            .map(|(_, body)| body.unwrap()["color"].clone())
            .collect();
        assert_eq!(
            colors,
            vec![
                json!("#01c7fc"),
                json!("#ff4b0f"),
                json!("#ff0000"),
                json!("#f72b98")
            ]
        );
    }

    #[tokio::test]
    async fn should_issue_independent_requests_on_double_click() {
        let (panel, _surface, transport) = attach(
            FakeSurface::default(),
            RecordingTransport::replying(br#"{"status":"on"}"#),
        );

        let first = panel.click(Button::On);
        let second = panel.click(Button::On);
        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        assert_eq!(
            transport.requests(),
            vec![("/on".to_string(), None), ("/on".to_string(), None)]
        );
    }

    #[tokio::test]
    async fn should_end_task_with_decode_error_on_non_json_reply() {
        let (panel, _surface, _transport) = attach(
            FakeSurface::default(),
            RecordingTransport::replying(b"Internal Server Error"),
        );

        let result = panel.click(Button::On).await.unwrap();

        assert!(matches!(result, Err(PanelError::Decode(_))));
    }

    #[tokio::test]
    async fn should_end_task_with_transport_error_when_backend_is_down() {
        let transport = RecordingTransport {
            unreachable: true,
            ..RecordingTransport::default()
        };
        let (panel, _surface, _transport) = attach(FakeSurface::default(), transport);

        let result = panel.click(Button::Off).await.unwrap();

        assert!(matches!(result, Err(PanelError::Transport(_))));
    }

    #[test]
    fn should_fail_fast_when_control_is_missing() {
        let result = ControlPanel::attach(
            Arc::new(FakeSurface::without(ids::SEND_BUTTON)),
            Arc::new(RecordingTransport::default()),
        );

        assert!(matches!(
            result,
            Err(PanelError::MissingControl(id)) if id == "send"
        ));
    }

    #[test]
    fn should_report_first_missing_preset() {
        let result = ControlPanel::attach(
            Arc::new(FakeSurface::without("preset-4")),
            Arc::new(RecordingTransport::default()),
        );

        assert!(matches!(
            result,
            Err(PanelError::MissingControl(id)) if id == "preset-4"
        ));
    }
}
