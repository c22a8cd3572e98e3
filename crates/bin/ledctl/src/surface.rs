//! Terminal-backed control surface.

use std::sync::{Mutex, PoisonError};

use ledstrip_panel::{ControlSurface, REQUIRED_CONTROLS, ids};

/// Every panel control, with the color input held in memory and filled from
/// the command line.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    color: Mutex<String>,
}

impl TerminalSurface {
    /// Replace the content of the color input.
    pub fn type_color(&self, value: &str) {
        let mut color = self.color.lock().unwrap_or_else(PoisonError::into_inner);
        value.clone_into(&mut *color);
    }
}

impl ControlSurface for TerminalSurface {
    fn has_control(&self, id: &str) -> bool {
        REQUIRED_CONTROLS.contains(&id)
    }

    fn read_value(&self, id: &str) -> Option<String> {
        (id == ids::COLOR_INPUT).then(|| {
            self.color
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        })
    }
}
