//! Controls the panel binds to.

use std::fmt;

use ledstrip_domain::preset::Preset;

/// Control identifiers.
pub mod ids {
    pub const ON_BUTTON: &str = "on-button";
    pub const OFF_BUTTON: &str = "off-button";
    pub const COLOR_INPUT: &str = "color";
    pub const SEND_BUTTON: &str = "send";
}

/// Every control that must exist before the panel can attach, in the order
/// they are checked.
pub const REQUIRED_CONTROLS: [&str; 8] = [
    ids::ON_BUTTON,
    ids::OFF_BUTTON,
    ids::COLOR_INPUT,
    ids::SEND_BUTTON,
    "preset-1",
    "preset-2",
    "preset-3",
    "preset-4",
];

/// Host of the panel controls.
pub trait ControlSurface: Send + Sync {
    /// Whether a control with this identifier exists.
    fn has_control(&self, id: &str) -> bool;

    /// Current value of a text input, `None` if there is no such input.
    fn read_value(&self, id: &str) -> Option<String>;
}

/// A clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    On,
    Off,
    Send,
    Preset(Preset),
}

impl Button {
    #[must_use]
    pub fn control_id(self) -> &'static str {
        match self {
            Self::On => ids::ON_BUTTON,
            Self::Off => ids::OFF_BUTTON,
            Self::Send => ids::SEND_BUTTON,
            Self::Preset(preset) => preset.control_id(),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_every_button_as_required() {
        let buttons = [Button::On, Button::Off, Button::Send]
            .into_iter()
            .chain(Preset::ALL.into_iter().map(Button::Preset));
        for button in buttons {
            assert!(REQUIRED_CONTROLS.contains(&button.control_id()), "{button}");
        }
        assert!(REQUIRED_CONTROLS.contains(&ids::COLOR_INPUT));
    }

    #[test]
    fn should_display_control_id() {
        assert_eq!(Button::Preset(Preset::Two).to_string(), "preset-2");
        assert_eq!(Button::Off.to_string(), "off-button");
    }
}
