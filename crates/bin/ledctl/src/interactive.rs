//! Line-oriented interactive session.

use std::str::FromStr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use ledstrip_domain::preset::{InvalidPresetSlot, Preset};
use ledstrip_panel::{Button, ControlPanel, RequestTask, Transport};

use crate::surface::TerminalSurface;

const HELP: &str = "commands: on | off | set <color> | send | preset <1-4> | help | quit";

/// One line typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(Button),
    /// Type into the color input without sending.
    Set(String),
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("{0} expects an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Preset(#[from] InvalidPresetSlot),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        // `set` keeps everything after the first separator untouched
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match word {
            "" => Err(CommandError::Empty),
            "on" => Ok(Self::Click(Button::On)),
            "off" => Ok(Self::Click(Button::Off)),
            "send" => Ok(Self::Click(Button::Send)),
            "set" => Ok(Self::Set(rest.to_string())),
            "preset" if rest.trim().is_empty() => Err(CommandError::MissingArgument("preset")),
            "preset" => Ok(Self::Click(Button::Preset(rest.trim().parse()?))),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Read commands from stdin until `quit` or end of input, then wait for the
/// requests still in flight.
pub async fn run<T>(
    panel: &ControlPanel<TerminalSurface, T>,
    surface: &Arc<TerminalSurface>,
) -> anyhow::Result<()>
where
    T: Transport + 'static,
{
    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight: Vec<RequestTask> = Vec::new();

    while let Some(line) = lines.next_line().await? {
        match line.parse::<Command>() {
            Ok(Command::Click(button)) => in_flight.push(panel.click(button)),
            Ok(Command::Set(value)) => surface.type_color(&value),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(CommandError::Empty) => {}
            Err(err) => tracing::warn!(error = %err, "ignoring command"),
        }
        in_flight.retain(|task| !task.is_finished());
    }

    for task in in_flight {
        // request failures are logged by the panel
        if let Err(err) = task.await {
            tracing::error!(error = %err, "request task panicked");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_power_commands() {
        assert_eq!("on".parse(), Ok(Command::Click(Button::On)));
        assert_eq!("  off ".parse(), Ok(Command::Click(Button::Off)));
        assert_eq!("send".parse(), Ok(Command::Click(Button::Send)));
    }

    #[test]
    fn should_keep_set_value_verbatim() {
        assert_eq!(
            "set not a color ".parse(),
            Ok(Command::Set("not a color ".to_string()))
        );
        assert_eq!(
            "set  #abcdef".parse(),
            Ok(Command::Set(" #abcdef".to_string()))
        );
        assert_eq!("set".parse(), Ok(Command::Set(String::new())));
    }

    #[test]
    fn should_ignore_trailing_whitespace_after_keywords() {
        assert_eq!("off  ".parse(), Ok(Command::Click(Button::Off)));
        assert_eq!(
            "preset 2 ".parse(),
            Ok(Command::Click(Button::Preset(Preset::Two)))
        );
    }

    #[test]
    fn should_parse_preset_slot() {
        assert_eq!(
            "preset 3".parse(),
            Ok(Command::Click(Button::Preset(Preset::Three)))
        );
        assert_eq!(
            "preset preset-1".parse(),
            Ok(Command::Click(Button::Preset(Preset::One)))
        );
    }

    #[test]
    fn should_reject_bad_preset() {
        assert!(matches!(
            "preset 9".parse::<Command>(),
            Err(CommandError::Preset(_))
        ));
        assert_eq!(
            "preset".parse::<Command>(),
            Err(CommandError::MissingArgument("preset"))
        );
    }

    #[test]
    fn should_reject_unknown_command() {
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
    }

    #[test]
    fn should_parse_quit_aliases() {
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }
}
