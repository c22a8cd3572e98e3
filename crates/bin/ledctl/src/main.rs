//! # ledctl — terminal control panel
//!
//! Attaches the control panel to the terminal and fires requests at a
//! running `ledstripd`.
//!
//! ```text
//! ledctl on
//! ledctl color '#abcdef'
//! ledctl preset 3
//! ledctl --url http://pi.local:8000 interactive
//! ```

mod interactive;
mod surface;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledstrip_domain::preset::Preset;
use ledstrip_panel::{Button, ControlPanel, HttpTransport};

use crate::surface::TerminalSurface;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Turn the strip on.
    On,
    /// Turn the strip off.
    Off,
    /// Type a color into the input and send it.
    Color { value: String },
    /// Send one of the preset colors.
    Preset { slot: Preset },
    /// Read commands from stdin.
    Interactive,
}

#[derive(Parser, Debug)]
#[command(name = "ledctl", version, about)]
struct Params {
    /// Base URL of the strip backend.
    #[arg(long, env = "LEDCTL_URL", default_value = "http://127.0.0.1:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ledctl=info,ledstrip_panel=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let params = Params::parse();

    let surface = Arc::new(TerminalSurface::default());
    let transport = Arc::new(HttpTransport::new(&params.url)?);
    let panel = ControlPanel::attach(Arc::clone(&surface), transport)?;
    tracing::debug!(url = %params.url, "panel ready");

    let button = match params.command {
        Commands::On => Button::On,
        Commands::Off => Button::Off,
        Commands::Color { value } => {
            surface.type_color(&value);
            Button::Send
        }
        Commands::Preset { slot } => Button::Preset(slot),
        Commands::Interactive => return interactive::run(&panel, &surface).await,
    };

    panel.click(button).await??;
    Ok(())
}
