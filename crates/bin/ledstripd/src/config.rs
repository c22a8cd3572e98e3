//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `ledstrip.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use ledstrip_adapter_spi::SpiConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// LED strip settings.
    pub strip: StripConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Which driver pushes frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    /// In-memory strip, logs frames at `TRACE`.
    #[default]
    Virtual,
    /// WS2812 strip on a spidev bus.
    Spi,
}

impl FromStr for DriverKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "virtual" => Ok(Self::Virtual),
            "spi" => Ok(Self::Spi),
            other => Err(ConfigError::Validation(format!(
                "unknown driver {other:?}, expected \"virtual\" or \"spi\""
            ))),
        }
    }
}

/// LED strip configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Number of LEDs on the strip.
    pub num_leds: usize,
    pub driver: DriverKind,
    /// spidev device, only used by the `spi` driver.
    pub spi_device: PathBuf,
    /// LED data rate in kHz.
    pub frequency_khz: u32,
}

impl StripConfig {
    #[must_use]
    pub fn spi(&self) -> SpiConfig {
        SpiConfig {
            device: self.spi_device.clone(),
            frequency_khz: self.frequency_khz,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `ledstrip.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// override does not parse, or if the result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("ledstrip.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("LEDSTRIP_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("LEDSTRIP_PORT") {
            self.server.port = parse_var("LEDSTRIP_PORT", &val)?;
        }
        if let Some(val) = var("LEDSTRIP_BIND") {
            let Some((host, port)) = val.rsplit_once(':') else {
                return Err(ConfigError::Validation(format!(
                    "LEDSTRIP_BIND must be host:port, got {val:?}"
                )));
            };
            self.server.host = host.to_string();
            self.server.port = parse_var("LEDSTRIP_BIND", port)?;
        }
        if let Some(val) = var("LEDSTRIP_DRIVER") {
            self.strip.driver = val.parse()?;
        }
        if let Some(val) = var("LEDSTRIP_NUM_LEDS") {
            self.strip.num_leds = parse_var("LEDSTRIP_NUM_LEDS", &val)?;
        }
        if let Some(val) = var("LEDSTRIP_SPI_DEVICE") {
            self.strip.spi_device = PathBuf::from(val);
        }
        if let Some(val) = var("LEDSTRIP_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.strip.num_leds == 0 {
            return Err(ConfigError::Validation(
                "num_leds must be non-zero".to_string(),
            ));
        }
        if self.strip.frequency_khz == 0 {
            return Err(ConfigError::Validation(
                "frequency_khz must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{name} has invalid value {value:?}")))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        let spi = SpiConfig::default();
        Self {
            num_leds: 300,
            driver: DriverKind::default(),
            spi_device: spi.device,
            frequency_khz: spi.frequency_khz,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ledstripd=info,ledstrip=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
