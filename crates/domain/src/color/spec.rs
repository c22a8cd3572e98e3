//! Color given as a hex string, a palette name or `random`.

use serde::{Deserialize, Serialize};

use super::{Rgb, palette};
use crate::error::ColorError;

const RANDOM: &str = "random";

/// A color written the way a person would type it: `#ffdc52`, `ffdc52`,
/// `warm_light` or `random`. Serializes back as hex (or `random`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorSpec {
    Fixed(Rgb),
    /// A fresh random color every time the spec is resolved.
    Random,
}

impl ColorSpec {
    /// The concrete color, drawing from `rng` for [`ColorSpec::Random`].
    pub fn resolve<R: rand::Rng + ?Sized>(self, rng: &mut R) -> Rgb {
        match self {
            Self::Fixed(color) => color,
            Self::Random => Rgb::random(rng),
        }
    }

    /// Like [`resolve`](Self::resolve) with the thread-local generator.
    #[must_use]
    pub fn rgb(self) -> Rgb {
        self.resolve(&mut rand::rng())
    }
}

impl From<Rgb> for ColorSpec {
    fn from(color: Rgb) -> Self {
        Self::Fixed(color)
    }
}

impl TryFrom<String> for ColorSpec {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case(RANDOM) {
            return Ok(Self::Random);
        }
        if let Ok(color) = Rgb::from_hex(&value) {
            return Ok(Self::Fixed(color));
        }
        palette::by_name(&value)
            .map(Self::Fixed)
            .ok_or(ColorError::UnknownName(value))
    }
}

impl From<ColorSpec> for String {
    fn from(spec: ColorSpec) -> Self {
        match spec {
            ColorSpec::Fixed(color) => color.to_hex(),
            ColorSpec::Random => RANDOM.to_string(),
        }
    }
}
