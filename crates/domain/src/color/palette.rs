//! Named colors.

use super::Rgb;

pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const OFF: Rgb = Rgb::new(0, 0, 0);
pub const WARM_LIGHT: Rgb = Rgb::new(255, 220, 82);
pub const PINK: Rgb = Rgb::new(255, 96, 208);
pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const CYAN: Rgb = Rgb::new(0, 255, 255);

/// Every named color, in declaration order.
pub const ALL: [(&str, Rgb); 11] = [
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("white", WHITE),
    ("off", OFF),
    ("warm_light", WARM_LIGHT),
    ("pink", PINK),
    ("purple", PURPLE),
    ("orange", ORANGE),
    ("yellow", YELLOW),
    ("cyan", CYAN),
];

/// Look up a palette color by name, ignoring case and `-`/`_`/space.
#[must_use]
pub fn by_name(name: &str) -> Option<Rgb> {
    let wanted: String = name
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    ALL.iter()
        .find(|(known, _)| known.replace('_', "") == wanted)
        .map(|(_, color)| *color)
}
