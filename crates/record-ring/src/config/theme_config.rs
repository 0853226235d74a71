use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use record_ring_core::Rgba;
use serde::{Deserialize, Serialize};

/// Control colors as `#RRGGBB` or `#RRGGBBAA` hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Outer ring fill.
    #[serde(default = "default_outer_ring")]
    pub outer_ring: String,
    /// Center disc fill.
    #[serde(default = "default_center_disc")]
    pub center_disc: String,
    /// Progress arc stroke.
    #[serde(default = "default_progress")]
    pub progress: String,
    /// Background behind the layers.
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_outer_ring() -> String {
    "#AAAAAA".to_string()
}

fn default_center_disc() -> String {
    "#FFFFFF".to_string()
}

fn default_progress() -> String {
    "#FF8000".to_string()
}

fn default_background() -> String {
    "#00000000".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            outer_ring: default_outer_ring(),
            center_disc: default_center_disc(),
            progress: default_progress(),
            background: default_background(),
        }
    }
}

/// Parse a `#RRGGBB` / `#RRGGBBAA` hex string into a normalized color.
#[track_caller]
pub(crate) fn parse_color(name: &'static str, value: &str) -> AppResult<Rgba> {
    let digits = value.strip_prefix('#').unwrap_or(value);

    let components = match digits.len() {
        6 | 8 => {
            let mut parsed = [255u8; 4];
            for (i, slot) in parsed.iter_mut().enumerate().take(digits.len() / 2) {
                let pair = digits
                    .get(i * 2..i * 2 + 2)
                    .ok_or_else(|| invalid(name, value))?;
                *slot = u8::from_str_radix(pair, 16).map_err(|_| invalid(name, value))?;
            }
            parsed
        }
        _ => return Err(invalid(name, value)),
    };

    let [r, g, b, a] = components;
    Ok(Rgba::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        f32::from(a) / 255.0,
    ))
}

#[track_caller]
fn invalid(name: &'static str, value: &str) -> AppError {
    AppError::InvalidColor {
        name,
        value: value.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
