//! Editor preferences
//!
//! Persisted separately from the artwork in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::editor::Color;

/// Editor settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid dimension on startup
    pub default_grid_size: usize,
    /// Paint color on startup
    pub default_color: Color,
    /// Rendered cell edge in CSS pixels
    pub cell_px: u32,

    // === Animation ===
    /// Delay between consecutive cells of a sweep
    pub animation_step_ms: u32,
    /// Colors cycled through by a sweep
    pub animation_palette: Vec<Color>,

    /// Write the picked color back so the next session starts with it
    pub remember_color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_grid_size: DEFAULT_GRID_SIZE,
            default_color: Color::from(DEFAULT_COLOR),
            cell_px: CELL_PX,
            animation_step_ms: ANIMATION_STEP_MS,
            animation_palette: ANIMATION_PALETTE.iter().map(|c| Color::from(*c)).collect(),
            remember_color: true,
        }
    }
}

impl Settings {
    /// Copy with every value forced into a usable range
    pub fn sanitized(&self) -> Self {
        let mut settings = self.clone();
        settings.default_grid_size = settings.default_grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        settings.cell_px = settings.cell_px.max(1);
        if !settings.default_color.is_hex_rgb() {
            settings.default_color = Color::from(DEFAULT_COLOR);
        }
        if settings.animation_palette.is_empty() {
            settings.animation_palette = Self::default().animation_palette;
        }
        settings
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pixel_grid_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Settings>(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.sanitized();
                    }
                    Err(e) => log::warn!("Ignoring unreadable settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Settings not saved: storage rejected write");
                } else {
                    log::debug!("Settings saved");
                }
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.default_grid_size, 16);
        assert_eq!(s.animation_step_ms, 50);
        assert_eq!(s.animation_palette.len(), 5);
        assert_eq!(s, s.sanitized());
    }

    #[test]
    fn test_sanitized_clamps() {
        let s = Settings {
            default_grid_size: 500,
            cell_px: 0,
            animation_palette: Vec::new(),
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(s.default_grid_size, MAX_GRID_SIZE);
        assert_eq!(s.cell_px, 1);
        assert_eq!(s.animation_palette.len(), 5);

        let s = Settings {
            default_grid_size: 0,
            ..Settings::default()
        };
        assert_eq!(s.sanitized().default_grid_size, MIN_GRID_SIZE);
    }

    #[test]
    fn test_sanitized_replaces_non_hex_color() {
        for bad in ["red", "#fff", "", "#zzzzzz"] {
            let s = Settings {
                default_color: Color::from(bad),
                ..Settings::default()
            };
            assert_eq!(s.sanitized().default_color.as_str(), DEFAULT_COLOR, "{bad:?}");
        }
        let s = Settings {
            default_color: Color::from("#12ab34"),
            ..Settings::default()
        };
        assert_eq!(s.sanitized().default_color.as_str(), "#12ab34");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r##"{"default_color":"#ff0000"}"##).unwrap();
        assert_eq!(s.default_color.as_str(), "#ff0000");
        assert_eq!(s.default_grid_size, DEFAULT_GRID_SIZE);
        assert!(s.remember_color);
    }
}
