//! Game settings
//!
//! Tick rate, palette, fonts and logging level. The browser build reads an
//! optional inline JSON block; the native build reads an optional file.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Colors used by the renderer (any CSS color string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Canvas background and page border
    pub background: String,
    /// Paddles, buttons and score text
    pub foreground: String,
    pub ball: String,
    /// Game-over banner text
    pub banner: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#524F52".to_string(),
            foreground: "rgb(130,205,185)".to_string(),
            ball: "rgb(243,114,89)".to_string(),
            banner: "rgb(255,255,255)".to_string(),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between simulation ticks in milliseconds
    pub tick_interval_ms: u32,
    /// "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
    pub palette: Palette,
    /// Font for the score and button labels
    pub label_font: String,
    /// Font for the game-over banner
    pub banner_font: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            log_level: "info".to_string(),
            palette: Palette::default(),
            label_font: "20px italic Monospace".to_string(),
            banner_font: "25px italic Monospace".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        // A zero delay would spin the page
        if settings.tick_interval_ms == 0 {
            settings.tick_interval_ms = TICK_INTERVAL_MS;
        }
        Ok(settings)
    }

    /// Configured log level, falling back to Info for unknown names
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Id of the inline `<script type="application/json">` element
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "pong-settings";

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed #{}: {}", Self::ELEMENT_ID, e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from an optional JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
