//! Theme configuration
//!
//! Colors, font and window size are read from a JSON file at startup:
//!
//! ```json
//! {
//!     "background_color": [255, 0, 0],
//!     "button_color": [0, 255, 255],
//!     "label_color": [0, 255, 255],
//!     "text_color": [255, 255, 255],
//!     "font_name": "Times New Roman",
//!     "font_size": null,
//!     "window_width": 800,
//!     "window_height": 800
//! }
//! ```
//!
//! Every field is optional; missing ones take the defaults below.

use crate::gui::MenuStyle;
use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_color: [u8; 3],
    pub button_color: [u8; 3],
    pub label_color: [u8; 3],
    pub text_color: [u8; 3],
    pub font_name: String,
    /// Pins every label to this size instead of scaling with the window
    pub font_size: Option<f32>,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background_color: [255, 0, 0],
            button_color: [0, 255, 255],
            label_color: [0, 255, 255],
            text_color: [255, 255, 255],
            font_name: "Times New Roman".to_string(),
            font_size: None,
            window_width: 800,
            window_height: 800,
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::RGB(r, g, b)
}

impl ThemeConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// `<config dir>/menugrid/theme.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("menugrid").join("theme.json"))
    }

    /// Loads the theme from the default path, falling back to defaults when
    /// the file is missing or malformed
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("no config directory, using default theme");
            return ThemeConfig::default();
        };

        if !path.exists() {
            tracing::info!(path = %path.display(), "no theme file, using default theme");
            return ThemeConfig::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "theme loaded");
                config
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "invalid theme file, using default theme"
                );
                ThemeConfig::default()
            }
        }
    }

    /// Menu style with this theme's background color
    pub fn menu_style(&self) -> MenuStyle {
        self.menu_style_with_background(self.background())
    }

    /// Menu style with an explicit background color
    pub fn menu_style_with_background(&self, background_color: Color) -> MenuStyle {
        MenuStyle {
            background_color,
            font_name: self.font_name.clone(),
            font_size: self.font_size,
            text_color: rgb(self.text_color),
        }
    }

    pub fn background(&self) -> Color {
        rgb(self.background_color)
    }

    pub fn button(&self) -> Color {
        rgb(self.button_color)
    }

    pub fn label(&self) -> Color {
        rgb(self.label_color)
    }
}
