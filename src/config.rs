use std::path::{Path, PathBuf};

use egui::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::surface::FontSet;

/// Settings for the canvas, export and sticker palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old config
pub struct SketchpadConfig {
    /// Logical canvas size in points
    pub canvas_size: [f32; 2],
    /// Upscale factor applied when exporting
    pub export_scale: f32,
    pub export_file_name: String,
    pub export_dir: PathBuf,
    /// Sticker palette shown in the tool panel
    pub stickers: Vec<String>,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256.0, 256.0],
            export_scale: 4.0,
            export_file_name: "sketchpad.png".to_owned(),
            export_dir: PathBuf::from("."),
            stickers: vec!["🍀".to_owned(), "🌵".to_owned(), "🌀".to_owned()],
        }
    }
}

impl SketchpadConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [width, height] = self.canvas_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "canvas size must be positive, got {}x{}",
                width, height
            )));
        }
        if !(self.export_scale > 0.0 && self.export_scale.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "export scale must be positive, got {}",
                self.export_scale
            )));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("export file name is empty".to_owned()));
        }
        if let Some(index) = self.stickers.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("sticker {} is empty", index)));
        }
        let fonts = FontSet::bundled()?;
        for sticker in &self.stickers {
            if let Some(c) = fonts.missing_glyph(sticker) {
                return Err(ConfigError::Invalid(format!(
                    "sticker {:?} uses {:?}, which has no glyph",
                    sticker, c
                )));
            }
        }
        Ok(())
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_size[0], self.canvas_size[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SketchpadConfig::from_json_str(r#"{ "export_scale": 2.0 }"#).unwrap();
        assert_eq!(config.export_scale, 2.0);
        assert_eq!(config.canvas_size, [256.0, 256.0]);
        assert_eq!(config.stickers.len(), 3);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            SketchpadConfig::from_json_str(r#"{ "export_scale": 0.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SketchpadConfig::from_json_str(r#"{ "stickers": ["🌵", " "] }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SketchpadConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_default_palette_is_drawable() {
        assert!(SketchpadConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_sticker_without_glyph() {
        let err = SketchpadConfig::from_json_str(r#"{ "stickers": ["🌵", "🪨"] }"#).unwrap_err();
        match err {
            ConfigError::Invalid(message) => assert!(message.contains("🪨")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SketchpadConfig::load("/nonexistent/sketchpad.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
