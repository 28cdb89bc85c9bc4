use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting the sketch as an image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export scale must be positive, got {0}")]
    InvalidScale(f32),

    #[error("Failed to allocate a {width}x{height} export surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("Failed to load export font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while loading the sketchpad configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to load sticker font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
