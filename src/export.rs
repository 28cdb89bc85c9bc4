use std::fs;
use std::path::{Path, PathBuf};

use egui::{Color32, Vec2};

use crate::error::ExportError;
use crate::history::History;
use crate::render::RenderPipeline;
use crate::surface::RasterSurface;
use crate::tool::ToolState;

/// An encoded image of the sketch
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// Suggested file name
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    /// PNG bytes
    pub png: Vec<u8>,
}

/// Renders committed history at a fixed upscale factor.
#[derive(Debug, Clone)]
pub struct Exporter {
    scale: f32,
    file_name: String,
}

impl Exporter {
    pub fn new(scale: f32, file_name: impl Into<String>) -> Self {
        Self {
            scale,
            file_name: file_name.into(),
        }
    }

    /// Render `history` onto a white offscreen surface `scale` times the size
    /// of a `canvas_size` canvas and encode it as PNG.
    ///
    /// No cursor preview is drawn, and neither the history nor any tool
    /// state is touched.
    pub fn export(
        &self,
        history: &History,
        canvas_size: Vec2,
    ) -> Result<ExportArtifact, ExportError> {
        let mut surface = RasterSurface::new(canvas_size, self.scale)?;
        surface.fill(Color32::WHITE);
        // Drawables other than the cursor preview never read the tool state.
        RenderPipeline::render_committed(&mut surface, history, &ToolState::new());

        let png = surface.encode_png()?;
        log::info!(
            "Exported {} drawables at {}x{} ({} bytes)",
            history.len(),
            surface.width(),
            surface.height(),
            png.len()
        );
        Ok(ExportArtifact {
            file_name: self.file_name.clone(),
            width: surface.width(),
            height: surface.height(),
            png,
        })
    }
}

/// Receives finished exports.
pub trait ExportSink {
    /// Deliver `artifact`, returning where it ended up.
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf, ExportError>;
}

/// Writes exports into a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl ExportSink for FileSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf, ExportError> {
        let path = self.dir.join(&artifact.file_name);
        fs::write(&path, &artifact.png).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Saved export to {}", path.display());
        Ok(path)
    }
}
