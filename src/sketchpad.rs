use std::path::PathBuf;

use egui::Vec2;

use crate::error::ExportError;
use crate::export::{ExportArtifact, ExportSink, Exporter};
use crate::history::History;
use crate::input::{InputController, InputEvent};
use crate::render::RenderPipeline;
use crate::surface::{DisplayList, Surface};
use crate::tool::{Thickness, ToolState};

/// The whole sketch: history, active tool, pointer state and the on-screen
/// canvas they are rendered to.
///
/// Every mutating method repaints the canvas before returning.
#[derive(Debug, Clone)]
pub struct Sketchpad {
    history: History,
    tool: ToolState,
    controller: InputController,
    canvas: DisplayList,
    exporter: Exporter,
}

impl Sketchpad {
    pub fn new(canvas_size: Vec2, exporter: Exporter) -> Self {
        Self {
            history: History::new(),
            tool: ToolState::new(),
            controller: InputController::new(),
            canvas: DisplayList::new(canvas_size),
            exporter,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    /// The most recent rendering of the sketch
    pub fn canvas(&self) -> &DisplayList {
        &self.canvas
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas.size()
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.controller
            .handle_event(event, &mut self.history, &mut self.tool);
        self.redraw();
    }

    pub fn choose_thickness(&mut self, thickness: Thickness) {
        self.tool.select_thickness(thickness);
        self.redraw();
    }

    /// Select a sticker. Empty text is ignored.
    pub fn choose_sticker(&mut self, text: &str) {
        if text.is_empty() {
            log::warn!("Ignoring empty sticker selection");
            return;
        }
        self.tool.select_sticker(text);
        self.redraw();
    }

    pub fn undo(&mut self) -> bool {
        self.controller.release();
        let changed = self.history.undo();
        self.redraw();
        changed
    }

    pub fn redo(&mut self) -> bool {
        self.controller.release();
        let changed = self.history.redo();
        self.redraw();
        changed
    }

    pub fn clear(&mut self) {
        self.controller.release();
        self.history.clear();
        self.redraw();
    }

    /// Render the committed drawables at export scale.
    pub fn export(&self) -> Result<ExportArtifact, ExportError> {
        self.exporter.export(&self.history, self.canvas_size())
    }

    /// Export and hand the image to `sink`.
    pub fn export_to(&self, sink: &mut dyn ExportSink) -> Result<PathBuf, ExportError> {
        let artifact = self.export()?;
        sink.deliver(&artifact)
    }

    /// Repaint the canvas from scratch.
    pub fn redraw(&mut self) {
        RenderPipeline::redraw(
            &mut self.canvas,
            &self.history,
            &self.tool,
            self.controller.is_drawing(),
        );
    }
}
