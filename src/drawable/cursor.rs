use egui::Pos2;

use crate::surface::Surface;
use crate::tool::ToolState;

/// The tool indicator under the pointer. Never committed to history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPreview {
    position: Pos2,
}

impl CursorPreview {
    pub fn new(position: Pos2) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn draw(&self, surface: &mut dyn Surface, tool: &ToolState) {
        let (glyph, size) = tool.preview_glyph();
        surface.draw_text(glyph, self.position, size);
    }
}
