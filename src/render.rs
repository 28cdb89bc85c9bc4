use crate::drawable::{CursorPreview, Drawable};
use crate::history::History;
use crate::surface::Surface;
use crate::tool::ToolState;

/// Repaints a surface from the sketch state.
pub struct RenderPipeline;

impl RenderPipeline {
    /// Clear `surface` and repaint the committed drawables, then the cursor
    /// preview on top unless a stroke is being drawn.
    pub fn redraw(surface: &mut dyn Surface, history: &History, tool: &ToolState, drawing: bool) {
        surface.clear();
        Self::render_committed(surface, history, tool);

        if drawing {
            return;
        }
        if let Some(cursor) = tool.cursor() {
            Drawable::CursorPreview(CursorPreview::new(cursor)).render(surface, tool);
        }
    }

    /// Paint every committed drawable in creation order, later ones on top.
    pub fn render_committed(surface: &mut dyn Surface, history: &History, tool: &ToolState) {
        for drawable in history.all() {
            drawable.render(surface, tool);
        }
    }
}
