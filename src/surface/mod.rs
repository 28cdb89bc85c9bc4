use egui::{Color32, Pos2, Vec2};

use crate::tool::SizeClass;

mod display_list;
mod fonts;
mod raster;

pub use display_list::{DisplayList, DrawOp};
pub use fonts::FontSet;
pub use raster::RasterSurface;

/// The minimal set of 2D primitives drawables render with.
///
/// Coordinates are logical surface coordinates; an implementation that renders
/// at a different resolution applies its own scale.
pub trait Surface {
    /// Logical size of the drawing area
    fn size(&self) -> Vec2;

    /// Clear the region from the origin to `(width, height)` to transparent.
    fn clear_region(&mut self, width: f32, height: f32);

    /// Connect `points` with straight segments, starting at the first point.
    /// A single point is drawn as a dot of diameter `thickness`.
    fn stroke_path(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    /// Draw `glyph` centered on `at`.
    fn draw_text(&mut self, glyph: &str, at: Pos2, size: SizeClass);

    /// Clear the whole surface.
    fn clear(&mut self) {
        let size = self.size();
        self.clear_region(size.x, size.y);
    }
}
