use std::io::Cursor;

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use egui::{Color32, Pos2, Vec2};
use tiny_skia::{
    BlendMode, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PremultipliedColorU8,
    Rect, Stroke, Transform,
};

use super::{FontSet, Surface};
use crate::error::ExportError;
use crate::tool::SizeClass;

/// Offscreen CPU surface rendering at `scale` times its logical size.
pub struct RasterSurface {
    size: Vec2,
    scale: f32,
    pixmap: Pixmap,
    fonts: FontSet,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("size", &self.size)
            .field("scale", &self.scale)
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

impl RasterSurface {
    pub fn new(size: Vec2, scale: f32) -> Result<Self, ExportError> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ExportError::InvalidScale(scale));
        }
        let width = (size.x * scale).round().max(0.0) as u32;
        let height = (size.y * scale).round().max(0.0) as u32;
        let pixmap =
            Pixmap::new(width, height).ok_or(ExportError::SurfaceAllocation { width, height })?;

        let fonts = FontSet::bundled()?;

        Ok(Self {
            size,
            scale,
            pixmap,
            fonts,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Paint the whole surface with `color`.
    pub fn fill(&mut self, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    /// Encode the current pixels as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let (width, height) = (self.width(), self.height());
        let data: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let c = pixel.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        let image = image::RgbaImage::from_raw(width, height, data)
            .ok_or(ExportError::SurfaceAllocation { width, height })?;

        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn paint(color: Color32) -> Paint<'static> {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    /// Composite black at `coverage` over the pixel at `(x, y)`.
    fn blend_coverage(&mut self, x: i32, y: i32, coverage: f32) {
        let (width, height) = (self.width() as i32, self.height() as i32);
        if x < 0 || y < 0 || x >= width || y >= height {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        let index = (y * width + x) as usize;
        let dst = self.pixmap.pixels()[index];
        let keep = 1.0 - coverage;
        let blended = PremultipliedColorU8::from_rgba(
            (dst.red() as f32 * keep).round() as u8,
            (dst.green() as f32 * keep).round() as u8,
            (dst.blue() as f32 * keep).round() as u8,
            (coverage * 255.0 + dst.alpha() as f32 * keep).round().min(255.0) as u8,
        );
        if let Some(color) = blended {
            self.pixmap.pixels_mut()[index] = color;
        }
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear_region(&mut self, width: f32, height: f32) {
        let Some(rect) = Rect::from_xywh(0.0, 0.0, width, height) else {
            return;
        };
        let mut paint = Paint::default();
        paint.blend_mode = BlendMode::Clear;
        self.pixmap.fill_rect(rect, &paint, self.transform(), None);
    }

    fn stroke_path(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        let paint = Self::paint(color);
        let transform = self.transform();

        if let [point] = points {
            if let Some(dot) = PathBuilder::from_circle(point.x, point.y, thickness / 2.0) {
                self.pixmap
                    .fill_path(&dot, &paint, FillRule::Winding, transform, None);
            }
            return;
        }

        let mut builder = PathBuilder::new();
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return;
        };
        builder.move_to(first.x, first.y);
        for point in iter {
            builder.line_to(point.x, point.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let stroke = Stroke {
            width: thickness,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, transform, None);
    }

    fn draw_text(&mut self, glyph: &str, at: Pos2, size: SizeClass) {
        let px = PxScale::from(size.pixels() * self.scale);
        let metrics = self.fonts.primary().as_scaled(px);
        let (ascent, descent) = (metrics.ascent(), metrics.descent());

        // Characters no font covers are skipped rather than drawn as boxes.
        let glyphs: Vec<(FontRef<'static>, ab_glyph::GlyphId)> = glyph
            .chars()
            .filter_map(|c| {
                let font = self.fonts.font_for(c)?.clone();
                let id = font.glyph_id(c);
                Some((font, id))
            })
            .collect();
        let total_width: f32 = glyphs
            .iter()
            .map(|(font, id)| font.as_scaled(px).h_advance(*id))
            .sum();

        let mut x = at.x * self.scale - total_width / 2.0;
        let baseline = at.y * self.scale + (ascent + descent) / 2.0;

        for (font, id) in glyphs {
            let advance = font.as_scaled(px).h_advance(id);
            let positioned = id.with_scale_and_position(px, ab_glyph::point(x, baseline));
            if let Some(outlined) = font.outline_glyph(positioned) {
                let bounds = outlined.px_bounds();
                let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
                let mut coverage = Vec::new();
                outlined.draw(|gx, gy, c| coverage.push((left + gx as i32, top + gy as i32, c)));
                for (px_x, px_y, c) in coverage {
                    self.blend_coverage(px_x, px_y, c);
                }
            }
            x += advance;
        }
    }
}
