use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use super::Surface;
use crate::tool::SizeClass;

/// A recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear { width: f32, height: f32 },
    Path { points: Vec<Pos2>, thickness: f32, color: Color32 },
    Text { glyph: String, at: Pos2, size: SizeClass },
}

/// Retained on-screen surface.
///
/// Redraws record into the list and every egui frame replays it onto a
/// [`Painter`], so the canvas only changes when the sketch state does.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    size: Vec2,
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Replay the list onto `painter` with the surface origin at `rect.min`.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        let offset = rect.min.to_vec2();
        let canvas = Rect::from_min_size(rect.min, self.size);
        painter.rect_filled(canvas, 0.0, Color32::WHITE);

        let painter = painter.with_clip_rect(canvas);
        for op in &self.ops {
            match op {
                DrawOp::Clear { width, height } => {
                    let region = Rect::from_min_size(rect.min, Vec2::new(*width, *height));
                    painter.rect_filled(region, 0.0, Color32::WHITE);
                }
                DrawOp::Path {
                    points,
                    thickness,
                    color,
                } => {
                    if let [point] = points.as_slice() {
                        painter.circle_filled(*point + offset, thickness / 2.0, *color);
                        continue;
                    }
                    let points = points.iter().map(|p| *p + offset).collect();
                    painter.add(Shape::line(points, EguiStroke::new(*thickness, *color)));
                }
                DrawOp::Text { glyph, at, size } => {
                    painter.text(
                        *at + offset,
                        Align2::CENTER_CENTER,
                        glyph,
                        FontId::proportional(size.pixels()),
                        Color32::BLACK,
                    );
                }
            }
        }
    }
}

impl Surface for DisplayList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear_region(&mut self, width: f32, height: f32) {
        // Nothing recorded so far can show through a full clear.
        if width >= self.size.x && height >= self.size.y {
            self.ops.clear();
            return;
        }
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn stroke_path(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        if points.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Path {
            points: points.to_vec(),
            thickness,
            color,
        });
    }

    fn draw_text(&mut self, glyph: &str, at: Pos2, size: SizeClass) {
        self.ops.push(DrawOp::Text {
            glyph: glyph.to_owned(),
            at,
            size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_clear_discards_ops() {
        let mut list = DisplayList::new(Vec2::new(100.0, 100.0));
        list.stroke_path(&[Pos2::new(1.0, 1.0), Pos2::new(5.0, 5.0)], 1.0, Color32::BLACK);
        list.draw_text("*", Pos2::new(3.0, 3.0), SizeClass::Small);
        assert_eq!(list.ops().len(), 2);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_partial_clear_is_recorded() {
        let mut list = DisplayList::new(Vec2::new(100.0, 100.0));
        list.stroke_path(&[Pos2::new(1.0, 1.0)], 2.0, Color32::BLACK);
        list.clear_region(10.0, 10.0);
        assert_eq!(
            list.ops().last(),
            Some(&DrawOp::Clear {
                width: 10.0,
                height: 10.0
            })
        );
    }

    #[test]
    fn test_empty_path_is_ignored() {
        let mut list = DisplayList::new(Vec2::new(10.0, 10.0));
        list.stroke_path(&[], 1.0, Color32::BLACK);
        assert!(list.is_empty());
    }

    // Smoke test: replaying every op kind onto a real painter must not panic.
    #[test]
    fn test_paint_onto_painter_smoke() {
        let mut list = DisplayList::new(Vec2::new(100.0, 100.0));
        list.stroke_path(&[Pos2::new(1.0, 1.0), Pos2::new(50.0, 50.0)], 4.0, Color32::BLACK);
        list.stroke_path(&[Pos2::new(20.0, 20.0)], 4.0, Color32::BLACK);

        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        list.paint(&painter, rect);
    }
}
