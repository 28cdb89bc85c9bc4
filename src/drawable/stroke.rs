use egui::{Color32, Pos2};

use crate::surface::Surface;

/// Freehand marker line.
///
/// Points are kept in the order they were drawn and only ever appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
}

impl Stroke {
    /// Start a stroke at `start`
    pub fn new(start: Pos2, thickness: f32) -> Self {
        debug_assert!(thickness > 0.0, "stroke thickness must be positive");
        Self {
            points: vec![start],
            thickness,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.stroke_path(&self.points, self.thickness, Color32::BLACK);
    }
}
