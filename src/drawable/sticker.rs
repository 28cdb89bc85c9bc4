use egui::Pos2;

use crate::surface::Surface;
use crate::tool::SizeClass;

/// A glyph or short text placed once at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    position: Pos2,
    text: String,
}

impl Sticker {
    pub fn new(position: Pos2, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_text(&self.text, self.position, SizeClass::Large);
    }
}
