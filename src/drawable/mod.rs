use crate::surface::Surface;
use crate::tool::ToolState;

mod cursor;
mod sticker;
mod stroke;

pub use cursor::CursorPreview;
pub use sticker::Sticker;
pub use stroke::Stroke;

/// Everything that can be painted onto the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
    CursorPreview(CursorPreview),
}

impl Drawable {
    /// Render onto `surface`. Only the cursor preview reads `tool`.
    pub fn render(&self, surface: &mut dyn Surface, tool: &ToolState) {
        match self {
            Drawable::Stroke(stroke) => stroke.draw(surface),
            Drawable::Sticker(sticker) => sticker.draw(surface),
            Drawable::CursorPreview(cursor) => cursor.draw(surface, tool),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "stroke",
            Drawable::Sticker(_) => "sticker",
            Drawable::CursorPreview(_) => "cursor",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Drawable::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Drawable::Sticker(sticker)
    }
}
