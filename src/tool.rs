use egui::Pos2;
use serde::{Deserialize, Serialize};

/// Discrete text sizes understood by every [`Surface`](crate::surface::Surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Font size in logical pixels
    pub fn pixels(self) -> f32 {
        match self {
            SizeClass::Small => 12.0,
            SizeClass::Medium => 24.0,
            SizeClass::Large => 36.0,
        }
    }
}

/// The marker thicknesses offered by the tool panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Thickness {
    #[default]
    Thin,
    Medium,
    Thick,
}

impl Thickness {
    pub const ALL: [Thickness; 3] = [Thickness::Thin, Thickness::Medium, Thickness::Thick];

    /// Line width in logical pixels
    pub fn width(self) -> f32 {
        match self {
            Thickness::Thin => 1.0,
            Thickness::Medium => 4.0,
            Thickness::Thick => 8.0,
        }
    }

    /// Size bucket for the cursor preview glyph
    pub fn size_class(self) -> SizeClass {
        match self {
            Thickness::Thin => SizeClass::Small,
            Thickness::Medium => SizeClass::Medium,
            Thickness::Thick => SizeClass::Large,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Thickness::Thin => "Thin",
            Thickness::Medium => "Medium",
            Thickness::Thick => "Thick",
        }
    }
}

/// What a pointer-down produces.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolMode {
    /// Freehand marker at the given thickness
    Draw(Thickness),
    /// One-shot placement of the given text
    Sticker(String),
}

/// The single active tool configuration plus the live cursor position.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    mode: ToolMode,
    // Kept while a sticker is selected so switching back restores it.
    last_thickness: Thickness,
    cursor: Option<Pos2>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self {
            mode: ToolMode::Draw(Thickness::default()),
            last_thickness: Thickness::default(),
            cursor: None,
        }
    }

    pub fn mode(&self) -> &ToolMode {
        &self.mode
    }

    pub fn select_thickness(&mut self, thickness: Thickness) {
        log::info!("Selected {} marker", thickness.label());
        self.last_thickness = thickness;
        self.mode = ToolMode::Draw(thickness);
    }

    /// Callers guarantee `text` is non-empty; the app's sticker dialog rejects empty input.
    pub fn select_sticker(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug_assert!(!text.is_empty(), "sticker text must be non-empty");
        log::info!("Selected sticker {:?}", text);
        self.mode = ToolMode::Sticker(text);
    }

    pub fn update_cursor(&mut self, cursor: Option<Pos2>) {
        self.cursor = cursor;
    }

    pub fn cursor(&self) -> Option<Pos2> {
        self.cursor
    }

    /// Thickness of the marker, also while it is inactive.
    pub fn thickness(&self) -> Thickness {
        self.last_thickness
    }

    pub fn sticker(&self) -> Option<&str> {
        match &self.mode {
            ToolMode::Sticker(text) => Some(text),
            ToolMode::Draw(_) => None,
        }
    }

    pub fn is_sticker_mode(&self) -> bool {
        matches!(self.mode, ToolMode::Sticker(_))
    }

    /// Glyph and size drawn under the pointer for the current tool
    pub fn preview_glyph(&self) -> (&str, SizeClass) {
        match &self.mode {
            ToolMode::Sticker(text) => (text.as_str(), SizeClass::Large),
            ToolMode::Draw(thickness) => ("*", thickness.size_class()),
        }
    }
}
