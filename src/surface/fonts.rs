use ab_glyph::{Font, FontRef, InvalidFont};

/// The fonts egui bundles, tried in order per character.
///
/// The canvas and the export both render with these, so text is only
/// drawable if every character has a glyph in one of them.
#[derive(Debug, Clone)]
pub struct FontSet {
    fonts: Vec<FontRef<'static>>,
}

impl FontSet {
    pub fn bundled() -> Result<Self, InvalidFont> {
        Ok(Self {
            fonts: vec![
                FontRef::try_from_slice(epaint_default_fonts::UBUNTU_LIGHT)?,
                FontRef::try_from_slice(epaint_default_fonts::NOTO_EMOJI_REGULAR)?,
                FontRef::try_from_slice(epaint_default_fonts::EMOJI_ICON)?,
            ],
        })
    }

    /// First font with a glyph for `c`
    pub fn font_for(&self, c: char) -> Option<&FontRef<'static>> {
        self.fonts.iter().find(|font| font.glyph_id(c).0 != 0)
    }

    /// The font used for layout metrics
    pub fn primary(&self) -> &FontRef<'static> {
        &self.fonts[0]
    }

    /// First character of `text` that no bundled font can draw.
    /// Whitespace and emoji variation selectors are never drawn on their own.
    pub fn missing_glyph(&self, text: &str) -> Option<char> {
        text.chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '\u{fe0e}' | '\u{fe0f}' | '\u{200d}'))
            .find(|c| self.font_for(*c).is_none())
    }
}
