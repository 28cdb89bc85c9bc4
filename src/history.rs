use crate::drawable::{Drawable, Stroke};

/// The committed drawables plus the ones undone since the last push.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Drawables on the canvas, in creation order
    committed: Vec<Drawable>,
    /// Drawables that can be redone, most recently undone last
    undone: Vec<Drawable>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            undone: Vec::new(),
        }
    }

    /// Commit a stroke or sticker and drop everything that could be redone.
    ///
    /// Returns the drawable's index in [`History::all`]. Cursor previews are
    /// never committed and yield `None`.
    pub fn push(&mut self, drawable: Drawable) -> Option<usize> {
        if let Drawable::CursorPreview(_) = drawable {
            log::warn!("Ignoring attempt to commit a cursor preview");
            return None;
        }
        log::debug!(
            "Committing {} ({} undone discarded)",
            drawable.kind(),
            self.undone.len()
        );
        self.committed.push(drawable);
        self.undone.clear();
        Some(self.committed.len() - 1)
    }

    /// Move the last committed drawable to the redo stack.
    /// Returns true if anything changed.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                log::debug!("Undo {}", drawable.kind());
                self.undone.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone drawable back onto the canvas.
    /// Returns true if anything changed.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(drawable) => {
                log::debug!("Redo {}", drawable.kind());
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Empty both stacks. A clear cannot be undone.
    pub fn clear(&mut self) {
        log::debug!(
            "Clearing history ({} committed, {} undone)",
            self.committed.len(),
            self.undone.len()
        );
        self.committed.clear();
        self.undone.clear();
    }

    /// Committed drawables in draw order
    pub fn all(&self) -> &[Drawable] {
        &self.committed
    }

    /// Undone drawables, most recently undone last
    pub fn undone(&self) -> &[Drawable] {
        &self.undone
    }

    /// Mutable access to a committed stroke, used while it is still being drawn.
    pub fn stroke_mut(&mut self, index: usize) -> Option<&mut Stroke> {
        match self.committed.get_mut(index) {
            Some(Drawable::Stroke(stroke)) => Some(stroke),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn undone_len(&self) -> usize {
        self.undone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::{CursorPreview, Sticker};
    use egui::Pos2;

    fn sticker(text: &str) -> Drawable {
        Sticker::new(Pos2::new(1.0, 1.0), text).into()
    }

    #[test]
    fn test_empty_undo_redo_are_noops() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_returns_index() {
        let mut history = History::new();
        assert_eq!(history.push(sticker("a")), Some(0));
        assert_eq!(history.push(sticker("b")), Some(1));
    }

    #[test]
    fn test_cursor_preview_is_never_committed() {
        let mut history = History::new();
        let preview = Drawable::CursorPreview(CursorPreview::new(Pos2::ZERO));
        assert_eq!(history.push(preview), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_stroke_mut_only_yields_strokes() {
        let mut history = History::new();
        history.push(sticker("a"));
        history.push(Stroke::new(Pos2::ZERO, 1.0).into());

        assert!(history.stroke_mut(0).is_none());
        history
            .stroke_mut(1)
            .unwrap()
            .add_point(Pos2::new(3.0, 3.0));
        assert_eq!(history.all()[1].as_stroke().unwrap().points().len(), 2);
        assert!(history.stroke_mut(2).is_none());
    }
}
