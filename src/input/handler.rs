use egui::{Context, PointerButton, Pos2, Response};

use super::InputEvent;

/// One frame of primary-button pointer state over the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Pointer position in canvas coordinates, `None` when the canvas is not hovered
    pub hover: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerSnapshot {
    /// Read this frame's pointer state for the canvas widget `response`.
    ///
    /// Uses the widget's own hover test, so a window layered over the canvas
    /// hides the pointer from it.
    pub fn read(ctx: &Context, response: &Response) -> Self {
        let canvas_rect = response.rect;
        let hover = response
            .hover_pos()
            .filter(|pos| canvas_rect.contains(*pos))
            .map(|pos| pos - canvas_rect.min.to_vec2());
        ctx.input(|input| Self {
            hover,
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        })
    }

    /// The same frame with the pointer treated as off the canvas.
    ///
    /// Releases still get through so an active stroke always ends.
    pub fn outside(self) -> Self {
        Self {
            hover: None,
            pressed: false,
            released: self.released,
        }
    }
}

/// Handles converting raw egui input into canvas [`InputEvent`]s
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    /// Last pointer position inside the canvas, in canvas coordinates
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
        }
    }

    /// Turn one frame's pointer snapshot into events.
    pub fn translate(&mut self, snapshot: PointerSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let hover = snapshot.hover;

        match (self.last_pointer_pos, hover) {
            (None, Some(pos)) => {
                events.push(InputEvent::PointerEnter(pos));
                events.push(InputEvent::PointerMove(pos));
            }
            (Some(last), Some(pos)) if last != pos => events.push(InputEvent::PointerMove(pos)),
            (Some(_), None) => events.push(InputEvent::PointerLeave),
            _ => {}
        }
        self.last_pointer_pos = hover;

        if snapshot.pressed {
            if let Some(pos) = hover {
                events.push(InputEvent::PointerDown(pos));
            }
        }
        if snapshot.released {
            events.push(InputEvent::PointerUp);
        }

        events
    }
}
