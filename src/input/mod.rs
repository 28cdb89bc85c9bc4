use egui::Pos2;

mod controller;
mod handler;

pub use controller::{ControllerState, InputController};
pub use handler::{InputHandler, PointerSnapshot};

/// Pointer events delivered to the sketch, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown(Pos2),
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove(Pos2),
    /// Primary button was released
    PointerUp,
    /// Pointer entered the canvas
    PointerEnter(Pos2),
    /// Pointer left the canvas
    PointerLeave,
}

