use egui::Pos2;

use super::InputEvent;
use crate::drawable::{Drawable, Sticker, Stroke};
use crate::history::History;
use crate::tool::{ToolMode, ToolState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    /// A stroke is being extended; holds its index in the history.
    Drawing { stroke: usize },
}

/// Turns pointer events into drawables.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    state: ControllerState,
}

impl InputController {
    pub fn new() -> Self {
        Self {
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, ControllerState::Drawing { .. })
    }

    pub fn current_state_name(&self) -> &'static str {
        match self.state {
            ControllerState::Idle => "Idle",
            ControllerState::Drawing { .. } => "Drawing",
        }
    }

    /// Apply one pointer event to the tool state and history.
    pub fn handle_event(&mut self, event: InputEvent, history: &mut History, tool: &mut ToolState) {
        match event {
            InputEvent::PointerDown(pos) => {
                tool.update_cursor(Some(pos));
                self.on_pointer_down(pos, history, tool);
            }
            InputEvent::PointerMove(pos) => {
                tool.update_cursor(Some(pos));
                self.on_pointer_move(pos, history);
            }
            InputEvent::PointerEnter(pos) => tool.update_cursor(Some(pos)),
            InputEvent::PointerUp => self.release(),
            InputEvent::PointerLeave => {
                tool.update_cursor(None);
                // A drag that leaves the canvas ends the stroke.
                self.release();
            }
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, history: &mut History, tool: &ToolState) {
        match tool.mode() {
            ToolMode::Sticker(text) => {
                history.push(Drawable::Sticker(Sticker::new(pos, text.clone())));
                self.state = ControllerState::Idle;
            }
            ToolMode::Draw(thickness) => {
                let stroke = Stroke::new(pos, thickness.width());
                self.state = match history.push(Drawable::Stroke(stroke)) {
                    Some(index) => {
                        log::debug!("Idle -> Drawing (stroke {})", index);
                        ControllerState::Drawing { stroke: index }
                    }
                    None => ControllerState::Idle,
                };
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, history: &mut History) {
        let ControllerState::Drawing { stroke } = self.state else {
            return;
        };
        match history.stroke_mut(stroke) {
            Some(stroke) => stroke.add_point(pos),
            None => {
                log::warn!("Active stroke {} is no longer in history", stroke);
                self.state = ControllerState::Idle;
            }
        }
    }

    /// Stop extending the active stroke, if any. It stays in history as drawn.
    pub fn release(&mut self) {
        if let ControllerState::Drawing { stroke } = self.state {
            log::debug!("Drawing -> Idle (stroke {})", stroke);
        }
        self.state = ControllerState::Idle;
    }
}
