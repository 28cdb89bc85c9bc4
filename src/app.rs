use crate::config::SketchpadConfig;
use crate::export::{Exporter, FileSink};
use crate::input::{InputHandler, PointerSnapshot};
use crate::sketchpad::Sketchpad;
use crate::surface::FontSet;
use crate::tool::{Thickness, ToolMode};

/// The sticker palette is persisted through eframe storage as part of the
/// config. Drawings themselves are never persisted.
#[derive(Debug)]
pub struct SketchpadApp {
    config: SketchpadConfig,
    sketchpad: Sketchpad,
    input: InputHandler,
    // Custom sticker dialog
    show_modal: bool,
    custom_sticker: String,
    modal_error: Option<String>,
    status: String,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self::with_config(SketchpadConfig::default())
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    ///
    /// An explicit `config` wins over the one persisted by the previous session.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Option<SketchpadConfig>) -> Self {
        let config = config
            .or_else(|| {
                cc.storage.and_then(|storage| {
                    eframe::get_value::<SketchpadConfig>(storage, eframe::APP_KEY)
                })
            })
            .filter(|config| match config.validate() {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("Ignoring config: {}", err);
                    false
                }
            })
            .unwrap_or_default();
        Self::with_config(config)
    }

    pub fn with_config(config: SketchpadConfig) -> Self {
        let exporter = Exporter::new(config.export_scale, config.export_file_name.clone());
        let mut sketchpad = Sketchpad::new(config.canvas_size(), exporter);
        sketchpad.redraw();
        Self {
            config,
            sketchpad,
            input: InputHandler::new(),
            show_modal: false,
            custom_sticker: String::new(),
            modal_error: None,
            status: String::new(),
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    fn export(&mut self) {
        let mut sink = FileSink::new(&self.config.export_dir);
        self.status = match self.sketchpad.export_to(&mut sink) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("Export failed: {}", err);
                format!("Export failed: {}", err)
            }
        };
    }

    /// Accept the custom sticker typed into the dialog.
    fn submit_custom_sticker(&mut self) {
        let text = self.custom_sticker.trim().to_owned();
        if text.is_empty() {
            self.modal_error = Some("Sticker text cannot be empty".to_owned());
            return;
        }
        match FontSet::bundled().map(|fonts| fonts.missing_glyph(&text)) {
            Ok(None) => {}
            Ok(Some(c)) => {
                self.modal_error = Some(format!("No glyph available for {}", c));
                return;
            }
            Err(err) => {
                log::error!("Failed to load sticker fonts: {}", err);
                self.modal_error = Some(format!("Failed to load fonts: {}", err));
                return;
            }
        }
        if !self.config.stickers.contains(&text) {
            self.config.stickers.push(text.clone());
        }
        self.sketchpad.choose_sticker(&text);
        self.custom_sticker.clear();
        self.modal_error = None;
        self.show_modal = false;
    }

    /// Feed one frame of canvas pointer state to the sketch.
    ///
    /// While the custom sticker dialog is open the canvas sees the pointer as
    /// outside, so clicks on the dialog never draw.
    fn route_pointer(&mut self, snapshot: PointerSnapshot) {
        let snapshot = if self.show_modal {
            snapshot.outside()
        } else {
            snapshot
        };
        for event in self.input.translate(snapshot) {
            self.sketchpad.handle_input(event);
        }
    }

    fn tools_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("tools_panel")
            .resizable(true)
            .default_width(160.0)
            .show(ctx, |ui| {
                ui.heading("Markers");
                let mode = self.sketchpad.tool().mode().clone();
                for thickness in Thickness::ALL {
                    let selected = mode == ToolMode::Draw(thickness);
                    if ui.selectable_label(selected, thickness.label()).clicked() {
                        self.sketchpad.choose_thickness(thickness);
                    }
                }

                ui.separator();
                ui.heading("Stickers");
                let mut chosen = None;
                ui.horizontal_wrapped(|ui| {
                    for sticker in &self.config.stickers {
                        let selected = self.sketchpad.tool().sticker() == Some(sticker.as_str());
                        let label = egui::RichText::new(sticker).size(20.0);
                        if ui.selectable_label(selected, label).clicked() {
                            chosen = Some(sticker.clone());
                        }
                    }
                });
                if let Some(sticker) = chosen {
                    self.sketchpad.choose_sticker(&sticker);
                }
                if ui.button("Custom…").clicked() {
                    self.show_modal = true;
                }

                ui.separator();
                ui.horizontal(|ui| {
                    let history = self.sketchpad.history();
                    let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

                    if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                        self.sketchpad.undo();
                    }
                    if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                        self.sketchpad.redo();
                    }
                });
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.sketchpad.clear();
                    }
                    if ui.button("Export").clicked() {
                        self.export();
                    }
                });

                ui.separator();
                let history = self.sketchpad.history();
                ui.label(format!("Drawn: {}", history.len()));
                ui.label(format!("Undone: {}", history.undone_len()));
                ui.label(format!(
                    "State: {}",
                    self.sketchpad.controller().current_state_name()
                ));
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
    }

    fn central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sketchpad");

            let (response, painter) =
                ui.allocate_painter(self.sketchpad.canvas_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            self.route_pointer(PointerSnapshot::read(ctx, &response));
            if response.hovered() && !self.show_modal {
                // The tool preview stands in for the system cursor.
                ctx.set_cursor_icon(egui::CursorIcon::None);
            }

            self.sketchpad.canvas().paint(&painter, canvas_rect);
        });
    }

    fn custom_sticker_modal(&mut self, ctx: &egui::Context) {
        if !self.show_modal {
            return;
        }
        egui::Window::new("Custom sticker")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                let response = ui.text_edit_singleline(&mut self.custom_sticker);
                if let Some(error) = &self.modal_error {
                    ui.colored_label(egui::Color32::RED, error);
                }
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() || submitted {
                        self.submit_custom_sticker();
                    }
                    if ui.button("Cancel").clicked() {
                        self.custom_sticker.clear();
                        self.modal_error = None;
                        self.show_modal = false;
                    }
                });
            });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (undo, redo) = ctx.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z),
                i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y),
            )
        });
        if undo {
            self.sketchpad.undo();
        }
        if redo {
            self.sketchpad.redo();
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.show_modal {
            self.handle_shortcuts(ctx);
        }
        self.tools_panel(ctx);
        self.central_panel(ctx);
        self.custom_sticker_modal(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_sticker_rejects_blank_text() {
        let mut app = SketchpadApp::default();
        app.show_modal = true;
        app.custom_sticker = "   ".to_owned();

        app.submit_custom_sticker();
        assert!(app.show_modal);
        assert!(app.modal_error.is_some());
        assert!(!app.sketchpad().tool().is_sticker_mode());
    }

    #[test]
    fn test_custom_sticker_is_added_and_selected() {
        let mut app = SketchpadApp::default();
        app.show_modal = true;
        app.custom_sticker = " hi ".to_owned();

        app.submit_custom_sticker();
        assert!(!app.show_modal);
        assert_eq!(app.config.stickers.last().map(String::as_str), Some("hi"));
        assert_eq!(app.sketchpad().tool().sticker(), Some("hi"));
    }

    #[test]
    fn test_custom_sticker_without_glyph_is_rejected() {
        let mut app = SketchpadApp::default();
        app.show_modal = true;
        app.custom_sticker = "🪨".to_owned();

        app.submit_custom_sticker();
        assert!(app.show_modal);
        assert!(app.modal_error.as_deref().is_some_and(|e| e.contains("🪨")));
        assert!(!app.config.stickers.iter().any(|s| s == "🪨"));
        assert!(!app.sketchpad().tool().is_sticker_mode());
    }

    fn press_at(x: f32, y: f32) -> PointerSnapshot {
        PointerSnapshot {
            hover: Some(egui::pos2(x, y)),
            pressed: true,
            released: false,
        }
    }

    #[test]
    fn test_canvas_press_draws_when_dialog_closed() {
        let mut app = SketchpadApp::default();
        app.route_pointer(press_at(40.0, 40.0));
        assert_eq!(app.sketchpad().history().len(), 1);
        assert!(app.sketchpad().controller().is_drawing());
    }

    #[test]
    fn test_clicks_under_open_dialog_do_not_draw() {
        let mut app = SketchpadApp::default();
        app.show_modal = true;

        app.route_pointer(press_at(40.0, 40.0));
        app.route_pointer(PointerSnapshot {
            hover: Some(egui::pos2(60.0, 40.0)),
            ..Default::default()
        });
        app.route_pointer(PointerSnapshot {
            released: true,
            ..Default::default()
        });
        assert!(app.sketchpad().history().is_empty());
        assert!(!app.sketchpad().controller().is_drawing());
    }

    #[test]
    fn test_opening_dialog_mid_stroke_ends_it() {
        let mut app = SketchpadApp::default();
        app.route_pointer(press_at(10.0, 10.0));
        app.show_modal = true;
        app.route_pointer(PointerSnapshot {
            hover: Some(egui::pos2(50.0, 50.0)),
            ..Default::default()
        });

        assert!(!app.sketchpad().controller().is_drawing());
        let stroke = app.sketchpad().history().all()[0].as_stroke().unwrap();
        assert_eq!(stroke.points().len(), 1);
    }
}
