#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe_sketchpad::{SketchpadApp, SketchpadConfig};

/// Path of an optional JSON config file
const CONFIG_ENV: &str = "SKETCHPAD_CONFIG";

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = std::env::var_os(CONFIG_ENV).and_then(|path| {
        match SketchpadConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.to_string_lossy());
                Some(config)
            }
            Err(err) => {
                log::warn!("Falling back to default config: {}", err);
                None
            }
        }
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 360.0])
            .with_min_inner_size([440.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sketchpad",
        native_options,
        Box::new(|cc| Ok(Box::new(SketchpadApp::new(cc, config)))),
    )
}
