#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod drawable;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod render;
pub mod sketchpad;
pub mod surface;
pub mod tool;

pub use app::SketchpadApp;
pub use config::SketchpadConfig;
pub use drawable::{CursorPreview, Drawable, Sticker, Stroke};
pub use error::{ConfigError, ExportError};
pub use export::{ExportArtifact, ExportSink, Exporter, FileSink};
pub use history::History;
pub use input::{ControllerState, InputController, InputEvent, InputHandler, PointerSnapshot};
pub use render::RenderPipeline;
pub use sketchpad::Sketchpad;
pub use surface::{DisplayList, DrawOp, FontSet, RasterSurface, Surface};
pub use tool::{SizeClass, Thickness, ToolMode, ToolState};
