#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod surface;
pub mod tool;

pub use app::StickerPadApp;
pub use command::{CommandHistory, DrawCommand, PreviewCommand, StickerCommand, StrokeCommand};
pub use config::PadConfig;
pub use error::{ConfigError, ExportError, StickerError};
pub use event::{EventBus, PadEvent};
pub use renderer::Renderer;
pub use session::CanvasSession;
pub use surface::{RasterSurface, Surface};
pub use tool::{Tool, ToolState};
