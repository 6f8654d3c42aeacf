use thiserror::Error;

/// Reasons a custom sticker name is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StickerError {
    /// The name was empty or contained only whitespace
    #[error("sticker name is empty")]
    Blank,
    /// The palette already holds a sticker with this name
    #[error("sticker {0:?} is already on the palette")]
    Duplicate(String),
}

/// Errors that can occur while exporting the drawing
#[derive(Debug, Error)]
pub enum ExportError {
    /// The offscreen surface could not be allocated
    #[error("cannot allocate a {width}x{height} export surface")]
    Surface { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// The browser refused to hand the file to the user
    #[error("failed to start download: {0}")]
    Download(String),
}

/// Errors that can occur while loading the pad configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
