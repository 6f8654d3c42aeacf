//! PNG export: replay the drawing onto an upscaled offscreen surface.

use std::io::Cursor;

use image::ImageFormat;

use crate::command::DrawCommand;
use crate::config::PadConfig;
use crate::error::ExportError;
use crate::renderer::Renderer;
use crate::surface::RasterSurface;

/// Replay `commands` onto a fresh `canvas * scale` surface
pub fn render<'a>(
    commands: impl IntoIterator<Item = &'a DrawCommand>,
    canvas_width: u32,
    canvas_height: u32,
    scale: u32,
) -> Result<RasterSurface, ExportError> {
    let mut surface = RasterSurface::with_scale(canvas_width, canvas_height, scale)?;
    Renderer::new().replay(&mut surface, commands);
    Ok(surface)
}

/// Encode a surface as a PNG byte stream
pub fn encode_png(surface: &RasterSurface) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    surface
        .to_rgba_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Render and encode the drawing at the configured export scale
pub fn export_png<'a>(
    commands: impl IntoIterator<Item = &'a DrawCommand>,
    config: &PadConfig,
) -> Result<Vec<u8>, ExportError> {
    let surface = render(
        commands,
        config.canvas_width,
        config.canvas_height,
        config.export_scale,
    )?;
    log::debug!("Encoding {}x{} export", surface.width(), surface.height());
    encode_png(&surface)
}

/// Write the PNG into the configured export directory.
/// Returns where it went.
#[cfg(not(target_arch = "wasm32"))]
pub fn deliver(bytes: &[u8], config: &PadConfig) -> Result<String, ExportError> {
    std::fs::create_dir_all(&config.export_dir)?;
    let path = config.export_dir.join(config.export_file_name());
    std::fs::write(&path, bytes)?;
    Ok(path.display().to_string())
}

/// Hand the PNG to the browser as a file download.
/// Returns the downloaded file's name.
#[cfg(target_arch = "wasm32")]
pub fn deliver(bytes: &[u8], config: &PadConfig) -> Result<String, ExportError> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    fn js_err(err: JsValue) -> ExportError {
        ExportError::Download(format!("{err:?}"))
    }

    let file_name = config.export_file_name();
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(&file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    Ok(file_name)
}
