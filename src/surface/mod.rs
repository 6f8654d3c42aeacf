use egui::Pos2;

mod painter;
mod raster;

pub use painter::PainterSurface;
pub use raster::{MAX_SURFACE_DIMENSION, RasterSurface};

/// A drawing target that commands replay onto.
///
/// Coordinates are canvas coordinates; a surface maps them onto its own
/// pixels (screen offset, export upscale). Ink is always the surface's
/// single foreground color.
pub trait Surface {
    /// Wipe everything drawn so far
    fn clear(&mut self);

    /// Line width used by subsequent strokes, in canvas units
    fn set_line_width(&mut self, width: f32);

    /// Stroke one connected path through `points`, never joined to a previous path
    fn stroke_polyline(&mut self, points: &[Pos2]);

    /// Stroke an open circle outline
    fn stroke_circle(&mut self, center: Pos2, radius: f32);

    /// Draw `text` centered on `anchor` at the given glyph size
    fn fill_text(&mut self, text: &str, anchor: Pos2, size: f32);
}
