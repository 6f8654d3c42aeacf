use std::sync::OnceLock;

use ab_glyph::{Font, FontArc, GlyphId, OutlinedGlyph, ScaleFont, point};
use egui::{FontDefinitions, FontFamily, Pos2};
use image::{Rgba, RgbaImage};
use tiny_skia::{
    Color, LineCap, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Stroke, Transform,
};

use super::Surface;
use crate::error::ExportError;

/// Largest width or height, in pixels, of an offscreen surface
pub const MAX_SURFACE_DIMENSION: u32 = 8192;

/// Offscreen surface backed by a tiny-skia pixmap.
///
/// Canvas coordinates are multiplied by an integer `scale`, so a 256x256
/// canvas replayed at scale 4 fills a 1024x1024 pixmap with the same
/// picture. Line widths and glyph sizes scale along with coordinates.
pub struct RasterSurface {
    pixmap: Pixmap,
    scale: f32,
    line_width: f32,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("scale", &self.scale)
            .field("line_width", &self.line_width)
            .finish()
    }
}

impl RasterSurface {
    /// Create a surface with one pixel per canvas unit
    pub fn new(width: u32, height: u32) -> Result<Self, ExportError> {
        Self::with_scale(width, height, 1)
    }

    /// Create a `canvas_width * scale` by `canvas_height * scale` surface,
    /// filled with the background color.
    ///
    /// Either side exceeding [`MAX_SURFACE_DIMENSION`] is an error rather
    /// than an attempt at a huge allocation.
    pub fn with_scale(canvas_width: u32, canvas_height: u32, scale: u32) -> Result<Self, ExportError> {
        let too_big = ExportError::Surface {
            width: canvas_width.saturating_mul(scale),
            height: canvas_height.saturating_mul(scale),
        };
        let (Some(width), Some(height)) =
            (canvas_width.checked_mul(scale), canvas_height.checked_mul(scale))
        else {
            return Err(too_big);
        };
        if width > MAX_SURFACE_DIMENSION || height > MAX_SURFACE_DIMENSION {
            return Err(too_big);
        }
        let mut pixmap = Pixmap::new(width, height).ok_or(too_big)?;
        pixmap.fill(Color::WHITE);
        Ok(Self {
            pixmap,
            scale: scale as f32,
            line_width: 1.0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw premultiplied RGBA bytes
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha RGBA of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Copy the pixmap into an `image` buffer with straight alpha
    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let color = pixels[(y * width + x) as usize].demultiply();
            Rgba([color.red(), color.green(), color.blue(), color.alpha()])
        })
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn ink() -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(Color::BLACK);
        paint.anti_alias = true;
        paint
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            width: self.line_width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        }
    }

    /// Composite black ink with the glyph's coverage onto the pixmap
    fn blend_glyph(&mut self, outlined: &OutlinedGlyph) {
        let bounds = outlined.px_bounds();
        let width = self.pixmap.width() as i32;
        let height = self.pixmap.height() as i32;
        let pixels = self.pixmap.pixels_mut();
        outlined.draw(|x, y, coverage| {
            let px = bounds.min.x as i32 + x as i32;
            let py = bounds.min.y as i32 + y as i32;
            if px < 0 || py < 0 || px >= width || py >= height {
                return;
            }
            let pixel = &mut pixels[(py * width + px) as usize];
            *pixel = blend_ink(*pixel, coverage);
        });
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixmap.fill(Color::WHITE);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn stroke_polyline(&mut self, points: &[Pos2]) {
        // A lone point is a zero-length segment, which butt caps leave invisible.
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };
        let stroke = self.stroke();
        self.pixmap
            .stroke_path(&path, &Self::ink(), &stroke, self.transform(), None);
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        let stroke = self.stroke();
        self.pixmap
            .stroke_path(&path, &Self::ink(), &stroke, self.transform(), None);
    }

    fn fill_text(&mut self, text: &str, anchor: Pos2, size: f32) {
        let fonts = glyph_fonts();
        let px = size * self.scale;
        let center = Pos2::new(anchor.x * self.scale, anchor.y * self.scale);

        let glyphs: Vec<(&FontArc, GlyphId)> =
            text.chars().filter_map(|c| fonts.lookup(c)).collect();
        let advance: f32 = glyphs
            .iter()
            .map(|(font, id)| font.as_scaled(px).h_advance(*id))
            .sum();

        let mut caret = center.x - advance / 2.0;
        for (font, id) in glyphs {
            let scaled = font.as_scaled(px);
            let baseline = center.y + (scaled.ascent() + scaled.descent()) / 2.0;
            let glyph = id.with_scale_and_position(px, point(caret, baseline));
            caret += scaled.h_advance(id);
            if let Some(outlined) = font.outline_glyph(glyph) {
                self.blend_glyph(&outlined);
            }
        }
    }
}

/// Source-over of opaque black at `coverage` onto a premultiplied pixel
fn blend_ink(dst: PremultipliedColorU8, coverage: f32) -> PremultipliedColorU8 {
    let coverage = coverage.clamp(0.0, 1.0);
    let keep = 1.0 - coverage;
    let fade = |c: u8| (c as f32 * keep).round() as u8;
    let alpha = (coverage * 255.0 + dst.alpha() as f32 * keep)
        .round()
        .min(255.0) as u8;
    PremultipliedColorU8::from_rgba(fade(dst.red()), fade(dst.green()), fade(dst.blue()), alpha)
        .unwrap_or(dst)
}

/// egui's bundled proportional fonts, in fallback order
struct GlyphFonts {
    fonts: Vec<FontArc>,
}

impl GlyphFonts {
    fn load() -> Self {
        let definitions = FontDefinitions::default();
        let names = definitions
            .families
            .get(&FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();
        let fonts = names
            .iter()
            .filter_map(|name| {
                let data = definitions.font_data.get(name)?;
                match FontArc::try_from_vec(data.font.to_vec()) {
                    Ok(font) => Some(font),
                    Err(err) => {
                        log::warn!("Skipping font {name}: {err}");
                        None
                    }
                }
            })
            .collect();
        Self { fonts }
    }

    /// First font that has a real glyph for `c`
    fn lookup(&self, c: char) -> Option<(&FontArc, GlyphId)> {
        self.fonts.iter().find_map(|font| {
            let id = font.glyph_id(c);
            (id.0 != 0).then_some((font, id))
        })
    }
}

fn glyph_fonts() -> &'static GlyphFonts {
    static FONTS: OnceLock<GlyphFonts> = OnceLock::new();
    FONTS.get_or_init(GlyphFonts::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_dark(surface: &RasterSurface, x: u32, y: u32) -> bool {
        let [r, g, b, _] = surface.pixel(x, y).unwrap();
        r < 128 && g < 128 && b < 128
    }

    #[test]
    fn test_new_surface_is_white() {
        let surface = RasterSurface::new(8, 8).unwrap();
        assert_eq!(surface.pixel(3, 3), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_scaled_dimensions() {
        let surface = RasterSurface::with_scale(256, 128, 4).unwrap();
        assert_eq!((surface.width(), surface.height()), (1024, 512));
    }

    #[test]
    fn test_zero_size_surface_is_an_error() {
        assert!(matches!(
            RasterSurface::new(0, 10),
            Err(ExportError::Surface { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_oversized_surface_is_an_error() {
        assert!(matches!(
            RasterSurface::with_scale(20_000, 20_000, 4),
            Err(ExportError::Surface { width: 80_000, height: 80_000 })
        ));
        assert!(matches!(
            RasterSurface::with_scale(70_000, 256, 70_000),
            Err(ExportError::Surface { width: u32::MAX, .. })
        ));
        assert!(RasterSurface::with_scale(MAX_SURFACE_DIMENSION / 4, 1, 4).is_ok());
    }

    #[test]
    fn test_sticker_inks_around_anchor() {
        let mut surface = RasterSurface::with_scale(256, 256, 4).unwrap();
        surface.fill_text("🍵", Pos2::new(128.0, 128.0), 32.0);

        let dark_near = (448..576)
            .flat_map(|y| (448..576).map(move |x| (x, y)))
            .filter(|&(x, y)| is_dark(&surface, x, y))
            .count();
        assert!(dark_near > 100, "only {dark_near} dark pixels near the anchor");

        let dark_far = (0..256)
            .flat_map(|y| (0..1024).map(move |x| (x, y)))
            .filter(|&(x, y)| is_dark(&surface, x, y))
            .count();
        assert_eq!(dark_far, 0);
    }

    #[test]
    fn test_uncovered_glyph_draws_nothing() {
        let mut surface = RasterSurface::new(64, 64).unwrap();
        // Private-use code points have no glyph in the bundled fonts.
        surface.fill_text("\u{F0000}\u{10FFFD}", Pos2::new(32.0, 32.0), 32.0);
        surface.fill_text("", Pos2::new(32.0, 32.0), 32.0);
        assert!(surface.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_polyline_inks_pixels() {
        let mut surface = RasterSurface::new(20, 20).unwrap();
        surface.set_line_width(4.0);
        surface.stroke_polyline(&[Pos2::new(0.0, 10.0), Pos2::new(20.0, 10.0)]);
        assert!(is_dark(&surface, 10, 10));
        assert!(!is_dark(&surface, 10, 2));
    }

    #[test]
    fn test_scale_maps_coordinates() {
        let mut surface = RasterSurface::with_scale(20, 20, 4).unwrap();
        surface.set_line_width(2.0);
        surface.stroke_polyline(&[Pos2::new(0.0, 5.0), Pos2::new(20.0, 5.0)]);
        assert!(is_dark(&surface, 40, 20));
        assert!(!is_dark(&surface, 40, 5));
    }

    #[test]
    fn test_single_point_draws_nothing() {
        let mut surface = RasterSurface::new(10, 10).unwrap();
        surface.set_line_width(4.0);
        surface.stroke_polyline(&[Pos2::new(5.0, 5.0)]);
        assert!(surface.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_clear_restores_background() {
        let mut surface = RasterSurface::new(20, 20).unwrap();
        surface.set_line_width(4.0);
        surface.stroke_polyline(&[Pos2::new(0.0, 10.0), Pos2::new(20.0, 10.0)]);
        surface.clear();
        assert!(surface.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_blend_ink_full_coverage_is_black() {
        let white = PremultipliedColorU8::from_rgba(255, 255, 255, 255).unwrap();
        let inked = blend_ink(white, 1.0);
        assert_eq!(
            (inked.red(), inked.green(), inked.blue(), inked.alpha()),
            (0, 0, 0, 255)
        );
        assert_eq!(blend_ink(white, 0.0), white);
    }
}
