// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Software backend: outlines from Skrifa, painted with Tiny-Skia.
//!
//! [`PixmapSurface`] follows canvas 2D semantics closely enough that the
//! same [`draw_glyph`](crate::draw_glyph) sequence produces the same kind of
//! image as a browser canvas: non-zero fills, 1px strokes, and source-over
//! shadows blurred with a standard deviation of half the blur value.
//!
//! [`MemoryTexture`] stands in for a GPU texture. It owns its own unpack
//! flag, which makes it useful for checking flip handling without a GPU.

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use ::tiny_skia::{
    Color as SkiaColor, FillRule, IntSize, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect,
    Stroke, Transform,
};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::FontRef;
use skrifa::{GlyphId, MetadataProvider};

use super::blur::blur_alpha;
use crate::kurbo::Point;
use crate::style::{FontSpec, Shadow};
use crate::surface::{GlyphBackend, GlyphSurface};
use crate::texture::{TextureTarget, UnpackState};
use crate::{Color, Error, ErrorKind};

/// Canvas default `font` size, used until [`GlyphSurface::set_font`] is called.
const DEFAULT_FONT_PX: f32 = 10.0;

/// Canvas default `lineWidth`.
const STROKE_WIDTH: f32 = 1.0;

/// Font bytes plus the index of the face within them.
#[derive(Clone)]
pub struct SoftwareFont {
    data: Arc<[u8]>,
    index: u32,
}

impl SoftwareFont {
    /// Wraps font file bytes, checking that face `index` can be parsed.
    pub fn new(data: impl Into<Arc<[u8]>>, index: u32) -> Result<Self, Error> {
        let data = data.into();
        if let Err(err) = FontRef::from_index(&data, index) {
            return Err(Error::with_detail(
                ErrorKind::InvalidFont,
                format!("face {index}: {err}"),
            ));
        }
        Ok(Self { data, index })
    }

    /// Index of the face within a collection.
    pub fn index(&self) -> u32 {
        self.index
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.index).ok()
    }
}

impl core::fmt::Debug for SoftwareFont {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SoftwareFont")
            .field("data", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Creates [`PixmapSurface`]s.
///
/// Without a font, or for characters the font has no mapping for, surfaces
/// draw the fallback box glyph.
#[derive(Clone, Debug, Default)]
pub struct PixmapBackend {
    font: Option<SoftwareFont>,
}

impl PixmapBackend {
    /// A backend that only draws fallback boxes.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend drawing outlines from `font`.
    pub fn with_font(font: SoftwareFont) -> Self {
        Self { font: Some(font) }
    }

    /// The font, if one was supplied.
    pub fn font(&self) -> Option<&SoftwareFont> {
        self.font.as_ref()
    }
}

impl GlyphBackend for PixmapBackend {
    type Surface = PixmapSurface;

    fn create_surface(&mut self, size: u32) -> Result<PixmapSurface, Error> {
        PixmapSurface::new(size, self.font.clone())
    }
}

/// A square Tiny-Skia pixmap with canvas-like drawing state.
pub struct PixmapSurface {
    pixmap: Pixmap,
    font: Option<SoftwareFont>,
    font_px: f32,
    family: String,
    fill: Color,
    stroke: Color,
    shadow: Option<Shadow>,
}

impl PixmapSurface {
    /// Allocates a transparent `size` × `size` surface.
    pub fn new(size: u32, font: Option<SoftwareFont>) -> Result<Self, Error> {
        let pixmap = new_pixmap(size)?;
        Ok(Self {
            pixmap,
            font,
            font_px: DEFAULT_FONT_PX,
            family: String::from("sans-serif"),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            shadow: None,
        })
    }

    /// The underlying pixmap (premultiplied, top row first).
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Unpremultiplied RGBA8 of the pixel at (`x`, `y`), origin top left.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Unpremultiplied RGBA8 of the whole surface, top row first.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    fn draw(&mut self, glyph: char, origin: Point, mode: DrawMode) -> Result<(), Error> {
        let Some(outline) = self.outline(glyph, origin)? else {
            return Ok(());
        };

        let mut layer = new_pixmap(self.pixmap.width())?;
        let mut paint = Paint::default();
        paint.anti_alias = true;
        match mode {
            DrawMode::Fill => {
                paint.set_color(to_tiny_skia(self.fill));
                layer.fill_path(
                    &outline.path,
                    &paint,
                    outline.fill_rule,
                    Transform::identity(),
                    None,
                );
            }
            DrawMode::Stroke => {
                paint.set_color(to_tiny_skia(self.stroke));
                let stroke = Stroke {
                    width: STROKE_WIDTH,
                    ..Stroke::default()
                };
                layer.stroke_path(&outline.path, &paint, &stroke, Transform::identity(), None);
            }
        }

        if let Some(shadow) = self.shadow.filter(Shadow::is_visible) {
            let cast = cast_shadow(&layer, &shadow)?;
            self.composite(&cast);
        }
        self.composite(&layer);
        Ok(())
    }

    fn composite(&mut self, layer: &Pixmap) {
        self.pixmap.draw_pixmap(
            0,
            0,
            layer.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// The glyph outline positioned at `origin`, or `None` for glyphs with no ink.
    fn outline(&self, glyph: char, origin: Point) -> Result<Option<Outline>, Error> {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "surface coordinates comfortably fit in f32"
        )]
        let (x, y) = (origin.x as f32, origin.y as f32);
        let mapped = self.font.as_ref().and_then(|font| {
            let font_ref = font.font_ref()?;
            let gid = font_ref.charmap().map(glyph)?;
            (gid != GlyphId::NOTDEF).then_some((font_ref, gid))
        });
        let Some((font_ref, gid)) = mapped else {
            log::trace!("no outline for {glyph:?} in {}, drawing fallback box", self.family);
            return Ok(fallback_box(x, y, self.font_px));
        };
        let Some(outline) = font_ref.outline_glyphs().get(gid) else {
            return Ok(None);
        };

        let mut pen = PathPen::new(x, y);
        let settings = DrawSettings::unhinted(Size::new(self.font_px), LocationRef::default());
        outline
            .draw(settings, &mut pen)
            .map_err(|err| Error::with_detail(ErrorKind::Draw, format!("{glyph:?}: {err:?}")))?;
        Ok(pen.builder.finish().map(|path| Outline {
            path,
            fill_rule: FillRule::Winding,
        }))
    }
}

impl GlyphSurface for PixmapSurface {
    fn size(&self) -> u32 {
        self.pixmap.width()
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.pixmap.fill(SkiaColor::TRANSPARENT);
        Ok(())
    }

    fn set_font(&mut self, font: &FontSpec) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "font sizes comfortably fit in f32"
        )]
        let px = font.size_px as f32;
        self.font_px = px;
        self.family = String::from(&*font.family);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_shadow(&mut self, shadow: Option<&Shadow>) {
        self.shadow = shadow.copied();
    }

    fn fill_glyph(&mut self, glyph: char, origin: Point) -> Result<(), Error> {
        self.draw(glyph, origin, DrawMode::Fill)
    }

    fn stroke_glyph(&mut self, glyph: char, origin: Point) -> Result<(), Error> {
        self.draw(glyph, origin, DrawMode::Stroke)
    }
}

impl core::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("size", &self.pixmap.width())
            .field("font", &self.font)
            .field("font_px", &self.font_px)
            .field("family", &self.family)
            .field("fill", &self.fill)
            .field("stroke", &self.stroke)
            .field("shadow", &self.shadow)
            .finish()
    }
}

/// A CPU-side texture with its own unpack flag.
///
/// Level 0 is stored as unpremultiplied RGBA8 in upload order: row 0 is the
/// first row transferred, which is the bottom row of the surface while the
/// flip flag is set.
#[derive(Clone, Debug, Default)]
pub struct MemoryTexture {
    width: u32,
    height: u32,
    data: Vec<u8>,
    flip_y: bool,
    uploads: u32,
}

impl MemoryTexture {
    /// An empty 0 × 0 texture with flipping disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of level 0.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of level 0.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw level 0 data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA8 of texel (`x`, `y`), with `y = 0` the first stored row.
    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0; 4];
        px.copy_from_slice(&self.data[i..i + 4]);
        Some(px)
    }

    /// Number of successful uploads so far.
    pub fn upload_count(&self) -> u32 {
        self.uploads
    }
}

impl UnpackState for MemoryTexture {
    fn unpack_flip_y(&self) -> bool {
        self.flip_y
    }

    fn set_unpack_flip_y(&mut self, flip: bool) {
        self.flip_y = flip;
    }
}

impl TextureTarget<PixmapSurface> for MemoryTexture {
    fn upload(&mut self, surface: &PixmapSurface) -> Result<(), Error> {
        let size = surface.size();
        let mut data = surface.to_rgba8();
        if self.flip_y {
            let row = size as usize * 4;
            data = data.chunks_exact(row).rev().flatten().copied().collect();
        }
        self.width = size;
        self.height = size;
        self.data = data;
        self.uploads += 1;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
enum DrawMode {
    Fill,
    Stroke,
}

struct Outline {
    path: Path,
    fill_rule: FillRule,
}

fn new_pixmap(size: u32) -> Result<Pixmap, Error> {
    Pixmap::new(size, size).ok_or_else(|| {
        Error::with_detail(
            ErrorKind::SurfaceUnavailable,
            format!("cannot allocate a {size}x{size} pixmap"),
        )
    })
}

fn to_tiny_skia(color: Color) -> SkiaColor {
    let c = color.to_rgba8();
    SkiaColor::from_rgba8(c.r, c.g, c.b, c.a)
}

/// The hollow "tofu" box drawn for characters without an outline.
///
/// It sits on the baseline, 0.5 em wide and 0.7 em tall, inset 0.1 em from
/// the origin, with a border of at least one pixel.
fn fallback_box(x: f32, y: f32, em: f32) -> Option<Outline> {
    let left = x + 0.1 * em;
    let width = 0.5 * em;
    let height = 0.7 * em;
    let top = y - height;
    let border = (0.06 * em).max(1.0);

    let mut builder = PathBuilder::new();
    builder.push_rect(Rect::from_xywh(left, top, width, height)?);
    if width > 2.0 * border && height > 2.0 * border {
        if let Some(inner) = Rect::from_xywh(
            left + border,
            top + border,
            width - 2.0 * border,
            height - 2.0 * border,
        ) {
            builder.push_rect(inner);
        }
    }
    Some(Outline {
        path: builder.finish()?,
        fill_rule: FillRule::EvenOdd,
    })
}

/// The shadow cast by `layer`: its alpha, offset, blurred and tinted.
fn cast_shadow(layer: &Pixmap, shadow: &Shadow) -> Result<Pixmap, Error> {
    let size = layer.width();
    let side = size as usize;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offsets are a few pixels"
    )]
    let (dx, dy) = (
        shadow.offset.x.round() as isize,
        shadow.offset.y.round() as isize,
    );

    let alpha: Vec<u8> = layer.pixels().iter().map(|px| px.alpha()).collect();
    let mut mask = vec![0_u8; side * side];
    for y in 0..side {
        let Some(src_y) = y.checked_add_signed(-dy).filter(|&v| v < side) else {
            continue;
        };
        for x in 0..side {
            let Some(src_x) = x.checked_add_signed(-dx).filter(|&v| v < side) else {
                continue;
            };
            mask[y * side + x] = alpha[src_y * side + src_x];
        }
    }
    blur_alpha(&mut mask, side, side, shadow.blur / 2.0);

    let tint = shadow.color.to_rgba8();
    let mut data = Vec::with_capacity(side * side * 4);
    for &coverage in &mask {
        let a = mul_div_255(tint.a, coverage);
        data.extend_from_slice(&[
            mul_div_255(tint.r, a),
            mul_div_255(tint.g, a),
            mul_div_255(tint.b, a),
            a,
        ]);
    }

    let int_size = IntSize::from_wh(size, size)
        .ok_or_else(|| Error::new(ErrorKind::SurfaceUnavailable))?;
    Pixmap::from_vec(data, int_size).ok_or_else(|| Error::new(ErrorKind::SurfaceUnavailable))
}

fn mul_div_255(a: u8, b: u8) -> u8 {
    let v = (u16::from(a) * u16::from(b) + 127) / 255;
    u8::try_from(v).unwrap_or(u8::MAX)
}

/// Collects Skrifa outline commands into a Tiny-Skia path, flipping y so the
/// font's y-up outlines land on the y-down surface.
struct PathPen {
    builder: PathBuilder,
    x: f32,
    y: f32,
}

impl PathPen {
    fn new(x: f32, y: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            x,
            y,
        }
    }
}

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.x + x, self.y - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.x + x, self.y - y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.x + cx0, self.y - cy0, self.x + x, self.y - y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.x + cx0,
            self.y - cy0,
            self.x + cx1,
            self.y - cy1,
            self.x + x,
            self.y - y,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
