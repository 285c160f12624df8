// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas 2D drawing surface.

use glyph_upload::kurbo::Point;
use glyph_upload::{Color, Error, ErrorKind, FontSpec, GlyphBackend, GlyphSurface, Shadow};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::css::css_color;

/// Creates a detached `<canvas>` per surface.
#[derive(Clone, Debug)]
pub struct CanvasBackend {
    document: Document,
}

impl CanvasBackend {
    /// Creates canvases in `document`.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Creates canvases in the current window's document.
    pub fn from_window() -> Result<Self, Error> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| {
                Error::with_detail(ErrorKind::SurfaceUnavailable, "no window document available")
            })?;
        Ok(Self::new(document))
    }
}

impl GlyphBackend for CanvasBackend {
    type Surface = CanvasSurface;

    fn create_surface(&mut self, size: u32) -> Result<CanvasSurface, Error> {
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(|err| js_error(ErrorKind::SurfaceUnavailable, &err))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                Error::with_detail(ErrorKind::SurfaceUnavailable, "element is not a canvas")
            })?;
        canvas.set_width(size);
        canvas.set_height(size);

        let context = canvas
            .get_context("2d")
            .map_err(|err| js_error(ErrorKind::SurfaceUnavailable, &err))?
            .ok_or_else(|| {
                Error::with_detail(ErrorKind::SurfaceUnavailable, "2d context unavailable")
            })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                Error::with_detail(ErrorKind::SurfaceUnavailable, "unexpected 2d context type")
            })?;

        Ok(CanvasSurface {
            canvas,
            context,
            size,
        })
    }
}

/// A canvas element and its 2D context.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    size: u32,
}

impl CanvasSurface {
    /// The canvas element, e.g. for attaching to the page while debugging.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// The 2D context drawing into [`CanvasSurface::canvas`].
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }
}

impl GlyphSurface for CanvasSurface {
    fn size(&self) -> u32 {
        self.size
    }

    fn clear(&mut self) -> Result<(), Error> {
        let side = f64::from(self.size);
        self.context.clear_rect(0.0, 0.0, side, side);
        Ok(())
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.context.set_font(&font.css());
    }

    fn set_fill_color(&mut self, color: Color) {
        self.context.set_fill_style_str(&css_color(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.context.set_stroke_style_str(&css_color(color));
    }

    fn set_shadow(&mut self, shadow: Option<&Shadow>) {
        match shadow {
            Some(shadow) => {
                self.context.set_shadow_color(&css_color(shadow.color));
                self.context.set_shadow_offset_x(shadow.offset.x);
                self.context.set_shadow_offset_y(shadow.offset.y);
                self.context.set_shadow_blur(shadow.blur);
            }
            None => {
                self.context.set_shadow_color(&css_color(Color::TRANSPARENT));
                self.context.set_shadow_offset_x(0.0);
                self.context.set_shadow_offset_y(0.0);
                self.context.set_shadow_blur(0.0);
            }
        }
    }

    fn fill_glyph(&mut self, glyph: char, origin: Point) -> Result<(), Error> {
        let mut buf = [0; 4];
        self.context
            .fill_text(glyph.encode_utf8(&mut buf), origin.x, origin.y)
            .map_err(|err| js_error(ErrorKind::Draw, &err))
    }

    fn stroke_glyph(&mut self, glyph: char, origin: Point) -> Result<(), Error> {
        let mut buf = [0; 4];
        self.context
            .stroke_text(glyph.encode_utf8(&mut buf), origin.x, origin.y)
            .map_err(|err| js_error(ErrorKind::Draw, &err))
    }
}

/// Converts a thrown JavaScript value into an [`Error`] of `kind`.
pub(crate) fn js_error(kind: ErrorKind, value: &JsValue) -> Error {
    let detail = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
    };
    Error::with_detail(kind, detail)
}
