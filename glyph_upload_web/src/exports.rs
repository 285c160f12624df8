// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JavaScript-facing API.

use std::cell::RefCell;

use glyph_upload::kurbo::Vec2;
use glyph_upload::{Error, GlyphRequest, GlyphUploader};
use wasm_bindgen::prelude::*;
use web_sys::{WebGl2RenderingContext, WebGlTexture};

use crate::canvas::CanvasBackend;
use crate::webgl::WebGlTextureTarget;

/// The uploader and target used by [`upload_unicode_char_to_texture`].
struct Ambient {
    uploader: GlyphUploader<CanvasBackend>,
    target: WebGlTextureTarget,
}

thread_local! {
    static AMBIENT: RefCell<Option<Ambient>> = const { RefCell::new(None) };
}

fn to_js(err: Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Installs `console_log` at `info` level and the panic hook.
///
/// Safe to call more than once.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // The embedding application installed its own logger first.
        log::debug!("console logger not installed: {err}");
    }
}

/// Installs the WebGL2 context used by [`upload_unicode_char_to_texture`].
#[wasm_bindgen(js_name = setUploadContext)]
pub fn set_upload_context(gl: WebGl2RenderingContext) -> Result<(), JsValue> {
    let uploader = GlyphUploader::new(CanvasBackend::from_window().map_err(to_js)?);
    let target = WebGlTextureTarget::new(gl);
    AMBIENT.with(|cell| *cell.borrow_mut() = Some(Ambient { uploader, target }));
    log::debug!("upload context installed");
    Ok(())
}

/// Renders one character and uploads it into the texture bound to `TEXTURE_2D`.
///
/// `apply_shadow` is an integer flag; any nonzero value draws the gray
/// outline and drop shadow. Requires [`set_upload_context`] first.
#[wasm_bindgen]
pub fn upload_unicode_char_to_texture(
    unicode_char: i32,
    char_size: i32,
    apply_shadow: i32,
) -> Result<(), JsValue> {
    let request = GlyphRequest::from_ffi(unicode_char, char_size, apply_shadow).map_err(to_js)?;
    AMBIENT.with(|cell| {
        let mut slot = cell.borrow_mut();
        let ambient = slot.as_mut().ok_or_else(|| {
            JsValue::from(js_sys::Error::new(
                "no upload context installed, call setUploadContext first",
            ))
        })?;
        ambient
            .uploader
            .render_and_upload(&mut ambient.target, &request)
            .map_err(to_js)
    })
}

/// Renders glyphs into WebGL2 textures with an explicit context.
#[wasm_bindgen]
#[derive(Debug)]
pub struct GlyphTextureUploader {
    uploader: GlyphUploader<CanvasBackend>,
    target: WebGlTextureTarget,
}

#[wasm_bindgen]
impl GlyphTextureUploader {
    /// Creates an uploader drawing with canvases from the current document.
    #[wasm_bindgen(constructor)]
    pub fn new(gl: WebGl2RenderingContext) -> Result<Self, JsValue> {
        Ok(Self {
            uploader: GlyphUploader::new(CanvasBackend::from_window().map_err(to_js)?),
            target: WebGlTextureTarget::new(gl),
        })
    }

    /// Uploads into the texture currently bound to `TEXTURE_2D`.
    pub fn upload(
        &mut self,
        code_point: u32,
        size: u32,
        apply_shadow: bool,
    ) -> Result<(), JsValue> {
        let request = GlyphRequest::new(code_point, size, apply_shadow).map_err(to_js)?;
        self.uploader
            .render_and_upload(&mut self.target, &request)
            .map_err(to_js)
    }

    /// Uploads into `texture`; the current `TEXTURE_2D` binding is left as it was.
    #[wasm_bindgen(js_name = uploadTo)]
    pub fn upload_to(
        &mut self,
        texture: &WebGlTexture,
        code_point: u32,
        size: u32,
        apply_shadow: bool,
    ) -> Result<(), JsValue> {
        let request = GlyphRequest::new(code_point, size, apply_shadow).map_err(to_js)?;
        let mut target =
            WebGlTextureTarget::with_texture(self.target.context().clone(), texture.clone());
        self.uploader
            .render_and_upload(&mut target, &request)
            .map_err(to_js)
    }

    /// Font family used for every glyph.
    #[wasm_bindgen(js_name = setFontFamily)]
    pub fn set_font_family(&mut self, family: String) {
        self.uploader.style_mut().font_family = family.into();
    }

    /// Distance from the bottom edge of the surface to the baseline.
    #[wasm_bindgen(js_name = setBaselineInset)]
    pub fn set_baseline_inset(&mut self, inset: f64) {
        self.uploader.style_mut().baseline_inset = inset;
    }

    /// Offset and blur of the drop shadow used by shadowed glyphs.
    #[wasm_bindgen(js_name = setShadow)]
    pub fn set_shadow(&mut self, offset_x: f64, offset_y: f64, blur: f64) {
        let shadow = &mut self.uploader.style_mut().shadow;
        shadow.offset = Vec2::new(offset_x, offset_y);
        shadow.blur = blur;
    }
}
