// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! WebGL2 texture upload.

use glyph_upload::{Error, ErrorKind, TextureTarget, UnpackState};
use wasm_bindgen::JsCast;
use web_sys::{WebGl2RenderingContext as Gl, WebGlTexture};

use crate::canvas::{CanvasSurface, js_error};

/// Upper bound on queued GL errors drained before an upload.
const MAX_PENDING_ERRORS: usize = 16;

/// The `TEXTURE_2D` target of a WebGL2 context.
///
/// Without an explicit texture, uploads go to whatever texture the caller has
/// bound. With one, it is bound for the duration of the upload and the
/// previous binding is put back afterwards.
#[derive(Clone, Debug)]
pub struct WebGlTextureTarget {
    gl: Gl,
    texture: Option<WebGlTexture>,
}

impl WebGlTextureTarget {
    /// Upload into the texture currently bound to `TEXTURE_2D`.
    pub fn new(gl: Gl) -> Self {
        Self { gl, texture: None }
    }

    /// Upload into `texture`, regardless of the current binding.
    pub fn with_texture(gl: Gl, texture: WebGlTexture) -> Self {
        Self {
            gl,
            texture: Some(texture),
        }
    }

    /// The WebGL2 context.
    pub fn context(&self) -> &Gl {
        &self.gl
    }

    /// Clears errors left on the context by earlier, unrelated calls, so
    /// that only errors raised by the upload are reported.
    fn discard_stale_errors(&self) {
        // Each distinct error flag is reported once, so the queue is short.
        for _ in 0..MAX_PENDING_ERRORS {
            match self.gl.get_error() {
                Gl::NO_ERROR => return,
                code => log::debug!("discarding stale GL error {code:#06x} before upload"),
            }
        }
    }

    fn bound_texture(&self) -> Option<WebGlTexture> {
        self.gl
            .get_parameter(Gl::TEXTURE_BINDING_2D)
            .ok()
            .and_then(|value| value.dyn_into::<WebGlTexture>().ok())
    }
}

impl UnpackState for WebGlTextureTarget {
    fn unpack_flip_y(&self) -> bool {
        self.gl
            .get_parameter(Gl::UNPACK_FLIP_Y_WEBGL)
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }

    fn set_unpack_flip_y(&mut self, flip: bool) {
        self.gl.pixel_storei(Gl::UNPACK_FLIP_Y_WEBGL, i32::from(flip));
    }
}

impl TextureTarget<CanvasSurface> for WebGlTextureTarget {
    fn upload(&mut self, surface: &CanvasSurface) -> Result<(), Error> {
        self.discard_stale_errors();
        let previous = self.texture.as_ref().map(|texture| {
            let previous = self.bound_texture();
            self.gl.bind_texture(Gl::TEXTURE_2D, Some(texture));
            previous
        });

        let result = self.gl.tex_image_2d_with_u32_and_u32_and_html_canvas_element(
            Gl::TEXTURE_2D,
            0,
            Gl::RGBA as i32,
            Gl::RGBA,
            Gl::UNSIGNED_BYTE,
            surface.canvas(),
        );

        if let Some(previous) = previous {
            self.gl.bind_texture(Gl::TEXTURE_2D, previous.as_ref());
        }
        result.map_err(|err| js_error(ErrorKind::Upload, &err))?;

        // Invalid bindings surface as a GL error rather than an exception.
        match self.gl.get_error() {
            Gl::NO_ERROR => Ok(()),
            code => Err(Error::with_detail(
                ErrorKind::Upload,
                format!("texImage2D raised GL error {code:#06x}"),
            )),
        }
    }
}
