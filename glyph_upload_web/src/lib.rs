// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for Glyph Upload.
//!
//! Glyphs are drawn with a canvas 2D context on a detached `<canvas>` element
//! created per call, and handed straight to `texImage2D` on a WebGL2
//! context, so the pixels never round-trip through Wasm memory.
//!
//! Two entry points are exported to JavaScript:
//! - `upload_unicode_char_to_texture(code, size, shadow)`: the three-integer
//!   form, uploading into whatever texture is bound to `TEXTURE_2D` on the
//!   context installed with `setUploadContext`.
//! - `GlyphTextureUploader`: an explicit context object that owns its WebGL2
//!   context and style, and can target a specific texture.
//!
//! Everything except color formatting is only compiled for `wasm32`.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![allow(
    unsafe_code,
    reason = "the code generated by `#[wasm_bindgen]` contains unsafe blocks"
)]

#[cfg(not(target_arch = "wasm32"))]
use log as _;

mod css;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod exports;
#[cfg(target_arch = "wasm32")]
mod webgl;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasBackend, CanvasSurface};
#[cfg(target_arch = "wasm32")]
pub use exports::{
    GlyphTextureUploader, init_logging, set_upload_context, upload_unicode_char_to_texture,
};
#[cfg(target_arch = "wasm32")]
pub use webgl::WebGlTextureTarget;

pub use css::css_color;
