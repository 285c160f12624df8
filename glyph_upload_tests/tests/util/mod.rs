// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;
mod textures;

pub(crate) use asserts::{assert_flipped_copy, assert_white_or_transparent, is_dark, is_gray};
pub(crate) use textures::{FailingTexture, PanickingTexture};

use std::path::Path;
use std::sync::OnceLock;

use glyph_upload::renderers::tiny_skia::{
    MemoryTexture, PixmapBackend, PixmapSurface, SoftwareFont,
};
use glyph_upload::{GlyphRequest, GlyphSurface, GlyphUploader};

/// DejaVu Sans from the `assets/fonts` directory, loaded once per test run.
pub(crate) fn dejavu_sans() -> SoftwareFont {
    static FONT: OnceLock<SoftwareFont> = OnceLock::new();
    FONT.get_or_init(|| {
        let path =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/fonts/dejavu/DejaVuSans.ttf");
        let data = std::fs::read(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        SoftwareFont::new(data, 0).unwrap()
    })
    .clone()
}

/// Renders `code_point` with the default style and uploads it into a fresh texture.
///
/// No font is loaded, so every character is drawn as the fallback box.
pub(crate) fn upload(code_point: u32, size: u32, shadow: bool) -> MemoryTexture {
    upload_with(PixmapBackend::new(), code_point, size, shadow)
}

/// Like [`upload`], drawing outlines from DejaVu Sans.
pub(crate) fn upload_outline(code_point: u32, size: u32, shadow: bool) -> MemoryTexture {
    upload_with(PixmapBackend::with_font(dejavu_sans()), code_point, size, shadow)
}

/// Renders `code_point` with the default style without uploading it.
///
/// No font is loaded, so every character is drawn as the fallback box.
pub(crate) fn render(code_point: u32, size: u32, shadow: bool) -> PixmapSurface {
    render_with(PixmapBackend::new(), code_point, size, shadow)
}

/// Like [`render`], drawing outlines from DejaVu Sans.
pub(crate) fn render_outline(code_point: u32, size: u32, shadow: bool) -> PixmapSurface {
    render_with(PixmapBackend::with_font(dejavu_sans()), code_point, size, shadow)
}

fn upload_with(backend: PixmapBackend, code_point: u32, size: u32, shadow: bool) -> MemoryTexture {
    let mut uploader = GlyphUploader::new(backend);
    let mut texture = MemoryTexture::new();
    let request = GlyphRequest::new(code_point, size, shadow).unwrap();
    uploader.render_and_upload(&mut texture, &request).unwrap();
    texture
}

fn render_with(backend: PixmapBackend, code_point: u32, size: u32, shadow: bool) -> PixmapSurface {
    let mut uploader = GlyphUploader::new(backend);
    let request = GlyphRequest::new(code_point, size, shadow).unwrap();
    uploader.render(&request).unwrap()
}

/// Iterates over the pixels of `surface` as `(x, y, rgba)`, origin top left.
pub(crate) fn pixels(surface: &PixmapSurface) -> impl Iterator<Item = (u32, u32, [u8; 4])> + '_ {
    let size = surface.size();
    (0..size).flat_map(move |y| {
        (0..size).map(move |x| (x, y, surface.pixel(x, y).unwrap_or_default()))
    })
}

