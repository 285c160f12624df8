// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a single glyph with the software backend, uploads it into a
//! [`MemoryTexture`] and writes both the surface and the texture as PNGs.
//!
//! Usage: `glyph_png [CODE_POINT] [SIZE] [SHADOW] [FONT_FILE]`
//!
//! `CODE_POINT` is decimal or `U+XXXX`, defaulting to the white chess king.
//! `SHADOW` is `0` or `1`. Without `FONT_FILE` every character is drawn as
//! the fallback box.

use glyph_upload::renderers::tiny_skia::{MemoryTexture, PixmapBackend, SoftwareFont};
use glyph_upload::{GlyphRequest, GlyphUploader, upload_flipped};
use tiny_skia::{ColorU8, Pixmap};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let code_point = args.next().map_or(0x2654, |arg| parse_code_point(&arg));
    let size: i32 = args.next().map_or(64, |arg| arg.parse().unwrap());
    let shadow: i32 = args.next().map_or(1, |arg| arg.parse().unwrap());

    let backend = match args.next() {
        Some(path) => {
            let data = std::fs::read(&path).unwrap();
            let font = SoftwareFont::new(data, 0).unwrap();
            log::info!("using font {path}");
            PixmapBackend::with_font(font)
        }
        None => PixmapBackend::new(),
    };

    let request = GlyphRequest::from_ffi(code_point, size, shadow).unwrap();
    let mut uploader = GlyphUploader::new(backend);
    let surface = uploader.render(&request).unwrap();
    let mut texture = MemoryTexture::new();
    upload_flipped(&mut texture, &surface).unwrap();
    log::info!(
        "uploaded {:?} as a {}x{} texture",
        request.glyph(),
        texture.width(),
        texture.height()
    );

    // Write images to PNG files in demos/_output dir
    let output_dir = {
        let path = std::path::PathBuf::from(file!());
        let mut path = std::fs::canonicalize(path).unwrap();
        path.pop();
        path.pop();
        path.pop();
        path.push("_output");
        let _ = std::fs::create_dir(path.clone());
        path
    };
    surface
        .pixmap()
        .save_png(output_dir.join("glyph.png"))
        .unwrap();
    texture_pixmap(&texture)
        .save_png(output_dir.join("glyph_texture.png"))
        .unwrap();
}

/// Parses `U+265A`, `0x265A` or a decimal number.
fn parse_code_point(arg: &str) -> i32 {
    let hex = arg
        .strip_prefix("U+")
        .or_else(|| arg.strip_prefix("u+"))
        .or_else(|| arg.strip_prefix("0x"));
    match hex {
        Some(digits) => i32::from_str_radix(digits, 16).unwrap(),
        None => arg.parse().unwrap(),
    }
}

/// The texture contents as an image, in upload order. A flipped upload shows
/// the glyph upside down.
fn texture_pixmap(texture: &MemoryTexture) -> Pixmap {
    let mut pixmap = Pixmap::new(texture.width(), texture.height()).unwrap();
    for (dst, src) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(texture.data().chunks_exact(4))
    {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    pixmap
}
