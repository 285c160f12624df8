// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimensions, determinism and fallback behavior of uploads.

use glyph_upload::renderers::tiny_skia::{MemoryTexture, PixmapBackend};
use glyph_upload::{GlyphRequest, GlyphStyle, GlyphUploader, upload_flipped};

use crate::util::{assert_flipped_copy, assert_white_or_transparent, render, upload};

#[test]
fn basic_texture_matches_requested_size() {
    for size in [1, 2, 7, 16, 32, 64, 100] {
        for shadow in [false, true] {
            let texture = upload(u32::from('K'), size, shadow);
            assert_eq!(texture.width(), size, "width at {size}px");
            assert_eq!(texture.height(), size, "height at {size}px");
            assert_eq!(texture.data().len(), (size * size * 4) as usize);
        }
    }
}

#[test]
fn basic_single_pixel_glyph() {
    let texture = upload(u32::from('A'), 1, false);
    assert_eq!(texture.width(), 1);
    assert_eq!(texture.upload_count(), 1);
    assert!(!glyph_upload::UnpackState::unpack_flip_y(&texture));
}

#[test]
fn basic_identical_requests_are_pixel_identical() {
    for shadow in [false, true] {
        let a = upload(0x265B, 40, shadow);
        let b = upload(0x265B, 40, shadow);
        assert_eq!(a.data(), b.data(), "shadow: {shadow}");
    }
}

#[test]
fn basic_fallback_box_at_32px() {
    let surface = render(65, 32, false);
    // Bottom border of the box, just above the baseline at y = 25.
    assert_eq!(surface.pixel(10, 24), Some([255, 255, 255, 255]));
    // Hollow inside, nothing below the baseline, nothing in the right-hand margin.
    assert_eq!(surface.pixel(10, 14).map(|px| px[3]), Some(0));
    assert_eq!(surface.pixel(10, 27).map(|px| px[3]), Some(0));
    assert_eq!(surface.pixel(28, 12).map(|px| px[3]), Some(0));

    let texture = upload(65, 32, false);
    assert_white_or_transparent(&texture, "fallback box");
    // Row 24 from the top is row 7 from the bottom.
    assert_eq!(texture.texel(10, 7), Some([255, 255, 255, 255]));
}

#[test]
fn basic_texture_rows_are_bottom_up() {
    let mut uploader = GlyphUploader::new(PixmapBackend::new());
    let request = GlyphRequest::new(0x2658, 24, true).unwrap();
    let surface = uploader.render(&request).unwrap();
    let mut texture = MemoryTexture::new();
    upload_flipped(&mut texture, &surface).unwrap();
    assert_flipped_copy(&texture, &surface);
}

#[test]
fn basic_ffi_request_matches_typed_request() {
    let mut uploader = GlyphUploader::new(PixmapBackend::new());
    let mut from_ffi = MemoryTexture::new();
    let request = GlyphRequest::from_ffi(0x2654, 20, 1).unwrap();
    uploader.render_and_upload(&mut from_ffi, &request).unwrap();

    assert_eq!(from_ffi.data(), upload(0x2654, 20, true).data());
}

#[test]
fn basic_baseline_inset_moves_glyph() {
    let style = GlyphStyle::default().with_baseline_inset(0.0);
    let mut uploader = GlyphUploader::with_style(PixmapBackend::new(), style);
    let request = GlyphRequest::new(65, 32, false).unwrap();
    let lowered = uploader.render(&request).unwrap();
    let default = render(65, 32, false);

    assert_eq!(lowered.pixel(10, 31), Some([255, 255, 255, 255]));
    assert_eq!(default.pixel(10, 31).map(|px| px[3]), Some(0));
}
