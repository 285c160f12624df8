// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Various helper functions to assert truths during testing.

use glyph_upload::GlyphSurface;
use glyph_upload::renderers::tiny_skia::{MemoryTexture, PixmapSurface};

/// A visible pixel close to black.
pub(crate) fn is_dark(px: [u8; 4]) -> bool {
    px[3] > 0 && px[0] < 64 && px[1] < 64 && px[2] < 64
}

/// A visible pixel that is neither close to white nor close to black.
pub(crate) fn is_gray(px: [u8; 4]) -> bool {
    px[3] > 0 && (80..=200).contains(&px[0])
}

/// Assert that every texel is either fully transparent or white.
pub(crate) fn assert_white_or_transparent(texture: &MemoryTexture, case: &str) {
    for (i, px) in texture.data().chunks_exact(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        assert_eq!(
            &px[..3],
            &[255, 255, 255],
            "texel {i} is neither transparent nor white with {case}"
        );
    }
}

/// Assert that `texture` holds `surface` with its rows in reverse order.
pub(crate) fn assert_flipped_copy(texture: &MemoryTexture, surface: &PixmapSurface) {
    let size = surface.size();
    assert_eq!(texture.width(), size, "texture width");
    assert_eq!(texture.height(), size, "texture height");
    for y in 0..size {
        for x in 0..size {
            assert_eq!(
                texture.texel(x, size - 1 - y),
                surface.pixel(x, y),
                "surface pixel ({x}, {y}) should land in texture row {}",
                size - 1 - y
            );
        }
    }
}
