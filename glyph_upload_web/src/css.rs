// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glyph_upload::Color;

/// Formats `color` as a CSS `rgba()` value for canvas style properties.
pub fn css_color(color: Color) -> String {
    let c = color.to_rgba8();
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, f32::from(c.a) / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors() {
        assert_eq!(css_color(Color::WHITE), "rgba(255, 255, 255, 1)");
        assert_eq!(css_color(glyph_upload::OUTLINE_GRAY), "rgba(128, 128, 128, 1)");
    }

    #[test]
    fn transparent_black() {
        assert_eq!(css_color(Color::TRANSPARENT), "rgba(0, 0, 0, 0)");
    }
}
