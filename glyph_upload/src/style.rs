// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable rendering parameters.
//!
//! None of these values carry meaning beyond "what looked right": the
//! defaults reproduce a white glyph with a 2px drop shadow, set on a baseline
//! 7px above the bottom of the surface, in a broad-coverage Unicode face.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::Color;
use crate::kurbo::Vec2;

/// Default font family. Browsers fall back to their own default when it is missing.
pub const DEFAULT_FONT_FAMILY: &str = "Arial Unicode";

/// Default distance from the bottom edge of the surface to the text baseline.
pub const DEFAULT_BASELINE_INSET: f64 = 7.0;

/// Gray used for the outline stroke of shadowed glyphs.
pub const OUTLINE_GRAY: Color = Color::from_rgb8(128, 128, 128);

/// A font face at a pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Font family name.
    pub family: Cow<'static, str>,
    /// Em size in pixels.
    pub size_px: f64,
}

impl FontSpec {
    /// The CSS `font` shorthand for this face, e.g. `32px Arial Unicode`.
    pub fn css(&self) -> String {
        alloc::format!("{}px {}", self.size_px, self.family)
    }
}

/// A drop shadow, with canvas `shadow*` semantics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Offset from the drawn shape, in pixels. Positive `y` is down.
    pub offset: Vec2,
    /// Canvas `shadowBlur`; the Gaussian standard deviation is half of this.
    pub blur: f64,
    /// Shadow color.
    pub color: Color,
}

impl Shadow {
    /// Whether drawing with this shadow produces any shadow pixels at all.
    ///
    /// Mirrors the canvas rule: a transparent color, or zero offset with zero
    /// blur, disables shadows.
    pub fn is_visible(&self) -> bool {
        self.color.components[3] > 0.0
            && (self.offset.x != 0.0 || self.offset.y != 0.0 || self.blur > 0.0)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset: Vec2::new(2.0, 2.0),
            blur: 3.0,
            color: Color::BLACK,
        }
    }
}

/// Everything about how a glyph is drawn that does not come from the request.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphStyle {
    /// Font family; the font size always equals the request size.
    pub font_family: Cow<'static, str>,
    /// Distance from the bottom edge of the surface to the baseline.
    pub baseline_inset: f64,
    /// Color of the glyph fill.
    pub fill_color: Color,
    /// Color of the outline stroked under shadowed glyphs.
    pub outline_color: Color,
    /// Shadow used when the request asks for one.
    pub shadow: Shadow,
}

impl GlyphStyle {
    /// Replaces the font family.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<Cow<'static, str>>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Replaces the baseline inset.
    #[must_use]
    pub fn with_baseline_inset(mut self, inset: f64) -> Self {
        self.baseline_inset = inset;
        self
    }

    /// Replaces the fill color.
    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Replaces the outline color.
    #[must_use]
    pub fn with_outline_color(mut self, color: Color) -> Self {
        self.outline_color = color;
        self
    }

    /// Replaces the shadow.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    /// The font face for a glyph of `size` pixels.
    pub fn font(&self, size: u32) -> FontSpec {
        FontSpec {
            family: self.font_family.clone(),
            size_px: f64::from(size),
        }
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            font_family: Cow::Borrowed(DEFAULT_FONT_FAMILY),
            baseline_inset: DEFAULT_BASELINE_INSET,
            fill_color: Color::WHITE,
            outline_color: OUTLINE_GRAY,
            shadow: Shadow::default(),
        }
    }
}
