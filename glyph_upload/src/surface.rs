// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 2D drawing capability consumed by the uploader.

use crate::kurbo::Point;
use crate::style::{FontSpec, Shadow};
use crate::{Color, Error};

/// A square, call-local raster surface with canvas-like text drawing.
///
/// Drawing state (font, colors, shadow) persists between calls the way it
/// does on a canvas 2D context. Text is positioned by its alphabetic
/// baseline origin, with the origin of the surface at the top left.
pub trait GlyphSurface {
    /// Side length in pixels.
    fn size(&self) -> u32;

    /// Reset every pixel to transparent black.
    fn clear(&mut self) -> Result<(), Error>;

    /// Select the font used by subsequent text draws.
    fn set_font(&mut self, font: &FontSpec);

    /// Set the paint for [`GlyphSurface::fill_glyph`].
    fn set_fill_color(&mut self, color: Color);

    /// Set the paint for [`GlyphSurface::stroke_glyph`].
    fn set_stroke_color(&mut self, color: Color);

    /// Set or remove the shadow cast by subsequent draws.
    fn set_shadow(&mut self, shadow: Option<&Shadow>);

    /// Fill the outline of `glyph` with its baseline origin at `origin`.
    fn fill_glyph(&mut self, glyph: char, origin: Point) -> Result<(), Error>;

    /// Stroke the outline of `glyph` with its baseline origin at `origin`.
    fn stroke_glyph(&mut self, glyph: char, origin: Point) -> Result<(), Error>;
}

/// Creates fresh surfaces, one per upload.
pub trait GlyphBackend {
    /// The surface type produced by this backend.
    type Surface: GlyphSurface;

    /// Allocate a transparent `size` × `size` surface.
    fn create_surface(&mut self, size: u32) -> Result<Self::Surface, Error>;
}

impl<B: GlyphBackend + ?Sized> GlyphBackend for &mut B {
    type Surface = B::Surface;

    fn create_surface(&mut self, size: u32) -> Result<Self::Surface, Error> {
        B::create_surface(self, size)
    }
}
