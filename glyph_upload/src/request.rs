// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-call input: which character, how large, and whether it casts a shadow.

use crate::Error;
use crate::kurbo::Point;

/// A single glyph to rasterize and upload.
///
/// Requests are plain values; nothing about them outlives the call they are
/// passed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphRequest {
    code_point: u32,
    size: u32,
    apply_shadow: bool,
}

impl GlyphRequest {
    /// Creates a request for `code_point` rendered into a `size` × `size` square.
    ///
    /// Any `u32` is accepted as a code point. Values that are not Unicode
    /// scalar values are drawn as U+FFFD (see [`GlyphRequest::glyph`]).
    /// Returns an [`ErrorKind::InvalidSize`](crate::ErrorKind::InvalidSize)
    /// error when `size` is zero.
    pub fn new(code_point: u32, size: u32, apply_shadow: bool) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::invalid_size(0));
        }
        Ok(Self {
            code_point,
            size,
            apply_shadow,
        })
    }

    /// Creates a request from a single UTF-16 code unit.
    ///
    /// This is the narrow, BMP-only form of [`GlyphRequest::new`]. Lone
    /// surrogates are not scalar values and are drawn as U+FFFD.
    pub fn from_code_unit(code_unit: u16, size: u32, apply_shadow: bool) -> Result<Self, Error> {
        Self::new(u32::from(code_unit), size, apply_shadow)
    }

    /// Creates a request from the three-integer foreign call form.
    ///
    /// Any nonzero `apply_shadow` enables the shadow pass. Negative code
    /// points are kept as invalid scalars and therefore render as U+FFFD.
    pub fn from_ffi(code_point: i32, size: i32, apply_shadow: i32) -> Result<Self, Error> {
        let size = u32::try_from(size)
            .ok()
            .filter(|&size| size > 0)
            .ok_or_else(|| Error::invalid_size(i64::from(size)))?;
        // Negative values wrap above U+10FFFF.
        Self::new(code_point.cast_unsigned(), size, apply_shadow != 0)
    }

    /// The raw code point as passed by the caller.
    pub fn code_point(&self) -> u32 {
        self.code_point
    }

    /// Side length of the square raster surface and font size, in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether the outline and drop shadow pass runs before the fill.
    pub fn apply_shadow(&self) -> bool {
        self.apply_shadow
    }

    /// The character to draw.
    ///
    /// Surrogates and values above U+10FFFF map to
    /// [`char::REPLACEMENT_CHARACTER`]. What that looks like is up to the
    /// backend's font, typically a fallback box.
    pub fn glyph(&self) -> char {
        char::from_u32(self.code_point).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Whether [`GlyphRequest::glyph`] had to substitute U+FFFD.
    pub fn is_substituted(&self) -> bool {
        char::from_u32(self.code_point).is_none()
    }

    /// Text origin for a baseline `inset` pixels above the bottom edge.
    pub fn baseline(&self, inset: f64) -> Point {
        Point::new(0.0, f64::from(self.size) - inset)
    }
}
