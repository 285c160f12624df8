// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture targets that misbehave on purpose.

use glyph_upload::renderers::tiny_skia::PixmapSurface;
use glyph_upload::{Error, ErrorKind, TextureTarget, UnpackState};

/// Rejects every upload, as a lost or unbound texture would.
#[derive(Debug, Default)]
pub(crate) struct FailingTexture {
    pub(crate) flip_y: bool,
    /// Flag value observed by each upload attempt.
    pub(crate) attempts: Vec<bool>,
}

impl UnpackState for FailingTexture {
    fn unpack_flip_y(&self) -> bool {
        self.flip_y
    }

    fn set_unpack_flip_y(&mut self, flip: bool) {
        self.flip_y = flip;
    }
}

impl TextureTarget<PixmapSurface> for FailingTexture {
    fn upload(&mut self, _surface: &PixmapSurface) -> Result<(), Error> {
        self.attempts.push(self.flip_y);
        Err(Error::with_detail(ErrorKind::Upload, "no texture bound"))
    }
}

/// Panics in the middle of an upload.
#[derive(Debug, Default)]
pub(crate) struct PanickingTexture {
    pub(crate) flip_y: bool,
}

impl UnpackState for PanickingTexture {
    fn unpack_flip_y(&self) -> bool {
        self.flip_y
    }

    fn set_unpack_flip_y(&mut self, flip: bool) {
        self.flip_y = flip;
    }
}

impl TextureTarget<PixmapSurface> for PanickingTexture {
    fn upload(&mut self, _surface: &PixmapSurface) -> Result<(), Error> {
        panic!("device lost during upload");
    }
}
