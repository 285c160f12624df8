// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering a glyph request and transferring it into a texture.

use crate::Error;
use crate::request::GlyphRequest;
use crate::style::GlyphStyle;
use crate::surface::{GlyphBackend, GlyphSurface};
use crate::texture::{TextureTarget, UnpackFlipGuard};

/// Draw `request` onto `surface`.
///
/// The surface is cleared first. With a shadow requested, the glyph is
/// stroked in the outline color while the shadow is active, and the shadow
/// stays active for the fill that follows, so both passes cast it. Without a
/// shadow the surface only ever sees a plain fill.
pub fn draw_glyph<S: GlyphSurface + ?Sized>(
    surface: &mut S,
    request: &GlyphRequest,
    style: &GlyphStyle,
) -> Result<(), Error> {
    let glyph = request.glyph();
    if request.is_substituted() {
        log::warn!(
            "code point {:#x} is not a Unicode scalar value, drawing U+FFFD",
            request.code_point()
        );
    }
    let origin = request.baseline(style.baseline_inset);

    surface.clear()?;
    surface.set_font(&style.font(request.size()));
    surface.set_fill_color(style.fill_color);
    if request.apply_shadow() {
        surface.set_shadow(Some(&style.shadow));
        surface.set_stroke_color(style.outline_color);
        log::trace!("stroking {glyph:?} at {origin:?}");
        surface.stroke_glyph(glyph, origin)?;
    }
    log::trace!("filling {glyph:?} at {origin:?}");
    surface.fill_glyph(glyph, origin)
}

/// Replace level 0 of `texture` with `surface`, rows flipped bottom-up.
///
/// The unpack flag is restored to its previous value before returning,
/// whether or not the upload succeeded.
pub fn upload_flipped<S, T>(texture: &mut T, surface: &S) -> Result<(), Error>
where
    S: ?Sized,
    T: TextureTarget<S> + ?Sized,
{
    let mut guard = UnpackFlipGuard::new(texture);
    guard.upload(surface)
}

/// Render `request` with a fresh surface from `backend` and upload it into `texture`.
pub fn render_and_upload<B, T>(
    backend: &mut B,
    texture: &mut T,
    request: &GlyphRequest,
    style: &GlyphStyle,
) -> Result<(), Error>
where
    B: GlyphBackend + ?Sized,
    T: TextureTarget<B::Surface> + ?Sized,
{
    log::debug!(
        "uploading U+{:04X} at {}px (shadow: {})",
        request.code_point(),
        request.size(),
        request.apply_shadow()
    );
    let surface = render(backend, request, style)?;
    upload_flipped(texture, &surface)
}

fn render<B: GlyphBackend + ?Sized>(
    backend: &mut B,
    request: &GlyphRequest,
    style: &GlyphStyle,
) -> Result<B::Surface, Error> {
    let mut surface = backend.create_surface(request.size())?;
    if surface.size() != request.size() {
        return Err(Error::size_mismatch(request.size(), surface.size()));
    }
    draw_glyph(&mut surface, request, style)?;
    Ok(surface)
}

/// A backend paired with the style it renders with.
///
/// This is the explicit form of the upload call: the drawing backend and the
/// destination texture are both handed in, nothing is looked up from ambient
/// state.
#[derive(Clone, Debug, Default)]
pub struct GlyphUploader<B> {
    backend: B,
    style: GlyphStyle,
}

impl<B: GlyphBackend> GlyphUploader<B> {
    /// Creates an uploader with the default [`GlyphStyle`].
    pub fn new(backend: B) -> Self {
        Self::with_style(backend, GlyphStyle::default())
    }

    /// Creates an uploader with a custom style.
    pub fn with_style(backend: B, style: GlyphStyle) -> Self {
        Self { backend, style }
    }

    /// The style used for every glyph.
    pub fn style(&self) -> &GlyphStyle {
        &self.style
    }

    /// Mutable access to the style.
    pub fn style_mut(&mut self) -> &mut GlyphStyle {
        &mut self.style
    }

    /// The drawing backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the drawing backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Draw `request` onto a new surface and hand it back without uploading.
    pub fn render(&mut self, request: &GlyphRequest) -> Result<B::Surface, Error> {
        render(&mut self.backend, request, &self.style)
    }

    /// Draw `request` and upload it into `texture`.
    pub fn render_and_upload<T>(
        &mut self,
        texture: &mut T,
        request: &GlyphRequest,
    ) -> Result<(), Error>
    where
        T: TextureTarget<B::Surface> + ?Sized,
    {
        render_and_upload(&mut self.backend, texture, request, &self.style)
    }
}
