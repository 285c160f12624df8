// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recorded surface commands.
//!
//! A [`CommandRecorder`] is a [`GlyphSurface`] that remembers every call made
//! on it instead of drawing. The recording can be inspected, or replayed onto
//! a real surface later with [`CommandRecorder::replay`].

use alloc::vec::Vec;

use crate::kurbo::Point;
use crate::style::{FontSpec, Shadow};
use crate::surface::{GlyphBackend, GlyphSurface};
use crate::{Color, Error};

/// A single recorded surface call.
///
/// The variants correspond 1:1 to the methods on [`GlyphSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    /// Reset to transparent black.
    Clear,
    /// Select a font.
    SetFont(FontSpec),
    /// Set the fill paint.
    SetFillColor(Color),
    /// Set the stroke paint.
    SetStrokeColor(Color),
    /// Set or remove the shadow.
    SetShadow(Option<Shadow>),
    /// Fill a glyph at a baseline origin.
    FillGlyph(char, Point),
    /// Stroke a glyph at a baseline origin.
    StrokeGlyph(char, Point),
}

/// Records surface calls for a single surface.
pub struct CommandRecorder {
    /// The recorded commands.
    pub commands: Vec<SurfaceCommand>,
    /// Side length of the recorded surface (pixels).
    size: u32,
}

impl CommandRecorder {
    /// Create an empty recorder for a `size` × `size` surface.
    pub fn new(size: u32) -> Self {
        Self {
            commands: Vec::new(),
            size,
        }
    }

    /// Execute the recording on `target`, in order.
    ///
    /// Stops at the first failing draw.
    pub fn replay<S: GlyphSurface + ?Sized>(&self, target: &mut S) -> Result<(), Error> {
        for command in &self.commands {
            match command {
                SurfaceCommand::Clear => target.clear()?,
                SurfaceCommand::SetFont(font) => target.set_font(font),
                SurfaceCommand::SetFillColor(color) => target.set_fill_color(*color),
                SurfaceCommand::SetStrokeColor(color) => target.set_stroke_color(*color),
                SurfaceCommand::SetShadow(shadow) => target.set_shadow(shadow.as_ref()),
                SurfaceCommand::FillGlyph(glyph, origin) => target.fill_glyph(*glyph, *origin)?,
                SurfaceCommand::StrokeGlyph(glyph, origin) => {
                    target.stroke_glyph(*glyph, *origin)?;
                }
            }
        }
        Ok(())
    }
}

impl GlyphSurface for CommandRecorder {
    #[inline]
    fn size(&self) -> u32 {
        self.size
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.commands.push(SurfaceCommand::Clear);
        Ok(())
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.commands.push(SurfaceCommand::SetFont(font.clone()));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetStrokeColor(color));
    }

    fn set_shadow(&mut self, shadow: Option<&Shadow>) {
        self.commands.push(SurfaceCommand::SetShadow(shadow.copied()));
    }

    fn fill_glyph(&mut self, glyph: char, origin: Point) -> Result<(), Error> {
        self.commands.push(SurfaceCommand::FillGlyph(glyph, origin));
        Ok(())
    }

    fn stroke_glyph(&mut self, glyph: char, origin: Point) -> Result<(), Error> {
        self.commands.push(SurfaceCommand::StrokeGlyph(glyph, origin));
        Ok(())
    }
}

impl core::fmt::Debug for CommandRecorder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommandRecorder")
            .field("commands", &self.commands.len())
            .field("size", &self.size)
            .finish()
    }
}

/// A backend whose surfaces are [`CommandRecorder`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordingBackend;

impl GlyphBackend for RecordingBackend {
    type Surface = CommandRecorder;

    fn create_surface(&mut self, size: u32) -> Result<CommandRecorder, Error> {
        Ok(CommandRecorder::new(size))
    }
}
