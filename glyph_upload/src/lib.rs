// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph Upload rasterizes one character onto a fresh square surface and
//! uploads it as the level-0 image of a 2D texture.
//!
//! The crate is split along the two capabilities it consumes:
//! - [`GlyphSurface`] / [`GlyphBackend`]: a canvas-like 2D surface that can
//!   fill and stroke text, with drop shadows.
//! - [`TextureTarget`] / [`UnpackState`]: a texture that accepts the surface,
//!   honoring a context-wide "flip rows on unpack" flag.
//!
//! [`GlyphUploader`] ties a backend to a [`GlyphStyle`] and performs the whole
//! render-then-upload sequence. The row-flip flag is only ever touched
//! through [`UnpackFlipGuard`], which restores it on every exit path.
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm].
//! - `tiny_skia` (enabled by default): A software backend, [`renderers::tiny_skia`],
//!   built on Tiny-Skia and Skrifa, plus an in-memory texture.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use peniko::{Color, kurbo};

mod error;
mod request;
mod style;
mod surface;
mod texture;
mod upload;

pub mod commands;
pub mod renderers;

pub use error::{Error, ErrorKind};
pub use request::GlyphRequest;
pub use style::{
    DEFAULT_BASELINE_INSET, DEFAULT_FONT_FAMILY, FontSpec, GlyphStyle, OUTLINE_GRAY, Shadow,
};
pub use surface::{GlyphBackend, GlyphSurface};
pub use texture::{TextureTarget, UnpackFlipGuard, UnpackState};
pub use upload::{GlyphUploader, draw_glyph, render_and_upload, upload_flipped};
