// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations.

#[cfg(feature = "tiny_skia")]
mod blur;

#[cfg(feature = "tiny_skia")]
pub mod tiny_skia;
