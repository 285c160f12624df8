// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `glyph_upload`.
//!
//! - The `util` module contains helpers shared by the test modules: rendering
//!   through the software backend and pixel-level assertions.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so shared helpers only need to be defined once.
//! - Test names start with their topic (`unpack_`, `shadow_`, ...).
//!
//! Most tests run without a font, so every character is drawn as the fallback
//! box. The `outline` tests load DejaVu Sans from `assets/fonts`, never from
//! the host, so pixel positions do not depend on installed fonts.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod basic;
mod recording;
mod util;
