// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording draw calls and replaying them on the software renderer.

use glyph_upload::commands::{RecordingBackend, SurfaceCommand};
use glyph_upload::renderers::tiny_skia::PixmapSurface;
use glyph_upload::{GlyphRequest, GlyphUploader};

use crate::util::render;

#[test]
fn recording_replay_matches_direct_render() {
    for shadow in [false, true] {
        let mut recorder = GlyphUploader::new(RecordingBackend);
        let request = GlyphRequest::new(0x2656, 32, shadow).unwrap();
        let recording = recorder.render(&request).unwrap();

        let mut replayed = PixmapSurface::new(32, None).unwrap();
        recording.replay(&mut replayed).unwrap();

        let direct = render(0x2656, 32, shadow);
        assert_eq!(replayed.to_rgba8(), direct.to_rgba8(), "shadow: {shadow}");
    }
}

#[test]
fn recording_keeps_supplementary_plane_glyphs() {
    let mut recorder = GlyphUploader::new(RecordingBackend);
    let request = GlyphRequest::new(0x1F600, 24, false).unwrap();
    let recording = recorder.render(&request).unwrap();

    assert!(
        recording
            .commands
            .iter()
            .any(|command| matches!(command, SurfaceCommand::FillGlyph('\u{1F600}', _)))
    );
}

#[test]
fn recording_code_unit_request() {
    let mut recorder = GlyphUploader::new(RecordingBackend);
    let request = GlyphRequest::from_code_unit(0x265A, 16, true).unwrap();
    let recording = recorder.render(&request).unwrap();

    let strokes = recording
        .commands
        .iter()
        .filter(|command| matches!(command, SurfaceCommand::StrokeGlyph('\u{265A}', _)))
        .count();
    assert_eq!(strokes, 1);
    assert!(matches!(
        recording.commands.last(),
        Some(SurfaceCommand::FillGlyph('\u{265A}', _))
    ));
}
