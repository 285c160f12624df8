// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gaussian blur of an 8-bit alpha mask, approximated by three box blurs.

use alloc::vec;

/// Width of each of the three box passes approximating a Gaussian of `sigma`.
///
/// Always odd so every box is centered on its output pixel.
pub(crate) fn box_size(sigma: f64) -> usize {
    if sigma <= 0.0 {
        return 1;
    }
    let d = (sigma * 3.0 * (2.0 * core::f64::consts::PI).sqrt() / 4.0 + 0.5).floor();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "d is small, positive and already integral"
    )]
    let d = d.max(1.0) as usize;
    d | 1
}

/// Blur `mask` in place. Pixels outside the mask count as transparent.
pub(crate) fn blur_alpha(mask: &mut [u8], width: usize, height: usize, sigma: f64) {
    debug_assert_eq!(mask.len(), width * height, "mask must be width * height");
    let size = box_size(sigma);
    if size <= 1 || width == 0 || height == 0 {
        return;
    }
    let mut scratch = vec![0_u8; mask.len()];
    for _ in 0..3 {
        box_pass(mask, &mut scratch, width, height, 1, width, size);
        box_pass(&scratch, mask, height, width, width, 1, size);
    }
}

/// One box pass along lines of `len` samples spaced `step` apart; consecutive
/// lines start `line_stride` apart.
fn box_pass(
    src: &[u8],
    dst: &mut [u8],
    len: usize,
    lines: usize,
    step: usize,
    line_stride: usize,
    size: usize,
) {
    let radius = size / 2;
    let div = u32::try_from(size).unwrap_or(u32::MAX);
    for line in 0..lines {
        let base = line * line_stride;
        let at = |i: usize| u32::from(src[base + i * step]);
        let mut sum: u32 = (0..=radius.min(len - 1)).map(at).sum();
        for i in 0..len {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "the average of u8 samples fits in a u8"
            )]
            let value = ((sum + div / 2) / div) as u8;
            dst[base + i * step] = value;
            let incoming = i + radius + 1;
            if incoming < len {
                sum += at(incoming);
            }
            if i >= radius {
                sum -= at(i - radius);
            }
        }
    }
}
