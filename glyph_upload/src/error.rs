// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Error type for glyph rendering and texture upload.
///
/// Carries a non-exhaustive [`ErrorKind`] plus an optional free-form detail
/// message, usually the text of the platform failure that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Backend-provided context, when available.
    detail: Option<String>,
}

impl Error {
    /// Creates an error of the given kind without further detail.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, detail: None }
    }

    /// Creates an error of the given kind carrying a detail message.
    pub fn with_detail(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: Some(detail.into()),
        }
    }

    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The detail message, if the backend supplied one.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub(crate) fn invalid_size(size: i64) -> Self {
        Self::with_detail(
            ErrorKind::InvalidSize,
            alloc::format!("glyph size must be positive, got {size}"),
        )
    }

    pub(crate) fn size_mismatch(expected: u32, actual: u32) -> Self {
        Self::with_detail(
            ErrorKind::SizeMismatch,
            alloc::format!("expected a {expected}px surface, backend produced {actual}px"),
        )
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let what = match self.kind {
            ErrorKind::InvalidSize => "invalid glyph size",
            ErrorKind::SurfaceUnavailable => "raster surface unavailable",
            ErrorKind::Draw => "glyph drawing failed",
            ErrorKind::Upload => "texture upload failed",
            ErrorKind::InvalidFont => "invalid font data",
            ErrorKind::SizeMismatch => "surface size mismatch",
        };
        match &self.detail {
            Some(detail) => write!(f, "{what}: {detail}"),
            None => f.write_str(what),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested glyph size was zero or negative.
    InvalidSize,

    /// The backend could not allocate a raster surface or acquire its drawing context.
    SurfaceUnavailable,

    /// A draw call on the raster surface failed.
    Draw,

    /// Transferring the surface into the texture failed.
    Upload,

    /// Font data handed to a backend could not be parsed.
    InvalidFont,

    /// The backend produced a surface of a different size than requested.
    SizeMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_includes_detail() {
        let err = Error::with_detail(ErrorKind::Upload, "context lost");
        assert_eq!(err.to_string(), "texture upload failed: context lost");
        assert_eq!(err.kind(), ErrorKind::Upload);
    }

    #[test]
    fn display_without_detail() {
        let err = Error::new(ErrorKind::SurfaceUnavailable);
        assert_eq!(err.to_string(), "raster surface unavailable");
        assert!(err.detail().is_none());
    }

    #[test]
    fn invalid_size_reports_value() {
        let err = Error::invalid_size(-4);
        assert_eq!(err.kind(), ErrorKind::InvalidSize);
        assert_eq!(err.detail(), Some("glyph size must be positive, got -4"));
    }
}
