//! Viewport fitting for embedded vector images.
//!
//! The documentation pages embed SVG figures at their intrinsic 96dpi size;
//! on load or container resize the site rescales each one to
//! `min(containerContentWidth, intrinsicWidth × 1.5625)`, which renders
//! intrinsic sizes at 150dpi while preserving aspect ratio.
//! This module is that computation at its interface boundary: a pure,
//! idempotent function with no error path. Degenerate input (zero-width
//! container or image) just yields a zero size.

/// Upscale factor applied to intrinsic dimensions (150dpi / 96dpi).
pub const DPI_SCALE: f64 = 1.5625;

/// A computed display size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSize {
    pub width: f64,
    pub height: f64,
}

/// Compute the display size for a vector image inside a container.
///
/// `container_width` is the container's content width (padding excluded);
/// `intrinsic_width`/`intrinsic_height` are the image's natural dimensions.
/// Recomputing from the same intrinsic dimensions always yields the same
/// size, so the caller may invoke this on every resize signal.
pub fn fit(container_width: f64, intrinsic_width: f64, intrinsic_height: f64) -> FitSize {
    if intrinsic_width <= 0.0 || container_width <= 0.0 {
        return FitSize {
            width: 0.0,
            height: 0.0,
        };
    }

    let width = (intrinsic_width * DPI_SCALE).min(container_width);
    let height = width * intrinsic_height / intrinsic_width;

    FitSize { width, height }
}
