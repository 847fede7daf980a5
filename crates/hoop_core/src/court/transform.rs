//! Court coordinate transforms
//!
//! Converts between FIBA court coordinates and render-surface coordinates.
//!
//! ## Coordinate Systems
//!
//! **Court/FIBA Coordinates** (stored, interchanged, persisted):
//! - X: 0 = left baseline, 28 = right baseline (LENGTH direction, meters)
//! - Y: 0 = top sideline, 15 = bottom sideline (WIDTH direction, meters)
//! - Always expressed in the horizontal reference frame, regardless of how
//!   the court is currently displayed.
//!
//! **Surface Coordinates** (transient, one specific viewport only):
//! - Horizontal viewport: x along court length, y along court width.
//! - Vertical viewport: the frame is rotated 90°. Court width maps
//!   (inverted) onto surface x, court length onto surface y. The inversion
//!   determines which basket appears at the top of the vertical view and
//!   must be preserved exactly.
//!
//! The transforms are pure pass-through: out-of-range input produces
//! out-of-range output. Clamping happens once, at the input boundary, via
//! [`CourtPosition::clamp_to_court`].

use serde::{Deserialize, Serialize};

use super::constants::{court, surface};
use super::orientation::Orientation;

/// Position on the court in FIBA meters, horizontal reference frame.
///
/// This is the only representation that crosses module boundaries or gets
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CourtPosition {
    /// 0..=28, baseline to baseline
    pub x: f64,
    /// 0..=15, sideline to sideline
    pub y: f64,
}

/// Position inside one specific orientation's viewport, in surface units.
///
/// Never persisted; only used transiently during rendering and input
/// handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SurfacePosition {
    pub x: f64,
    pub y: f64,
}

impl CourtPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center court.
    pub fn center() -> Self {
        Self { x: court::CENTER_X, y: court::CENTER_Y }
    }

    /// Clamp to the playable rectangle [0,28]x[0,15].
    ///
    /// Recording paths clamp here so that a fast drag past the court
    /// boundary stores the nearest in-bounds point. The transforms
    /// themselves never clamp.
    pub fn clamp_to_court(self) -> Self {
        Self {
            x: self.x.clamp(0.0, court::LENGTH_M),
            y: self.y.clamp(0.0, court::WIDTH_M),
        }
    }

    /// Check whether the position lies outside the playable rectangle.
    pub fn is_out_of_bounds(&self) -> bool {
        self.x < 0.0 || self.x > court::LENGTH_M || self.y < 0.0 || self.y > court::WIDTH_M
    }
}

impl SurfacePosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Convert a court position to surface coordinates for the target
/// orientation.
///
/// Horizontal is a direct linear scale. Vertical rotates the reference
/// frame 90°: court y maps (inverted) to surface x, court x to surface y.
pub fn court_to_surface(pos: CourtPosition, target: Orientation) -> SurfacePosition {
    match target {
        Orientation::Horizontal => SurfacePosition {
            x: (pos.x / court::LENGTH_M) * surface::HORIZONTAL_WIDTH,
            y: (pos.y / court::WIDTH_M) * surface::HORIZONTAL_HEIGHT,
        },
        Orientation::Vertical => SurfacePosition {
            x: ((court::WIDTH_M - pos.y) / court::WIDTH_M) * surface::VERTICAL_WIDTH,
            y: (pos.x / court::LENGTH_M) * surface::VERTICAL_HEIGHT,
        },
    }
}

/// Convert a surface position back to court coordinates.
///
/// Exact algebraic inverse of [`court_to_surface`] for the same
/// orientation.
pub fn surface_to_court(pos: SurfacePosition, orientation: Orientation) -> CourtPosition {
    match orientation {
        Orientation::Horizontal => CourtPosition {
            x: (pos.x / surface::HORIZONTAL_WIDTH) * court::LENGTH_M,
            y: (pos.y / surface::HORIZONTAL_HEIGHT) * court::WIDTH_M,
        },
        Orientation::Vertical => CourtPosition {
            x: (pos.y / surface::VERTICAL_HEIGHT) * court::LENGTH_M,
            y: (1.0 - pos.x / surface::VERTICAL_WIDTH) * court::WIDTH_M,
        },
    }
}

/// Rescale a raw pointer offset, reported against a surface's declared
/// dimensions, into the orientation's fixed viewport.
///
/// Rendered surfaces are usually scaled by the page layout, so the offset
/// arrives in the surface's own units. When the declared size already is
/// the fixed viewport this is the identity.
pub fn rescale_to_viewport(
    offset_x: f64,
    offset_y: f64,
    declared_width: f64,
    declared_height: f64,
    orientation: Orientation,
) -> SurfacePosition {
    let viewport = orientation.viewport();
    SurfacePosition {
        x: offset_x / declared_width * viewport.width,
        y: offset_y / declared_height * viewport.height,
    }
}
