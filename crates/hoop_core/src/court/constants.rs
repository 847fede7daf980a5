//! Court reference constants
//!
//! The canonical reference frame is the FIBA court in meters, always
//! expressed as if displayed horizontally (28m baseline-to-baseline wide,
//! 15m sideline-to-sideline tall), regardless of render orientation.

// ============================================================
// FIBA reference frame (meters, horizontal orientation)
// ============================================================
pub mod court {
    /// Court length, baseline to baseline (x-axis of the reference frame)
    pub const LENGTH_M: f64 = 28.0;

    /// Court width, sideline to sideline (y-axis of the reference frame)
    pub const WIDTH_M: f64 = 15.0;

    /// Center court
    pub const CENTER_X: f64 = LENGTH_M / 2.0;
    pub const CENTER_Y: f64 = WIDTH_M / 2.0;
}

// ============================================================
// Render surface viewports (abstract surface units)
//
// Two fixed layouts. Vertical is a 90°-rotated presentation of the same
// reference frame, so its width/height are swapped relative to horizontal.
// ============================================================
pub mod surface {
    /// Horizontal viewport: 940 x 500
    pub const HORIZONTAL_WIDTH: f64 = 940.0;
    pub const HORIZONTAL_HEIGHT: f64 = 500.0;

    /// Vertical viewport: 500 x 940
    pub const VERTICAL_WIDTH: f64 = 500.0;
    pub const VERTICAL_HEIGHT: f64 = 940.0;
}

// ============================================================
// Fixed court furniture (meters, reference frame)
// ============================================================
pub mod hoop {
    /// Basket center distance from its own baseline
    pub const BASKET_FROM_BASELINE_M: f64 = 1.575;

    /// Three-point arc radius measured from the basket center
    pub const ARC_RADIUS_M: f64 = 6.75;

    /// Restricted lane ("key") depth from the baseline
    pub const KEY_DEPTH_M: f64 = 5.8;

    /// Restricted lane width, centered on the midline
    pub const KEY_WIDTH_M: f64 = 4.9;
}

// ============================================================
// Marker drawing defaults
// ============================================================
pub mod marker {
    /// Half-extent of the cross marker, surface units
    pub const CROSS_SIZE: f64 = 8.0;

    pub const STROKE_WIDTH: f64 = 3.0;

    /// Fallback color when an action type has no configured style
    pub const DEFAULT_COLOR: &str = "#ff4444";
}
