//! Court coordinate system
//!
//! The transform core: a bidirectional mapping between the canonical FIBA
//! reference frame (meters, horizontal) and the two fixed render-surface
//! viewports, plus the fixed court geometry derived from it.

pub mod constants;
pub mod geometry;
pub mod marker;
pub mod orientation;
pub mod transform;

pub use geometry::{
    basket_position, distance_m, distance_to_basket_m, is_beyond_arc, is_in_key, nearest_end,
    shot_zone, CourtEnd, ShotZone,
};
pub use marker::{ActionMarker, SurfaceMarker};
pub use orientation::{Orientation, SurfaceSize};
pub use transform::{
    court_to_surface, rescale_to_viewport, surface_to_court, CourtPosition, SurfacePosition,
};
