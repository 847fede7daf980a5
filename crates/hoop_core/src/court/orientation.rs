//! Court display orientation
//!
//! Which of the two fixed layouts a court is rendered in. Orientation is
//! derived once from the reporting surface's dimensions and then passed
//! explicitly; it is never persisted.

use serde::{Deserialize, Serialize};

use super::constants::surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Fixed viewport dimensions of one orientation, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl Orientation {
    /// Derive the displayed orientation from a surface's declared
    /// dimensions. Strictly `width < height` selects vertical, so a
    /// square surface is horizontal.
    pub fn from_surface(width: f64, height: f64) -> Self {
        if width < height {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// The fixed viewport this orientation renders into.
    pub fn viewport(&self) -> SurfaceSize {
        match self {
            Orientation::Horizontal => SurfaceSize {
                width: surface::HORIZONTAL_WIDTH,
                height: surface::HORIZONTAL_HEIGHT,
            },
            Orientation::Vertical => SurfaceSize {
                width: surface::VERTICAL_WIDTH,
                height: surface::VERTICAL_HEIGHT,
            },
        }
    }

    /// Canonical code string (e.g. for API payloads and logs).
    pub fn code(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_when_taller_than_wide() {
        assert_eq!(Orientation::from_surface(500.0, 940.0), Orientation::Vertical);
    }

    #[test]
    fn test_horizontal_when_wider_than_tall() {
        assert_eq!(Orientation::from_surface(940.0, 500.0), Orientation::Horizontal);
    }

    #[test]
    fn test_square_surface_is_horizontal() {
        // Tie goes to horizontal: the rule is strict width < height.
        assert_eq!(Orientation::from_surface(700.0, 700.0), Orientation::Horizontal);
    }

    #[test]
    fn test_viewport_dimensions_swap() {
        let h = Orientation::Horizontal.viewport();
        let v = Orientation::Vertical.viewport();
        assert_eq!(h.width, v.height);
        assert_eq!(h.height, v.width);
    }
}
