//! Pointer-to-color mapping for the picker's drag surfaces.
//!
//! Both surfaces share one rule: clamp the pointer into the surface rect
//! first, then normalize into HSV range. This keeps values in range even
//! when a drag wanders outside the surface and only returns later.

use crate::color::Hsv;

/// Which surface an active drag belongs to. A drag is always bound to
/// exactly one surface for its entire lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// The saturation/value square. Horizontal is saturation, vertical is
    /// value with 100 at the top.
    Saturation,
    /// The hue strip. Horizontal only, 0 to 360 degrees left to right.
    Hue,
}

/// Pixel dimensions of a drag surface. Both dimensions must be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp a pointer position into this surface's rect.
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(0.0, self.width), y.clamp(0.0, self.height))
    }
}

impl DragTarget {
    /// Map a pointer position on this surface onto `hsv`.
    ///
    /// The same mapping serves both the initial press (click-to-jump) and
    /// every subsequent move. A saturation drag leaves hue untouched and a
    /// hue drag leaves saturation and value untouched. Note the hue strip's
    /// right edge yields exactly 360, which formats identically to 0.
    pub fn apply(self, hsv: Hsv, x: f64, y: f64, bounds: SurfaceBounds) -> Hsv {
        let (x, y) = bounds.clamp(x, y);
        match self {
            Self::Saturation => Hsv {
                h: hsv.h,
                s: x / bounds.width * 100.0,
                v: 100.0 - y / bounds.height * 100.0,
            },
            Self::Hue => Hsv {
                h: x / bounds.width * 360.0,
                s: hsv.s,
                v: hsv.v,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SQUARE: SurfaceBounds = SurfaceBounds { width: 260.0, height: 160.0 };
    const STRIP: SurfaceBounds = SurfaceBounds { width: 260.0, height: 14.0 };

    fn mid() -> Hsv {
        Hsv { h: 200.0, s: 40.0, v: 60.0 }
    }

    #[test]
    fn test_clamp_pins_to_rect() {
        assert_eq!(SQUARE.clamp(-25.0, -3.0), (0.0, 0.0));
        assert_eq!(SQUARE.clamp(900.0, 400.0), (260.0, 160.0));
        assert_eq!(SQUARE.clamp(130.0, 80.0), (130.0, 80.0));
    }

    #[test]
    fn test_square_corners() {
        let top_left = DragTarget::Saturation.apply(mid(), 0.0, 0.0, SQUARE);
        assert_eq!((top_left.s, top_left.v), (0.0, 100.0));

        let bottom_right = DragTarget::Saturation.apply(mid(), 260.0, 160.0, SQUARE);
        assert_eq!((bottom_right.s, bottom_right.v), (100.0, 0.0));
    }

    #[test]
    fn test_saturation_drag_preserves_hue() {
        let out = DragTarget::Saturation.apply(mid(), 65.0, 120.0, SQUARE);
        assert_eq!(out.h, 200.0);
        assert_eq!(out.s, 25.0);
        assert_eq!(out.v, 25.0);
    }

    #[test]
    fn test_hue_drag_preserves_saturation_and_value() {
        let out = DragTarget::Hue.apply(mid(), 65.0, 7.0, STRIP);
        assert_eq!(out.h, 90.0);
        assert_eq!((out.s, out.v), (40.0, 60.0));
    }

    #[test]
    fn test_off_surface_positions_stay_in_range() {
        for (x, y) in [(-500.0, -500.0), (1e6, 1e6), (-1.0, 80.0), (130.0, 1e9)] {
            let out = DragTarget::Saturation.apply(mid(), x, y, SQUARE);
            assert!((0.0..=100.0).contains(&out.s), "s out of range at ({x}, {y})");
            assert!((0.0..=100.0).contains(&out.v), "v out of range at ({x}, {y})");

            let out = DragTarget::Hue.apply(mid(), x, y, STRIP);
            assert!((0.0..=360.0).contains(&out.h), "h out of range at ({x}, {y})");
        }
    }

    #[test]
    fn test_hue_right_edge_is_360() {
        let out = DragTarget::Hue.apply(mid(), 260.0, 0.0, STRIP);
        assert_eq!(out.h, 360.0);
        assert_eq!(out.to_hex(), crate::color::hsv_to_hex(0.0, 40.0, 60.0));
    }
}
