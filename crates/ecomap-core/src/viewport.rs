//! Map viewport: client-local zoom state and the pointer→percent
//! coordinate transform.
//!
//! Pan is native scrolling and never enters the transform; point
//! coordinates are percentages of the map image and therefore independent
//! of zoom and pan.

/// Lower zoom bound.
pub const MIN_SCALE: f64 = 0.5;
/// Upper zoom bound.
pub const MAX_SCALE: f64 = 3.0;
/// Step applied per zoom action.
pub const SCALE_STEP: f64 = 0.2;

/// Client-local zoom factor over the map image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Viewport {
    pub fn zoom_in(&mut self) {
        self.scale = (self.scale + SCALE_STEP).min(MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - SCALE_STEP).max(MIN_SCALE);
    }

    /// Back to 1.0. The caller also recenters the scroll viewport on the
    /// image midpoint.
    pub fn reset(&mut self) {
        self.scale = 1.0;
    }

    /// Maps a raw pointer position to percentages of the map image,
    /// clamped to `[0, 100]` per axis.
    ///
    /// `origin` is the rendered image's top-left corner in the same
    /// coordinate space as `pointer`; `intrinsic` is the unscaled image
    /// size in pixels.
    pub fn to_percent(
        &self,
        pointer: (f64, f64),
        origin: (f64, f64),
        intrinsic: (f64, f64),
    ) -> (f64, f64) {
        let axis = |p: f64, o: f64, len: f64| ((p - o) / (len * self.scale) * 100.0).clamp(0.0, 100.0);
        (
            axis(pointer.0, origin.0, intrinsic.0),
            axis(pointer.1, origin.1, intrinsic.1),
        )
    }

    /// Inverse-scales an intrinsic marker/avatar size so its apparent
    /// on-screen size stays constant across zoom levels, clamped to avoid
    /// degenerate rendering at the extremes.
    pub fn screen_size(&self, base: f64, min: f64, max: f64) -> f64 {
        (base / self.scale).clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTRINSIC: (f64, f64) = (1600.0, 1200.0);

    #[test]
    fn image_center_maps_to_fifty_fifty() {
        let viewport = Viewport::default();
        let percent = viewport.to_percent((800.0, 600.0), (0.0, 0.0), INTRINSIC);
        assert_eq!(percent, (50.0, 50.0));
    }

    #[test]
    fn top_left_corner_maps_to_zero_zero() {
        let viewport = Viewport::default();
        let percent = viewport.to_percent((120.0, 40.0), (120.0, 40.0), INTRINSIC);
        assert_eq!(percent, (0.0, 0.0));
    }

    #[test]
    fn clicks_outside_the_image_clamp() {
        let viewport = Viewport::default();
        let percent = viewport.to_percent((-50.0, 5000.0), (0.0, 0.0), INTRINSIC);
        assert_eq!(percent, (0.0, 100.0));
    }

    #[test]
    fn transform_accounts_for_zoom() {
        let mut viewport = Viewport::default();
        viewport.zoom_in(); // 1.2
        // Center of the scaled image: intrinsic * scale / 2.
        let percent = viewport.to_percent((1600.0 * 0.6, 1200.0 * 0.6), (0.0, 0.0), INTRINSIC);
        assert!((percent.0 - 50.0).abs() < 1e-9);
        assert!((percent.1 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn transform_respects_the_image_origin() {
        let viewport = Viewport::default();
        let percent = viewport.to_percent((900.0, 700.0), (100.0, 100.0), INTRINSIC);
        assert_eq!(percent, (50.0, 50.0));
    }

    #[test]
    fn zoom_steps_clamp_at_the_bounds() {
        let mut viewport = Viewport::default();
        for _ in 0..20 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.scale, MAX_SCALE);

        for _ in 0..20 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.scale, MIN_SCALE);

        viewport.reset();
        assert_eq!(viewport.scale, 1.0);
    }

    #[test]
    fn marker_size_is_inverse_scaled_and_clamped() {
        let mut viewport = Viewport::default();
        assert_eq!(viewport.screen_size(36.0, 20.0, 56.0), 36.0);

        for _ in 0..20 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.screen_size(36.0, 20.0, 56.0), 20.0);

        for _ in 0..40 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.screen_size(36.0, 20.0, 56.0), 56.0);
    }
}
