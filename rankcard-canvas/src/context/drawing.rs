//! Fill and clip operations for CanvasSurface.

use super::CanvasSurface;
use crate::geometry::{ArcParams, ClipRegion, RectParams};
use crate::style::FillStyle;
use tiny_skia::{FillRule, Transform};

impl CanvasSurface {
    /// Fill a rectangle.
    pub fn fill_rect(&mut self, rect: &RectParams, fill: &FillStyle) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", rect.x, rect.y, rect.width, rect.height);
        let Some(skia_rect) = rect.to_skia() else {
            return;
        };
        self.fill_path(&tiny_skia::PathBuilder::from_rect(skia_rect), fill);
    }

    /// Fill the region enclosed by an arc and the chord joining its ends.
    ///
    /// A half-turn arc gives a semicircle, a full turn a disc.
    pub fn fill_arc(&mut self, arc: &ArcParams, fill: &FillStyle) {
        log::debug!(
            target: "canvas",
            "fillArc {} {} r={} {}..{} ccw={}",
            arc.x, arc.y, arc.radius, arc.start_angle, arc.end_angle, arc.anticlockwise
        );
        let mut builder = tiny_skia::PathBuilder::new();
        crate::arc::arc(&mut builder, arc);
        builder.close();
        if let Some(path) = builder.finish() {
            self.fill_path(&path, fill);
        }
    }

    pub(crate) fn fill_path(&mut self, path: &tiny_skia::Path, fill: &FillStyle) {
        let Some(paint) = fill.to_paint() else {
            log::debug!(target: "canvas", "skipping fill with empty paint");
            return;
        };
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    pub(crate) fn create_clip_mask(&self, clip: Option<&ClipRegion>) -> Option<tiny_skia::Mask> {
        let clip_path = clip?.to_path()?;
        let mut mask = tiny_skia::Mask::new(self.width, self.height)?;
        mask.fill_path(&clip_path, FillRule::Winding, true, Transform::identity());
        Some(mask)
    }
}

#[cfg(test)]
mod tests {
    use crate::context::CanvasSurface;
    use crate::geometry::{ArcParams, RectParams};
    use crate::gradient::LinearGradient;
    use crate::style::{parse_color, FillStyle};
    use std::f32::consts::PI;

    fn rgba_at(surface: &CanvasSurface, x: u32, y: u32) -> [u8; 4] {
        let data = surface.get_image_data();
        let idx = ((y * surface.width() + x) * 4) as usize;
        [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]
    }

    #[test]
    fn test_fill_left_semicircle() {
        let mut surface = CanvasSurface::new(100, 100).unwrap();
        surface.fill_arc(
            &ArcParams {
                x: 50.0,
                y: 50.0,
                radius: 20.0,
                start_angle: PI * 1.5,
                end_angle: PI * 0.5,
                anticlockwise: true,
            },
            &FillStyle::css("#00ff00").unwrap(),
        );

        // Left of the center is covered, right is not
        assert_eq!(rgba_at(&surface, 40, 50), [0, 255, 0, 255]);
        assert_eq!(rgba_at(&surface, 60, 50)[3], 0);
    }

    #[test]
    fn test_fill_right_semicircle() {
        let mut surface = CanvasSurface::new(100, 100).unwrap();
        surface.fill_arc(
            &ArcParams {
                x: 50.0,
                y: 50.0,
                radius: 20.0,
                start_angle: PI * 1.5,
                end_angle: PI * 0.5,
                anticlockwise: false,
            },
            &FillStyle::css("#0000ff").unwrap(),
        );

        assert_eq!(rgba_at(&surface, 60, 50), [0, 0, 255, 255]);
        assert_eq!(rgba_at(&surface, 40, 50)[3], 0);
    }

    #[test]
    fn test_linear_gradient_fill() {
        let mut surface = CanvasSurface::new(100, 10).unwrap();
        let mut gradient = LinearGradient::new(0.0, 0.0, 100.0, 0.0);
        gradient.add_color_stop(0.0, parse_color("#ff0000").unwrap());
        gradient.add_color_stop(1.0, parse_color("#0000ff").unwrap());
        surface.fill_rect(
            &RectParams::new(0.0, 0.0, 100.0, 10.0),
            &FillStyle::LinearGradient(gradient),
        );

        let left = rgba_at(&surface, 1, 5);
        let right = rgba_at(&surface, 98, 5);
        assert!(left[0] > 240 && left[2] < 15);
        assert!(right[2] > 240 && right[0] < 15);
    }

    #[test]
    fn test_empty_gradient_draws_nothing() {
        let mut surface = CanvasSurface::new(10, 10).unwrap();
        surface.fill_rect(
            &RectParams::new(0.0, 0.0, 10.0, 10.0),
            &FillStyle::LinearGradient(LinearGradient::new(0.0, 0.0, 10.0, 0.0)),
        );
        assert!(surface.get_image_data().iter().all(|&b| b == 0));
    }
}
