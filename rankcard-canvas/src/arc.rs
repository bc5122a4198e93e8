//! Arc operations using bezier curve approximation.
//!
//! tiny-skia does not support arc primitives directly, so we approximate
//! arcs using cubic bezier curves.

use crate::geometry::ArcParams;
use std::f32::consts::PI;
use tiny_skia::PathBuilder;

/// Append a circular arc to the path as a new subpath.
///
/// Angles follow the canvas convention: radians measured clockwise from the
/// positive x axis in y-down screen space. `anticlockwise` selects the sweep
/// direction from `start_angle` to `end_angle`.
pub fn arc(path: &mut PathBuilder, params: &ArcParams) {
    let ArcParams {
        x,
        y,
        radius,
        start_angle,
        end_angle,
        anticlockwise,
    } = *params;

    if radius <= 0.0 || !radius.is_finite() {
        return;
    }

    let sweep = sweep_angle(start_angle, end_angle, anticlockwise);
    let num_segments = ((sweep.abs() / (PI / 2.0)).ceil() as usize).max(1);
    let segment_angle = sweep / num_segments as f32;

    path.move_to(x + radius * start_angle.cos(), y + radius * start_angle.sin());

    for i in 0..num_segments {
        let angle1 = start_angle + i as f32 * segment_angle;
        let angle2 = angle1 + segment_angle;
        arc_segment(path, x, y, radius, angle1, angle2);
    }
}

/// Signed sweep from `start` to `end`. Positive is clockwise on screen.
///
/// A full turn or more in the requested direction is clamped to one turn.
pub(crate) fn sweep_angle(start: f32, end: f32, anticlockwise: bool) -> f32 {
    let full = 2.0 * PI;
    let delta = end - start;

    if anticlockwise {
        if -delta >= full {
            return -full;
        }
        let mut sweep = delta % full;
        if sweep > 0.0 {
            sweep -= full;
        }
        sweep
    } else {
        if delta >= full {
            return full;
        }
        let mut sweep = delta % full;
        if sweep < 0.0 {
            sweep += full;
        }
        sweep
    }
}

/// Add a single arc segment (at most a quarter turn) as a cubic bezier curve.
fn arc_segment(path: &mut PathBuilder, cx: f32, cy: f32, radius: f32, angle1: f32, angle2: f32) {
    let alpha = (4.0 / 3.0) * ((angle2 - angle1) / 4.0).tan();

    let (sin1, cos1) = angle1.sin_cos();
    let (sin2, cos2) = angle2.sin_cos();

    let x1 = cx + radius * cos1;
    let y1 = cy + radius * sin1;
    let x2 = cx + radius * cos2;
    let y2 = cy + radius * sin2;

    let cp1x = x1 - alpha * radius * sin1;
    let cp1y = y1 + alpha * radius * cos1;
    let cp2x = x2 + alpha * radius * sin2;
    let cp2y = y2 - alpha * radius * cos2;

    path.cubic_to(cp1x, cp1y, cp2x, cp2y, x2, y2);
}
