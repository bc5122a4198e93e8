//! Gradient types for fills.

/// A color stop in a gradient.
#[derive(Debug, Clone)]
pub struct GradientStop {
    /// Offset position (0.0 to 1.0).
    pub offset: f32,
    /// Color at this stop.
    pub color: tiny_skia::Color,
}

/// Linear gradient from (x0, y0) to (x1, y1).
#[derive(Debug, Clone)]
pub struct LinearGradient {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Color stops, kept sorted by offset.
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Create a new linear gradient with no stops.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    /// Add a color stop to the gradient.
    ///
    /// Offsets outside 0.0-1.0 are clamped.
    pub fn add_color_stop(&mut self, offset: f32, color: tiny_skia::Color) {
        let offset = if offset.is_finite() {
            offset.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.stops.push(GradientStop { offset, color });
        // Stable sort keeps insertion order for equal offsets
        self.stops.sort_by(|a, b| {
            a.offset
                .partial_cmp(&b.offset)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Build the tiny-skia shader, or `None` when there is nothing to paint.
    pub(crate) fn to_shader(&self) -> Option<tiny_skia::Shader<'static>> {
        match self.stops.as_slice() {
            [] => None,
            // tiny-skia needs two stops; a single stop is a solid color
            [only] => Some(tiny_skia::Shader::SolidColor(only.color)),
            stops => tiny_skia::LinearGradient::new(
                tiny_skia::Point::from_xy(self.x0, self.y0),
                tiny_skia::Point::from_xy(self.x1, self.y1),
                stops
                    .iter()
                    .map(|stop| tiny_skia::GradientStop::new(stop.offset, stop.color))
                    .collect(),
                tiny_skia::SpreadMode::Pad,
                tiny_skia::Transform::identity(),
            ),
        }
    }
}
