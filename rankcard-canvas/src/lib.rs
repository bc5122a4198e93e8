//! 2D raster surface for profile cards using tiny-skia and cosmic-text.
//!
//! The surface exposes only what a fixed card layout needs:
//! - rectangle and arc fills with solid colors or linear gradients
//! - text measurement and rendering (`cosmic-text` shaping, vector glyphs)
//! - image compositing with a per-call circular or rectangular clip
//! - PNG encoding
//!
//! Every call takes its styling as arguments; there is no save/restore state.
//!
//! # Example
//!
//! ```rust,ignore
//! use rankcard_canvas::{CanvasSurface, FillStyle, RectParams};
//!
//! let mut surface = CanvasSurface::new(400, 300)?;
//! surface.fill_rect(&RectParams::new(10.0, 10.0, 100.0, 50.0), &FillStyle::css("#ff0000")?);
//! let png_data = surface.to_png()?;
//! ```

mod arc;
mod bitmap;
mod context;
mod error;
mod font_config;
mod geometry;
mod gradient;
mod style;
mod text;

// Re-export public API
pub use bitmap::CanvasImage;
pub use context::CanvasSurface;
pub use error::{CanvasError, CanvasResult};
pub use font_config::{font_config_to_fontdb, CustomFont, FontConfig, ResolvedFontConfig};
pub use geometry::{ArcParams, ClipRegion, RectParams};
pub use gradient::{GradientStop, LinearGradient};
pub use style::{parse_color, FillStyle, FontSpec, FontWeight, TextAlign, TextStyle};
pub use text::TextMetrics;
pub use tiny_skia::Color;
