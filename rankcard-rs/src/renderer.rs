//! Card drawing pipeline.
//!
//! Layers are painted back to front on a fresh surface per render:
//! background, overlay frame, status square, username and discriminator,
//! rank and level, progress track, progress fill, XP text or badge, avatar.

use crate::config::{CardConfig, ValidatedCard};
use crate::error::CardError;
use crate::format::{format_number, gradient_offsets, progress_width, BAR_LENGTH};
use crate::image_loading::{HttpImageFetcher, ImageFetcher};
use rankcard_canvas::{
    ArcParams, CanvasImage, CanvasSurface, ClipRegion, FillStyle, FontConfig, FontSpec,
    FontWeight, LinearGradient, RectParams, ResolvedFontConfig, TextAlign, TextStyle,
};
use std::f32::consts::PI;

const FONT_FAMILY: &str = "Manrope";
const FRAME_MARGIN: f32 = 15.0;

const STATUS_RECT: RectParams = RectParams {
    x: 280.0,
    y: 160.0,
    width: 20.0,
    height: 20.0,
};

const NAME_X: f32 = 310.0;
const NAME_BASELINE: f32 = 184.0;
const NAME_SIZE: f32 = 38.0;
const DISCRIMINATOR_GAP: f32 = 15.0;

const RANK_X: f32 = 440.0;
const LEVEL_X: f32 = 672.5;
const STATS_BASELINE: f32 = 80.0;
const STATS_SIZE: f32 = 45.0;
const STATS_GAP: f32 = 30.0;

const BAR_LEFT: f32 = 284.0;
const BAR_CENTER_Y: f32 = 216.0;
const BAR_RADIUS: f32 = 19.0;
const GRADIENT_INSET: f32 = 3.0;

const XP_RIGHT: f32 = 880.0;
const XP_BASELINE: f32 = 184.0;
const XP_SIZE: f32 = 30.0;

const BADGE_RECT: RectParams = RectParams {
    x: 745.0,
    y: 100.0,
    width: 130.0,
    height: 130.0,
};

const AVATAR_CLIP: ClipRegion = ClipRegion::Circle {
    cx: 140.0,
    cy: 140.0,
    radius: 105.0,
};
const AVATAR_RECT: RectParams = RectParams {
    x: 35.0,
    y: 35.0,
    width: 210.0,
    height: 210.0,
};

/// Localizable labels drawn before the rank and level numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captions {
    pub rank: String,
    pub level: String,
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            rank: "Rank".to_string(),
            level: "Level".to_string(),
        }
    }
}

/// Renders validated card configs to PNG.
///
/// Holds only shared read-only resources, so one renderer can serve
/// concurrent renders of independent configs.
pub struct CardRenderer<F = HttpImageFetcher> {
    fonts: ResolvedFontConfig,
    fetcher: F,
}

impl CardRenderer<HttpImageFetcher> {
    /// Renderer with system fonts and the default HTTP fetcher.
    pub fn new() -> Self {
        Self::with_fetcher(FontConfig::default().resolve(), HttpImageFetcher::default())
    }
}

impl Default for CardRenderer<HttpImageFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ImageFetcher> CardRenderer<F> {
    pub fn with_fetcher(fonts: ResolvedFontConfig, fetcher: F) -> Self {
        Self { fonts, fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Validate, fetch images, draw, and encode the card as PNG.
    ///
    /// Fails before fetching anything when a required field is missing or a
    /// color does not parse.
    pub async fn render(
        &self,
        config: &CardConfig,
        captions: &Captions,
    ) -> Result<Vec<u8>, CardError> {
        let card = config.validate()?;

        let badge_url = card.badge_to_draw();
        let (avatar, badge) = tokio::try_join!(self.fetcher.fetch(card.avatar_url), async {
            match badge_url {
                Some(url) => self.fetcher.fetch(url).await.map(Some),
                None => Ok(None),
            }
        })?;

        let surface = self.draw(&card, captions, &avatar, badge.as_ref())?;
        Ok(surface.to_png()?)
    }

    /// Draw a validated card with already-loaded images.
    pub fn draw(
        &self,
        card: &ValidatedCard<'_>,
        captions: &Captions,
        avatar: &CanvasImage,
        badge: Option<&CanvasImage>,
    ) -> Result<CanvasSurface, CardError> {
        let config = card.config;
        let mut surface =
            CanvasSurface::with_resolved(config.width(), config.height(), &self.fonts)?;

        log::debug!("drawing card {}x{}", config.width(), config.height());
        draw_frame(&mut surface, card);
        draw_identity(&mut surface, card);
        draw_stats(&mut surface, card, captions);
        draw_progress(&mut surface, card);

        match (config.maxed(), badge) {
            (true, Some(badge)) => surface.draw_image(badge, &BADGE_RECT, None),
            (true, None) => {}
            (false, _) => draw_xp(&mut surface, card),
        }

        surface.draw_image(avatar, &AVATAR_RECT, Some(&AVATAR_CLIP));
        Ok(surface)
    }
}

fn text_style(weight: FontWeight, size_px: f32, fill: &FillStyle, align: TextAlign) -> TextStyle {
    TextStyle {
        font: FontSpec::new(FONT_FAMILY, weight, size_px),
        fill: fill.clone(),
        align,
    }
}

fn draw_frame(surface: &mut CanvasSurface, card: &ValidatedCard<'_>) {
    let palette = &card.palette;
    let (width, height) = (card.config.width() as f32, card.config.height() as f32);
    surface.fill_rect(&RectParams::new(0.0, 0.0, width, height), &palette.background);
    surface.fill_rect(
        &RectParams::new(
            FRAME_MARGIN,
            FRAME_MARGIN,
            width - 2.0 * FRAME_MARGIN,
            height - 2.0 * FRAME_MARGIN,
        ),
        &palette.overlay,
    );
    surface.fill_rect(&STATUS_RECT, &palette.status);
}

/// Username in bold, then the discriminator right after its measured width.
fn draw_identity(surface: &mut CanvasSurface, card: &ValidatedCard<'_>) {
    let palette = &card.palette;
    let name_style = text_style(FontWeight::Bold, NAME_SIZE, &palette.username, TextAlign::Start);
    let name = surface.fill_text(card.username, NAME_X, NAME_BASELINE, &name_style);

    let discriminator_style = text_style(
        FontWeight::Regular,
        NAME_SIZE,
        &palette.discriminator,
        TextAlign::Start,
    );
    surface.fill_text(
        card.discriminator,
        NAME_X + name.width + DISCRIMINATOR_GAP,
        NAME_BASELINE,
        &discriminator_style,
    );
}

fn draw_stats(surface: &mut CanvasSurface, card: &ValidatedCard<'_>, captions: &Captions) {
    let palette = &card.palette;
    draw_labeled_number(
        surface,
        RANK_X,
        (captions.rank.as_str(), &palette.rank_label),
        (format_number(card.rank).as_str(), &palette.rank_number),
    );

    // Level is shown unabbreviated
    draw_labeled_number(
        surface,
        LEVEL_X,
        (captions.level.as_str(), &palette.level_label),
        (card.level.to_string().as_str(), &palette.level_number),
    );
}

fn draw_labeled_number(
    surface: &mut CanvasSurface,
    x: f32,
    (label, label_fill): (&str, &FillStyle),
    (number, number_fill): (&str, &FillStyle),
) {
    let label_style = text_style(FontWeight::Bold, STATS_SIZE, label_fill, TextAlign::Start);
    let drawn = surface.fill_text(label, x, STATS_BASELINE, &label_style);

    let number_style = text_style(FontWeight::Regular, STATS_SIZE, number_fill, TextAlign::Start);
    surface.fill_text(number, x + drawn.width + STATS_GAP, STATS_BASELINE, &number_style);
}

fn cap(x: f32, anticlockwise: bool) -> ArcParams {
    ArcParams {
        x,
        y: BAR_CENTER_Y,
        radius: BAR_RADIUS,
        start_angle: PI * 1.5,
        end_angle: PI * 0.5,
        anticlockwise,
    }
}

/// Rectangle from the track's left edge plus a semicircle on each end.
fn fill_capsule(
    surface: &mut CanvasSurface,
    length: f32,
    body: &FillStyle,
    left: &FillStyle,
    right: &FillStyle,
) {
    surface.fill_rect(
        &RectParams::new(BAR_LEFT, BAR_CENTER_Y - BAR_RADIUS, length, BAR_RADIUS * 2.0),
        body,
    );
    surface.fill_arc(&cap(BAR_LEFT, true), left);
    surface.fill_arc(&cap(BAR_LEFT + length, false), right);
}

fn draw_progress(surface: &mut CanvasSurface, card: &ValidatedCard<'_>) {
    let palette = &card.palette;
    let full = BAR_LENGTH as f32;

    fill_capsule(surface, full, &palette.track, &palette.track, &palette.track);

    let stops = &palette.gradient;
    match (card.config.maxed(), stops.first(), stops.last()) {
        (true, Some(first), Some(last)) => {
            let mut gradient = LinearGradient::new(
                BAR_LEFT + GRADIENT_INSET,
                BAR_CENTER_Y,
                BAR_LEFT + full - GRADIENT_INSET,
                BAR_CENTER_Y,
            );
            for (offset, color) in gradient_offsets(stops.len()).into_iter().zip(stops) {
                gradient.add_color_stop(offset, *color);
            }
            // Caps stay solid in the end colors
            fill_capsule(
                surface,
                full,
                &FillStyle::LinearGradient(gradient),
                &FillStyle::Color(*first),
                &FillStyle::Color(*last),
            );
        }
        (true, _, _) => fill_capsule(surface, full, &palette.bar, &palette.bar, &palette.bar),
        (false, _, _) => {
            let width = progress_width(card.current_xp, card.required_xp) as f32;
            log::debug!("progress {}/{} -> {width}px", card.current_xp, card.required_xp);
            fill_capsule(surface, width, &palette.bar, &palette.bar, &palette.bar);
        }
    }
}

/// Right-aligned "current / required" in two colors.
fn draw_xp(surface: &mut CanvasSurface, card: &ValidatedCard<'_>) {
    let palette = &card.palette;
    let required = format_number(card.required_xp);
    let current = format_number(card.current_xp);

    let required_style =
        text_style(FontWeight::Regular, XP_SIZE, &palette.required_xp, TextAlign::End);
    surface.fill_text(&format!("/ {required}"), XP_RIGHT, XP_BASELINE, &required_style);

    // Leading space keeps a gap between the two runs
    let offset = surface.measure_text(&format!(" / {required}"), &required_style.font).width;
    let current_style =
        text_style(FontWeight::Regular, XP_SIZE, &palette.current_xp, TextAlign::End);
    surface.fill_text(&current, XP_RIGHT - offset, XP_BASELINE, &current_style);
}
