//! Integration tests for rankcard-canvas.

use rankcard_canvas::{
    ArcParams, CanvasImage, CanvasSurface, ClipRegion, FillStyle, FontConfig, FontSpec,
    FontWeight, LinearGradient, RectParams, TextAlign, TextStyle,
};
use rstest::rstest;
use std::f32::consts::PI;

fn rgba_at(surface: &CanvasSurface, x: u32, y: u32) -> [u8; 4] {
    let data = surface.get_image_data();
    let idx = ((y * surface.width() + x) * 4) as usize;
    [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]
}

/// Later fills paint over earlier ones.
#[test]
fn test_layered_rectangles() {
    let mut surface = CanvasSurface::new(200, 100).unwrap();
    surface.fill_rect(
        &RectParams::new(0.0, 0.0, 200.0, 100.0),
        &FillStyle::css("#23272A").unwrap(),
    );
    surface.fill_rect(
        &RectParams::new(15.0, 15.0, 170.0, 70.0),
        &FillStyle::css("#333640").unwrap(),
    );

    assert_eq!(rgba_at(&surface, 5, 5), [0x23, 0x27, 0x2A, 255]);
    assert_eq!(rgba_at(&surface, 100, 50), [0x33, 0x36, 0x40, 255]);
}

/// Two semicircles plus a rectangle form a capsule.
#[test]
fn test_capsule_from_caps_and_rect() {
    let mut surface = CanvasSurface::new(200, 60).unwrap();
    let fill = FillStyle::css("#ffffff").unwrap();
    surface.fill_arc(
        &ArcParams {
            x: 40.0,
            y: 30.0,
            radius: 19.0,
            start_angle: PI * 1.5,
            end_angle: PI * 0.5,
            anticlockwise: true,
        },
        &fill,
    );
    surface.fill_arc(
        &ArcParams {
            x: 160.0,
            y: 30.0,
            radius: 19.0,
            start_angle: PI * 1.5,
            end_angle: PI * 0.5,
            anticlockwise: false,
        },
        &fill,
    );
    surface.fill_rect(&RectParams::new(40.0, 11.0, 120.0, 38.0), &fill);

    // Both rounded ends and the middle are covered
    assert_eq!(rgba_at(&surface, 25, 30)[3], 255);
    assert_eq!(rgba_at(&surface, 100, 30)[3], 255);
    assert_eq!(rgba_at(&surface, 175, 30)[3], 255);
    // Corners of the bounding box stay empty
    assert_eq!(rgba_at(&surface, 22, 12)[3], 0);
    assert_eq!(rgba_at(&surface, 177, 47)[3], 0);
}

#[rstest]
#[case(TextAlign::Start)]
#[case(TextAlign::End)]
fn test_fill_text_reports_same_width_for_any_alignment(#[case] align: TextAlign) {
    let mut surface = CanvasSurface::new(300, 80).unwrap();
    let font = FontSpec::new("Manrope", FontWeight::Bold, 38.0);
    let expected = surface.measure_text("Username", &font).width;
    let style = TextStyle {
        font,
        fill: FillStyle::css("#ffffff").unwrap(),
        align,
    };
    let drawn = surface.fill_text("Username", 150.0, 60.0, &style);
    assert_eq!(drawn.width, expected);
}

#[test]
fn test_gradient_then_solid_caps() {
    let mut surface = CanvasSurface::new(120, 40).unwrap();
    let mut gradient = LinearGradient::new(20.0, 20.0, 100.0, 20.0);
    for (i, color) in ["#ff0000", "#00ff00", "#0000ff"].iter().enumerate() {
        gradient.add_color_stop(i as f32 / 2.0, rankcard_canvas::parse_color(color).unwrap());
    }
    surface.fill_rect(
        &RectParams::new(20.0, 10.0, 80.0, 20.0),
        &FillStyle::LinearGradient(gradient),
    );

    let middle = rgba_at(&surface, 60, 20);
    assert!(middle[1] > 200);
    assert!(middle[0] < 60 && middle[2] < 60);
}

#[test]
fn test_clipped_image_round_trip_through_png() {
    let resolved = FontConfig {
        load_system_fonts: false,
        ..FontConfig::default()
    }
    .resolve();
    let mut surface = CanvasSurface::with_resolved(64, 64, &resolved).unwrap();
    let image = CanvasImage::from_rgba8(1, 1, vec![255, 0, 0, 255]).unwrap();
    surface.draw_image(
        &image,
        &RectParams::new(0.0, 0.0, 64.0, 64.0),
        Some(&ClipRegion::Circle {
            cx: 32.0,
            cy: 32.0,
            radius: 30.0,
        }),
    );

    let png = surface.to_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 64));
    let center = decoded.get_pixel(32, 32).0;
    assert!(center[0] > 250 && center[1] < 5 && center[3] > 250);
    assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
}
