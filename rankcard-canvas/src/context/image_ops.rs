//! Image compositing, pixel readback, and PNG output for CanvasSurface.

use super::CanvasSurface;
use crate::bitmap::CanvasImage;
use crate::error::CanvasResult;
use crate::geometry::{ClipRegion, RectParams};
use tiny_skia::Transform;

impl CanvasSurface {
    /// Draw an image stretched into `dest`, masked by `clip` for this call only.
    pub fn draw_image(
        &mut self,
        image: &CanvasImage,
        dest: &RectParams,
        clip: Option<&ClipRegion>,
    ) {
        log::debug!(
            target: "canvas",
            "drawImage {}x{} into {} {} {} {}",
            image.width(), image.height(), dest.x, dest.y, dest.width, dest.height
        );
        if dest.width <= 0.0 || dest.height <= 0.0 {
            return;
        }

        let paint = tiny_skia::PixmapPaint {
            quality: tiny_skia::FilterQuality::Bicubic,
            ..Default::default()
        };

        let scale_x = dest.width / image.width() as f32;
        let scale_y = dest.height / image.height() as f32;
        let transform = Transform::from_translate(dest.x, dest.y).pre_scale(scale_x, scale_y);

        let clip_mask = self.create_clip_mask(clip);
        self.pixmap.draw_pixmap(
            0,
            0,
            image.pixmap.as_ref(),
            &paint,
            transform,
            clip_mask.as_ref(),
        );
    }

    /// Read the whole surface as straight-alpha RGBA bytes.
    pub fn get_image_data(&self) -> Vec<u8> {
        let mut data = self.pixmap.data().to_vec();
        for pixel in data.chunks_exact_mut(4) {
            let a = pixel[3];
            if a == 0 {
                pixel.copy_from_slice(&[0, 0, 0, 0]);
            } else if a < 255 {
                let alpha_f = a as f32 / 255.0;
                pixel[0] = (pixel[0] as f32 / alpha_f).min(255.0) as u8;
                pixel[1] = (pixel[1] as f32 / alpha_f).min(255.0) as u8;
                pixel[2] = (pixel[2] as f32 / alpha_f).min(255.0) as u8;
            }
        }
        data
    }

    /// Export the surface as PNG data.
    pub fn to_png(&self) -> CanvasResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;

            // Convert from premultiplied to straight alpha for PNG
            let data = self.get_image_data();
            writer.write_image_data(&data)?;
        }
        Ok(buf)
    }
}
