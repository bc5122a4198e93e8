//! Decoded raster images that can be composited onto a surface.

use crate::error::{CanvasError, CanvasResult};

/// An RGBA image held in premultiplied form, ready for compositing.
#[derive(Clone)]
pub struct CanvasImage {
    pub(crate) pixmap: tiny_skia::Pixmap,
}

impl CanvasImage {
    /// Build an image from straight (non-premultiplied) RGBA bytes.
    pub fn from_rgba8(width: u32, height: u32, mut data: Vec<u8>) -> CanvasResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CanvasError::InvalidImageData {
                expected,
                actual: data.len(),
            });
        }

        for pixel in data.chunks_exact_mut(4) {
            let a = pixel[3];
            if a == 255 {
                continue;
            }
            // (color * alpha + 127) / 255 for proper rounding
            let a16 = a as u16;
            pixel[0] = ((pixel[0] as u16 * a16 + 127) / 255) as u8;
            pixel[1] = ((pixel[1] as u16 * a16 + 127) / 255) as u8;
            pixel[2] = ((pixel[2] as u16 * a16 + 127) / 255) as u8;
        }

        let size = tiny_skia::IntSize::from_wh(width, height)
            .ok_or(CanvasError::InvalidDimensions { width, height })?;
        let pixmap = tiny_skia::Pixmap::from_vec(data, size)
            .ok_or(CanvasError::InvalidDimensions { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }
}

impl std::fmt::Debug for CanvasImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premultiplies_alpha() {
        let image = CanvasImage::from_rgba8(1, 1, vec![255, 128, 0, 128]).unwrap();
        assert_eq!(image.pixmap.data(), &[128, 64, 0, 128]);
    }

    #[test]
    fn test_rejects_short_buffer() {
        assert!(matches!(
            CanvasImage::from_rgba8(2, 2, vec![0; 8]),
            Err(CanvasError::InvalidImageData {
                expected: 16,
                actual: 8
            })
        ));
    }
}
