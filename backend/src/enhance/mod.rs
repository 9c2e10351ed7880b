//! Image enhancement pipeline.
//!
//! Takes any image the `image` crate can decode and returns an RGB PNG
//! `scale` times larger in each dimension:
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │  decode  │──▶│ Lanczos3 │──▶│ unsharp  │──▶│ contrast │──▶│   PNG    │
//! │  → RGB8  │   │  ×scale  │   │   mask   │   │  adjust  │   │  encode  │
//! └──────────┘   └──────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use serde::{Deserialize, Serialize};

use crate::error::{EnhanceError, EnhanceResult};

/// Tuning of the enhancement pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceOptions {
    /// Upscaling factor per dimension (1-8)
    pub scale: u32,
    /// Gaussian sigma of the unsharp mask
    pub sharpen_sigma: f32,
    /// Minimum difference for the unsharp mask to apply
    pub sharpen_threshold: i32,
    /// Contrast adjustment, in percent (positive increases)
    pub contrast: f32,
    /// Largest output accepted, width × height
    pub max_output_pixels: u64,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            scale: 4,
            sharpen_sigma: 1.2,
            sharpen_threshold: 2,
            contrast: 8.0,
            max_output_pixels: 64_000_000,
        }
    }
}

/// An enhanced image, PNG-encoded.
#[derive(Debug, Clone)]
pub struct EnhancedImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub source_width: u32,
    pub source_height: u32,
}

/// Enhance an encoded image.
pub fn enhance_bytes(bytes: &[u8], options: &EnhanceOptions) -> EnhanceResult<EnhancedImage> {
    if !(1..=8).contains(&options.scale) {
        return Err(EnhanceError::InvalidScale(options.scale));
    }

    // Check the output budget from the header before decoding any pixels
    let (width, height) = reader(bytes)?
        .into_dimensions()
        .map_err(|e| EnhanceError::Decode(e.to_string()))?;
    let (out_w, out_h) = output_dimensions(width, height, options)?;

    let source = reader(bytes)?
        .decode()
        .map_err(|e| EnhanceError::Decode(e.to_string()))?
        .to_rgb8();

    let enhanced = enhance_rgb(&source, out_w, out_h, options);
    let png = encode_png(enhanced)?;

    Ok(EnhancedImage {
        png,
        width: out_w,
        height: out_h,
        source_width: width,
        source_height: height,
    })
}

/// Output size for a `width`×`height` input, checked against the pixel budget.
pub fn output_dimensions(width: u32, height: u32, options: &EnhanceOptions) -> EnhanceResult<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(EnhanceError::EmptyInput);
    }

    let out_w = u64::from(width) * u64::from(options.scale);
    let out_h = u64::from(height) * u64::from(options.scale);
    let too_large = out_w > u64::from(u32::MAX)
        || out_h > u64::from(u32::MAX)
        || out_w
            .checked_mul(out_h)
            .map_or(true, |pixels| pixels > options.max_output_pixels);
    if too_large {
        return Err(EnhanceError::TooLarge {
            width: out_w,
            height: out_h,
            limit: options.max_output_pixels,
        });
    }

    Ok((out_w as u32, out_h as u32))
}

fn enhance_rgb(source: &RgbImage, out_w: u32, out_h: u32, options: &EnhanceOptions) -> RgbImage {
    let upscaled = if (out_w, out_h) == source.dimensions() {
        source.clone()
    } else {
        imageops::resize(source, out_w, out_h, FilterType::Lanczos3)
    };

    let sharpened = imageops::unsharpen(&upscaled, options.sharpen_sigma, options.sharpen_threshold);
    imageops::contrast(&sharpened, options.contrast)
}

fn encode_png(image: RgbImage) -> EnhanceResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| EnhanceError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

fn reader(bytes: &[u8]) -> EnhanceResult<ImageReader<Cursor<&[u8]>>> {
    if bytes.is_empty() {
        return Err(EnhanceError::Decode("empty upload".to_string()));
    }
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EnhanceError::Decode(e.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::Rgb;

    pub(crate) fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 17 % 256) as u8, (y * 29 % 256) as u8, ((x + y) * 7 % 256) as u8])
        });
        encode_png(img).unwrap()
    }

    #[test]
    fn test_enhance_scales_dimensions() {
        let result = enhance_bytes(&sample_png(16, 10), &EnhanceOptions::default()).unwrap();
        assert_eq!((result.width, result.height), (64, 40));
        assert_eq!((result.source_width, result.source_height), (16, 10));

        let decoded = image::load_from_memory_with_format(&result.png, ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 40));
    }

    #[test]
    fn test_scale_one_keeps_size() {
        let options = EnhanceOptions { scale: 1, ..EnhanceOptions::default() };
        let result = enhance_bytes(&sample_png(12, 9), &options).unwrap();
        assert_eq!((result.width, result.height), (12, 9));
    }

    #[test]
    fn test_rejects_non_image() {
        let err = enhance_bytes(b"definitely not an image", &EnhanceOptions::default()).unwrap_err();
        assert!(matches!(err, EnhanceError::Decode(_)));

        let err = enhance_bytes(&[], &EnhanceOptions::default()).unwrap_err();
        assert!(matches!(err, EnhanceError::Decode(_)));
    }

    #[test]
    fn test_pixel_budget() {
        let options = EnhanceOptions { max_output_pixels: 1_000, ..EnhanceOptions::default() };
        let err = enhance_bytes(&sample_png(16, 16), &options).unwrap_err();
        assert!(matches!(err, EnhanceError::TooLarge { width: 64, height: 64, limit: 1_000 }));
    }

    #[test]
    fn test_invalid_scale() {
        let options = EnhanceOptions { scale: 0, ..EnhanceOptions::default() };
        assert!(matches!(
            enhance_bytes(&sample_png(4, 4), &options),
            Err(EnhanceError::InvalidScale(0))
        ));
    }

    #[test]
    fn test_output_dimensions_huge_header() {
        let err = output_dimensions(0x7FFF_FFFF, 0x7FFF_FFFF, &EnhanceOptions::default()).unwrap_err();
        assert!(matches!(err, EnhanceError::TooLarge { limit: 64_000_000, .. }));

        let options = EnhanceOptions { scale: 1, max_output_pixels: u64::MAX, ..EnhanceOptions::default() };
        assert_eq!(output_dimensions(u32::MAX, u32::MAX, &options).unwrap(), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_output_dimensions_empty() {
        assert!(matches!(
            output_dimensions(0, 10, &EnhanceOptions::default()),
            Err(EnhanceError::EmptyInput)
        ));
    }
}
