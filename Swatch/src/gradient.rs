//! PNG rasterization of the picker's background surfaces.
//!
//! floem's `img` view consumes encoded bytes, so each surface is rendered
//! once into a small PNG and swapped out only when its inputs change (the
//! saturation square depends on hue alone).

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use image::{Rgb, RgbImage};

use crate::color::{self, hex_to_rgb};

/// Encode an RGB buffer as PNG. A `Vec` sink cannot fail to write, so an
/// encoder error leaves the image empty rather than propagating.
fn encode_png(img: &RgbImage) -> Vec<u8> {
    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_data);
    if img.write_with_encoder(encoder).is_err() {
        return Vec::new();
    }
    png_data
}

/// Rasterize the saturation/value square for a fixed hue.
///
/// Saturation runs 0 to 100 left to right, value 100 to 0 top to bottom.
pub fn saturation_square_png(hue: f64, width: u32, height: u32) -> Vec<u8> {
    let max_x = f64::from(width.saturating_sub(1).max(1));
    let max_y = f64::from(height.saturating_sub(1).max(1));
    let img = RgbImage::from_fn(width, height, |x, y| {
        let s = f64::from(x) / max_x * 100.0;
        let v = 100.0 - f64::from(y) / max_y * 100.0;
        let (r, g, b) = color::hsv_to_rgb(hue, s, v);
        Rgb([r, g, b])
    });
    encode_png(&img)
}

/// Rasterize the hue strip, 0 to 360 degrees left to right at full
/// saturation and value.
pub fn hue_strip_png(width: u32, height: u32) -> Vec<u8> {
    let max_x = f64::from(width.saturating_sub(1).max(1));
    let img = RgbImage::from_fn(width, height, |x, _| {
        let h = f64::from(x) / max_x * 360.0;
        let (r, g, b) = color::hsv_to_rgb(h, 100.0, 100.0);
        Rgb([r, g, b])
    });
    encode_png(&img)
}

/// Rasterize the gradient-tab preview: the given color blending to white,
/// left to right.
pub fn blend_to_white_png(hex: &str, width: u32, height: u32) -> Vec<u8> {
    let (r0, g0, b0) = hex_to_rgb(hex);
    let max_x = f64::from(width.saturating_sub(1).max(1));
    let lerp = |a: u8, t: f64| -> u8 {
        (f64::from(a) + (255.0 - f64::from(a)) * t).round() as u8
    };
    let img = RgbImage::from_fn(width, height, |x, _| {
        let t = f64::from(x) / max_x;
        Rgb([lerp(r0, t), lerp(g0, t), lerp(b0, t)])
    });
    encode_png(&img)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn decode(bytes: &[u8]) -> RgbImage {
        assert_eq!(&bytes[..8], &PNG_MAGIC);
        image::load_from_memory(bytes)
            .expect("generated PNG should decode")
            .to_rgb8()
    }

    #[test]
    fn test_saturation_square_corners() {
        let img = decode(&saturation_square_png(0.0, 64, 48));
        assert_eq!((img.width(), img.height()), (64, 48));
        // Top-left is white (s=0, v=100), top-right is the pure hue,
        // bottom edge is black.
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(63, 0), &Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(0, 47), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(63, 47), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_hue_strip_sweeps_the_wheel() {
        let img = decode(&hue_strip_png(261, 8));
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 0, 0]));
        // x=130 of 260 is exactly 180 degrees: cyan.
        assert_eq!(img.get_pixel(130, 0), &Rgb([0, 255, 255]));
        // Right edge is 360, which folds back to red.
        assert_eq!(img.get_pixel(260, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_blend_strip_ends() {
        let img = decode(&blend_to_white_png("#2563EB", 32, 8));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0x25, 0x63, 0xEB]));
        assert_eq!(img.get_pixel(31, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        let one = decode(&saturation_square_png(120.0, 1, 1));
        assert_eq!((one.width(), one.height()), (1, 1));
        let _ = hue_strip_png(1, 1);
    }
}
