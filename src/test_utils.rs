//! Test utilities for imageops-filter
//!
//! This module provides common fixtures for testing the filters.
//! It is only compiled when running tests.

use crate::FloatImage;
use image::{ImageBuffer, Luma};
use itertools::iproduct;

/// Creates an image whose samples encode their own coordinates.
///
/// Every pixel holds `10 * x + y`, so mirrored reads can be checked by
/// looking at the value alone while both sides stay below 10.
pub fn create_indexed_image(width: u32, height: u32) -> FloatImage {
    ImageBuffer::from_fn(width, height, |x, y| Luma([(10 * x + y) as f32]))
}

/// Creates a diagonal ramp where every pixel holds `10 * (x + y)`.
pub fn create_ramp_image(width: u32, height: u32) -> FloatImage {
    ImageBuffer::from_fn(width, height, |x, y| Luma([(10 * (x + y)) as f32]))
}

/// Creates an image filled with a single value.
pub fn create_uniform_image(width: u32, height: u32, value: f32) -> FloatImage {
    ImageBuffer::from_pixel(width, height, Luma([value]))
}

/// Creates a deterministic pseudo-random image with integer samples in `0..=255`.
///
/// A small linear congruential generator keeps the fixture reproducible
/// without a random number dependency.
pub fn create_noise_image(width: u32, height: u32, seed: u32) -> FloatImage {
    let mut state = seed.wrapping_mul(747_796_405).wrapping_add(2_891_336_453);
    let mut image: FloatImage = ImageBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        image.put_pixel(x, y, Luma([(state >> 24) as f32]));
    }
    image
}

/// Compares two images pixel by pixel with a tolerance for floating-point errors.
///
/// # Returns
/// `true` if all samples are within tolerance and dimensions match, `false` otherwise
pub fn images_approx_equal(expected: &FloatImage, actual: &FloatImage, tolerance: f32) -> bool {
    expected.dimensions() == actual.dimensions()
        && expected
            .iter()
            .zip(actual.iter())
            .all(|(e, a)| (e - a).abs() <= tolerance)
}

/// Panics with the first differing pixel when two images are not close.
pub fn assert_images_close(expected: &FloatImage, actual: &FloatImage, tolerance: f32) {
    assert_eq!(expected.dimensions(), actual.dimensions());
    for (x, y, pixel) in expected.enumerate_pixels() {
        let e = pixel[0];
        let a = actual.get_pixel(x, y)[0];
        assert!(
            (e - a).abs() <= tolerance,
            "pixel ({x}, {y}): expected {e}, got {a}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_indexed_image_encodes_coordinates() {
        let image = create_indexed_image(3, 4);
        assert_eq!(image.dimensions(), (3, 4));
        assert_eq!(image.get_pixel(0, 0), &Luma([0.0]));
        assert_eq!(image.get_pixel(2, 3), &Luma([23.0]));
    }

    #[test]
    fn create_noise_image_is_reproducible() {
        let a = create_noise_image(5, 5, 7);
        let b = create_noise_image(5, 5, 7);
        let c = create_noise_image(5, 5, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|&v| (0.0..=255.0).contains(&v)));
    }

    #[test]
    fn images_approx_equal_with_tolerant_comparison_returns_true() {
        let image1 = create_uniform_image(2, 2, 100.0);
        let mut image2 = create_uniform_image(2, 2, 100.0);

        // Slightly modify one pixel
        image2.put_pixel(0, 0, Luma([101.0]));

        assert!(images_approx_equal(&image1, &image2, 1.5));
        assert!(!images_approx_equal(&image1, &image2, 0.5));
        assert!(!images_approx_equal(&image1, &create_uniform_image(2, 3, 100.0), 1.5));
    }
}
