//! Property-based tests for imageops-filter
//!
//! These tests use proptest to verify mathematical properties and invariants
//! that should hold for all possible inputs to the filters.

use image::{ImageBuffer, Luma};
use imageops_filter::{
    average5, average5_running, difference3, mirror_index, Convolution, FloatImage,
    SeparableFilter,
};
use proptest::prelude::*;

/// Strategy for generating images large enough for every filter
fn float_image() -> impl Strategy<Value = FloatImage> {
    (4u32..=16, 4u32..=16).prop_flat_map(|(width, height)| {
        prop::collection::vec(0u8..=255, (width * height) as usize).prop_map(move |samples| {
            let data: Vec<f32> = samples.into_iter().map(f32::from).collect();
            let image: FloatImage = ImageBuffer::from_raw(width, height, data).unwrap();
            image
        })
    })
}

/// Strategy for generating 1D signals of valid length
fn signal() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1000.0f32..1000.0, 4..=128)
}

fn max_abs_difference(a: &FloatImage, b: &FloatImage) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

proptest! {
    /// Property: separable edge detectors reproduce the direct stencil
    #[test]
    fn separable_edges_match_direct_stencil(image in float_image()) {
        for filter in [SeparableFilter::EdgeVertical, SeparableFilter::EdgeHorizontal] {
            let separable = image.convolve_separable(filter).unwrap();
            let direct = image.convolve_stencil(filter.equivalent_stencil()).unwrap();
            prop_assert!(max_abs_difference(&separable, &direct) < 1e-3);
        }
    }

    /// Property: both separable moving averages reproduce the 5×5 box
    #[test]
    fn separable_moving_average_matches_direct_stencil(image in float_image()) {
        let direct = image.moving_average5_non_separable().unwrap();
        let separable = image.moving_average5_separable().unwrap();
        let running = image.moving_average5_recursive().unwrap();
        prop_assert!(max_abs_difference(&separable, &direct) < 1e-3);
        prop_assert!(max_abs_difference(&running, &direct) < 1e-3);
    }

    /// Property: filters preserve dimensions
    #[test]
    fn filters_preserve_dimensions(image in float_image()) {
        let dimensions = image.dimensions();
        prop_assert_eq!(image.detect_edge_vertical_separable().unwrap().dimensions(), dimensions);
        prop_assert_eq!(image.moving_average5_non_separable().unwrap().dimensions(), dimensions);
        prop_assert_eq!(image.sobel().unwrap().dimensions(), dimensions);
    }

    /// Property: the running average equals the direct five-tap average
    #[test]
    fn running_average_matches_direct(input in signal()) {
        let mut direct = vec![0.0; input.len()];
        let mut running = vec![0.0; input.len()];
        average5(&input, &mut direct).unwrap();
        average5_running(&input, &mut running).unwrap();
        for (d, r) in direct.iter().zip(&running) {
            prop_assert!((d - r).abs() < 1e-2);
        }
    }

    /// Property: the centered difference is zero at both endpoints
    #[test]
    fn difference_endpoints_are_zero(input in signal()) {
        let mut output = vec![f32::NAN; input.len()];
        difference3(&input, &mut output).unwrap();
        prop_assert_eq!(output[0], 0.0);
        prop_assert_eq!(output[input.len() - 1], 0.0);
    }

    /// Property: Sobel magnitude is never negative
    #[test]
    fn sobel_is_non_negative(image in float_image()) {
        let magnitude = image.sobel().unwrap();
        prop_assert!(magnitude.iter().all(|&v| v >= 0.0));
    }

    /// Property: a uniform image has no edges anywhere
    #[test]
    fn sobel_of_uniform_image_is_zero(
        (width, height) in (3u32..=12, 3u32..=12),
        value in 0u8..=255
    ) {
        let image: FloatImage = ImageBuffer::from_pixel(width, height, Luma([f32::from(value)]));
        let magnitude = image.sobel().unwrap();
        prop_assert!(magnitude.iter().all(|&v| v == 0.0));
    }

    /// Property: a single reflection lands inside the axis for offsets up to one length
    #[test]
    fn mirror_index_stays_in_range(len in 2u32..=64, offset in 0i64..64) {
        let offset = offset % i64::from(len);
        let below = mirror_index(-offset, len);
        let above = mirror_index(i64::from(len) - 1 + offset, len);
        prop_assert_eq!(below, Some(offset as u32));
        prop_assert_eq!(above, Some(len - 1 - offset as u32));
    }
}
