//! Internal utility functions for imageops-filter.
//!
//! Validation helpers shared by the filters and the sequential/parallel
//! iteration helpers selected by the `rayon` feature.

use crate::error::FilterError;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Validates that an image has non-zero dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise `FilterError::EmptyImage`
pub const fn validate_non_empty_image(width: u32, height: u32) -> Result<(), FilterError> {
    if width == 0 || height == 0 {
        Err(FilterError::EmptyImage)
    } else {
        Ok(())
    }
}

/// Validates that two images have matching dimensions.
///
/// # Arguments
///
/// * `expected` - Dimensions of the reference image (width, height)
/// * `actual` - Dimensions of the image being checked (width, height)
pub fn validate_matching_dimensions(
    expected: (u32, u32),
    actual: (u32, u32),
) -> Result<(), FilterError> {
    if expected == actual {
        Ok(())
    } else {
        Err(FilterError::DimensionMismatch { expected, actual })
    }
}

/// Validates that an input/output buffer pair has the same length.
pub const fn validate_buffer_pair(expected: usize, actual: usize) -> Result<(), FilterError> {
    if expected == actual {
        Ok(())
    } else {
        Err(FilterError::LengthMismatch { expected, actual })
    }
}

/// Calls `f` once per row of a row-major buffer.
///
/// Rows are disjoint slices, so with the `rayon` feature they are visited
/// in parallel. `width` must be non-zero.
pub fn for_each_row_mut<F>(data: &mut [f32], width: usize, f: F)
where
    F: Fn(usize, &mut [f32]) + Send + Sync,
{
    #[cfg(feature = "rayon")]
    data.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| f(y, row));

    #[cfg(not(feature = "rayon"))]
    data.chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

/// Maps every lane index in `0..count` to an owned value, preserving order.
pub fn map_lanes<T, F>(count: u32, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(u32) -> T + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        (0..count).into_par_iter().map(f).collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        (0..count).map(f).collect()
    }
}

/// Runs two independent closures, concurrently with the `rayon` feature.
pub fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "rayon")]
    {
        rayon::join(a, b)
    }

    #[cfg(not(feature = "rayon"))]
    {
        (a(), b())
    }
}
