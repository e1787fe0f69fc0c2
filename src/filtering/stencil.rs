//! Direct (non-separable) 2D convolution.
//!
//! Weight tables are indexed `[dx][dy]`, matching [`Neighborhood`]: the
//! first index walks along x and the second along y.

use crate::error::FilterError;
use crate::filtering::border::{neighborhood_unchecked, validate_window, Neighborhood};
use crate::utils::for_each_row_mut;
use crate::FloatImage;
use image::ImageBuffer;

const EDGE_VERTICAL: [[f32; 3]; 3] = [[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

const EDGE_HORIZONTAL: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]];

const SOBEL_X: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

const BOX_5: [[f32; 5]; 5] = [[1.0; 5]; 5];

/// Named 2D stencils
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stencil {
    /// Responds to vertical edges (change along x), scaled by 1/6
    EdgeVertical,
    /// Responds to horizontal edges (change along y), scaled by 1/6
    EdgeHorizontal,
    /// 5×5 box mean
    MovingAverage5,
    /// Sobel derivative along x, scaled by 1/6
    SobelX,
    /// Sobel derivative along y, scaled by 1/6
    SobelY,
}

impl Stencil {
    /// Side length of the window
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::MovingAverage5 => 5,
            Self::EdgeVertical | Self::EdgeHorizontal | Self::SobelX | Self::SobelY => 3,
        }
    }

    /// Value the weighted sum is divided by
    #[must_use]
    pub const fn divisor(self) -> f32 {
        match self {
            Self::MovingAverage5 => 25.0,
            Self::EdgeVertical | Self::EdgeHorizontal | Self::SobelX | Self::SobelY => 6.0,
        }
    }
}

/// Convolves the image with `stencil` directly, reading every window tap.
///
/// Costs O(width·height·k²). Each output row is independent and runs in
/// parallel with the `rayon` feature.
///
/// # Errors
///
/// * `FilterError::EmptyImage` - the image has no pixels
/// * `FilterError::WindowTooLarge` - the stencil radius reaches past an axis
pub fn convolve_stencil(image: &FloatImage, stencil: Stencil) -> Result<FloatImage, FilterError> {
    log::debug!(
        "convolve_stencil {:?} on {}x{}",
        stencil,
        image.width(),
        image.height()
    );

    let divisor = stencil.divisor();
    match stencil {
        Stencil::EdgeVertical => convolve_with(image, &EDGE_VERTICAL, divisor),
        Stencil::EdgeHorizontal => convolve_with(image, &EDGE_HORIZONTAL, divisor),
        Stencil::MovingAverage5 => convolve_with(image, &BOX_5, divisor),
        Stencil::SobelX => convolve_with(image, &SOBEL_X, divisor),
        Stencil::SobelY => convolve_with(image, &SOBEL_Y, divisor),
    }
}

fn convolve_with<const N: usize>(
    image: &FloatImage,
    weights: &[[f32; N]; N],
    divisor: f32,
) -> Result<FloatImage, FilterError> {
    validate_window::<N>(image)?;

    let (width, height) = image.dimensions();
    let mut data = vec![0.0f32; width as usize * height as usize];

    for_each_row_mut(&mut data, width as usize, |y, row| {
        for (x, out) in row.iter_mut().enumerate() {
            let window = neighborhood_unchecked::<N>(image, x as u32, y as u32);
            *out = respond(weights, &window, divisor);
        }
    });

    ImageBuffer::from_raw(width, height, data).ok_or(FilterError::ImageBufferCreationFailed)
}

/// Weighted sum of one window, divided by the stencil divisor.
fn respond<const N: usize>(
    weights: &[[f32; N]; N],
    window: &Neighborhood<N>,
    divisor: f32,
) -> f32 {
    let mut sum = 0.0f32;
    for (weight_column, sample_column) in weights.iter().zip(window) {
        for (weight, sample) in weight_column.iter().zip(sample_column) {
            sum += weight * sample;
        }
    }
    sum / divisor
}
