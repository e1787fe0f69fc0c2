//! Separable 2D convolution: one 1D pass along every row, then one along
//! every column of the intermediate result.

use crate::error::FilterError;
use crate::filtering::image_access::ImageAccess;
use crate::filtering::kernel1d::{Kernel1d, MIN_SIGNAL_LENGTH};
use crate::filtering::stencil::Stencil;
use crate::utils::{for_each_row_mut, map_lanes, validate_non_empty_image};
use crate::FloatImage;
use image::ImageBuffer;

/// Named factorizations of a 2D stencil into a row kernel and a column kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparableFilter {
    /// Difference along rows, average along columns
    EdgeVertical,
    /// Average along rows, difference along columns
    EdgeHorizontal,
    /// Five-tap average along both axes
    MovingAverage5,
    /// Five-tap running-sum average along both axes
    MovingAverage5Running,
}

impl SeparableFilter {
    /// Kernel applied to every row in the first pass
    #[must_use]
    pub const fn row_kernel(self) -> Kernel1d {
        match self {
            Self::EdgeVertical => Kernel1d::Difference3,
            Self::EdgeHorizontal => Kernel1d::Average3,
            Self::MovingAverage5 => Kernel1d::Average5,
            Self::MovingAverage5Running => Kernel1d::Average5Running,
        }
    }

    /// Kernel applied to every column of the intermediate image
    #[must_use]
    pub const fn column_kernel(self) -> Kernel1d {
        match self {
            Self::EdgeVertical => Kernel1d::Average3,
            Self::EdgeHorizontal => Kernel1d::Difference3,
            Self::MovingAverage5 => Kernel1d::Average5,
            Self::MovingAverage5Running => Kernel1d::Average5Running,
        }
    }

    /// The non-separable stencil this factorization reproduces
    #[must_use]
    pub const fn equivalent_stencil(self) -> Stencil {
        match self {
            Self::EdgeVertical => Stencil::EdgeVertical,
            Self::EdgeHorizontal => Stencil::EdgeHorizontal,
            Self::MovingAverage5 | Self::MovingAverage5Running => Stencil::MovingAverage5,
        }
    }
}

/// Convolves the image with a separable filter in O(width·height·k).
///
/// The row pass writes an intermediate image which is the only input of the
/// column pass. Output matches [`crate::convolve_stencil`] with
/// [`SeparableFilter::equivalent_stencil`] up to floating-point rounding.
///
/// # Errors
///
/// * `FilterError::EmptyImage` - the image has no pixels
/// * `FilterError::SignalTooShort` - a row or column holds fewer than
///   `MIN_SIGNAL_LENGTH` samples
pub fn convolve_separable(
    image: &FloatImage,
    filter: SeparableFilter,
) -> Result<FloatImage, FilterError> {
    let (width, height) = image.dimensions();
    log::debug!("convolve_separable {:?} on {}x{}", filter, width, height);

    validate_non_empty_image(width, height)?;
    let shortest = width.min(height) as usize;
    if shortest < MIN_SIGNAL_LENGTH {
        return Err(FilterError::SignalTooShort {
            length: shortest,
            minimum: MIN_SIGNAL_LENGTH,
        });
    }

    let row_kernel = filter.row_kernel();
    log::trace!("row pass with {:?}", row_kernel);
    let samples = image.as_raw();
    let row_len = width as usize;
    let mut data = vec![0.0f32; samples.len()];
    for_each_row_mut(&mut data, row_len, |y, row_out| {
        let start = y * row_len;
        row_kernel.apply_unchecked(&samples[start..start + row_len], row_out);
    });
    let mut intermediate: FloatImage = ImageBuffer::from_raw(width, height, data)
        .ok_or(FilterError::ImageBufferCreationFailed)?;

    let column_kernel = filter.column_kernel();
    log::trace!("column pass with {:?}", column_kernel);
    let columns = map_lanes(width, |x| -> Result<Vec<f32>, FilterError> {
        let mut column_in = vec![0.0f32; height as usize];
        let mut column_out = vec![0.0f32; height as usize];
        intermediate.get_column(x, &mut column_in)?;
        column_kernel.apply_unchecked(&column_in, &mut column_out);
        Ok(column_out)
    });
    for (x, column) in (0..width).zip(columns) {
        intermediate.put_column(x, &column?)?;
    }

    Ok(intermediate)
}

/// Moving average of odd side `length` computed with running sums.
///
/// Only `length == 5` has an implementation, delegating to
/// [`SeparableFilter::MovingAverage5Running`]. Other lengths fail with
/// `FilterError::NotImplemented` instead of returning the input.
///
/// # Errors
///
/// * `FilterError::InvalidKernelLength` - `length` is even, zero or larger
///   than the shorter image side
/// * `FilterError::NotImplemented` - any valid length other than 5
pub fn moving_average_recursive(
    image: &FloatImage,
    length: u32,
) -> Result<FloatImage, FilterError> {
    let (width, height) = image.dimensions();
    validate_non_empty_image(width, height)?;

    let limit = width.min(height);
    if length % 2 == 0 || length > limit {
        return Err(FilterError::InvalidKernelLength { length, limit });
    }

    if length == 5 {
        return convolve_separable(image, SeparableFilter::MovingAverage5Running);
    }

    log::warn!("moving_average_recursive requested with unsupported length {length}");
    Err(FilterError::NotImplemented {
        operation: "moving_average_recursive",
        detail: format!("length {length}"),
    })
}
