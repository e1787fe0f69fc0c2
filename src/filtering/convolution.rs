use crate::error::FilterError;
use crate::filtering::separable::{convolve_separable, moving_average_recursive, SeparableFilter};
use crate::filtering::sobel::{sobel_gradients, sobel_magnitude};
use crate::filtering::stencil::{convolve_stencil, Stencil};
use crate::FloatImage;

/// Result type of convolution operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Mirror-bordered convolution filters on a single-channel float image
///
/// Each edge and average filter comes in a non-separable form that reads
/// the full window and a separable form that runs a row pass and a column
/// pass. Both forms of the same filter agree up to floating-point rounding.
///
/// # Examples
///
/// ```no_run
/// use imageops_filter::{Convolution, FloatImage};
/// use image::ImageBuffer;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let image: FloatImage = ImageBuffer::new(64, 48);
///
/// let edges = image.detect_edge_vertical_separable()?;
/// let strength = image.sobel()?;
/// # Ok(())
/// # }
/// ```
pub trait Convolution {
    /// Applies a named stencil directly.
    ///
    /// # Errors
    ///
    /// * `FilterError::EmptyImage` - the image has no pixels
    /// * `FilterError::WindowTooLarge` - the stencil does not fit the image
    fn convolve_stencil(&self, stencil: Stencil) -> FilterResult<FloatImage>;

    /// Applies a named separable factorization.
    ///
    /// # Errors
    ///
    /// * `FilterError::EmptyImage` - the image has no pixels
    /// * `FilterError::SignalTooShort` - a side is shorter than 4 pixels
    fn convolve_separable(&self, filter: SeparableFilter) -> FilterResult<FloatImage>;

    /// Generalized running-sum moving average; only `length == 5` is supported.
    ///
    /// # Errors
    ///
    /// * `FilterError::InvalidKernelLength` - even, zero or oversized length
    /// * `FilterError::NotImplemented` - any other valid length
    fn moving_average_recursive(&self, length: u32) -> FilterResult<FloatImage>;

    /// Sobel gradient planes `(gx, gy)`.
    fn sobel_gradients(&self) -> FilterResult<(FloatImage, FloatImage)>;

    /// Sobel gradient magnitude `sqrt(gx² + gy²)`.
    fn sobel(&self) -> FilterResult<FloatImage>;

    fn detect_edge_vertical_non_separable(&self) -> FilterResult<FloatImage> {
        self.convolve_stencil(Stencil::EdgeVertical)
    }

    fn detect_edge_vertical_separable(&self) -> FilterResult<FloatImage> {
        self.convolve_separable(SeparableFilter::EdgeVertical)
    }

    fn detect_edge_horizontal_non_separable(&self) -> FilterResult<FloatImage> {
        self.convolve_stencil(Stencil::EdgeHorizontal)
    }

    fn detect_edge_horizontal_separable(&self) -> FilterResult<FloatImage> {
        self.convolve_separable(SeparableFilter::EdgeHorizontal)
    }

    fn moving_average5_non_separable(&self) -> FilterResult<FloatImage> {
        self.convolve_stencil(Stencil::MovingAverage5)
    }

    fn moving_average5_separable(&self) -> FilterResult<FloatImage> {
        self.convolve_separable(SeparableFilter::MovingAverage5)
    }

    /// Separable 5×5 average whose passes use running sums.
    fn moving_average5_recursive(&self) -> FilterResult<FloatImage> {
        self.convolve_separable(SeparableFilter::MovingAverage5Running)
    }
}

impl Convolution for FloatImage {
    fn convolve_stencil(&self, stencil: Stencil) -> FilterResult<FloatImage> {
        convolve_stencil(self, stencil)
    }

    fn convolve_separable(&self, filter: SeparableFilter) -> FilterResult<FloatImage> {
        convolve_separable(self, filter)
    }

    fn moving_average_recursive(&self, length: u32) -> FilterResult<FloatImage> {
        moving_average_recursive(self, length)
    }

    fn sobel_gradients(&self) -> FilterResult<(FloatImage, FloatImage)> {
        sobel_gradients(self)
    }

    fn sobel(&self) -> FilterResult<FloatImage> {
        sobel_magnitude(self)
    }
}
