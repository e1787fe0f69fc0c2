mod error;
mod filtering;
mod utils;

#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Luma, Pixel};

pub use error::{FilterError, PointwiseError};
pub use filtering::border::{
    extract_column, extract_neighborhood, extract_row, mirror_index, Neighborhood,
};
pub use filtering::convolution::{Convolution, FilterResult};
pub use filtering::image_access::ImageAccess;
pub use filtering::kernel1d::{
    average3, average5, average5_running, difference3, Kernel1d, MIN_SIGNAL_LENGTH,
};
pub use filtering::pointwise::{PointwiseTransform, INTENSITY_MAX, SATURATION_LIMIT};
pub use filtering::projection::{project_maximum, project_mean};
pub use filtering::separable::{convolve_separable, moving_average_recursive, SeparableFilter};
pub use filtering::sobel::{sobel_gradients, sobel_magnitude};
pub use filtering::stencil::{convolve_stencil, Stencil};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Single-channel image of `f32` intensities
pub type FloatImage = Image<Luma<f32>>;
