pub mod border;
pub mod convolution;
pub mod image_access;
pub mod kernel1d;
pub mod pointwise;
pub mod projection;
pub mod separable;
pub mod sobel;
pub mod stencil;
