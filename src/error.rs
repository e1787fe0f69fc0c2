use thiserror::Error;

/// Error type for convolution and neighborhood operations
///
/// Every variant is raised before any output is written, so a failed
/// operation never leaves a partially filtered image behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The image has a zero width or height
    #[error("Image dimensions must be non-zero")]
    EmptyImage,

    /// A pixel, row or column index lies outside the image
    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Neighborhood windows must have an odd side length
    #[error("Window size {size} must be odd")]
    EvenWindowSize { size: usize },

    /// The window radius is not strictly smaller than both image dimensions
    ///
    /// A single mirror reflection cannot bring every window sample back
    /// inside the image in that case.
    #[error("Window of size {size} does not fit a {width}x{height} image under mirror borders")]
    WindowTooLarge { size: usize, width: u32, height: u32 },

    /// A 1D signal is shorter than the boundary formulas require
    #[error("Signal length {length} is below the minimum of {minimum}")]
    SignalTooShort { length: usize, minimum: usize },

    /// Input and output buffers differ in length
    #[error("Buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Two images that must share dimensions do not
    #[error("Image dimensions mismatch: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Actual dimensions (width, height)
        actual: (u32, u32),
    },

    /// A box length that is even, zero or larger than the image
    #[error("Kernel length {length} must be odd and at most {limit}")]
    InvalidKernelLength { length: u32, limit: u32 },

    /// The requested operation has no implementation for these parameters
    #[error("{operation} is not implemented for {detail}")]
    NotImplemented {
        operation: &'static str,
        detail: String,
    },

    /// Failed to create ImageBuffer from filtered samples
    #[error("Failed to create ImageBuffer from filtered samples")]
    ImageBufferCreationFailed,
}

/// Error type for pointwise transforms and plane-stack projections
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointwiseError {
    /// The image has no samples to transform
    #[error("Image dimensions must be non-zero")]
    EmptyImage,

    /// Rescaling needs at least two distinct intensities
    ///
    /// When every sample holds the same value the stretch factor
    /// `255 / (max - min)` is undefined.
    #[error("Cannot rescale a flat image (every sample is {value})")]
    FlatImage { value: f32 },

    /// A projection was requested over zero planes
    #[error("Plane stack is empty")]
    EmptyStack,

    /// A plane in the stack differs in size from the first plane
    #[error("Plane {index} has dimensions {actual:?}, expected {expected:?}")]
    DimensionMismatch {
        index: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Failed to create ImageBuffer from projected samples
    #[error("Failed to create ImageBuffer from projected samples")]
    ImageBufferCreationFailed,
}
