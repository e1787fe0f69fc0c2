use crate::error::FilterError;
use crate::filtering::image_access::ImageAccess;
use crate::filtering::stencil::{convolve_stencil, Stencil};
use crate::utils::join;
use crate::FloatImage;

/// Computes the two directional gradient planes `(gx, gy)`.
///
/// The planes share no state and are computed concurrently with the
/// `rayon` feature.
///
/// # Errors
///
/// Same as [`convolve_stencil`] with a 3×3 stencil.
pub fn sobel_gradients(image: &FloatImage) -> Result<(FloatImage, FloatImage), FilterError> {
    let (gx, gy) = join(
        || convolve_stencil(image, Stencil::SobelX),
        || convolve_stencil(image, Stencil::SobelY),
    );
    Ok((gx?, gy?))
}

/// Orientation-independent edge strength `sqrt(gx² + gy²)`.
///
/// Every output sample is non-negative and a uniform image maps to zero.
pub fn sobel_magnitude(image: &FloatImage) -> Result<FloatImage, FilterError> {
    log::debug!("sobel_magnitude on {}x{}", image.width(), image.height());

    let (mut gx, mut gy) = sobel_gradients(image)?;
    gx.pow_in_place(2.0);
    gy.pow_in_place(2.0);
    gx.add_in_place(&gy)?;
    gx.sqrt_in_place();
    Ok(gx)
}
