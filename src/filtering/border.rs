use crate::error::FilterError;
use crate::FloatImage;

/// Square window of samples around one pixel.
///
/// `window[i][j]` holds the sample at x offset `i - N/2` and y offset
/// `j - N/2` from the center pixel.
pub type Neighborhood<const N: usize> = [[f32; N]; N];

/// Mirrors an index back into `0..len` with a single reflection.
///
/// The edge sample is not repeated: `-1` maps to `1` and `len` maps to
/// `len - 2`.
///
/// # Returns
///
/// `None` when one reflection is not enough, which only happens for windows
/// wider than the axis.
#[must_use]
pub fn mirror_index(index: i64, len: u32) -> Option<u32> {
    let n = i64::from(len);
    let reflected = if index < 0 {
        -index
    } else if index >= n {
        2 * (n - 1) - index
    } else {
        index
    };

    if (0..n).contains(&reflected) {
        u32::try_from(reflected).ok()
    } else {
        None
    }
}

/// Single reflection for indices already known to be within one radius of
/// the axis.
#[inline]
const fn mirror_unchecked(index: i64, len: u32) -> u32 {
    let n = len as i64;
    let reflected = if index < 0 {
        -index
    } else if index >= n {
        2 * (n - 1) - index
    } else {
        index
    };
    reflected as u32
}

/// Checks that an `N×N` window can be extracted anywhere in the image.
///
/// The radius must be strictly smaller than both dimensions so that a single
/// reflection always lands inside the image.
pub fn validate_window<const N: usize>(image: &FloatImage) -> Result<(), FilterError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(FilterError::EmptyImage);
    }
    if N % 2 == 0 {
        return Err(FilterError::EvenWindowSize { size: N });
    }

    let radius = (N / 2) as u64;
    if radius >= u64::from(width) || radius >= u64::from(height) {
        return Err(FilterError::WindowTooLarge {
            size: N,
            width,
            height,
        });
    }
    Ok(())
}

/// Extracts the mirror-bordered `N×N` neighborhood centered on `(x, y)`.
///
/// # Errors
///
/// * `FilterError::EvenWindowSize` - `N` is even
/// * `FilterError::WindowTooLarge` - the radius reaches past a whole axis
/// * `FilterError::OutOfBounds` - `(x, y)` is not a pixel of the image
pub fn extract_neighborhood<const N: usize>(
    image: &FloatImage,
    x: u32,
    y: u32,
) -> Result<Neighborhood<N>, FilterError> {
    validate_window::<N>(image)?;
    let (width, height) = image.dimensions();
    if x >= width || y >= height {
        return Err(FilterError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(neighborhood_unchecked::<N>(image, x, y))
}

/// Window extraction without validation; callers run `validate_window` once
/// per image.
pub(crate) fn neighborhood_unchecked<const N: usize>(
    image: &FloatImage,
    x: u32,
    y: u32,
) -> Neighborhood<N> {
    let (width, height) = image.dimensions();
    let radius = (N / 2) as i64;
    let mut window = [[0.0f32; N]; N];

    for (i, column) in window.iter_mut().enumerate() {
        let sx = mirror_unchecked(i64::from(x) + i as i64 - radius, width);
        for (j, sample) in column.iter_mut().enumerate() {
            let sy = mirror_unchecked(i64::from(y) + j as i64 - radius, height);
            *sample = image.get_pixel(sx, sy)[0];
        }
    }

    window
}

/// Copies row `y` out of the image.
pub fn extract_row(image: &FloatImage, y: u32) -> Result<Vec<f32>, FilterError> {
    let (width, height) = image.dimensions();
    if y >= height {
        return Err(FilterError::OutOfBounds {
            x: 0,
            y,
            width,
            height,
        });
    }
    let start = y as usize * width as usize;
    Ok(image.as_raw()[start..start + width as usize].to_vec())
}

/// Copies column `x` out of the image.
pub fn extract_column(image: &FloatImage, x: u32) -> Result<Vec<f32>, FilterError> {
    let (width, height) = image.dimensions();
    if x >= width {
        return Err(FilterError::OutOfBounds {
            x,
            y: 0,
            width,
            height,
        });
    }
    Ok((0..height).map(|y| image.get_pixel(x, y)[0]).collect())
}
