use crate::error::FilterError;
use crate::filtering::border::{neighborhood_unchecked, validate_window, Neighborhood};
use crate::utils::{validate_buffer_pair, validate_matching_dimensions};
use crate::FloatImage;

/// Row, column and neighborhood access plus the elementwise arithmetic the
/// filters need, on top of `ImageBuffer`'s own `get_pixel`/`put_pixel`.
///
/// Buffer-taking methods fill or read caller-provided slices so a single
/// scratch buffer can be reused across every row or column of a pass.
pub trait ImageAccess {
    /// Copies row `y` into `row`, which must be exactly `width` long.
    ///
    /// # Errors
    ///
    /// * `FilterError::OutOfBounds` - `y` is not a row of the image
    /// * `FilterError::LengthMismatch` - `row` has the wrong length
    fn get_row(&self, y: u32, row: &mut [f32]) -> Result<(), FilterError>;

    /// Overwrites row `y` with `row`.
    fn put_row(&mut self, y: u32, row: &[f32]) -> Result<(), FilterError>;

    /// Copies column `x` into `column`, which must be exactly `height` long.
    fn get_column(&self, x: u32, column: &mut [f32]) -> Result<(), FilterError>;

    /// Overwrites column `x` with `column`.
    fn put_column(&mut self, x: u32, column: &[f32]) -> Result<(), FilterError>;

    /// Fills `window` with the mirror-bordered neighborhood of `(x, y)`.
    ///
    /// # Errors
    ///
    /// See [`crate::extract_neighborhood`].
    fn get_neighborhood<const N: usize>(
        &self,
        x: u32,
        y: u32,
        window: &mut Neighborhood<N>,
    ) -> Result<(), FilterError>;

    /// Raises every sample to `exponent`.
    fn pow_in_place(&mut self, exponent: f32);

    /// Adds `other` sample by sample.
    ///
    /// # Errors
    ///
    /// * `FilterError::DimensionMismatch` - the images differ in size
    fn add_in_place(&mut self, other: &Self) -> Result<(), FilterError>;

    /// Replaces every sample by its square root.
    fn sqrt_in_place(&mut self);
}

impl ImageAccess for FloatImage {
    fn get_row(&self, y: u32, row: &mut [f32]) -> Result<(), FilterError> {
        let (width, height) = self.dimensions();
        check_row(y, width, height)?;
        validate_buffer_pair(width as usize, row.len())?;

        let start = y as usize * width as usize;
        row.copy_from_slice(&self.as_raw()[start..start + width as usize]);
        Ok(())
    }

    fn put_row(&mut self, y: u32, row: &[f32]) -> Result<(), FilterError> {
        let (width, height) = self.dimensions();
        check_row(y, width, height)?;
        validate_buffer_pair(width as usize, row.len())?;

        let start = y as usize * width as usize;
        let samples: &mut [f32] = self;
        samples[start..start + width as usize].copy_from_slice(row);
        Ok(())
    }

    fn get_column(&self, x: u32, column: &mut [f32]) -> Result<(), FilterError> {
        let (width, height) = self.dimensions();
        check_column(x, width, height)?;
        validate_buffer_pair(height as usize, column.len())?;

        for (y, sample) in (0..height).zip(column.iter_mut()) {
            *sample = self.get_pixel(x, y)[0];
        }
        Ok(())
    }

    fn put_column(&mut self, x: u32, column: &[f32]) -> Result<(), FilterError> {
        let (width, height) = self.dimensions();
        check_column(x, width, height)?;
        validate_buffer_pair(height as usize, column.len())?;

        for (y, &sample) in (0..height).zip(column.iter()) {
            self.get_pixel_mut(x, y)[0] = sample;
        }
        Ok(())
    }

    fn get_neighborhood<const N: usize>(
        &self,
        x: u32,
        y: u32,
        window: &mut Neighborhood<N>,
    ) -> Result<(), FilterError> {
        validate_window::<N>(self)?;
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return Err(FilterError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        *window = neighborhood_unchecked::<N>(self, x, y);
        Ok(())
    }

    fn pow_in_place(&mut self, exponent: f32) {
        // integral squares are by far the common case
        if exponent == 2.0 {
            self.iter_mut().for_each(|v| *v *= *v);
        } else {
            self.iter_mut().for_each(|v| *v = v.powf(exponent));
        }
    }

    fn add_in_place(&mut self, other: &Self) -> Result<(), FilterError> {
        validate_matching_dimensions(self.dimensions(), other.dimensions())?;
        self.iter_mut()
            .zip(other.iter())
            .for_each(|(v, &o)| *v += o);
        Ok(())
    }

    fn sqrt_in_place(&mut self) {
        self.iter_mut().for_each(|v| *v = v.sqrt());
    }
}

const fn check_row(y: u32, width: u32, height: u32) -> Result<(), FilterError> {
    if y < height {
        Ok(())
    } else {
        Err(FilterError::OutOfBounds {
            x: 0,
            y,
            width,
            height,
        })
    }
}

const fn check_column(x: u32, width: u32, height: u32) -> Result<(), FilterError> {
    if x < width {
        Ok(())
    } else {
        Err(FilterError::OutOfBounds {
            x,
            y: 0,
            width,
            height,
        })
    }
}
