use crate::error::PointwiseError;
use crate::FloatImage;
use image::Luma;
use imageproc::map::map_colors;
use itertools::{Itertools, MinMaxResult};

/// Upper end of the display intensity range
pub const INTENSITY_MAX: f32 = 255.0;

/// Default ceiling used by [`PointwiseTransform::saturate_default`]
pub const SATURATION_LIMIT: f32 = 10000.0;

/// Stateless per-sample remaps. Each one allocates a new image.
pub trait PointwiseTransform {
    /// Contrast reversal `255 - v`
    fn invert(&self) -> FloatImage;

    /// Linear stretch of `[min, max]` onto `[0, 255]`
    ///
    /// # Errors
    ///
    /// * `PointwiseError::FlatImage` - every sample has the same value
    fn rescale(&self) -> Result<FloatImage, PointwiseError>;

    /// Clamps every sample to at most `limit`
    fn saturate(&self, limit: f32) -> FloatImage;

    /// [`saturate`](Self::saturate) at [`SATURATION_LIMIT`]
    fn saturate_default(&self) -> FloatImage {
        self.saturate(SATURATION_LIMIT)
    }
}

impl PointwiseTransform for FloatImage {
    fn invert(&self) -> FloatImage {
        map_colors(self, |Luma([v])| Luma([INTENSITY_MAX - v]))
    }

    fn rescale(&self) -> Result<FloatImage, PointwiseError> {
        let (min, max) = match self.iter().copied().minmax() {
            MinMaxResult::NoElements => return Err(PointwiseError::EmptyImage),
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        if max <= min {
            return Err(PointwiseError::FlatImage { value: min });
        }

        let gain = INTENSITY_MAX / (max - min);
        Ok(map_colors(self, |Luma([v])| Luma([gain * (v - min)])))
    }

    fn saturate(&self, limit: f32) -> FloatImage {
        map_colors(self, |Luma([v])| Luma([v.min(limit)]))
    }
}
