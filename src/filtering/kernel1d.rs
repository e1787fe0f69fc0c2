//! Fixed-length 1D filters applied to a single row or column.
//!
//! Every applier writes a full-length output. Positions whose taps would
//! fall outside the signal read the mirrored sample instead, so the edge
//! formulas double the reflected neighbor.

use crate::error::FilterError;
use crate::utils::validate_buffer_pair;

/// Shortest signal the boundary formulas can address
pub const MIN_SIGNAL_LENGTH: usize = 4;

/// Named 1D kernels used by the separable filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel1d {
    /// Centered difference `{-1, 0, 1} / 2`
    Difference3,
    /// Box average `{1, 1, 1} / 3`
    Average3,
    /// Box average `{1, 1, 1, 1, 1} / 5`
    Average5,
    /// `Average5` computed with a running sum over the interior
    Average5Running,
}

impl Kernel1d {
    /// Number of taps
    #[must_use]
    pub const fn length(self) -> usize {
        match self {
            Self::Difference3 | Self::Average3 => 3,
            Self::Average5 | Self::Average5Running => 5,
        }
    }

    /// Filters `input` into `output`.
    ///
    /// # Errors
    ///
    /// * `FilterError::LengthMismatch` - the buffers differ in length
    /// * `FilterError::SignalTooShort` - fewer than `MIN_SIGNAL_LENGTH` samples
    pub fn apply(self, input: &[f32], output: &mut [f32]) -> Result<(), FilterError> {
        validate_signal(input, output)?;
        self.apply_unchecked(input, output);
        Ok(())
    }

    pub(crate) fn apply_unchecked(self, input: &[f32], output: &mut [f32]) {
        match self {
            Self::Difference3 => difference3_unchecked(input, output),
            Self::Average3 => average3_unchecked(input, output),
            Self::Average5 => average5_unchecked(input, output),
            Self::Average5Running => average5_running_unchecked(input, output),
        }
    }
}

fn validate_signal(input: &[f32], output: &[f32]) -> Result<(), FilterError> {
    validate_buffer_pair(input.len(), output.len())?;
    if input.len() < MIN_SIGNAL_LENGTH {
        return Err(FilterError::SignalTooShort {
            length: input.len(),
            minimum: MIN_SIGNAL_LENGTH,
        });
    }
    Ok(())
}

/// Centered difference; both endpoints are 0 because the mirrored neighbor
/// equals the inner one.
pub fn difference3(input: &[f32], output: &mut [f32]) -> Result<(), FilterError> {
    Kernel1d::Difference3.apply(input, output)
}

/// Three-tap box average with mirrored endpoints.
pub fn average3(input: &[f32], output: &mut [f32]) -> Result<(), FilterError> {
    Kernel1d::Average3.apply(input, output)
}

/// Five-tap box average with mirrored boundary positions.
pub fn average5(input: &[f32], output: &mut [f32]) -> Result<(), FilterError> {
    Kernel1d::Average5.apply(input, output)
}

/// Five-tap box average whose interior is a sliding running sum.
///
/// Matches [`average5`] up to floating-point rounding.
pub fn average5_running(input: &[f32], output: &mut [f32]) -> Result<(), FilterError> {
    Kernel1d::Average5Running.apply(input, output)
}

fn difference3_unchecked(input: &[f32], output: &mut [f32]) {
    let n = input.len();
    output[0] = 0.0;
    for k in 1..n - 1 {
        output[k] = (input[k + 1] - input[k - 1]) / 2.0;
    }
    output[n - 1] = 0.0;
}

fn average3_unchecked(input: &[f32], output: &mut [f32]) {
    let n = input.len();
    output[0] = (input[0] + 2.0 * input[1]) / 3.0;
    for k in 1..n - 1 {
        output[k] = (input[k - 1] + input[k] + input[k + 1]) / 3.0;
    }
    output[n - 1] = (input[n - 1] + 2.0 * input[n - 2]) / 3.0;
}

/// Writes positions `0, 1, n-2, n-1` of a five-tap average.
fn average5_borders(input: &[f32], output: &mut [f32]) {
    let n = input.len();
    // taps -2, -1 reflect onto 2, 1
    output[0] = (input[0] + 2.0 * input[1] + 2.0 * input[2]) / 5.0;
    // tap -1 reflects onto 1
    output[1] = (input[0] + 2.0 * input[1] + input[2] + input[3]) / 5.0;
    output[n - 2] = (input[n - 1] + 2.0 * input[n - 2] + input[n - 3] + input[n - 4]) / 5.0;
    output[n - 1] = (input[n - 1] + 2.0 * input[n - 2] + 2.0 * input[n - 3]) / 5.0;
}

fn average5_unchecked(input: &[f32], output: &mut [f32]) {
    let n = input.len();
    average5_borders(input, output);
    for k in 2..n.saturating_sub(2) {
        output[k] =
            (input[k - 2] + input[k - 1] + input[k] + input[k + 1] + input[k + 2]) / 5.0;
    }
}

fn average5_running_unchecked(input: &[f32], output: &mut [f32]) {
    let n = input.len();
    average5_borders(input, output);
    if n < 5 {
        return;
    }

    // f64 keeps the add/subtract drift below f32 resolution on long lanes
    let mut sum: f64 = input[..5].iter().copied().map(f64::from).sum();
    output[2] = (sum / 5.0) as f32;
    for k in 3..n - 2 {
        sum += f64::from(input[k + 2]) - f64::from(input[k - 3]);
        output[k] = (sum / 5.0) as f32;
    }
}
