//! Per-pixel reductions across a stack of same-sized planes.

use crate::error::PointwiseError;
use crate::FloatImage;
use image::ImageBuffer;

/// Per-pixel maximum over every plane of the stack.
///
/// # Errors
///
/// * `PointwiseError::EmptyStack` - the stack has no planes
/// * `PointwiseError::DimensionMismatch` - a plane differs in size from the first
pub fn project_maximum(stack: &[FloatImage]) -> Result<FloatImage, PointwiseError> {
    let (width, height) = validate_stack(stack)?;
    log::debug!("project_maximum over {} planes of {}x{}", stack.len(), width, height);

    let data = (0..width as usize * height as usize)
        .map(|i| {
            stack
                .iter()
                .map(|plane| plane.as_raw()[i])
                .fold(f32::NEG_INFINITY, f32::max)
        })
        .collect();

    ImageBuffer::from_raw(width, height, data).ok_or(PointwiseError::ImageBufferCreationFailed)
}

/// Per-pixel arithmetic mean over every plane of the stack.
///
/// # Errors
///
/// Same as [`project_maximum`].
pub fn project_mean(stack: &[FloatImage]) -> Result<FloatImage, PointwiseError> {
    let (width, height) = validate_stack(stack)?;
    log::debug!("project_mean over {} planes of {}x{}", stack.len(), width, height);

    let mut sums = vec![0.0f64; width as usize * height as usize];
    for plane in stack {
        for (sum, &v) in sums.iter_mut().zip(plane.as_raw()) {
            *sum += f64::from(v);
        }
    }
    let planes = stack.len() as f64;
    let data = sums.into_iter().map(|s| (s / planes) as f32).collect();

    ImageBuffer::from_raw(width, height, data).ok_or(PointwiseError::ImageBufferCreationFailed)
}

fn validate_stack(stack: &[FloatImage]) -> Result<(u32, u32), PointwiseError> {
    let first = stack.first().ok_or(PointwiseError::EmptyStack)?;
    let expected = first.dimensions();

    if let Some((index, plane)) = stack
        .iter()
        .enumerate()
        .find(|(_, plane)| plane.dimensions() != expected)
    {
        return Err(PointwiseError::DimensionMismatch {
            index,
            expected,
            actual: plane.dimensions(),
        });
    }
    Ok(expected)
}
