//! Row-major layout helpers shared by construction and the structural operations.

use super::*;

/// Computes row-major strides: the last axis has stride 1 and each earlier axis steps over the product of
/// all extents after it.
pub(crate) fn row_major_strides<const R: usize>(shape: &[usize; R]) -> [usize; R] {
    let mut strides = [1; R];
    for axis in (0..R.saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }
    strides
}

/// Validates an explicitly supplied shape against rank `R` and size `S`.
pub(crate) fn validate_shape<const R: usize, const S: usize>(shape: &[usize]) -> Result<[usize; R]> {
    if shape.len() != R {
        return Err(TensorError::InvalidArgument(format!(
            "Shape {shape:?} has rank {}, but the tensor has rank {R}",
            shape.len()
        )));
    }

    if shape.contains(&0) {
        return Err(TensorError::InvalidArgument(format!(
            "Shape {shape:?} contains an empty axis"
        )));
    }

    let size = shape
        .iter()
        .try_fold(1_usize, |acc, &extent| acc.checked_mul(extent))
        .ok_or_else(|| {
            TensorError::InvalidArgument(format!("Size of shape {shape:?} overflows"))
        })?;

    if size != S {
        return Err(TensorError::InvalidArgument(format!(
            "Shape {shape:?} holds {size} elements, but the tensor has size {S}"
        )));
    }

    let mut dims = [0; R];
    dims.copy_from_slice(shape);
    Ok(dims)
}

/// Maps a multi-index to a linear offset. Extents are not checked.
pub(crate) fn ravel<const R: usize>(index: &[usize; R], strides: &[usize; R]) -> usize {
    index.iter().zip(strides).map(|(i, stride)| i * stride).sum()
}

/// Recovers the multi-index of a linear offset.
pub(crate) fn unravel<const R: usize>(
    offset: usize,
    shape: &[usize; R],
    strides: &[usize; R],
) -> [usize; R] {
    let mut index = [0; R];
    for axis in 0..R {
        index[axis] = offset / strides[axis] % shape[axis];
    }
    index
}
