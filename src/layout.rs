//! Row-major layout: element counts, strides and coordinate linearization.

use crate::error::{TensorError, TensorResult};

/// Total number of elements for `shape`, or `None` if the product overflows.
///
/// The empty shape has exactly one element. Any zero-sized axis gives zero.
pub fn element_count(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}

/// Row-major (C-contiguous) strides. The last axis has stride 1.
///
/// Returns `None` if a stride overflows `usize`. A shape with a zero-sized
/// axis can still overflow here, since strides ignore the outer axes.
pub fn row_major_strides(shape: &[usize]) -> Option<Vec<usize>> {
    let mut strides = vec![1usize; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1].checked_mul(shape[i + 1])?;
    }
    Some(strides)
}

/// Map a coordinate tuple to its offset in row-major storage.
///
/// Walks axes from innermost to outermost, accumulating `coord * stride`
/// and growing the stride by each axis size. Every coordinate is bounds
/// checked against its own axis first, so an overflow into a neighbouring
/// row is reported as [`TensorError::IndexOutOfRange`] rather than aliasing.
/// The stride is not grown past the outermost axis, so an offset that fits
/// in `usize` is returned even when the full element count does not.
pub fn linear_offset(shape: &[usize], coords: &[usize]) -> TensorResult<usize> {
    if coords.len() != shape.len() {
        return Err(TensorError::RankMismatch {
            expected: shape.len(),
            got: coords.len(),
        });
    }

    for axis in (0..shape.len()).rev() {
        let (index, size) = (coords[axis], shape[axis]);
        if index >= size {
            return Err(TensorError::IndexOutOfRange { axis, index, size });
        }
    }

    let overflow = || TensorError::SizeOverflow {
        shape: shape.to_vec(),
    };
    let mut offset = 0usize;
    let mut stride = 1usize;
    for axis in (0..shape.len()).rev() {
        let step = coords[axis].checked_mul(stride).ok_or_else(overflow)?;
        offset = offset.checked_add(step).ok_or_else(overflow)?;
        if axis > 0 {
            stride = stride.checked_mul(shape[axis]).ok_or_else(overflow)?;
        }
    }
    Ok(offset)
}
