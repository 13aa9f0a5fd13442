use std::fmt;
use std::ops::{Index, IndexMut};

use ndarray::{ArrayBase, ArrayD, ArrayViewD, Data, Dimension, IxDyn};

use crate::error::{TensorError, TensorResult};
use crate::layout;
use crate::literal::Literal;

/// Dense N-dimensional `f32` array stored contiguously in row-major order.
///
/// A tensor owns its shape and its buffer. The shape is fixed at
/// construction and `data().len() == product(shape())` always holds.
/// Cloning copies both.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Vec<usize>,
    data: Vec<f32>,
}

impl Tensor {
    /// Zero-filled tensor of the given shape.
    ///
    /// An empty shape gives a single element; a zero-sized axis gives none.
    ///
    /// # Panics
    ///
    /// Panics if the element count overflows `usize`. Use [`Tensor::try_new`]
    /// to get a [`TensorError::SizeOverflow`] instead.
    pub fn new(shape: &[usize]) -> Self {
        match Self::try_new(shape) {
            Ok(tensor) => tensor,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible form of [`Tensor::new`].
    pub fn try_new(shape: &[usize]) -> TensorResult<Self> {
        Self::full(shape, 0.0)
    }

    /// Tensor of the given shape with every element set to `value`.
    pub fn full(shape: &[usize], value: f32) -> TensorResult<Self> {
        let size = layout::element_count(shape).ok_or_else(|| TensorError::SizeOverflow {
            shape: shape.to_vec(),
        })?;
        log::trace!("allocating tensor of shape {:?} ({} elements)", shape, size);
        Ok(Tensor {
            shape: shape.to_vec(),
            data: vec![value; size],
        })
    }

    /// Build a tensor from nested sequences, inferring the shape from the
    /// nesting. The literal must be rectangular.
    ///
    /// ```
    /// use tensor_rs::Tensor;
    ///
    /// let t = Tensor::from_nested(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
    /// assert_eq!(t.shape(), &[3, 2]);
    /// assert_eq!(t.element(&[1, 0]).unwrap(), 3.0);
    /// ```
    pub fn from_nested(literal: impl Into<Literal>) -> TensorResult<Self> {
        let literal = literal.into();
        let shape = literal.infer_shape().map_err(|err| {
            log::debug!("rejected nested literal: {}", err);
            err
        })?;

        let size = layout::element_count(&shape)
            .ok_or_else(|| TensorError::SizeOverflow { shape: shape.clone() })?;
        let mut data = Vec::with_capacity(size);
        literal.flatten_into(&mut data);
        debug_assert_eq!(data.len(), size);

        log::trace!("built tensor of shape {:?} from literal", shape);
        Ok(Tensor { shape, data })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f32>) -> TensorResult<Self> {
        let expected = layout::element_count(shape).ok_or_else(|| TensorError::SizeOverflow {
            shape: shape.to_vec(),
        })?;
        if data.len() != expected {
            return Err(TensorError::DataLengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Tensor {
            shape: shape.to_vec(),
            data,
        })
    }

    /// Used by element-wise operations, whose output always matches an
    /// existing tensor's shape.
    pub(crate) fn from_parts(shape: Vec<usize>, data: Vec<f32>) -> Self {
        debug_assert_eq!(layout::element_count(&shape), Some(data.len()));
        Tensor { shape, data }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total element count.
    ///
    /// Reported as `usize`: the count is not narrowed to 32 bits, so it
    /// always equals `data().len()`.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flattened storage in row-major order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Row-major strides. Fails with [`TensorError::SizeOverflow`] only for
    /// empty tensors whose inner axes multiply past `usize::MAX`.
    pub fn strides(&self) -> TensorResult<Vec<usize>> {
        layout::row_major_strides(&self.shape).ok_or_else(|| TensorError::SizeOverflow {
            shape: self.shape.clone(),
        })
    }

    fn offset(&self, coords: &[usize]) -> TensorResult<usize> {
        layout::linear_offset(&self.shape, coords).map_err(|err| {
            log::debug!("rejected access {:?} on shape {:?}: {}", coords, self.shape, err);
            err
        })
    }

    /// Read the element at `coords` (one coordinate per axis).
    pub fn element(&self, coords: &[usize]) -> TensorResult<f32> {
        let offset = self.offset(coords)?;
        Ok(self.data[offset])
    }

    /// Mutable handle to the element at `coords`.
    pub fn element_mut(&mut self, coords: &[usize]) -> TensorResult<&mut f32> {
        let offset = self.offset(coords)?;
        Ok(&mut self.data[offset])
    }

    pub fn set(&mut self, coords: &[usize], value: f32) -> TensorResult<()> {
        *self.element_mut(coords)? = value;
        Ok(())
    }

    /// Borrow as an ndarray view.
    ///
    /// Fails only when ndarray cannot represent the shape (element count
    /// above `isize::MAX`).
    pub fn view(&self) -> TensorResult<ArrayViewD<'_, f32>> {
        Ok(ArrayViewD::from_shape(IxDyn(&self.shape), &self.data)?)
    }

    /// Copy into an owned ndarray array.
    pub fn to_array(&self) -> TensorResult<ArrayD<f32>> {
        Ok(ArrayD::from_shape_vec(IxDyn(&self.shape), self.data.clone())?)
    }
}

impl<S, D> From<&ArrayBase<S, D>> for Tensor
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    /// Copies in logical (row-major) order regardless of the source layout.
    fn from(array: &ArrayBase<S, D>) -> Self {
        Tensor {
            shape: array.shape().to_vec(),
            data: array.iter().copied().collect(),
        }
    }
}

impl<const N: usize> Index<[usize; N]> for Tensor {
    type Output = f32;

    /// # Panics
    ///
    /// Panics on a rank mismatch or out-of-range coordinate; use
    /// [`Tensor::element`] to handle those as errors.
    fn index(&self, coords: [usize; N]) -> &f32 {
        match self.offset(&coords) {
            Ok(offset) => &self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<const N: usize> IndexMut<[usize; N]> for Tensor {
    fn index_mut(&mut self, coords: [usize; N]) -> &mut f32 {
        match self.offset(&coords) {
            Ok(offset) => &mut self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_axis(f: &mut fmt::Formatter<'_>, shape: &[usize], data: &[f32]) -> fmt::Result {
            let Some((&len, rest)) = shape.split_first() else {
                return write!(f, "{}", data[0]);
            };
            let chunk = layout::element_count(rest).unwrap_or(0);
            write!(f, "[")?;
            for i in 0..len {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_axis(f, rest, &data[i * chunk..(i + 1) * chunk])?;
            }
            write!(f, "]")
        }

        write_axis(f, &self.shape, &self.data)
    }
}
