//! # tensor-rs - dense N-dimensional `f32` arrays
//!
//! A small fixed-shape container meant to sit at the bottom of larger numeric
//! code: row-major storage, coordinate access, and element-wise arithmetic
//! against a tensor of the same shape or a scalar. There is no broadcasting.
//!
//! ## Example
//!
//! ```
//! use tensor_rs::prelude::*;
//!
//! let t = Tensor::from_nested([[1.0, 2.0], [3.0, 4.0]])?;
//! let shifted = &t + 5.0;
//! assert_eq!(shifted.element(&[1, 1])?, 9.0);
//!
//! let sum = (&t + &shifted)?;
//! assert_eq!(sum.shape(), &[2, 2]);
//!
//! let wrong = Tensor::new(&[3]);
//! assert!(matches!(&t * &wrong, Err(TensorError::ShapeMismatch { .. })));
//! # Ok::<(), TensorError>(())
//! ```

pub mod error;
pub mod layout;
pub mod literal;
pub mod operation;
pub mod tensor;

pub use error::{TensorError, TensorResult};
pub use literal::Literal;
pub use tensor::Tensor;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{TensorError, TensorResult};
    pub use crate::literal::Literal;
    pub use crate::tensor::Tensor;
}
