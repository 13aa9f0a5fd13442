//! Nested literal input for [`Tensor::from_nested`](crate::Tensor::from_nested).
//!
//! A literal is a tree: every inner node is a sequence and every leaf is a
//! number. A well-formed literal is rectangular, meaning all sequences at the
//! same depth have the same length and leaves only appear at the deepest level.

use crate::error::{TensorError, TensorResult};

/// A nested, possibly multi-dimensional, numeric literal.
///
/// With the `serde` feature a literal deserializes untagged: a number becomes
/// [`Literal::Leaf`] and an array becomes [`Literal::Seq`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum Literal {
    Leaf(f32),
    Seq(Vec<Literal>),
}

impl Literal {
    /// Infer the shape by following the first child at each level, then
    /// check that every other branch agrees with it.
    ///
    /// A bare leaf at the top level is rejected: literal tensors have rank >= 1.
    pub fn infer_shape(&self) -> TensorResult<Vec<usize>> {
        let mut shape = Vec::new();
        let mut node = self;
        while let Literal::Seq(items) = node {
            shape.push(items.len());
            match items.first() {
                Some(first) => node = first,
                None => break,
            }
        }

        if shape.is_empty() {
            return Err(TensorError::MalformedLiteral {
                depth: 0,
                reason: "expected a sequence, found a scalar".to_string(),
            });
        }

        self.check_rectangular(&shape, 0)?;
        Ok(shape)
    }

    fn check_rectangular(&self, shape: &[usize], depth: usize) -> TensorResult<()> {
        match (self, shape.get(depth)) {
            (Literal::Leaf(_), None) => Ok(()),
            (Literal::Leaf(_), Some(&len)) => Err(TensorError::MalformedLiteral {
                depth,
                reason: format!("found a scalar where a sequence of length {} was expected", len),
            }),
            (Literal::Seq(_), None) => Err(TensorError::MalformedLiteral {
                depth,
                reason: "found a sequence where a scalar was expected".to_string(),
            }),
            (Literal::Seq(items), Some(&len)) => {
                if items.len() != len {
                    return Err(TensorError::MalformedLiteral {
                        depth,
                        reason: format!("jagged sequence: expected length {}, got {}", len, items.len()),
                    });
                }
                items
                    .iter()
                    .try_for_each(|item| item.check_rectangular(shape, depth + 1))
            }
        }
    }

    /// Append every leaf to `out` in row-major order.
    pub fn flatten_into(&self, out: &mut Vec<f32>) {
        match self {
            Literal::Leaf(value) => out.push(*value),
            Literal::Seq(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Literal::Leaf(value)
    }
}

// Unsuffixed float literals default to f64. Narrowed with `as f32`: values
// round to the nearest f32 and out-of-range magnitudes become infinite.
impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Leaf(value as f32)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(items: Vec<T>) -> Self {
        Literal::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Literal>, const N: usize> From<[T; N]> for Literal {
    fn from(items: [T; N]) -> Self {
        Literal::Seq(items.into_iter().map(Into::into).collect())
    }
}
