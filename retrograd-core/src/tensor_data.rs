// src/tensor_data.rs

use crate::autograd::BackwardOp;
use crate::error::RetrogradError;
use ndarray::{ArrayD, IxDyn};
use std::sync::Arc;

/// Internal storage and metadata for a Tensor.
///
/// Holds the computed value, the accumulated gradient buffer and the optional
/// link to the operation that produced this tensor. It is wrapped in
/// `Arc<RwLock<TensorData>>` by the `Tensor` struct to allow shared ownership
/// and interior mutability.
#[derive(Debug)]
pub struct TensorData {
    /// The computed value. Treated as immutable after construction.
    pub(crate) value: ArrayD<f32>,
    /// The accumulated gradient. Always the same shape as `value`,
    /// zero-filled at construction.
    pub(crate) grad: ArrayD<f32>,
    /// The backward operation that produced this tensor, linking it to its
    /// inputs in the computation graph. Leaf tensors (created directly by the
    /// user) have `grad_fn = None`.
    pub(crate) grad_fn: Option<Arc<dyn BackwardOp + Send + Sync>>,
}

impl TensorData {
    /// Creates a new leaf `TensorData` from raw data in row-major order.
    ///
    /// # Errors
    /// Returns `RetrogradError::TensorCreationError` if the length of
    /// `data_vec` does not match the number of elements implied by `shape`.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, RetrogradError> {
        let data_len = data_vec.len();
        let value = ArrayD::from_shape_vec(IxDyn(&shape), data_vec)
            .map_err(|_| RetrogradError::TensorCreationError { data_len, shape })?;
        Ok(Self::from_array(value))
    }

    /// Wraps an already-built array as a leaf node.
    pub(crate) fn from_array(value: ArrayD<f32>) -> Self {
        let grad = ArrayD::zeros(value.raw_dim());
        TensorData {
            value,
            grad,
            grad_fn: None,
        }
    }

    /// Number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.value.len()
    }

    /// A tensor is scalar-equivalent if its shape is empty (rank 0) or it
    /// holds exactly one element. Only such tensors may seed a backward pass.
    pub fn is_scalar(&self) -> bool {
        self.value.shape().is_empty() || self.value.len() == 1
    }
}
