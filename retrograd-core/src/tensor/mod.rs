// src/tensor/mod.rs

use crate::autograd::BackwardOp;
use crate::error::RetrogradError;
use crate::tensor_data::TensorData;
use ndarray::ArrayD;
use std::sync::{Arc, RwLock};

mod debug;
mod traits;
pub mod create;

// Re-export creation functions to make them public
pub use create::{full, ones, ones_like, rand, randn, scalar, zeros, zeros_like};

/// A node in the computation graph: a value, its accumulated gradient and an
/// optional link to the operation that produced it.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally to allow for:
/// 1. **Shared Ownership:** operation nodes hold handles to their inputs, and
///    user code keeps its own handles to the leaves, all pointing at the same
///    underlying data (cheap clones).
/// 2. **Interior Mutability:** the gradient buffer within `TensorData` is
///    mutated during the backward pass through immutable `Tensor` references.
///
/// The graph is directed and acyclic: a result's `grad_fn` references its
/// inputs, never the other way around.
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a new leaf Tensor with the given data and shape.
    ///
    /// This is the primary constructor for creating tensors from raw data,
    /// given in flattened row-major order. The gradient buffer starts out
    /// zero-filled with the same shape.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, RetrogradError> {
        let tensor_data = TensorData::new(data_vec, shape)?;
        Ok(Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        })
    }

    /// Wraps an already-built array as a leaf Tensor. Operation functions use
    /// this for their results before attaching the backward op.
    pub(crate) fn from_array(value: ArrayD<f32>) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(TensorData::from_array(value))),
        }
    }

    /// Returns a clone of the tensor's shape.
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().value.shape().to_vec()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Returns a clone of the tensor's value.
    pub fn value(&self) -> ArrayD<f32> {
        self.read_data().value.clone()
    }

    /// Returns a clone of the tensor's accumulated gradient.
    pub fn grad(&self) -> ArrayD<f32> {
        self.read_data().grad.clone()
    }

    /// A tensor is a leaf iff no operation produced it.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Returns a clone of the `Arc` pointing to the backward operation node.
    pub fn grad_fn(&self) -> Option<Arc<dyn BackwardOp + Send + Sync>> {
        self.read_data().grad_fn.clone()
    }

    /// Sets the backward operation node for this tensor. Called by operation
    /// functions on their freshly constructed result.
    pub(crate) fn set_grad_fn(&self, grad_fn: Option<Arc<dyn BackwardOp + Send + Sync>>) {
        self.write_data().grad_fn = grad_fn;
    }

    /// Acquires a read lock on the tensor's data.
    ///
    /// The lock is released when the guard goes out of scope. Panics if the
    /// RwLock is poisoned.
    pub fn read_data(&self) -> std::sync::RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the tensor's data.
    pub fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Accumulates `delta` into the tensor's gradient buffer (`grad += delta`).
    ///
    /// Contributions arriving via multiple paths add up; `zero_grad` is the
    /// only way to reset the buffer between backward passes.
    ///
    /// # Errors
    /// Returns `RetrogradError::ShapeMismatch` if `delta` is not shaped like
    /// the value.
    pub fn acc_grad(&self, delta: &ArrayD<f32>, operation: &str) -> Result<(), RetrogradError> {
        let mut guard = self.write_data();
        if delta.shape() != guard.value.shape() {
            return Err(RetrogradError::ShapeMismatch {
                expected: guard.value.shape().to_vec(),
                actual: delta.shape().to_vec(),
                operation: operation.to_string(),
            });
        }
        guard.grad += delta;
        Ok(())
    }

    /// Resets the gradient buffer to zeros.
    ///
    /// Without this, a second backward pass over the same graph accumulates
    /// on top of the first one's gradients.
    pub fn zero_grad(&self) {
        let mut guard = self.write_data();
        guard.grad = ArrayD::zeros(guard.value.raw_dim());
    }

    /// Performs the backward pass starting from this tensor.
    ///
    /// With `deltas` supplied, the gradient buffer is set to `deltas` (which
    /// must be shaped like the value) before the producing operation, if any,
    /// is invoked. This is also how operations recurse into their inputs.
    ///
    /// With `deltas` omitted (the root call), the tensor must be
    /// scalar-equivalent (empty shape or a single element) and must have a
    /// producing operation; its gradient is seeded with `1.0`.
    ///
    /// Propagation is a depth-first recursive descent driven by each
    /// operation's backward implementation; one root call reaches every
    /// ancestor. Recursion depth equals the longest dependency chain.
    ///
    /// # Errors
    /// * `ShapeMismatch`: `deltas` is not shaped like the value.
    /// * `InvalidBackwardShape`: root call on a non-scalar tensor.
    /// * `LeafBackward`: root call on a leaf tensor.
    pub fn backward(&self, deltas: Option<&ArrayD<f32>>) -> Result<(), RetrogradError> {
        match deltas {
            Some(deltas) => {
                let mut guard = self.write_data();
                if deltas.shape() != guard.value.shape() {
                    return Err(RetrogradError::ShapeMismatch {
                        expected: guard.value.shape().to_vec(),
                        actual: deltas.shape().to_vec(),
                        operation: "backward".to_string(),
                    });
                }
                guard.grad = deltas.clone();
            }
            None => {
                let mut guard = self.write_data();
                if !guard.is_scalar() {
                    return Err(RetrogradError::InvalidBackwardShape {
                        shape: guard.value.shape().to_vec(),
                    });
                }
                if guard.grad_fn.is_none() {
                    return Err(RetrogradError::LeafBackward);
                }
                guard.grad = ArrayD::ones(guard.value.raw_dim());
            }
        }

        // Clone the Arc and release the lock before dispatching: the op will
        // take its own locks on this node's inputs while recursing.
        let grad_fn = self.grad_fn();
        if let Some(op) = grad_fn {
            log::trace!("backward: dispatching {}", op.name());
            let grad = self.grad();
            op.backward(&grad)?;
        } else {
            log::trace!("backward: reached leaf, shape {:?}", self.shape());
        }
        Ok(())
    }

    /// Sums all elements into a scalar. See [`crate::ops::reduction::sum_op`].
    pub fn sum(&self) -> Tensor {
        crate::ops::reduction::sum_op(self)
    }

    /// Elementwise `max(0, x)`. See [`crate::ops::activation::relu_op`].
    pub fn relu(&self) -> Tensor {
        crate::ops::activation::relu_op(self)
    }

    /// 2-D matrix product. See [`crate::ops::linalg::matmul_op`].
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, RetrogradError> {
        crate::ops::linalg::matmul_op(self, other)
    }
}
