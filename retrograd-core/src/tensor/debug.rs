// src/tensor/debug.rs
use crate::tensor::Tensor;
use std::fmt;

/// Renders the tensor value (tab-indented) followed by the name of the
/// producing backward operation, or `None` for leaves:
///
/// ```text
/// Tensor(
///     [1, 2]
///     bwd: AddBackward
/// )
/// ```
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.read() {
            Ok(guard) => {
                let value_str = format!("{}", guard.value);
                let indented = value_str.replace('\n', "\n\t");
                let bwd = guard.grad_fn.as_ref().map_or("None", |op| op.name());
                write!(f, "Tensor(\n\t{}\n\tbwd: {}\n)", indented, bwd)
            }
            Err(_) => write!(f, "Tensor(Error: RwLock poisoned)"),
        }
    }
}

// Manual implementation: TensorData derives Debug, but the interesting bits
// for debugging are the metadata, not the full buffers.
impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.read() {
            Ok(guard) => write!(
                f,
                "Tensor(shape={:?}, numel={}, grad_fn={})",
                guard.value.shape(),
                guard.numel(),
                guard.grad_fn.as_ref().map_or("None", |op| op.name()),
            ),
            Err(_) => write!(f, "Tensor(Error: RwLock poisoned)"),
        }
    }
}
