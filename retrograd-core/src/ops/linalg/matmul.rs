// retrograd-core/src/ops/linalg/matmul.rs

use crate::autograd::BackwardOp;
use crate::error::RetrogradError;
use crate::tensor::Tensor;
use ndarray::{Array2, ArrayD, Ix2};
use std::sync::Arc;

// --- Forward Operation ---

/// Performs matrix multiplication `C = A @ B`.
///
/// Supports only 2-D tensors: A `[M, K]`, B `[K, N]` -> C `[M, N]`.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, RetrogradError> {
    let a_shape = a.shape();
    let b_shape = b.shape();

    // Validation
    if a_shape.len() != 2 || b_shape.len() != 2 || a_shape[1] != b_shape[0] {
        return Err(RetrogradError::IncompatibleShapes {
            shape1: a_shape,
            shape2: b_shape,
            operation: "matmul".to_string(),
        });
    }

    let a_mat = to_matrix(&a.value(), "matmul lhs")?;
    let b_mat = to_matrix(&b.value(), "matmul rhs")?;
    let result = Tensor::from_array(a_mat.dot(&b_mat).into_dyn());
    result.set_grad_fn(Some(Arc::new(MatmulBackward {
        a: a.clone(),
        b: b.clone(),
    })));
    Ok(result)
}

// --- Backward Operation ---

/// Standard matmul gradient: `dA = G . B^T`, `dB = A^T . G`.
#[derive(Debug)]
struct MatmulBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for MatmulBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<(), RetrogradError> {
        // The forward pass enforced rank 2 on both operands, and grad buffers
        // are shaped like their values, so these conversions cannot fail.
        let g = to_matrix(grad_output, "matmul_backward grad_output")?;
        let a_mat = to_matrix(&self.a.value(), "matmul_backward lhs")?;
        let b_mat = to_matrix(&self.b.value(), "matmul_backward rhs")?;

        let grad_a = g.dot(&b_mat.t());
        let grad_b = a_mat.t().dot(&g);
        self.a.acc_grad(&grad_a.into_dyn(), "matmul_backward")?;
        self.b.acc_grad(&grad_b.into_dyn(), "matmul_backward")?;

        self.a.backward(Some(&self.a.grad()))?;
        self.b.backward(Some(&self.b.grad()))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "MatmulBackward"
    }
}

fn to_matrix(value: &ArrayD<f32>, context: &str) -> Result<Array2<f32>, RetrogradError> {
    value
        .clone()
        .into_dimensionality::<Ix2>()
        .map_err(|e| RetrogradError::InternalError(format!("{}: {}", context, e)))
}

// --- Tests ---
