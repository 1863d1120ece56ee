// retrograd-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::RetrogradError;
use crate::tensor::Tensor;
use ndarray::ArrayD;
use std::sync::Arc;

// --- Forward Operation ---

/// Performs element-wise addition of two tensors.
///
/// Operand shapes must match exactly; no broadcasting.
pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor, RetrogradError> {
    let a_value = a.value();
    let b_value = b.value();
    if a_value.shape() != b_value.shape() {
        return Err(RetrogradError::ShapeMismatch {
            expected: a_value.shape().to_vec(),
            actual: b_value.shape().to_vec(),
            operation: "add".to_string(),
        });
    }

    let result = Tensor::from_array(&a_value + &b_value);
    result.set_grad_fn(Some(Arc::new(AddBackward {
        a: a.clone(),
        b: b.clone(),
    })));
    Ok(result)
}

// --- Backward Operation ---

/// d(a+b)/da = 1, d(a+b)/db = 1: the upstream gradient flows to both inputs
/// unchanged.
#[derive(Debug)]
struct AddBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<(), RetrogradError> {
        self.a.acc_grad(grad_output, "add_backward")?;
        self.b.acc_grad(grad_output, "add_backward")?;

        self.a.backward(Some(&self.a.grad()))?;
        self.b.backward(Some(&self.b.grad()))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "AddBackward"
    }
}

// --- Tests ---
