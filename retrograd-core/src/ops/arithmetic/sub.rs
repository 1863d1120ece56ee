// retrograd-core/src/ops/arithmetic/sub.rs

use crate::autograd::BackwardOp;
use crate::error::RetrogradError;
use crate::tensor::Tensor;
use ndarray::ArrayD;
use std::sync::Arc;

// --- Forward Operation ---

/// Performs element-wise subtraction `a - b`.
///
/// Operand shapes must match exactly; no broadcasting.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor, RetrogradError> {
    let a_value = a.value();
    let b_value = b.value();
    if a_value.shape() != b_value.shape() {
        return Err(RetrogradError::ShapeMismatch {
            expected: a_value.shape().to_vec(),
            actual: b_value.shape().to_vec(),
            operation: "sub".to_string(),
        });
    }

    let result = Tensor::from_array(&a_value - &b_value);
    result.set_grad_fn(Some(Arc::new(SubBackward {
        a: a.clone(),
        b: b.clone(),
    })));
    Ok(result)
}

// --- Backward Operation ---

/// d(a-b)/da = 1, d(a-b)/db = -1: the upstream gradient flows to `a`
/// unchanged and to `b` negated.
#[derive(Debug)]
struct SubBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for SubBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<(), RetrogradError> {
        self.a.acc_grad(grad_output, "sub_backward")?;
        let negated = grad_output.mapv(|g| -g);
        self.b.acc_grad(&negated, "sub_backward")?;

        self.a.backward(Some(&self.a.grad()))?;
        self.b.backward(Some(&self.b.grad()))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SubBackward"
    }
}

// --- Tests ---
