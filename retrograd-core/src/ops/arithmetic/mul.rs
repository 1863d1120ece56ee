// retrograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::RetrogradError;
use crate::tensor::Tensor;
use ndarray::ArrayD;
use std::sync::Arc;

// --- Forward Operation ---

/// Performs element-wise multiplication of two tensors.
///
/// Operand shapes must match exactly; no broadcasting.
pub fn mul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, RetrogradError> {
    let a_value = a.value();
    let b_value = b.value();
    if a_value.shape() != b_value.shape() {
        return Err(RetrogradError::ShapeMismatch {
            expected: a_value.shape().to_vec(),
            actual: b_value.shape().to_vec(),
            operation: "mul".to_string(),
        });
    }

    let result = Tensor::from_array(&a_value * &b_value);
    result.set_grad_fn(Some(Arc::new(MulBackward {
        a: a.clone(),
        b: b.clone(),
    })));
    Ok(result)
}

// --- Backward Operation ---

/// d(a*b)/da = b, d(a*b)/db = a (the product rule for elementwise products).
#[derive(Debug)]
struct MulBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<(), RetrogradError> {
        // Snapshot both values before taking any write lock: for mul_op(x, x)
        // the two handles are the same node.
        let a_value = self.a.value();
        let b_value = self.b.value();

        self.a.acc_grad(&(&b_value * grad_output), "mul_backward")?;
        self.b.acc_grad(&(&a_value * grad_output), "mul_backward")?;

        self.a.backward(Some(&self.a.grad()))?;
        self.b.backward(Some(&self.b.grad()))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "MulBackward"
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::reduction::sum_op;
    use ndarray::array;

    fn create_test_tensor(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
        Tensor::new(data, shape).expect("Test tensor creation failed")
    }

    #[test]
    fn test_mul_tensors_ok() {
        let t1 = create_test_tensor(vec![1.0, 2.0, 3.0], vec![3]);
        let t2 = create_test_tensor(vec![4.0, 5.0, 6.0], vec![3]);

        let result = mul_op(&t1, &t2).unwrap();
        assert_eq!(result.value(), array![4.0, 10.0, 18.0].into_dyn());
    }

    #[test]
    fn test_mul_shape_mismatch() {
        let t1 = create_test_tensor(vec![1.0, 2.0], vec![2]);
        let t2 = create_test_tensor(vec![1.0, 2.0, 3.0], vec![3]);
        assert!(matches!(
            mul_op(&t1, &t2),
            Err(RetrogradError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_mul_backward_swaps_values() {
        let a = create_test_tensor(vec![2.0], vec![1]);
        let b = create_test_tensor(vec![3.0], vec![1]);
        let result = mul_op(&a, &b).unwrap();
        assert_eq!(result.value(), array![6.0].into_dyn());

        result.backward(None).unwrap();

        // Each input's gradient is the other's value.
        assert_eq!(a.grad(), array![3.0].into_dyn());
        assert_eq!(b.grad(), array![2.0].into_dyn());
    }

    #[test]
    fn test_mul_square_accumulates_both_contributions() {
        // y = x * x, dy/dx = 2x.
        let x = create_test_tensor(vec![3.0], vec![1]);
        let y = mul_op(&x, &x).unwrap();

        y.backward(None).unwrap();
        assert_eq!(x.grad(), array![6.0].into_dyn());
    }

    #[test]
    fn test_mul_backward_chain() {
        // loss = sum(relu(x * w))
        let x = create_test_tensor(vec![-1.0, 1.0, 2.0], vec![3]);
        let w = create_test_tensor(vec![2.0, 2.0, 2.0], vec![3]);

        let y = mul_op(&x, &w).unwrap(); // [-2, 2, 4]
        let z = y.relu(); // [0, 2, 4]
        let loss = sum_op(&z); // 6

        loss.backward(None).unwrap();

        // dLoss/dx = relu_mask([0,1,1]) * w = [0, 2, 2]
        assert_eq!(x.grad(), array![0.0, 2.0, 2.0].into_dyn());
    }
}
