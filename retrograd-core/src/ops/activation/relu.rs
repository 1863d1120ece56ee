// retrograd-core/src/ops/activation/relu.rs

use crate::autograd::BackwardOp;
use crate::error::RetrogradError;
use crate::tensor::Tensor;
use ndarray::ArrayD;
use std::sync::Arc;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit activation element-wise:
/// `relu(x) = max(0, x)`.
pub fn relu_op(tensor: &Tensor) -> Tensor {
    let value = tensor.value();
    let result = Tensor::from_array(value.mapv(|x| x.max(0.0)));
    result.set_grad_fn(Some(Arc::new(ReluBackward {
        input: tensor.clone(),
    })));
    result
}

// --- Backward Operation ---

/// Gradient passes through only where the input was strictly positive.
#[derive(Debug)]
struct ReluBackward {
    input: Tensor,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<(), RetrogradError> {
        let mask = self
            .input
            .value()
            .mapv(|x| if x > 0.0 { 1.0 } else { 0.0 });
        self.input.acc_grad(&(&mask * grad_output), "relu_backward")?;

        self.input.backward(Some(&self.input.grad()))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ReluBackward"
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::reduction::sum_op;
    use ndarray::array;

    #[test]
    fn test_relu_forward() {
        let t = Tensor::new(vec![-2.0, -1.0, 0.0, 1.0, 2.0], vec![5]).unwrap();
        let result = relu_op(&t);
        assert_eq!(
            result.value(),
            array![0.0, 0.0, 0.0, 1.0, 2.0].into_dyn()
        );
        assert_eq!(result.shape(), vec![5]);
    }

    #[test]
    fn test_relu_backward_zero_where_nonpositive() {
        let t = Tensor::new(vec![-1.0, 0.0, 2.0], vec![3]).unwrap();
        let result = relu_op(&t);

        let deltas = array![1.0, 1.0, 1.0].into_dyn();
        result.backward(Some(&deltas)).unwrap();

        // Zero gradient exactly where input <= 0.
        assert_eq!(t.grad(), array![0.0, 0.0, 1.0].into_dyn());
    }

    #[test]
    fn test_relu_backward_through_sum() {
        let t = Tensor::new(vec![-2.0, -1.0, 0.0, 1.0, 2.0], vec![5]).unwrap();
        let result = relu_op(&t);
        let loss = sum_op(&result);

        loss.backward(None).unwrap();
        assert_eq!(
            t.grad(),
            array![0.0, 0.0, 0.0, 1.0, 1.0].into_dyn()
        );
    }
}
