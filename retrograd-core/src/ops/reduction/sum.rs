// retrograd-core/src/ops/reduction/sum.rs

use crate::autograd::BackwardOp;
use crate::error::RetrogradError;
use crate::tensor::Tensor;
use ndarray::{ArrayD, IxDyn};
use std::sync::Arc;

// --- Forward Operation ---

/// Sums all elements of the tensor into a rank-0 scalar.
///
/// This is the usual way of collapsing a result into the scalar root that a
/// plain `backward()` call requires.
pub fn sum_op(tensor: &Tensor) -> Tensor {
    let total = tensor.value().sum();
    let result = Tensor::from_array(ArrayD::from_elem(IxDyn(&[]), total));
    result.set_grad_fn(Some(Arc::new(SumBackward {
        input: tensor.clone(),
    })));
    result
}

// --- Backward Operation ---

/// d(sum)/dx_i = 1 for every element: the scalar upstream gradient is
/// broadcast over the input's shape.
#[derive(Debug)]
struct SumBackward {
    input: Tensor,
}

impl BackwardOp for SumBackward {
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<(), RetrogradError> {
        // The result is rank 0 by construction, so grad_output holds exactly
        // one element.
        let upstream = grad_output.sum();
        let contribution = ArrayD::from_elem(IxDyn(&self.input.shape()), upstream);
        self.input.acc_grad(&contribution, "sum_backward")?;

        self.input.backward(Some(&self.input.grad()))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SumBackward"
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sum_forward_is_rank_zero() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
        let s = sum_op(&t);
        assert_eq!(s.shape(), Vec::<usize>::new());
        assert_eq!(s.value().sum(), 10.0);
        assert!(!s.is_leaf());
    }

    #[test]
    fn test_sum_backward_broadcasts_seed() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
        let s = sum_op(&t);
        s.backward(None).unwrap();
        assert_eq!(t.grad(), array![1.0, 1.0, 1.0].into_dyn());
    }

    #[test]
    fn test_sum_backward_scales_with_upstream() {
        let t = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
        let s = sum_op(&t);
        let deltas = ArrayD::from_elem(ndarray::IxDyn(&[]), 3.0);
        s.backward(Some(&deltas)).unwrap();
        assert_eq!(t.grad(), array![3.0, 3.0].into_dyn());
    }
}
