// src/tensor/create.rs

use crate::error::RetrogradError;
use crate::tensor::Tensor;
use ndarray::{ArrayD, IxDyn};

/// Creates a new leaf tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Tensor {
    Tensor::from_array(ArrayD::zeros(IxDyn(shape)))
}

/// Creates a new leaf tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Tensor {
    Tensor::from_array(ArrayD::ones(IxDyn(shape)))
}

/// Creates a new leaf tensor filled with a specific value.
pub fn full(shape: &[usize], value: f32) -> Tensor {
    Tensor::from_array(ArrayD::from_elem(IxDyn(shape), value))
}

/// Creates a rank-0 leaf tensor holding a single value.
pub fn scalar(value: f32) -> Tensor {
    Tensor::from_array(ArrayD::from_elem(IxDyn(&[]), value))
}

/// Creates a new zero-filled leaf tensor shaped like the input tensor.
pub fn zeros_like(tensor: &Tensor) -> Tensor {
    zeros(&tensor.shape())
}

/// Creates a new one-filled leaf tensor shaped like the input tensor.
pub fn ones_like(tensor: &Tensor) -> Tensor {
    ones(&tensor.shape())
}

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a leaf tensor with elements drawn uniformly from `[0, 1)`.
pub fn rand(shape: &[usize]) -> Tensor {
    let mut rng = rand::thread_rng();
    Tensor::from_array(ArrayD::from_shape_fn(IxDyn(shape), |_| rng.gen::<f32>()))
}

/// Creates a leaf tensor with elements drawn from the standard normal
/// distribution.
pub fn randn(shape: &[usize]) -> Tensor {
    let mut rng = rand::thread_rng();
    Tensor::from_array(ArrayD::from_shape_fn(IxDyn(shape), |_| {
        StandardNormal.sample(&mut rng)
    }))
}

/// Creates a new leaf tensor from a `Vec<f32>` and shape.
pub fn from_vec(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Tensor, RetrogradError> {
    Tensor::new(data_vec, shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let t = zeros(&[2, 3]);
        assert_eq!(t.shape(), vec![2, 3]);
        assert!(t.value().iter().all(|&x| x == 0.0));
        assert!(t.is_leaf());
    }

    #[test]
    fn test_ones_and_full() {
        let t = ones(&[4]);
        assert!(t.value().iter().all(|&x| x == 1.0));
        let f = full(&[2, 2], 3.5);
        assert!(f.value().iter().all(|&x| x == 3.5));
    }

    #[test]
    fn test_scalar_is_rank_zero() {
        let s = scalar(2.5);
        assert_eq!(s.shape(), Vec::<usize>::new());
        assert_eq!(s.numel(), 1);
    }

    #[test]
    fn test_zeros_like_ones_like() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0], vec![1, 3]).unwrap();
        let z = zeros_like(&t);
        assert_eq!(z.shape(), t.shape());
        assert!(z.value().iter().all(|&x| x == 0.0));
        let o = ones_like(&t);
        assert_eq!(o.shape(), t.shape());
        assert!(o.value().iter().all(|&x| x == 1.0));
    }

    #[test]
    fn test_randn_shape_and_fresh_grad() {
        let t = randn(&[3, 2]);
        assert_eq!(t.shape(), vec![3, 2]);
        assert_eq!(t.grad().shape(), &[3, 2]);
        assert!(t.grad().iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let result = from_vec(vec![1.0, 2.0, 3.0], vec![2, 2]);
        assert!(matches!(
            result,
            Err(crate::error::RetrogradError::TensorCreationError {
                data_len: 3,
                ..
            })
        ));
    }
}
