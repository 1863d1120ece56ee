use retrograd_core::tensor::create::{full, ones, rand, scalar, zeros};
use retrograd_core::{RetrogradError, Tensor};

mod common;
use common::create_test_tensor;

#[test]
fn test_new_validates_data_length() {
    match Tensor::new(vec![1.0, 2.0, 3.0], vec![2, 2]) {
        Err(RetrogradError::TensorCreationError { data_len, shape }) => {
            assert_eq!(data_len, 3);
            assert_eq!(shape, vec![2, 2]);
        }
        other => panic!("Expected TensorCreationError, got {:?}", other),
    }
}

#[test]
fn test_new_tensor_is_leaf_with_zero_grad() {
    let t = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);
    assert!(t.is_leaf());
    assert!(t.grad_fn().is_none());
    assert_eq!(t.grad().shape(), t.value().shape());
    assert!(t.grad().iter().all(|&g| g == 0.0));
}

#[test]
fn test_rank_zero_scalar_roundtrip() {
    let s = scalar(7.0);
    assert_eq!(s.shape(), Vec::<usize>::new());
    assert_eq!(s.numel(), 1);
    assert_eq!(s.value().sum(), 7.0);
}

#[test]
fn test_creation_helpers_shapes() {
    assert_eq!(zeros(&[2, 2]).shape(), vec![2, 2]);
    assert_eq!(ones(&[5]).shape(), vec![5]);
    assert_eq!(full(&[1, 3], 2.0).numel(), 3);
    assert_eq!(rand(&[4, 4]).shape(), vec![4, 4]);
}

#[test]
fn test_rand_values_in_unit_interval() {
    let t = rand(&[100]);
    assert!(t.value().iter().all(|&x| (0.0..1.0).contains(&x)));
}

#[test]
fn test_clone_is_shallow() {
    let t = create_test_tensor(vec![1.0], vec![1]);
    let u = t.clone();
    assert_eq!(t, u);
    u.zero_grad(); // no panic, same node
}
