use ndarray::ArrayD;
use retrograd_core::Tensor;

// Helper functions shared by the integration test files.
// Made public so other test modules can use them; usage across different
// test crates isn't detected easily, hence the allow(dead_code).

#[allow(dead_code)]
pub fn create_test_tensor(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn assert_array_close(actual: &ArrayD<f32>, expected: &ArrayD<f32>, epsilon: f32) {
    assert_eq!(
        actual.shape(),
        expected.shape(),
        "shape mismatch: {:?} vs {:?}",
        actual.shape(),
        expected.shape()
    );
    for (a, e) in actual.iter().zip(expected.iter()) {
        approx::assert_abs_diff_eq!(*a, *e, epsilon = epsilon);
    }
}
