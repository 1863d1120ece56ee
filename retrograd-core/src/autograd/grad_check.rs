use crate::error::RetrogradError;
use crate::tensor::Tensor;
use approx::abs_diff_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical} != numerical {numerical} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical: f32,
        numerical: f32,
        difference: f32,
    },

    #[error("Gradient check inputs must be leaf tensors (input {input_index})")]
    InputNotLeaf { input_index: usize },

    #[error("Gradient check requires a scalar output, got shape {shape:?}")]
    NonScalarOutput { shape: Vec<usize> },

    #[error("Numerical gradient is not finite for input {input_index}, element {element_index}")]
    NumericalGradNotFinite {
        input_index: usize,
        element_index: usize,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPass(RetrogradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPass(RetrogradError),

    #[error("Tensor error during intermediate calculation: {0}")]
    TensorError(#[from] RetrogradError),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must build a fresh graph over the supplied leaves and return a
/// scalar-equivalent output. The analytical pass backpropagates from that
/// output; the numerical pass re-evaluates `func` with each input element
/// nudged by `+/-epsilon`. Tensor values are immutable after construction,
/// so every perturbed evaluation rebuilds the perturbed leaf from scratch.
///
/// Call this with fresh leaves: any gradient already accumulated on an input
/// would be folded into the analytical result.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    epsilon: f32,
    tolerance: f32,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, RetrogradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    // --- Analytical pass ---
    let output = func(inputs).map_err(GradCheckError::ForwardPass)?;
    if output.numel() != 1 {
        return Err(GradCheckError::NonScalarOutput {
            shape: output.shape(),
        });
    }
    output.backward(None).map_err(GradCheckError::BackwardPass)?;
    let analytical: Vec<_> = inputs.iter().map(|t| t.grad()).collect();

    // --- Numerical pass ---
    for input_index in 0..inputs.len() {
        for (element_index, &analytical_grad) in analytical[input_index].iter().enumerate() {
            let loss_plus = eval_perturbed(&func, inputs, input_index, element_index, epsilon)?;
            let loss_minus = eval_perturbed(&func, inputs, input_index, element_index, -epsilon)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNotFinite {
                    input_index,
                    element_index,
                });
            }
            if !abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance) {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical: analytical_grad,
                    numerical: numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }

    Ok(())
}

/// Re-runs `func` with one element of one input nudged by `delta` and returns
/// the scalar loss value.
fn eval_perturbed<F>(
    func: &F,
    inputs: &[Tensor],
    input_index: usize,
    element_index: usize,
    delta: f32,
) -> Result<f32, GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, RetrogradError>,
{
    let rebuilt: Vec<Tensor> = inputs
        .iter()
        .enumerate()
        .map(|(j, t)| {
            if j == input_index {
                let mut data: Vec<f32> = t.value().iter().copied().collect();
                data[element_index] += delta;
                Tensor::new(data, t.shape())
            } else {
                Ok(t.clone())
            }
        })
        .collect::<Result<_, _>>()?;

    let output = func(&rebuilt).map_err(GradCheckError::ForwardPass)?;
    Ok(output.value().sum())
}
