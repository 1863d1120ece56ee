use crate::error::RetrogradError;
use ndarray::ArrayD;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable tensor
/// operation.
///
/// Any operation that creates a non-leaf `Tensor` must have an associated
/// `BackwardOp` implementation. It is stored in the output tensor's `grad_fn`
/// field and invoked during `backward()` to propagate gradients according to
/// the chain rule.
///
/// The contract every implementation must obey:
/// 1. Compute each input's local gradient contribution from `grad_output`
///    (the gradient accumulated on this operation's result).
/// 2. Accumulate it into that input's `grad` buffer via `Tensor::acc_grad`
///    (subtraction's second operand accumulates the negation).
/// 3. Recurse by calling `input.backward(Some(&input.grad()))` on each input,
///    so one top-level `backward()` call reaches the whole ancestor chain.
///
/// The traversal is a plain depth-first recursive descent: there is no queue,
/// topological sort or visited set. A node reachable via two paths has its op
/// invoked once per path, with gradients accumulating additively across the
/// visits.
///
/// `Debug + Send + Sync` bounds are required because the `Arc<dyn BackwardOp>`
/// holding the state might be shared across threads.
pub trait BackwardOp: Debug + Send + Sync {
    /// Propagates `grad_output` (dL/dOutput) to this operation's inputs.
    fn backward(&self, grad_output: &ArrayD<f32>) -> Result<(), RetrogradError>;

    /// Name of the operation, as rendered by `Tensor`'s `Display` impl
    /// (e.g. `bwd: AddBackward`).
    fn name(&self) -> &'static str;
}
