//! # Tensor Operations Module (`ops`)
//!
//! Operations are grouped into submodules by functionality. Each operation
//! has a core function (named `xxx_op`) that performs the forward
//! computation and attaches the backward pass for autograd, plus a
//! `Backward` struct implementing the
//! [`BackwardOp`](crate::autograd::BackwardOp) trait that stores handles to
//! the operation's inputs and propagates gradients during backpropagation.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: Element-wise arithmetic operations (add, sub, mul).
//! - [`reduction`]: Operations that reduce tensor dimensions (sum).
//! - [`activation`]: Activation functions (relu).
//! - [`linalg`]: Linear algebra operations (matmul).

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod reduction;
