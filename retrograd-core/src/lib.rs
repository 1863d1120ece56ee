//! Retrograd: a minimal reverse-mode automatic differentiation engine.
//!
//! A `Tensor` holds a value, an accumulated gradient and an optional link to
//! the operation that produced it. Operation functions (`add_op`, `sub_op`,
//! `mul_op`, `relu_op`, `sum_op`, `matmul_op`) build a computation graph
//! during the forward pass; calling `backward()` on the final scalar walks
//! the graph in reverse and accumulates gradients into every ancestor.
//!
//! ```
//! use retrograd_core::ndarray::array;
//! use retrograd_core::{add_op, Tensor};
//!
//! let a = Tensor::new(vec![1.0, 2.0], vec![2])?;
//! let b = Tensor::new(vec![3.0, 4.0], vec![2])?;
//! let loss = add_op(&a, &b)?.sum();
//! loss.backward(None)?;
//! assert_eq!(a.grad(), array![1.0, 1.0].into_dyn());
//! # Ok::<(), retrograd_core::RetrogradError>(())
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod tensor;
pub mod tensor_data;

pub use error::RetrogradError;
pub use tensor::Tensor;

pub use ops::activation::relu_op;
pub use ops::arithmetic::{add_op, mul_op, sub_op};
pub use ops::linalg::matmul_op;
pub use ops::reduction::sum_op;

// Re-export the numeric array collaborator so downstream code can name
// gradient/value types without pinning its own ndarray version.
pub use ndarray;
