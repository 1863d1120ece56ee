//! A single linear layer with a relu activation, differentiated end to end.
//!
//! Run with `cargo run --example linear_backward`; set `RUST_LOG=trace` to
//! watch the backward dispatch order.

use retrograd_core::tensor::create::randn;
use retrograd_core::{RetrogradError, Tensor};

fn main() -> Result<(), RetrogradError> {
    env_logger::init();

    // A tiny "dataset": one input row and a 2x3 weight matrix.
    let x = Tensor::new(vec![1.0, -2.0], vec![1, 2])?;
    let w = randn(&[2, 3]);

    // Forward: loss = sum(relu(x @ w))
    let h = x.matmul(&w)?;
    let activated = h.relu();
    let loss = activated.sum();

    println!("hidden = {}", h);
    println!("loss = {}", loss);

    // Backward: one call on the scalar root reaches every ancestor.
    loss.backward(None)?;

    println!("dloss/dx = {:?}", x.grad());
    println!("dloss/dw = {:?}", w.grad());

    // Gradients accumulate across passes; reset the retained nodes before
    // differentiating again.
    for t in [&x, &w, &h, &activated] {
        t.zero_grad();
    }
    loss.backward(None)?;
    println!("dloss/dx after reset and re-run = {:?}", x.grad());

    Ok(())
}
