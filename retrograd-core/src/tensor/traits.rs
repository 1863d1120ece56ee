// src/tensor/traits.rs

use crate::tensor::Tensor;
use std::sync::Arc;

impl Clone for Tensor {
    /// Clones the Tensor. This is a shallow clone that increases the
    /// reference count of the underlying shared node. Gradient accumulation
    /// through one clone is visible through all others.
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl PartialEq for Tensor {
    /// Value equality: same shape and same elements. Two handles to the same
    /// node compare equal without touching the data.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        let self_guard = self.read_data();
        let other_guard = other.read_data();
        self_guard.value == other_guard.value
    }
}
