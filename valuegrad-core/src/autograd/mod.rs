//! # Automatic Differentiation (`autograd`)
//!
//! Reverse-mode differentiation over the scalar [`Graph`](crate::graph::Graph):
//!
//! - [`BackwardOp`]: the backward rule recorded on every node by the `ops` functions.
//! - [`graph::topological_sort`]: depth-first post-order over the ancestors of a node.
//! - [`grad_check`]: finite-difference verification of analytical gradients.
//!
//! The backward driver itself is [`Graph::backward`](crate::graph::Graph::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_sort;

use crate::graph::NodeId;
use crate::types::Scalar;

/// Adds `delta` into the gradient of `target`.
///
/// Gradients are only ever accumulated: a node consumed along several paths
/// receives the sum of the contributions of every path.
pub(crate) fn accumulate_gradient<T: Scalar>(grads: &mut [T], target: NodeId, delta: T) {
    grads[target.0] += delta;
}
