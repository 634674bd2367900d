//! Operation methods on `Graph`, delegating to the functions of the `ops` module.
//!
//! Results must be bound before being used as operands of the next call, since
//! each call borrows the graph mutably:
//!
//! ```
//! use valuegrad_core::Graph;
//!
//! let mut graph = Graph::<f64>::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let e = graph.mul(a, b);
//! let loss = graph.tanh(e);
//! graph.backward(loss);
//! ```

use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::{activation, arithmetic, reduction};
use crate::types::Scalar;

impl<T: Scalar> Graph<T> {
    // --- Arithmetic ---

    pub fn add(&mut self, a: NodeId, b: NodeId) -> NodeId {
        arithmetic::add_op(self, a, b)
    }

    pub fn sub(&mut self, a: NodeId, b: NodeId) -> NodeId {
        arithmetic::sub_op(self, a, b)
    }

    pub fn neg(&mut self, a: NodeId) -> NodeId {
        arithmetic::neg_op(self, a)
    }

    pub fn mul(&mut self, a: NodeId, b: NodeId) -> NodeId {
        arithmetic::mul_op(self, a, b)
    }

    /// See [`arithmetic::div_op`]: division by zero is not trapped.
    pub fn div(&mut self, a: NodeId, b: NodeId) -> NodeId {
        arithmetic::div_op(self, a, b)
    }

    /// Raises `a` to a constant power.
    pub fn pow(&mut self, a: NodeId, exponent: T) -> NodeId {
        arithmetic::pow_op(self, a, exponent)
    }

    pub fn exp(&mut self, a: NodeId) -> NodeId {
        arithmetic::exp_op(self, a)
    }

    // --- Activations ---

    pub fn identity(&mut self, a: NodeId) -> NodeId {
        activation::identity_op(self, a)
    }

    pub fn sigmoid(&mut self, a: NodeId) -> NodeId {
        activation::sigmoid_op(self, a)
    }

    pub fn relu(&mut self, a: NodeId) -> NodeId {
        activation::relu_op(self, a)
    }

    pub fn tanh(&mut self, a: NodeId) -> NodeId {
        activation::tanh_op(self, a)
    }

    // --- Reductions ---

    /// Sum of `values`.
    pub fn sum(&mut self, values: &[NodeId]) -> NodeId {
        reduction::sum_op(self, values, None)
    }

    /// Sum of `values` plus the seed node `init`.
    pub fn sum_with_init(&mut self, values: &[NodeId], init: NodeId) -> NodeId {
        reduction::sum_op(self, values, Some(init))
    }

    /// Mean of a non-empty list of nodes.
    ///
    /// # Errors
    /// `ValueGradError::EmptyReduction` if `values` is empty.
    pub fn mean(&mut self, values: &[NodeId]) -> Result<NodeId, ValueGradError> {
        reduction::mean_op(self, values)
    }
}
