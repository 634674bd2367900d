// valuegrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Raises a node to a constant power: `out = a^exponent`.
///
/// The exponent is a plain number, not a node: no gradient flows to it.
/// Domain issues (negative base with a fractional exponent, `0^-1`, ...) yield
/// `NaN`/`inf` following IEEE-754.
pub fn pow_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, exponent: T) -> NodeId {
    let value = graph.value(a).powf(exponent);
    graph.push_op(value, BackwardOp::Pow(a, exponent))
}

/// Local gradient of `a^c`: `g * c * a^(c-1)`.
pub(crate) fn pow_backward<T: Scalar>(a_value: T, exponent: T, out_grad: T) -> T {
    out_grad * exponent * a_value.powf(exponent - T::one())
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
