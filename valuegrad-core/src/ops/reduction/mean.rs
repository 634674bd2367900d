use crate::autograd::BackwardOp;
use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::types::{scalar_from_usize, Scalar};

/// Arithmetic mean of a non-empty list of nodes.
///
/// Each input receives `g / n` during backward.
///
/// # Errors
/// Returns `ValueGradError::EmptyReduction` if `values` is empty: the mean of
/// nothing is undefined and callers must guard against it.
pub fn mean_op<T: Scalar>(graph: &mut Graph<T>, values: &[NodeId]) -> Result<NodeId, ValueGradError> {
    if values.is_empty() {
        return Err(ValueGradError::EmptyReduction {
            operation: "mean".to_string(),
        });
    }
    let count: T = scalar_from_usize(values.len(), "mean count")?;
    let mut total = T::zero();
    for value in values {
        total += graph.value(*value);
    }
    Ok(graph.push_op(
        total / count,
        BackwardOp::Mean {
            inputs: values.to_vec(),
            count,
        },
    ))
}

/// Share of the upstream gradient received by each of the `count` inputs.
pub(crate) fn mean_backward<T: Scalar>(out_grad: T, count: T) -> T {
    out_grad / count
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
