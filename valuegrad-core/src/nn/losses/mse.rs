// valuegrad-core/src/nn/losses/mse.rs

use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::types::{scalar_from_usize, Scalar};
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ValueGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ValueGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean squared error: `sum((y_pred_i - y_true_i)^2) / n`.
///
/// The result is recorded as the sum of squared errors divided by a constant
/// leaf holding the count, so only predictions (and targets, if they depend on
/// parameters) receive gradients.
///
/// # Errors
/// * `InputSizeMismatch` if the two lists differ in length.
/// * `EmptyReduction` if they are empty.
pub fn mean_squared_error<T: Scalar>(
    graph: &mut Graph<T>,
    y_true: &[NodeId],
    y_pred: &[NodeId],
) -> Result<NodeId, ValueGradError> {
    MSELoss::new(Reduction::Mean).calculate(graph, y_true, y_pred)
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// # Fields
/// * `reduction`: Specifies the type of reduction to apply to the output: `Mean` or `Sum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn calculate<T: Scalar>(
        &self,
        graph: &mut Graph<T>,
        y_true: &[NodeId],
        y_pred: &[NodeId],
    ) -> Result<NodeId, ValueGradError> {
        if y_true.len() != y_pred.len() {
            return Err(ValueGradError::InputSizeMismatch {
                expected: y_true.len(),
                actual: y_pred.len(),
                operation: "MSELoss".to_string(),
            });
        }
        if y_true.is_empty() {
            return Err(ValueGradError::EmptyReduction {
                operation: "MSELoss".to_string(),
            });
        }

        let two = T::one() + T::one();
        let squared_errors: Vec<NodeId> = y_true
            .iter()
            .zip(y_pred)
            .map(|(&target, &prediction)| {
                let diff = graph.sub(prediction, target);
                graph.pow(diff, two)
            })
            .collect();
        let total = graph.sum(&squared_errors);

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let count = graph.leaf(scalar_from_usize(squared_errors.len(), "element count")?);
                Ok(graph.div(total, count))
            }
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
