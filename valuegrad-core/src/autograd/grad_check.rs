use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::types::{scalar_from_f64, Scalar};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64, // f64 for precision regardless of the graph scalar type
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Epsilon must be strictly positive, got {0}")]
    InvalidEpsilon(f64),

    #[error("Graph error during gradient check: {0}")]
    GraphError(ValueGradError),
}

impl From<ValueGradError> for GradCheckError {
    fn from(err: ValueGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` builds an expression on a fresh graph from one leaf per entry of
/// `inputs` and returns its output node. For every input `x_i`, the analytical
/// gradient obtained by `backward()` is compared with
/// \( \frac{f(x_i + \epsilon) - f(x_i - \epsilon)}{2\epsilon} \).
///
/// # Arguments
/// * `func`: Builds the expression under test.
/// * `inputs`: Point at which gradients are checked.
/// * `epsilon`: Perturbation step.
/// * `tolerance`: Maximum absolute difference between the two gradients.
///
/// # Errors
/// Returns the first mismatch found, or a `GradCheckError` describing why the
/// check could not be performed.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, ValueGradError>,
{
    if epsilon <= 0.0 || !epsilon.is_finite() {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }
    let eps: T = scalar_from_f64(epsilon, "epsilon")?;

    // --- 1. Analytical gradients ---
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&mut graph, &leaves)?;
    graph.backward(output);
    let analytical: Vec<f64> = leaves
        .iter()
        .map(|&leaf| to_f64(graph.grad(leaf)))
        .collect();

    // --- 2. Numerical gradients, one input at a time ---
    for (input_index, analytical_grad) in analytical.into_iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate_perturbed(&func, inputs, input_index, eps)?;
        let loss_minus = evaluate_perturbed(&func, inputs, input_index, -eps)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        if !approx::abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance) {
            log::warn!(
                "Gradient check mismatch on input {}: analytical={}, numerical={}",
                input_index,
                analytical_grad,
                numerical_grad
            );
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

fn evaluate_perturbed<T, F>(
    func: &F,
    inputs: &[T],
    index: usize,
    delta: T,
) -> Result<f64, GradCheckError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, ValueGradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.leaf(if i == index { x + delta } else { x }))
        .collect();
    let output = func(&mut graph, &leaves)?;
    Ok(to_f64(graph.value(output)))
}

fn to_f64<T: Scalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
