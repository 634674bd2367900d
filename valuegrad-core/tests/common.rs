use valuegrad_core::nn::{mean_squared_error, run_batch, Module};
use valuegrad_core::utils::{from_matrix, from_slice};
use valuegrad_core::{Graph, NodeId, ValueGradError};

// Four 3-feature samples with +/-1 targets.
#[allow(dead_code)]
pub(crate) fn tiny_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    (
        vec![
            vec![2.0, 3.0, -1.0],
            vec![3.0, -1.0, 0.5],
            vec![0.5, 1.0, 1.0],
            vec![1.0, 1.0, -1.0],
        ],
        vec![1.0, -1.0, -1.0, 1.0],
    )
}

// Builds the batch, runs the model on it and returns the MSE loss node.
#[allow(dead_code)]
pub(crate) fn batch_loss<M: Module<f64>>(
    model: &M,
    graph: &mut Graph<f64>,
    xs: &[Vec<f64>],
    ys: &[f64],
) -> Result<NodeId, ValueGradError> {
    let inputs = from_matrix(graph, xs);
    let targets = from_slice(graph, ys);
    let predictions: Vec<NodeId> = run_batch(model, graph, &inputs)?
        .into_iter()
        .flatten()
        .collect();
    mean_squared_error(graph, &targets, &predictions)
}
