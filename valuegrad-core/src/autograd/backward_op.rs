use crate::autograd::accumulate_gradient;
use crate::graph::NodeId;
use crate::ops::{activation, arithmetic, reduction};
use crate::types::Scalar;

/// Backward rule of a node: the operation that produced it together with the
/// operand handles and constants captured during the forward pass.
///
/// During `backward()`, the driver calls [`BackwardOp::propagate`] on every node
/// in reverse topological order. Each variant adds the node's contribution
/// \( \frac{dL}{d\text{out}} \cdot \frac{d\text{out}}{d\text{input}_i} \) into the
/// gradient of each input. Contributions are always accumulated, so an operand
/// used several times (`a * a`, diamond-shaped graphs) receives one contribution
/// per use.
#[derive(Debug, Clone, PartialEq)]
pub enum BackwardOp<T> {
    /// Input, constant or parameter. Propagates nothing.
    Leaf,
    Add(NodeId, NodeId),
    Sub(NodeId, NodeId),
    Neg(NodeId),
    Mul(NodeId, NodeId),
    Div(NodeId, NodeId),
    /// Power with a constant exponent. No gradient flows to the exponent.
    Pow(NodeId, T),
    Exp(NodeId),
    Identity(NodeId),
    Sigmoid(NodeId),
    Relu(NodeId),
    Tanh(NodeId),
    /// Sum of `inputs`, plus the optional additive seed `init`.
    Sum {
        inputs: Vec<NodeId>,
        init: Option<NodeId>,
    },
    /// Arithmetic mean of a non-empty list of inputs; `count` is their
    /// number, already converted to `T`.
    Mean { inputs: Vec<NodeId>, count: T },
}

impl<T: Scalar> BackwardOp<T> {
    /// Human-readable label of the operation, empty for leaves.
    pub fn tag(&self) -> String {
        match self {
            BackwardOp::Leaf => String::new(),
            BackwardOp::Add(..) => "+".to_string(),
            BackwardOp::Sub(..) => "-".to_string(),
            BackwardOp::Neg(_) => "-ve".to_string(),
            BackwardOp::Mul(..) => "*".to_string(),
            BackwardOp::Div(..) => "/".to_string(),
            BackwardOp::Pow(..) => "^".to_string(),
            BackwardOp::Exp(_) => "e^x".to_string(),
            BackwardOp::Identity(_) => "identity".to_string(),
            BackwardOp::Sigmoid(_) => "sigmoid".to_string(),
            BackwardOp::Relu(_) => "relu".to_string(),
            BackwardOp::Tanh(_) => "tanh".to_string(),
            BackwardOp::Sum { inputs, .. } => format!("sum ({} values)", inputs.len()),
            BackwardOp::Mean { inputs, .. } => format!("mean ({} values)", inputs.len()),
        }
    }

    /// Every operand handle in argument order, repeated if an operand is used twice.
    pub fn inputs(&self) -> Vec<NodeId> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add(a, b)
            | BackwardOp::Sub(a, b)
            | BackwardOp::Mul(a, b)
            | BackwardOp::Div(a, b) => vec![*a, *b],
            BackwardOp::Neg(a)
            | BackwardOp::Pow(a, _)
            | BackwardOp::Exp(a)
            | BackwardOp::Identity(a)
            | BackwardOp::Sigmoid(a)
            | BackwardOp::Relu(a)
            | BackwardOp::Tanh(a) => vec![*a],
            BackwardOp::Sum { inputs, init } => {
                let mut all = inputs.clone();
                all.extend(init.iter().copied());
                all
            }
            BackwardOp::Mean { inputs, .. } => inputs.clone(),
        }
    }

    /// Operand set: each distinct operand once, first occurrence order.
    pub fn operands(&self) -> Vec<NodeId> {
        let mut operands: Vec<NodeId> = Vec::new();
        for input in self.inputs() {
            if !operands.contains(&input) {
                operands.push(input);
            }
        }
        operands
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BackwardOp::Leaf)
    }

    /// Accumulates the gradient of node `out` into the gradients of its operands.
    ///
    /// Reads operand values and the output's own value/gradient; writes only
    /// operand gradients.
    pub(crate) fn propagate(&self, out: NodeId, values: &[T], grads: &mut [T]) {
        let out_value = values[out.0];
        let out_grad = grads[out.0];
        match self {
            BackwardOp::Leaf => {}
            BackwardOp::Add(a, b) => {
                let (grad_a, grad_b) = arithmetic::add::add_backward(out_grad);
                accumulate_gradient(grads, *a, grad_a);
                accumulate_gradient(grads, *b, grad_b);
            }
            BackwardOp::Sub(a, b) => {
                let (grad_a, grad_b) = arithmetic::sub::sub_backward(out_grad);
                accumulate_gradient(grads, *a, grad_a);
                accumulate_gradient(grads, *b, grad_b);
            }
            BackwardOp::Neg(a) => {
                accumulate_gradient(grads, *a, arithmetic::neg::neg_backward(out_grad));
            }
            BackwardOp::Mul(a, b) => {
                let (grad_a, grad_b) =
                    arithmetic::mul::mul_backward(values[a.0], values[b.0], out_grad);
                accumulate_gradient(grads, *a, grad_a);
                accumulate_gradient(grads, *b, grad_b);
            }
            BackwardOp::Div(a, b) => {
                let (grad_a, grad_b) =
                    arithmetic::div::div_backward(values[a.0], values[b.0], out_grad);
                accumulate_gradient(grads, *a, grad_a);
                accumulate_gradient(grads, *b, grad_b);
            }
            BackwardOp::Pow(a, exponent) => {
                let grad_a = arithmetic::pow::pow_backward(values[a.0], *exponent, out_grad);
                accumulate_gradient(grads, *a, grad_a);
            }
            BackwardOp::Exp(a) => {
                accumulate_gradient(grads, *a, arithmetic::exp::exp_backward(out_value, out_grad));
            }
            BackwardOp::Identity(a) => {
                accumulate_gradient(grads, *a, activation::identity::identity_backward(out_grad));
            }
            BackwardOp::Sigmoid(a) => {
                let grad_a = activation::sigmoid::sigmoid_backward(out_value, out_grad);
                accumulate_gradient(grads, *a, grad_a);
            }
            BackwardOp::Relu(a) => {
                accumulate_gradient(grads, *a, activation::relu::relu_backward(out_value, out_grad));
            }
            BackwardOp::Tanh(a) => {
                accumulate_gradient(grads, *a, activation::tanh::tanh_backward(out_value, out_grad));
            }
            BackwardOp::Sum { inputs, init } => {
                // Fan-out: every summand receives the full upstream gradient.
                for input in inputs {
                    accumulate_gradient(grads, *input, out_grad);
                }
                if let Some(init) = init {
                    accumulate_gradient(grads, *init, out_grad);
                }
            }
            BackwardOp::Mean { inputs, count } => {
                let share = reduction::mean::mean_backward(out_grad, *count);
                for input in inputs {
                    accumulate_gradient(grads, *input, share);
                }
            }
        }
    }
}
